//! Avatar image acquisition.
//!
//! Uploaded files never touch the filesystem and are never fetched at render
//! time: a candidate upload is validated and re-encoded into a
//! self-contained `data:` URL that any consumer can render directly. Next to
//! custom uploads there is a small set of well-known default avatars plus
//! the empty reference meaning "no image selected".
//!
//! Every operation here is a pure call-and-return: nothing is retained
//! between calls and rejections are ordinary return values, so callers own
//! any retry or messaging behavior.

use std::io;

use base64::prelude::*;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Largest accepted upload, in bytes. The boundary is inclusive: a file of
/// exactly this size still passes.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Stock avatar shown for male testimonial authors.
pub const DEFAULT_AVATAR_MALE: &str =
    "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop";
/// Stock avatar shown for female testimonial authors.
pub const DEFAULT_AVATAR_FEMALE: &str =
    "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop";

/// Self-contained image value: empty, one of the default avatars, or an
/// inlined `data:` URL produced from an accepted upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    /// The canonical empty reference, meaning no image is selected.
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Classifies the reference by exact comparison against the known
    /// constants. Derived from the string on every call; callers must not
    /// cache the result next to a reference that can still change.
    pub fn kind(&self) -> ImageKind {
        if self.0.is_empty() {
            ImageKind::None
        } else if self.0 == DEFAULT_AVATAR_MALE {
            ImageKind::DefaultMale
        } else if self.0 == DEFAULT_AVATAR_FEMALE {
            ImageKind::DefaultFemale
        } else {
            ImageKind::Custom
        }
    }
}

impl From<&str> for ImageReference {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selection input for [`select_default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AvatarKind {
    Male,
    Female,
}

/// What a reference value points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    None,
    DefaultMale,
    DefaultFemale,
    Custom,
}

/// Resolves one of the fixed default avatars. These are trusted constants,
/// so unlike uploads the operation cannot fail.
pub fn select_default(kind: AvatarKind) -> ImageReference {
    match kind {
        AvatarKind::Male => ImageReference(DEFAULT_AVATAR_MALE.to_string()),
        AvatarKind::Female => ImageReference(DEFAULT_AVATAR_FEMALE.to_string()),
    }
}

/// Why a candidate upload was turned away. Each rejection is terminal for
/// that candidate and recoverable by retrying with different input; the
/// display strings are what the operator gets to see.
#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    #[error("Please upload a valid image file (JPG, PNG, or GIF)")]
    UnsupportedType,
    #[error("File size must be less than 5MB")]
    TooLarge,
    #[error("Failed to read the image file")]
    ReadFailure(#[source] io::Error),
}

/// One pending upload: the declared media type, optionally a declared byte
/// length, and the byte source. Consumed by [`UploadCandidate::ingest`]
/// whatever the outcome.
pub struct UploadCandidate<R> {
    content_type: String,
    declared_len: Option<u64>,
    reader: R,
}

impl UploadCandidate<io::Cursor<Vec<u8>>> {
    /// Candidate over an in-memory buffer, as delivered by a file picker.
    pub fn from_bytes(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let declared_len = Some(bytes.len() as u64);
        Self {
            content_type: content_type.into(),
            declared_len,
            reader: io::Cursor::new(bytes),
        }
    }
}

impl<R> UploadCandidate<R>
where
    R: AsyncRead + Unpin,
{
    /// Candidate over a streaming source. Pass the length when the transport
    /// provides one; without it the size check falls back to the capped read.
    pub fn new(content_type: impl Into<String>, declared_len: Option<u64>, reader: R) -> Self {
        Self {
            content_type: content_type.into(),
            declared_len,
            reader,
        }
    }

    /// Validates the candidate and encodes it into a self-contained
    /// reference.
    ///
    /// Checks run in order: media type, declared size, then a single awaited
    /// read of the bytes. The read itself is capped at the size ceiling, so
    /// a source that under-declared its length is still rejected. Identical
    /// bytes and type always produce the identical reference.
    pub async fn ingest(self) -> std::result::Result<ImageReference, UploadError> {
        let media_type = accepted_media_type(&self.content_type)?;

        if let Some(len) = self.declared_len {
            if len > MAX_UPLOAD_BYTES {
                return Err(UploadError::TooLarge);
            }
        }

        // The only suspension point: pull the bytes, allowing one byte past
        // the ceiling so an oversized source shows up as oversized instead
        // of silently truncated.
        let mut bytes = Vec::new();
        let mut reader = self.reader.take(MAX_UPLOAD_BYTES + 1);
        reader
            .read_to_end(&mut bytes)
            .await
            .map_err(UploadError::ReadFailure)?;
        if bytes.len() as u64 > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }

        Ok(encode_data_url(&media_type, &bytes))
    }
}

/// Matches the declared type against the allow-list on its essence, with
/// any parameters stripped. `image/jpg` is kept next to the canonical
/// spelling because file pickers still report jpegs under it.
fn accepted_media_type(declared: &str) -> std::result::Result<String, UploadError> {
    let mime: mime::Mime = declared
        .trim()
        .parse()
        .map_err(|_| UploadError::UnsupportedType)?;
    match mime.essence_str() {
        "image/jpeg" | "image/jpg" | "image/png" | "image/gif" => {
            Ok(mime.essence_str().to_string())
        }
        _ => Err(UploadError::UnsupportedType),
    }
}

fn encode_data_url(media_type: &str, bytes: &[u8]) -> ImageReference {
    ImageReference(format!(
        "data:{};base64,{}",
        media_type,
        BASE64_STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::io::ReadBuf;

    use super::*;

    const LIMIT: usize = MAX_UPLOAD_BYTES as usize;

    struct BrokenReader;

    impl AsyncRead for BrokenReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "disk gone")))
        }
    }

    #[tokio::test]
    async fn rejects_unsupported_types_regardless_of_size() {
        for declared in [
            "image/svg+xml",
            "image/webp",
            "image/bmp",
            "application/pdf",
            "text/html",
            "not a mime type",
        ] {
            let outcome = UploadCandidate::from_bytes(declared, vec![0u8; 16])
                .ingest()
                .await;
            assert!(matches!(outcome, Err(UploadError::UnsupportedType)), "{declared}");
        }

        // Type is checked before size, so even a tiny svg loses.
        let outcome = UploadCandidate::from_bytes("image/svg+xml", vec![0u8; 1])
            .ingest()
            .await;
        assert!(matches!(outcome, Err(UploadError::UnsupportedType)));
    }

    #[tokio::test]
    async fn accepts_the_whole_allow_list() {
        for declared in ["image/jpeg", "image/jpg", "image/png", "image/gif"] {
            let outcome = UploadCandidate::from_bytes(declared, vec![1, 2, 3])
                .ingest()
                .await;
            assert!(outcome.is_ok(), "{declared}");
        }
    }

    #[tokio::test]
    async fn media_type_matching_ignores_case_and_parameters() {
        let reference = UploadCandidate::from_bytes("IMAGE/JPEG", vec![1])
            .ingest()
            .await
            .unwrap();
        assert!(reference.as_str().starts_with("data:image/jpeg;base64,"));

        let reference = UploadCandidate::from_bytes("image/png; charset=binary", vec![1])
            .ingest()
            .await
            .unwrap();
        assert!(reference.as_str().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn size_boundary_is_inclusive() {
        // Exactly at the ceiling passes.
        let outcome = UploadCandidate::from_bytes("image/png", vec![0u8; LIMIT])
            .ingest()
            .await;
        assert!(outcome.is_ok());

        // One byte over does not.
        let outcome = UploadCandidate::from_bytes("image/png", vec![0u8; LIMIT + 1])
            .ingest()
            .await;
        assert!(matches!(outcome, Err(UploadError::TooLarge)));
    }

    #[tokio::test]
    async fn oversized_stream_with_underdeclared_length_is_rejected() {
        let bytes = vec![0u8; LIMIT + 1];
        let candidate =
            UploadCandidate::new("image/gif", Some(1_000), io::Cursor::new(bytes));
        assert!(matches!(candidate.ingest().await, Err(UploadError::TooLarge)));
    }

    #[tokio::test]
    async fn read_failure_is_reported_as_its_own_reason() {
        let candidate = UploadCandidate::new("image/jpeg", Some(64), BrokenReader);
        let err = candidate.ingest().await.unwrap_err();
        assert!(matches!(&err, UploadError::ReadFailure(_)));
        assert_eq!(err.to_string(), "Failed to read the image file");
    }

    #[tokio::test]
    async fn identical_input_encodes_identically() {
        let bytes = b"not really a png but bytes are bytes".to_vec();
        let first = UploadCandidate::from_bytes("image/png", bytes.clone())
            .ingest()
            .await
            .unwrap();
        let second = UploadCandidate::from_bytes("image/png", bytes)
            .ingest()
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn end_to_end_outcomes() {
        // A 2 MiB png is accepted and classifies as custom.
        let reference = UploadCandidate::from_bytes("image/png", vec![7u8; 2 * 1024 * 1024])
            .ingest()
            .await
            .unwrap();
        assert_eq!(reference.kind(), ImageKind::Custom);

        // A 6 MiB jpeg is over the ceiling.
        let outcome = UploadCandidate::from_bytes("image/jpeg", vec![7u8; 6 * 1024 * 1024])
            .ingest()
            .await;
        assert!(matches!(outcome, Err(UploadError::TooLarge)));
    }

    #[test]
    fn default_selection_resolves_the_fixed_constants() {
        assert_eq!(select_default(AvatarKind::Male).as_str(), DEFAULT_AVATAR_MALE);
        assert_eq!(
            select_default(AvatarKind::Female).as_str(),
            DEFAULT_AVATAR_FEMALE
        );
    }

    #[test]
    fn classification_matrix() {
        assert_eq!(ImageReference::none().kind(), ImageKind::None);
        assert_eq!(select_default(AvatarKind::Male).kind(), ImageKind::DefaultMale);
        assert_eq!(
            select_default(AvatarKind::Female).kind(),
            ImageKind::DefaultFemale
        );
        assert_eq!(
            ImageReference::from("data:image/gif;base64,AAAA").kind(),
            ImageKind::Custom
        );
        assert_eq!(
            ImageReference::from("https://example.com/someone.jpg").kind(),
            ImageKind::Custom
        );
    }

    #[test]
    fn clearing_yields_the_empty_reference() {
        let cleared = ImageReference::none();
        assert!(cleared.is_none());
        assert_eq!(cleared.as_str(), "");
    }
}
