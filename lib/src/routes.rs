pub const HOME: &str = "/";

pub const SERVICES: &str = "/services";
pub const SERVICE: &str = "/service";

pub const TESTIMONIALS: &str = "/testimonials";
pub const TESTIMONIAL: &str = "/testimonial";

pub const CONTACT: &str = "/contact";

pub const ANALYTICS: &str = "/analytics";
pub const STATS: &str = "/admin/stats";

pub const AVATAR: &str = "/avatar";
