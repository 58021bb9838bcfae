pub const SITE_NAME: &str = "Container Watch";
