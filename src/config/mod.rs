//! Configuration module

mod site;

pub use site::Mode;
pub use site::SiteConfig;
