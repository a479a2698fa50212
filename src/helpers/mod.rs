//! Helper functions shared by the content layer and the API

mod chapters;
mod date;
mod url;

pub use chapters::*;
pub use date::*;
pub use url::*;
