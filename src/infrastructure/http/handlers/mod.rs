//! HTTP Handlers

mod novel;
mod ping;
mod preferences;

pub use novel::*;
pub use ping::*;
pub use preferences::*;
