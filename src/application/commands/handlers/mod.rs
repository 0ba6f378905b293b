//! Command Handlers 实现

mod preference_handlers;

pub use preference_handlers::*;
