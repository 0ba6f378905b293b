//! Sled Persistence

mod preferences_storage;

pub use preferences_storage::{
    open_preferences_storage, SledPreferencesConfig, SledPreferencesStorage,
};
