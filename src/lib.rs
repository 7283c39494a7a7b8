pub mod config;
pub mod metadata;
pub mod models;

pub use config::Config;
pub use metadata::{ArtifactFlags, ArtifactKind, NamingPolicy};
