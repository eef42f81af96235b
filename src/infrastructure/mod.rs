//! Infrastructure layer - Configuration and starter data

pub mod config;
pub mod samples;

pub use config::Config;
pub use samples::sample_notes;
