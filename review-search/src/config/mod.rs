//! Configuration and dependency wiring for the demo.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::Settings;
