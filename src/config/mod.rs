//! Configuration module for the phonebook
//!
//! There is no configuration file; runtime settings come from command-line
//! flags and live only for the duration of the process.

pub mod settings;

pub use settings::Settings;
