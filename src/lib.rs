pub mod analyzers;
pub mod config;
pub mod geo;
pub mod loader;
pub mod output;
pub mod records;
pub mod stats;
