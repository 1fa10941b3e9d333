pub mod cli;
pub mod config;
pub mod error;
pub mod client;
pub mod loader;
pub mod render;
pub mod browse;
