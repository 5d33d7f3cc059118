pub mod adapters;
pub mod bootstrap;
pub mod commands;

pub use bootstrap::{AppRuntime, load_config};
