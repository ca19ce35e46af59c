//! Configuration storage and paths.

pub mod config;
pub mod paths;

pub use config::{Config, ConfigSource, ConfigSources, ResolvedConfig, resolve};
pub use paths::AppPaths;
