mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_omega_config, build_params_config};
pub use models::{AppConfig, GridSource};
