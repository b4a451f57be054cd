use koyama::engine::config::OmegaConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum GridSource {
    Uniform {
        k_min: f64,
        k_max: f64,
        num_points: usize,
    },
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub core_config: OmegaConfig,
    pub grid: GridSource,
    pub output: Option<PathBuf>,
}
