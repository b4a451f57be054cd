use koyama::core::solver::SolverOptions;

pub struct DefaultsConfig {
    pub sigma: f64,
    pub bond_length: f64,
    pub k_min: f64,
    pub k_max: f64,
    pub num_points: usize,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let solver = SolverOptions::default();
        Self {
            sigma: 1.0,
            bond_length: 1.0,
            k_min: 0.0,
            k_max: 20.0,
            num_points: 1024,
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
        }
    }
}
