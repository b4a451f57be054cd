use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FilePairCounting};
use super::models::{AppConfig, GridSource};
use crate::cli::{ChainArgs, OmegaArgs, ParamsArgs};
use crate::error::{CliError, Result};
use koyama::core::omega::PairCounting;
use koyama::core::solver::SolverOptions;
use koyama::engine::config::{OmegaConfig, OmegaConfigBuilder};
use std::str::FromStr;

pub fn build_omega_config(args: &OmegaArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.chain)?;

    let mut core_config = build_core_config(&args.chain, &mut file_config, &defaults)?;
    if args.all_pairs {
        core_config.pair_counting = PairCounting::AllPairs;
    }

    let grid_file = file_config.grid.take().unwrap_or_default();
    let cli_requests_uniform =
        args.k_min.is_some() || args.k_max.is_some() || args.num_points.is_some();

    let grid = match (&args.grid_file, &grid_file.file) {
        (Some(path), _) => GridSource::File(path.clone()),
        (None, Some(path)) if !cli_requests_uniform => GridSource::File(path.clone()),
        _ => GridSource::Uniform {
            k_min: args.k_min.or(grid_file.k_min).unwrap_or(defaults.k_min),
            k_max: args.k_max.or(grid_file.k_max).unwrap_or(defaults.k_max),
            num_points: args
                .num_points
                .or(grid_file.num_points)
                .unwrap_or(defaults.num_points),
        },
    };

    Ok(AppConfig {
        core_config,
        grid,
        output: args.output.clone(),
    })
}

pub fn build_params_config(args: &ParamsArgs) -> Result<OmegaConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.chain)?;
    build_core_config(&args.chain, &mut file_config, &defaults)
}

fn load_file_config(args: &ChainArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &args.set_values)
}

fn build_core_config(
    args: &ChainArgs,
    file_config: &mut FileConfig,
    defaults: &DefaultsConfig,
) -> Result<OmegaConfig> {
    let chain_file = file_config.chain.take().unwrap_or_default();
    let solver_file = file_config.solver.take().unwrap_or_default();

    let mut builder = OmegaConfigBuilder::new()
        .sigma(args.sigma.or(chain_file.sigma).unwrap_or(defaults.sigma))
        .bond_length(
            args.bond_length
                .or(chain_file.bond_length)
                .unwrap_or(defaults.bond_length),
        )
        .solver(SolverOptions {
            tolerance: args
                .tolerance
                .or(solver_file.tolerance)
                .unwrap_or(defaults.tolerance),
            max_iterations: args
                .max_iterations
                .or(solver_file.max_iterations)
                .unwrap_or(defaults.max_iterations),
            ..Default::default()
        });

    if let Some(length) = args.length.or(chain_file.length) {
        builder = builder.length(length);
    }
    if let Some(lp) = args.persistence_length.or(chain_file.persistence_length) {
        builder = builder.persistence_length(lp);
    }
    if let Some(pair_counting) = file_config.pair_counting {
        builder = builder.pair_counting(pair_counting.into());
    }

    builder.build().map_err(|e| {
        CliError::Config(format!(
            "{}. Provide it on the command line, in the config file or via --set.",
            e
        ))
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let value_str = value_str.trim();

        match key {
            "chain.sigma" => {
                config.chain.get_or_insert_with(Default::default).sigma =
                    Some(parse_value(key, value_str, "float")?);
            }
            "chain.bond-length" => {
                config.chain.get_or_insert_with(Default::default).bond_length =
                    Some(parse_value(key, value_str, "float")?);
            }
            "chain.length" => {
                config.chain.get_or_insert_with(Default::default).length =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "chain.persistence-length" => {
                config
                    .chain
                    .get_or_insert_with(Default::default)
                    .persistence_length = Some(parse_value(key, value_str, "float")?);
            }
            "grid.k-min" => {
                config.grid.get_or_insert_with(Default::default).k_min =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.k-max" => {
                config.grid.get_or_insert_with(Default::default).k_max =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.num-points" => {
                config.grid.get_or_insert_with(Default::default).num_points =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "grid.file" => {
                config.grid.get_or_insert_with(Default::default).file =
                    Some(value_str.into());
            }
            "solver.tolerance" => {
                config.solver.get_or_insert_with(Default::default).tolerance =
                    Some(parse_value(key, value_str, "float")?);
            }
            "solver.max-iterations" => {
                config
                    .solver
                    .get_or_insert_with(Default::default)
                    .max_iterations = Some(parse_value(key, value_str, "integer")?);
            }
            "pair-counting" => {
                config.pair_counting = Some(FilePairCounting::from_str(value_str)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
