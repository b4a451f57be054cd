use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Koyama CLI - Intra-molecular structure factors of semi-flexible chains under the discrete Koyama model.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the structure factor ω(k) over a wavevector grid and write it as CSV.
    Omega(OmegaArgs),
    /// Solve for the bending energy and print the bond-angle moments.
    Params(ParamsArgs),
}

/// Chain and solver arguments shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ChainArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Site diameter.
    #[arg(long, value_name = "FLOAT")]
    pub sigma: Option<f64>,

    /// Bond length between adjacent sites.
    #[arg(short = 'l', long, value_name = "FLOAT")]
    pub bond_length: Option<f64>,

    /// Number of sites in the chain.
    #[arg(short = 'n', long, value_name = "INT")]
    pub length: Option<usize>,

    /// Persistence length (must be at least 4/3).
    #[arg(short = 'p', long, value_name = "FLOAT")]
    pub persistence_length: Option<f64>,

    /// Convergence threshold of the bending-energy solve.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Maximum Newton iterations of the bending-energy solve.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S chain.length=200
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `omega` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct OmegaArgs {
    #[command(flatten)]
    pub chain: ChainArgs,

    // --- Grid ---
    /// Smallest wavevector of a uniform grid.
    #[arg(long, value_name = "FLOAT")]
    pub k_min: Option<f64>,

    /// Largest wavevector of a uniform grid (inclusive).
    #[arg(long, value_name = "FLOAT")]
    pub k_max: Option<f64>,

    /// Number of points of a uniform grid.
    #[arg(long, value_name = "INT")]
    pub num_points: Option<usize>,

    /// Read wavevectors from a one-column CSV file instead of generating a uniform grid.
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with_all = ["k_min", "k_max", "num_points"]
    )]
    pub grid_file: Option<PathBuf>,

    /// Sum over every site pair instead of the published bounds (ω(0) becomes the chain length).
    #[arg(long)]
    pub all_pairs: bool,

    /// Path for the output CSV table. Written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `params` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamsArgs {
    #[command(flatten)]
    pub chain: ChainArgs,
}
