use crate::cli::OmegaArgs;
use crate::config::{AppConfig, GridSource, build_omega_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use koyama::core::io::grid::{KGrid, read_grid};
use koyama::core::io::table::write_table;
use koyama::engine::progress::ProgressReporter;
use koyama::workflows;
use koyama::workflows::omega::OmegaResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub async fn run(args: OmegaArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_omega_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let result = tokio::task::block_in_place(|| execute(&app, &reporter))?;

    match &app.output {
        Some(path) => {
            write_output_file(path, &result)?;
            eprintln!(
                "✓ Structure factor ({} points, epsilon = {:.6}) written to: {}",
                result.k.len(),
                result.parameters.epsilon,
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            write_table(stdout.lock(), &result.k, &result.omega)?;
        }
    }

    Ok(())
}

pub fn load_grid(source: &GridSource) -> Result<KGrid> {
    let grid = match source {
        GridSource::Uniform {
            k_min,
            k_max,
            num_points,
        } => KGrid::uniform(*k_min, *k_max, *num_points)?,
        GridSource::File(path) => {
            info!("Reading wavevector grid from {:?}", path);
            read_grid(path)?
        }
    };
    info!(points = grid.len(), "Wavevector grid ready.");
    Ok(grid)
}

pub fn execute(app: &AppConfig, reporter: &ProgressReporter) -> Result<OmegaResult> {
    let grid = load_grid(&app.grid)?;
    info!("Invoking the structure factor workflow...");
    Ok(workflows::omega::run(&app.core_config, grid.values(), reporter)?)
}

fn write_output_file(path: &Path, result: &OmegaResult) -> Result<()> {
    info!("Writing structure factor table to {:?}", path);
    let mut writer = BufWriter::new(File::create(path)?);
    write_table(&mut writer, &result.k, &result.omega)?;
    writer.flush()?;
    Ok(())
}
