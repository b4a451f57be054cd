use crate::cli::ParamsArgs;
use crate::config::build_params_config;
use crate::error::Result;
use koyama::core::omega::SolvedParameters;
use koyama::workflows::omega::build_model;
use tracing::info;

pub async fn run(args: ParamsArgs) -> Result<()> {
    let config = build_params_config(&args)?;
    info!("Solving for the bending energy...");
    let model = tokio::task::block_in_place(|| build_model(&config))?;
    print!("{}", render(model.parameters()));
    Ok(())
}

fn render(parameters: &SolvedParameters) -> String {
    format!(
        "cos0       = {:.12}\ncos1       = {:.12}\nepsilon    = {:.12}\ncos2       = {:.12}\niterations = {}\n",
        parameters.cos0,
        parameters.cos1,
        parameters.epsilon,
        parameters.cos2,
        parameters.solver_iterations
    )
}
