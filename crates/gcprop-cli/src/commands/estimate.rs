use crate::cli::EstimateArgs;
use crate::config::{OutputConfig, OutputFormat, PartialAppConfig};
use crate::error::{CliError, Result};
use crate::output;
use gcprop::engine::estimator::Estimator;
use gcprop::workflows::{
    self,
    estimate::{EstimateRequest, EstimateResponse},
};
use tracing::{debug, info};

pub async fn run(args: EstimateArgs, config: &PartialAppConfig) -> Result<()> {
    let output_config = config.output_config(&args)?;
    debug!("Resolved output configuration: {:?}", &output_config);

    info!("Estimating properties of {:?}", &args.structure);
    let request = EstimateRequest::new(args.structure.as_str());
    let response = workflows::estimate::handle(&Estimator::builtin(), &request);

    if let Some(rendered) = render(&args.structure, &response, &output_config)? {
        println!("{}", rendered);
    }

    match response {
        EstimateResponse::Success(result) => {
            info!(
                fragments = result.fragment_count.total(),
                "Estimation finished."
            );
            Ok(())
        }
        EstimateResponse::Failure(body) => Err(CliError::Estimation(body)),
    }
}

/// Table output only renders successes; errors are reported by the caller. JSON
/// output renders both, exactly as a transport would send them.
fn render(
    structure: &str,
    response: &EstimateResponse,
    output_config: &OutputConfig,
) -> Result<Option<String>> {
    match output_config.format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(response)?)),
        OutputFormat::Table => Ok(match response {
            EstimateResponse::Success(result) => Some(
                output::render_table(structure, result, output_config)
                    .trim_end()
                    .to_string(),
            ),
            EstimateResponse::Failure(_) => None,
        }),
    }
}
