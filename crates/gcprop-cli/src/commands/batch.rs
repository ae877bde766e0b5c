use crate::cli::BatchArgs;
use crate::config::{BatchConfig, PartialAppConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use gcprop::{
    engine::{estimator::Estimator, progress::ProgressReporter},
    workflows::{
        self,
        batch::{BatchItem, BatchSummary},
    },
};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Serialize, Debug, PartialEq)]
struct OutputRecord<'a> {
    structure: &'a str,
    boiling_point: Option<f64>,
    melting_point: Option<f64>,
    critical_temperature: Option<f64>,
    critical_pressure: Option<f64>,
    fragments: String,
    error: Option<String>,
}

impl<'a> OutputRecord<'a> {
    fn from_item(item: &'a BatchItem, precision: u32) -> Self {
        match &item.outcome {
            Ok(result) => {
                let p = result.properties.rounded(precision);
                Self {
                    structure: &item.structure,
                    boiling_point: Some(p.boiling_point),
                    melting_point: Some(p.melting_point),
                    critical_temperature: Some(p.critical_temperature),
                    critical_pressure: Some(p.critical_pressure),
                    fragments: result.fragment_count.to_string(),
                    error: None,
                }
            }
            Err(e) => Self {
                structure: &item.structure,
                boiling_point: None,
                melting_point: None,
                critical_temperature: None,
                critical_pressure: None,
                fragments: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

pub async fn run(args: BatchArgs, config: &PartialAppConfig) -> Result<()> {
    let batch_config = config.batch_config(&args)?;
    debug!("Resolved batch configuration: {:?}", &batch_config);

    let progress_handler = CliProgressHandler::new();
    progress_handler.start_spinner();

    info!("Reading structures from {:?}", &args.input);
    let structures = match read_structures(&args.input, &batch_config.structure_column) {
        Ok(structures) => structures,
        Err(e) => {
            progress_handler.finish_and_clear();
            return Err(e);
        }
    };
    info!("Read {} structure(s).", structures.len());

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let estimator = Estimator::builtin();
    let items = tokio::task::block_in_place(|| {
        workflows::batch::run(&estimator, &structures, &reporter)
    });

    let summary = BatchSummary::from_items(&items);
    if !batch_config.continue_on_error {
        if let Some(failed) = items.iter().find(|item| item.outcome.is_err()) {
            warn!("Aborting batch, output file will not be written.");
            return Err(batch_item_error(failed));
        }
    }

    write_results(&args.output, &items, &batch_config)?;
    println!(
        "Wrote {} result(s) ({} failed) to: {}",
        summary.total(),
        summary.failed,
        args.output.display()
    );

    Ok(())
}

fn read_structures(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let position = reader
        .headers()?
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| {
            CliError::Config(format!(
                "Column '{}' not found in input file '{}'.",
                column,
                path.display()
            ))
        })?;

    reader
        .records()
        .map(|record| -> Result<String> {
            let record = record?;
            Ok(record.get(position).unwrap_or_default().trim().to_string())
        })
        .collect()
}

fn write_results(path: &Path, items: &[BatchItem], config: &BatchConfig) -> Result<()> {
    info!("Writing {} row(s) to {:?}", items.len(), path);
    let mut writer = csv::Writer::from_path(path)?;
    for item in items {
        writer.serialize(OutputRecord::from_item(item, config.precision))?;
    }
    writer.flush()?;
    Ok(())
}

fn batch_item_error(item: &BatchItem) -> CliError {
    match &item.outcome {
        Err(e) => CliError::BatchItem {
            index: item.index,
            structure: item.structure.clone(),
            source: e.clone(),
        },
        Ok(_) => CliError::Other(anyhow::anyhow!(
            "Structure #{} unexpectedly succeeded",
            item.index
        )),
    }
}
