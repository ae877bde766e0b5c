mod defaults;

use crate::cli::{BatchArgs, EstimateArgs, FormatArg};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const MAX_PRECISION: u32 = 15;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub precision: u32,
    pub show_fragments: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub structure_column: String,
    pub continue_on_error: bool,
    pub precision: u32,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
    precision: Option<u32>,
    #[serde(rename = "show-fragments")]
    show_fragments: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBatchConfig {
    #[serde(rename = "structure-column")]
    structure_column: Option<String>,
    #[serde(rename = "continue-on-error")]
    continue_on_error: Option<bool>,
}

/// Settings as read from the config file; every field may be absent.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    output: Option<PartialOutputConfig>,
    batch: Option<PartialBatchConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration, then
    /// applies the `-S key=value` overrides.
    pub fn load(path: Option<&Path>, set_values: &[String]) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_set_values(set_values)?;
        Ok(config)
    }

    pub fn output_config(&self, args: &EstimateArgs) -> Result<OutputConfig> {
        let defaults = DefaultsConfig::default();
        let file = self.output.as_ref();

        let format = args
            .format
            .map(OutputFormat::from)
            .or(file.and_then(|o| o.format))
            .unwrap_or(defaults.format);
        let precision = args
            .precision
            .or(file.and_then(|o| o.precision))
            .unwrap_or(defaults.precision);
        let show_fragments = file
            .and_then(|o| o.show_fragments)
            .unwrap_or(defaults.show_fragments);

        Ok(OutputConfig {
            format,
            precision: Self::check_precision(precision)?,
            show_fragments,
        })
    }

    pub fn batch_config(&self, args: &BatchArgs) -> Result<BatchConfig> {
        let defaults = DefaultsConfig::default();
        let file = self.batch.as_ref();

        let structure_column = args
            .column
            .clone()
            .or_else(|| file.and_then(|b| b.structure_column.clone()))
            .unwrap_or(defaults.structure_column);
        if structure_column.trim().is_empty() {
            return Err(CliError::Config(
                "`batch.structure-column` must not be empty.".to_string(),
            ));
        }

        let continue_on_error = if args.fail_fast {
            false
        } else {
            file.and_then(|b| b.continue_on_error)
                .unwrap_or(defaults.continue_on_error)
        };

        let precision = self
            .output
            .as_ref()
            .and_then(|o| o.precision)
            .unwrap_or(defaults.precision);

        Ok(BatchConfig {
            structure_column,
            continue_on_error,
            precision: Self::check_precision(precision)?,
        })
    }

    fn check_precision(precision: u32) -> Result<u32> {
        if precision > MAX_PRECISION {
            return Err(CliError::Config(format!(
                "Precision {} is out of range (0-{}).",
                precision, MAX_PRECISION
            )));
        }
        Ok(precision)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "output.format" => {
                    let format = match value_str {
                        "table" => OutputFormat::Table,
                        "json" => OutputFormat::Json,
                        _ => {
                            return Err(CliError::Config(format!(
                                "Invalid value for {}: '{}'. Expected 'table' or 'json'.",
                                key, value_str
                            )));
                        }
                    };
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                "output.precision" => {
                    self.output.get_or_insert_with(Default::default).precision =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "output.show-fragments" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .show_fragments = Some(Self::parse_bool(key, value_str)?);
                }
                "batch.structure-column" => {
                    self.batch
                        .get_or_insert_with(Default::default)
                        .structure_column = Some(value_str.to_string());
                }
                "batch.continue-on-error" => {
                    self.batch
                        .get_or_insert_with(Default::default)
                        .continue_on_error = Some(Self::parse_bool(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn parse_bool(key: &str, value_str: &str) -> Result<bool> {
        value_str.parse().map_err(|_| {
            CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
        })
    }
}
