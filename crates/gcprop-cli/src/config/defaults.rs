use super::OutputFormat;

pub struct DefaultsConfig {
    pub format: OutputFormat,
    pub precision: u32,
    pub show_fragments: bool,
    pub structure_column: String,
    pub continue_on_error: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 2,
            show_fragments: true,
            structure_column: "structure".to_string(),
            continue_on_error: true,
        }
    }
}
