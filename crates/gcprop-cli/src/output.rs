use crate::config::OutputConfig;
use gcprop::core::groups::dictionary::GroupDictionary;
use gcprop::engine::estimator::EstimationResult;

const LABEL_WIDTH: usize = 22;

pub fn render_table(structure: &str, result: &EstimationResult, config: &OutputConfig) -> String {
    let w = LABEL_WIDTH;
    let precision = config.precision as usize;
    let properties = result.properties.rounded(config.precision);

    let mut lines = vec![format!("{:<w$}{}", "Structure", structure)];
    lines.extend(
        properties
            .labelled()
            .iter()
            .map(|(label, value)| format!("{:<w$}{:.precision$}", label, value)),
    );

    if config.show_fragments {
        let fragments = if result.fragment_count.is_empty() {
            "(none recognized)".to_string()
        } else {
            result.fragment_count.to_string()
        };
        lines.push(format!("{:<w$}{}", "Fragments", fragments));
    }

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn render_groups(dictionary: &GroupDictionary) -> String {
    let header = format!(
        "{:<8}{:>14}{:>14}{:>14}{:>14}\n",
        "Symbol", "Boiling", "Melting", "Crit. temp.", "Crit. press."
    );
    dictionary.iter().fold(header, |mut out, def| {
        let c = def.contributions;
        out.push_str(&format!(
            "{:<8}{:>14.2}{:>14.2}{:>14.2}{:>14.2}\n",
            def.symbol,
            c.boiling_point,
            c.melting_point,
            c.critical_temperature,
            c.critical_pressure
        ));
        out
    })
}
