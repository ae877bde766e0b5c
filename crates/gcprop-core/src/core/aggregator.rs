use crate::core::groups::dictionary::GroupDictionary;
use crate::core::models::fragments::FragmentCount;
use crate::core::models::properties::ThermoProperties;

/// Sums `count × contribution` over a fragment count.
///
/// Symbols missing from the dictionary contribute nothing. Terms are added in the
/// count's sorted key order, so identical input gives bit-identical output.
#[derive(Debug, Clone, Copy)]
pub struct PropertyAggregator<'a> {
    dictionary: &'a GroupDictionary,
}

impl<'a> PropertyAggregator<'a> {
    pub fn new(dictionary: &'a GroupDictionary) -> Self {
        Self { dictionary }
    }

    pub fn aggregate(&self, counts: &FragmentCount) -> ThermoProperties {
        counts
            .iter()
            .filter_map(|(symbol, count)| {
                self.dictionary
                    .lookup(symbol)
                    .map(|def| def.contributions.scaled(f64::from(count)))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn properties_approx_equal(a: ThermoProperties, b: ThermoProperties) -> bool {
        f64_approx_equal(a.boiling_point, b.boiling_point)
            && f64_approx_equal(a.melting_point, b.melting_point)
            && f64_approx_equal(a.critical_temperature, b.critical_temperature)
            && f64_approx_equal(a.critical_pressure, b.critical_pressure)
    }

    fn aggregator() -> PropertyAggregator<'static> {
        PropertyAggregator::new(GroupDictionary::builtin())
    }

    fn counts(pairs: &[(&str, u32)]) -> FragmentCount {
        pairs.iter().copied().collect()
    }

    #[test]
    fn aggregate_of_ethanol_fragments_matches_hand_sum() {
        let p = aggregator().aggregate(&counts(&[("CH3", 1), ("CH2", 1), ("OH", 1)]));
        assert!(f64_approx_equal(p.boiling_point, 139.34));
        assert!(f64_approx_equal(p.melting_point, 3.10));
        assert!(f64_approx_equal(p.critical_temperature, 283.12));
        assert!(f64_approx_equal(p.critical_pressure, 35.95));
    }

    #[test]
    fn aggregate_scales_by_occurrence_count() {
        let p = aggregator().aggregate(&counts(&[("CH2", 3)]));
        assert!(properties_approx_equal(
            p,
            ThermoProperties::new(68.64, -61.92, 175.23, 16.5)
        ));
    }

    #[test]
    fn aggregate_of_empty_count_is_zero() {
        assert_eq!(
            aggregator().aggregate(&FragmentCount::new()),
            ThermoProperties::ZERO
        );
    }

    #[test]
    fn aggregate_treats_unknown_symbols_as_zero() {
        let with_unknown = aggregator().aggregate(&counts(&[("OH", 1), ("XYZ", 7)]));
        let without = aggregator().aggregate(&counts(&[("OH", 1)]));
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn aggregate_is_linear_over_merged_counts() {
        let c1 = counts(&[("CH3", 2), ("COOH", 1)]);
        let c2 = counts(&[("CH3", 1), ("NH2", 2), ("OH", 1)]);
        let agg = aggregator();
        let merged = agg.aggregate(&c1.clone().merged(&c2));
        let summed = agg.aggregate(&c1) + agg.aggregate(&c2);
        assert!(properties_approx_equal(merged, summed));
    }

    #[test]
    fn aggregate_is_referentially_transparent() {
        let c = counts(&[("CH3", 2), ("CH2", 5), ("OH", 1), ("NH2", 1)]);
        assert_eq!(aggregator().aggregate(&c), aggregator().aggregate(&c));
    }
}
