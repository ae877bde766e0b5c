use super::error::{EstimationError, InputError};
use crate::core::aggregator::PropertyAggregator;
use crate::core::groups::dictionary::GroupDictionary;
use crate::core::matcher::{FragmentMatcher, unclaimed_segments};
use crate::core::models::fragments::FragmentCount;
use crate::core::models::properties::ThermoProperties;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Estimated properties of one structure together with the fragments they were
/// derived from.
///
/// A structure with no recognizable fragment yields an empty count and all-zero
/// properties; this is a successful result, indistinguishable from a structure
/// whose contributions genuinely cancel out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    #[serde(flatten)]
    pub properties: ThermoProperties,
    pub fragment_count: FragmentCount,
}

/// Validates raw structure notation and runs matching and aggregation on it.
///
/// Holds only shared references to the read-only dictionary, so it is cheap to
/// copy and safe to use from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    matcher: FragmentMatcher<'a>,
    aggregator: PropertyAggregator<'a>,
}

impl Estimator<'static> {
    pub fn builtin() -> Self {
        Self::new(GroupDictionary::builtin())
    }
}

impl Default for Estimator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Estimator<'a> {
    pub fn new(dictionary: &'a GroupDictionary) -> Self {
        Self {
            matcher: FragmentMatcher::new(dictionary),
            aggregator: PropertyAggregator::new(dictionary),
        }
    }

    /// Estimates the properties of `raw`.
    ///
    /// `None` stands for a request that carried no structure at all. Both a missing
    /// and an empty structure are rejected with [`InputError`]; any other string is
    /// accepted, including text with no known fragment.
    pub fn estimate<'s>(
        &self,
        raw: impl Into<Option<&'s str>>,
    ) -> Result<EstimationResult, EstimationError> {
        let structure = validate(raw.into())?;

        let matches = self.matcher.scan_matches(structure);
        let ignored = unclaimed_segments(structure, &matches);
        if !ignored.is_empty() {
            debug!(?ignored, "Skipping unrecognized text in structure notation.");
        }

        let fragment_count: FragmentCount = matches.iter().map(|m| (m.symbol, 1)).collect();
        let properties = self.aggregator.aggregate(&fragment_count);
        trace!(%fragment_count, ?properties, "Aggregated fragment contributions.");

        if !properties.is_finite() {
            return Err(EstimationError::Internal(format!(
                "non-finite estimate for fragments [{}]",
                fragment_count
            )));
        }

        Ok(EstimationResult {
            properties,
            fragment_count,
        })
    }
}

fn validate(raw: Option<&str>) -> Result<&str, InputError> {
    match raw {
        None => Err(InputError::Missing),
        Some("") => Err(InputError::Empty),
        Some(structure) => Ok(structure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn estimate_of_ethanol_matches_worked_example() {
        let result = Estimator::builtin().estimate("CH3CH2OH").unwrap();
        let expected: FragmentCount = [("CH3", 1), ("CH2", 1), ("OH", 1)].into_iter().collect();
        assert_eq!(result.fragment_count, expected);
        assert!(f64_approx_equal(result.properties.boiling_point, 139.34));
        assert!(f64_approx_equal(result.properties.melting_point, 3.10));
    }

    #[test]
    fn estimate_of_empty_string_is_input_error() {
        let err = Estimator::builtin().estimate("").unwrap_err();
        assert_eq!(err, EstimationError::Input(InputError::Empty));
    }

    #[test]
    fn estimate_of_missing_structure_is_input_error() {
        let err = Estimator::builtin().estimate(None::<&str>).unwrap_err();
        assert_eq!(err, EstimationError::Input(InputError::Missing));
    }

    #[test]
    fn estimate_of_unrecognized_text_is_all_zero_success() {
        let result = Estimator::builtin().estimate("c1ccccc1").unwrap();
        assert!(result.fragment_count.is_empty());
        assert_eq!(result.properties, ThermoProperties::ZERO);
    }

    #[test]
    fn estimate_accepts_whitespace_only_input() {
        let result = Estimator::builtin().estimate("   ").unwrap();
        assert!(result.fragment_count.is_empty());
    }

    #[test]
    fn estimate_of_acetic_acid_counts_carboxyl_once() {
        let result = Estimator::default().estimate("CH3COOH").unwrap();
        assert_eq!(result.fragment_count.get("COOH"), 1);
        assert_eq!(result.fragment_count.get("OH"), 0);
        assert!(f64_approx_equal(
            result.properties.boiling_point,
            23.58 + 169.09
        ));
    }

    #[test]
    fn estimate_is_idempotent() {
        let estimator = Estimator::builtin();
        let a = estimator.estimate("NH2CH2COOH").unwrap();
        let b = estimator.estimate("NH2CH2COOH").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn estimator_is_usable_across_threads() {
        let estimator = Estimator::builtin();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || estimator.estimate("CH3OH").unwrap()))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn result_serializes_flat_with_fragment_count() {
        let result = Estimator::builtin().estimate("OH").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["boilingPoint"], 92.88);
        assert_eq!(json["criticalPressure"], 23.7);
        assert_eq!(json["fragmentCount"]["OH"], 1);
        assert!(json.get("properties").is_none());
    }
}
