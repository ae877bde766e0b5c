use super::table::{GROUP_TABLE, PRECEDENCE};
use crate::core::models::properties::ThermoProperties;
use phf::Map;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentDefinition {
    pub symbol: &'static str,
    pub contributions: ThermoProperties,
}

/// Read-only table of fragment symbols and their property increments.
///
/// The only instance lives in a `static` and is reached through
/// [`GroupDictionary::builtin`]; it is complete at compile time, so there is no
/// initialization step and nothing can mutate it.
#[derive(Debug)]
pub struct GroupDictionary {
    table: &'static Map<&'static str, ThermoProperties>,
    precedence: &'static [&'static str],
}

static BUILTIN: GroupDictionary = GroupDictionary {
    table: &GROUP_TABLE,
    precedence: &PRECEDENCE,
};

impl GroupDictionary {
    pub fn builtin() -> &'static GroupDictionary {
        &BUILTIN
    }

    /// Looks up a fragment by its exact, case-sensitive symbol.
    pub fn lookup(&self, symbol: &str) -> Option<FragmentDefinition> {
        self.table
            .get_entry(symbol)
            .map(|(&symbol, &contributions)| FragmentDefinition {
                symbol,
                contributions,
            })
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.table.contains_key(symbol)
    }

    /// Symbols in matching order: longest first, equal lengths in ascending byte order.
    pub fn symbols_by_precedence(&self) -> &'static [&'static str] {
        self.precedence
    }

    /// Definitions in matching order.
    pub fn iter(&self) -> impl Iterator<Item = FragmentDefinition> + '_ {
        self.precedence
            .iter()
            .filter_map(|symbol| self.lookup(symbol))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;

    #[test]
    fn lookup_returns_tabulated_contributions() {
        let def = GroupDictionary::builtin().lookup("CH3").unwrap();
        assert_eq!(def.symbol, "CH3");
        assert_eq!(
            def.contributions,
            ThermoProperties::new(23.58, -20.71, 68.81, 6.75)
        );
    }

    #[test]
    fn lookup_of_unknown_symbol_is_absent() {
        let dict = GroupDictionary::builtin();
        assert!(dict.lookup("CH4").is_none());
        assert!(dict.lookup("").is_none());
        assert!(!dict.contains("C"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dict = GroupDictionary::builtin();
        assert!(dict.lookup("oh").is_none());
        assert!(dict.lookup("Cooh").is_none());
        assert!(dict.contains("COOH"));
    }

    #[test]
    fn precedence_lists_every_symbol_exactly_once() {
        let dict = GroupDictionary::builtin();
        let mut listed: Vec<_> = dict.symbols_by_precedence().to_vec();
        listed.sort_unstable();
        listed.dedup();
        let mut keys: Vec<_> = GROUP_TABLE.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(listed, keys);
        assert_eq!(dict.symbols_by_precedence().len(), dict.len());
    }

    #[test]
    fn precedence_is_longest_first_then_lexicographic() {
        let order = GroupDictionary::builtin().symbols_by_precedence();
        let mut expected = order.to_vec();
        expected.sort_by_key(|s| (Reverse(s.len()), *s));
        assert_eq!(order, expected.as_slice());
        assert_eq!(order[0], "COOH");
    }

    #[test]
    fn iter_yields_definitions_in_precedence_order() {
        let dict = GroupDictionary::builtin();
        let symbols: Vec<_> = dict.iter().map(|d| d.symbol).collect();
        assert_eq!(symbols, dict.symbols_by_precedence());
        assert!(!dict.is_empty());
    }
}
