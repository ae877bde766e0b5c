use crate::core::groups::dictionary::GroupDictionary;
use crate::core::models::fragments::FragmentCount;

/// A fragment occurrence claimed in the input, as a byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentMatch {
    pub symbol: &'static str,
    pub start: usize,
    pub end: usize,
}

/// Scans structure notation for known fragment symbols.
///
/// Symbols are tried in the dictionary's precedence order (longest first, ties in
/// ascending byte order). Each symbol is searched left to right and may only match
/// bytes that no earlier match has claimed, so `OH` inside an already matched
/// `COOH` is never counted twice. Matching is literal and case-sensitive; text that
/// matches nothing is skipped.
#[derive(Debug, Clone, Copy)]
pub struct FragmentMatcher<'a> {
    dictionary: &'a GroupDictionary,
}

impl<'a> FragmentMatcher<'a> {
    pub fn new(dictionary: &'a GroupDictionary) -> Self {
        Self { dictionary }
    }

    pub fn scan(&self, input: &str) -> FragmentCount {
        self.scan_matches(input)
            .iter()
            .map(|m| (m.symbol, 1))
            .collect()
    }

    /// Claimed spans sorted by start offset.
    pub fn scan_matches(&self, input: &str) -> Vec<FragmentMatch> {
        // Symbols are ASCII, so a byte-level match can never start or end inside
        // a multi-byte character.
        let haystack = input.as_bytes();
        let mut claimed = vec![false; haystack.len()];
        let mut matches = Vec::new();

        for &symbol in self.dictionary.symbols_by_precedence() {
            claim_occurrences(haystack, symbol, &mut claimed, &mut matches);
        }

        matches.sort_unstable_by_key(|m| m.start);
        matches
    }
}

fn claim_occurrences(
    haystack: &[u8],
    symbol: &'static str,
    claimed: &mut [bool],
    matches: &mut Vec<FragmentMatch>,
) {
    let needle = symbol.as_bytes();
    if needle.is_empty() || needle.len() > haystack.len() {
        return;
    }

    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        let end = start + needle.len();
        if &haystack[start..end] == needle && !claimed[start..end].contains(&true) {
            claimed[start..end].fill(true);
            matches.push(FragmentMatch { symbol, start, end });
            start = end;
        } else {
            start += 1;
        }
    }
}

/// Maximal runs of `input` not covered by any of `matches`.
///
/// `matches` must be sorted and non-overlapping, as returned by
/// [`FragmentMatcher::scan_matches`].
pub fn unclaimed_segments<'s>(input: &'s str, matches: &[FragmentMatch]) -> Vec<&'s str> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in matches {
        if m.start > cursor {
            segments.push(&input[cursor..m.start]);
        }
        cursor = cursor.max(m.end);
    }
    if cursor < input.len() {
        segments.push(&input[cursor..]);
    }
    segments
}
