use std::{
    cmp::Ordering,
    collections::HashMap,
};

use crate::core::{
    CloudEntry,
    Selection,
    TagCloudError,
};

/// Picks the `requested` highest-count words from the frequency map.
///
/// Ties on count break lexicographically ascending on the normalized word,
/// so a given input always selects the same set. `requested` must lie in
/// `[0, counts.len()]`; the bounds come from the selected range itself and
/// collapse to 0 when nothing is selected.
pub fn select_top(
    counts: &HashMap<String, u32>,
    requested: usize,
) -> Result<Selection, TagCloudError> {
    if requested > counts.len() {
        return Err(TagCloudError::InvalidWordCount { requested, available: counts.len() });
    }

    let mut ranked: Vec<(&str, u32)> =
        counts.iter().map(|(word, &count)| (word.as_str(), count)).collect();

    ranked.sort_unstable_by(|(left_word, left_count), (right_word, right_count)| {
        right_count.cmp(left_count).then_with(|| left_word.cmp(right_word))
    });
    ranked.truncate(requested);

    let max_count = ranked.first().map(|&(_, count)| count).unwrap_or(0);
    let min_count = ranked.last().map(|&(_, count)| count).unwrap_or(0);

    let entries = ranked
        .into_iter()
        .map(|(word, count)| CloudEntry { word: word.to_string(), count })
        .collect();

    Ok(Selection { entries, min_count, max_count })
}

/// Reorders a selection for display: case-insensitive alphabetical order,
/// comparing case-folded code-point sequences, independent of locale.
pub fn sort_for_display(selection: &mut Selection) {
    selection.entries.sort_by(|a, b| case_insensitive_cmp(&a.word, &b.word));
}

fn case_insensitive_cmp(a: &str, b: &str) -> Ordering {
    a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase))
}

/// Parses the operator-supplied word count. Any integer parses, including
/// negative ones; range checking against the counted text is the caller's
/// job, so an out-of-range answer stays recoverable.
pub fn parse_word_count(raw: &str) -> Result<i64, TagCloudError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| TagCloudError::MalformedNumericInput(trimmed.to_string()))
}
