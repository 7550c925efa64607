use std::{
    collections::HashMap,
    io::BufRead,
};

use crate::{
    core::TagCloudError,
    segmentation::SeparatorSet,
};

/// Aggregates word counts over the whole input, line by line.
///
/// Word tokens are lowercased before counting so that casing variants merge.
/// Lines are tokenized independently, so a word split across a line break by
/// the reader counts as two words. A read failure aborts the pass; partial
/// counts are never returned.
pub fn count_words<R: BufRead>(
    reader: R,
    separators: &SeparatorSet,
) -> Result<HashMap<String, u32>, TagCloudError> {
    let mut counts: HashMap<String, u32> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        for token in separators.tokens(&line).filter(|t| t.is_word()) {
            *counts.entry(token.text.to_lowercase()).or_insert(0) += 1;
        }
    }

    Ok(counts)
}
