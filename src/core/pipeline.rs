use std::{
    collections::HashMap,
    fs::File,
    io::{
        BufReader,
        BufWriter,
        Write,
    },
    path::Path,
    time::Instant,
};

use tempfile::NamedTempFile;

use crate::{
    core::{
        CloudSummary,
        Selection,
        TagCloudError,
    },
    frequency::{
        count_words,
        select_top,
        sort_for_display,
    },
    render::write_page,
    segmentation::SeparatorSet,
    settings::Settings,
};

/// Opens the input and aggregates its word counts in one buffered pass.
pub fn count_file(
    path: &Path,
    separators: &SeparatorSet,
) -> Result<HashMap<String, u32>, TagCloudError> {
    let file = File::open(path)?;
    count_words(BufReader::new(file), separators)
}

/// Renders the selection into `output` without ever exposing a partial page:
/// the document is written to a temp file next to the destination and moved
/// into place once complete.
pub fn render_to_file(
    output: &Path,
    input_name: &str,
    selection: &Selection,
    settings: &Settings,
) -> Result<(), TagCloudError> {
    let parent = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp);
        write_page(&mut writer, input_name, selection, &settings.stylesheet_url)?;
        writer.flush()?;
    }
    temp.persist(output)?;

    Ok(())
}

/// Full pipeline for programmatic callers: count, select, sort, render.
///
/// The interactive binary drives the stages separately so it can validate the
/// requested word count against the distinct-word total before selecting.
pub fn generate(
    input: &Path,
    output: &Path,
    requested: usize,
    settings: &Settings,
) -> Result<CloudSummary, TagCloudError> {
    let total_start = Instant::now();

    let separators = SeparatorSet::new(&settings.separators);
    let counts = count_file(input, &separators)?;
    println!("Counted {} distinct words in {}", counts.len(), input.display());

    let mut selection = select_top(&counts, requested)?;
    sort_for_display(&mut selection);

    render_to_file(output, &input.display().to_string(), &selection, settings)?;
    println!(
        "Rendered {} words to {} ({:.1}s)",
        selection.len(),
        output.display(),
        total_start.elapsed().as_secs_f32()
    );

    Ok(CloudSummary { distinct_words: counts.len(), rendered_words: selection.len() })
}
