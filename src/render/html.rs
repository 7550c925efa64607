use std::io::{
    self,
    Write,
};

use crate::{
    core::Selection,
    render::font::font_size,
};

/// Writes the tag cloud page. One span per entry, in the selection's current
/// order; the span class names the font tier (`f11`..`f48`) defined by the
/// external stylesheet.
pub fn write_page<W: Write>(
    out: &mut W,
    input_name: &str,
    selection: &Selection,
    stylesheet_url: &str,
) -> io::Result<()> {
    let heading = format!("Top {} words in {}", selection.len(), input_name);

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{}</title>", heading)?;
    writeln!(out, "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">", stylesheet_url)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{}</h2>", heading)?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;

    for entry in &selection.entries {
        let size = font_size(entry.count, selection.min_count, selection.max_count);
        writeln!(
            out,
            "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
            size, entry.count, entry.word
        )?;
    }

    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_page;
    use crate::core::{CloudEntry, Selection};

    fn render(selection: &Selection) -> String {
        let mut out = Vec::new();
        write_page(&mut out, "input.txt", selection, "tagcloud.css").unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_selection() -> Selection {
        Selection {
            entries: vec![
                CloudEntry { word: "cat".to_string(), count: 2 },
                CloudEntry { word: "mat".to_string(), count: 1 },
                CloudEntry { word: "the".to_string(), count: 3 },
            ],
            min_count: 1,
            max_count: 3,
        }
    }

    #[test]
    fn page_carries_title_heading_and_stylesheet() {
        let page = render(&sample_selection());

        assert!(page.contains("<title>Top 3 words in input.txt</title>"));
        assert!(page.contains("<h2>Top 3 words in input.txt</h2>"));
        assert!(page.contains("<link href=\"tagcloud.css\" rel=\"stylesheet\" type=\"text/css\">"));
        assert!(page.starts_with("<html>\n"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn spans_scale_with_count_and_keep_entry_order() {
        let page = render(&sample_selection());

        let spans: Vec<&str> = page.lines().filter(|l| l.starts_with("<span")).collect();
        assert_eq!(
            spans,
            vec![
                "<span style=\"cursor:default\" class=\"f29\" title=\"count: 2\">cat</span>",
                "<span style=\"cursor:default\" class=\"f11\" title=\"count: 1\">mat</span>",
                "<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>",
            ]
        );
    }

    #[test]
    fn empty_selection_renders_a_spanless_page() {
        let page = render(&Selection::empty());

        assert!(page.contains("<title>Top 0 words in input.txt</title>"));
        assert!(!page.contains("<span"));
        assert!(page.contains("<p class=\"cbox\">"));
    }
}
