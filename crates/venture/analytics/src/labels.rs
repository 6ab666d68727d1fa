//! Chart label truncation.
//!
//! Long names are cut to a fixed number of characters and marked with an
//! ellipsis. When two different names end up with the same label, both are
//! flagged and the later ones get an ordinal suffix so chart categories stay
//! distinct.

use std::collections::HashMap;

use serde::Serialize;

/// Appended to a truncated label
pub const ELLIPSIS: &str = "...";

/// A display label for one chart category
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartLabel {
    /// What the chart shows
    pub text: String,
    /// Trimmed source name (or placeholder)
    pub source: String,
    pub truncated: bool,
    /// Another, different source produced the same truncated text
    pub collided: bool,
}

/// Cut `source` to `max_chars` characters, appending [`ELLIPSIS`] when
/// anything was removed. Counts characters, not bytes.
pub fn truncate_label(source: &str, max_chars: usize) -> (String, bool) {
    match source.char_indices().nth(max_chars) {
        Some((cut, _)) => (format!("{}{}", &source[..cut], ELLIPSIS), true),
        None => (source.to_string(), false),
    }
}

/// Build labels for a sequence of optional names, in input order.
///
/// Absent or blank names use `placeholder`.
pub fn truncate_labels<'a, I>(sources: I, max_chars: usize, placeholder: &str) -> Vec<ChartLabel>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut labels: Vec<ChartLabel> = sources
        .into_iter()
        .map(|source| {
            let source = source
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(placeholder)
                .to_string();
            let (text, truncated) = truncate_label(&source, max_chars);
            ChartLabel {
                text,
                source,
                truncated,
                collided: false,
            }
        })
        .collect();

    // Distinct sources behind each label text, in first-seen order.
    let mut sources_by_text: HashMap<String, Vec<String>> = HashMap::new();
    for label in &labels {
        let sources = sources_by_text.entry(label.text.clone()).or_default();
        if !sources.contains(&label.source) {
            sources.push(label.source.clone());
        }
    }

    for label in &mut labels {
        let Some(sources) = sources_by_text.get(&label.text) else {
            continue;
        };
        if sources.len() < 2 {
            continue;
        }
        label.collided = true;
        let ordinal = sources
            .iter()
            .position(|s| *s == label.source)
            .unwrap_or(0);
        if ordinal > 0 {
            label.text = format!("{} ({})", label.text, ordinal + 1);
        }
    }

    labels
}
