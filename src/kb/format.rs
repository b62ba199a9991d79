//! Knowledge base row formatting.
//!
//! Rows are `[category, question, answer, ...]`. Output groups Q/A pairs
//! under `## category` headings in first-seen order and is byte-identical
//! for identical input.

use std::collections::HashMap;
use std::fmt::Write;

use super::source::Row;

/// Category used when the first cell is empty.
pub const DEFAULT_CATEGORY: &str = "Generale";

struct Section<'a> {
    category: &'a str,
    items: Vec<(&'a str, &'a str)>,
}

/// Format raw sheet rows, header first, into prompt-ready text.
///
/// Rows with fewer than three cells or an empty question/answer are
/// skipped.
pub fn format_rows(rows: &[Row]) -> String {
    let mut sections: Vec<Section<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows.iter().skip(1) {
        if row.len() < 3 {
            continue;
        }
        let (question, answer) = (row[1].as_str(), row[2].as_str());
        if question.is_empty() || answer.is_empty() {
            continue;
        }
        let category = if row[0].is_empty() {
            DEFAULT_CATEGORY
        } else {
            row[0].as_str()
        };

        let slot = *index.entry(category).or_insert_with(|| {
            sections.push(Section {
                category,
                items: Vec::new(),
            });
            sections.len() - 1
        });
        sections[slot].items.push((question, answer));
    }

    let mut formatted = String::new();
    for section in &sections {
        let _ = write!(formatted, "\n## {}\n\n", section.category);
        for (question, answer) in &section.items {
            let _ = write!(formatted, "Q: {question}\nA: {answer}\n\n");
        }
    }

    formatted.trim().to_string()
}
