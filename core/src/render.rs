//! Row projection and plain-text rendering of the listing.

/// Display-ready data for one listing entry.
///
/// `key` is the post id; two rows with the same key are the same entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub key: String,
    pub title: String,
    pub href: String,
    pub author: String,
    pub date: String,
}

/// Renders rows as a numbered list:
///
/// ```text
/// 1. Getting started <href>
///    Ada Park - March 5, 2024
/// ```
pub fn render_list(rows: &[PostRow]) -> String {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let n = i + 1;
            let indent = " ".repeat(n.to_string().len() + 2);
            format!(
                "{n}. {} <{}>\n{indent}{} - {}\n",
                row.title, row.href, row.author, row.date
            )
        })
        .collect()
}
