//! # Document Parser
//!
//! Splits a document into titled sections. Only lines starting with `"# "` are headers;
//! deeper headings (`## ...`) and everything else are content. Text before the first
//! header belongs to no section and is ignored.
//!
//! Line indices in [`Section`] are 0-based positions in the full document, so a
//! section can be spliced back with [`replace_section_content`] without re-parsing.

use crate::model::Section;

const HEADER_PREFIX: &str = "# ";

pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

pub fn header_title(line: &str) -> Option<&str> {
    line.strip_prefix(HEADER_PREFIX).map(str::trim)
}

pub fn parse_sections(text: &str) -> Vec<Section> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sections: Vec<Section> = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        if let Some(title) = header_title(line) {
            sections.push(Section {
                title: title.to_string(),
                content: Vec::new(),
                start_line: idx,
                end_line: idx,
            });
        } else if let Some(current) = sections.last_mut() {
            current.content.push(line.to_string());
            current.end_line = idx;
        }
    }
    sections
}

/// Case-insensitive title lookup.
pub fn find_section<'a>(sections: &'a [Section], title: &str) -> Option<&'a Section> {
    sections.iter().find(|s| s.matches_title(title))
}

/// Exact title lookup, used for archive keys.
pub fn has_section_titled(text: &str, title: &str) -> bool {
    parse_sections(text).iter().any(|s| s.title == title)
}

/// Rebuilds `lines` with the content of `section` swapped for `content`.
pub fn replace_section_content(
    lines: &[String],
    section: &Section,
    content: Vec<String>,
) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + content.len());
    out.extend_from_slice(&lines[..=section.start_line]);
    out.extend(content);
    if section.end_line + 1 < lines.len() {
        out.extend_from_slice(&lines[section.end_line + 1..]);
    }
    out
}

pub fn trim_trailing_blank(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
}

pub fn trim_blank_edges(lines: &[String]) -> Vec<String> {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let mut out = lines[start..].to_vec();
    trim_trailing_blank(&mut out);
    out
}
