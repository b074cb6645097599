//! Line-oriented import parser.

use ring_model::{Area, Show};

use crate::error::ParseError;

/// Result of parsing import text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedImport {
    /// The parsed show, every navigation pointer at the first class.
    pub show: Show,
    /// Non-blank lines dropped because no header preceded them.
    pub discarded_lines: usize,
}

/// Returns the area name if `line` is a `[Area Name]` header.
///
/// The line is trimmed first and so is the name. A bracket pair with a
/// blank name is not a header.
pub fn parse_header(line: &str) -> Option<&str> {
    let name = line
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))?
        .trim();
    if name.is_empty() { None } else { Some(name) }
}

/// Parses import text into a show.
pub fn parse_show(text: &str) -> Result<Show, ParseError> {
    parse_import(text).map(|parsed| parsed.show)
}

/// Parses import text, also reporting how many stray lines were dropped.
///
/// A header naming an area that already appeared switches back to that
/// area; its existing classes are kept and new lines are appended.
pub fn parse_import(text: &str) -> Result<ParsedImport, ParseError> {
    let mut areas: Vec<Area> = Vec::new();
    let mut current: Option<usize> = None;
    let mut discarded_lines = 0usize;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(name) = parse_header(trimmed) {
            let index = match areas.iter().position(|area| area.name == name) {
                Some(existing) => {
                    tracing::debug!(area = name, "header reopens existing area");
                    existing
                }
                None => {
                    areas.push(Area::new(name));
                    areas.len() - 1
                }
            };
            current = Some(index);
            continue;
        }
        match current {
            Some(index) => areas[index].classes.push(trimmed.to_string()),
            None => discarded_lines += 1,
        }
    }

    if discarded_lines > 0 {
        tracing::debug!(discarded_lines, "dropped lines before the first area header");
    }

    let show = Show::from_areas(areas).ok_or(ParseError::NoAreasFound)?;
    tracing::debug!(
        areas = show.areas.len(),
        classes = show.class_count(),
        "parsed import text"
    );
    Ok(ParsedImport {
        show,
        discarded_lines,
    })
}
