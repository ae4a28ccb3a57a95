/// Escape character of the FinTS syntax.
pub const ESCAPE: char = '?';
/// Separates data elements within a segment.
pub const ELEMENT_SEPARATOR: char = '+';
/// Separates the members of a data element group and repeated values.
pub const GROUP_SEPARATOR: char = ':';
/// Terminates a segment.
pub const SEGMENT_TERMINATOR: char = '\'';

pub fn is_reserved(c: char) -> bool {
    matches!(c, ESCAPE | ELEMENT_SEPARATOR | GROUP_SEPARATOR | SEGMENT_TERMINATOR)
}

/// Prefix every reserved character with `?`.
///
/// Apply once, where raw text enters a field vector. Escaping an already
/// escaped value doubles the escape characters.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if is_reserved(c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Inverse of [`escape`]. A dangling trailing `?` is kept as is.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}
