use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` down to at most `max_cells` cells, ending in `…` when shortened.
/// Never splits a grapheme.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Suffix of `s` that starts late enough for the text before `byte_offset`
/// to fit in `max_cells`. Keeps the input cursor in view.
pub fn tail_to_width(s: &str, byte_offset: usize, max_cells: usize) -> &str {
    let end = byte_offset.min(s.len());
    let mut start = end;
    let mut used = 0;
    for (i, g) in s[..end].grapheme_indices(true).rev() {
        let w = display_width(g);
        if used + w > max_cells {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}

/// Byte offset of the grapheme after the one at `byte_offset`
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let rest = s.get(byte_offset..)?;
    let g = rest.graphemes(true).next()?;
    Some(byte_offset + g.len())
}

/// Byte offset of the grapheme before `byte_offset`
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let head = s.get(..byte_offset)?;
    head.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Cell column of `byte_offset`
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}
