use crate::foundation::math::{Rate, interpolate_clamped};
use crate::timing::table::text_len;

/// How much of a typed string is on screen at a given frame, in UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterState {
    pub visible_units: usize,
    pub complete: bool,
}

/// Units revealed at `local_frame` when typing starts at `start_frame` and each unit takes
/// `frames_per_char` frames.
pub fn typewriter_at(
    text: &str,
    local_frame: u64,
    start_frame: u64,
    frames_per_char: Rate,
) -> TypewriterState {
    let len = text_len(text);
    let start = start_frame as f64;
    let end = start + len as f64 * frames_per_char.as_f64();
    let shown = interpolate_clamped(local_frame as f64, &[start, end], &[0.0, len as f64]).floor();
    let visible_units = (shown.max(0.0) as u64).min(len) as usize;
    TypewriterState {
        visible_units,
        complete: visible_units as u64 >= len,
    }
}

/// Longest prefix of `text` that fits in `units` UTF-16 code units.
///
/// A character is shown only once all of its units are revealed, so a surrogate pair is
/// never split.
pub fn visible_prefix(text: &str, units: usize) -> &str {
    let mut seen = 0;
    for (byte_idx, c) in text.char_indices() {
        seen += c.len_utf16();
        if seen > units {
            return &text[..byte_idx];
        }
    }
    text
}

#[cfg(test)]
#[path = "../../tests/unit/scene/typewriter.rs"]
mod tests;
