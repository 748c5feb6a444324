use crate::foundation::math::Rate;
use crate::timing::table::text_len;

/// Emoji pop-in before the first line.
pub const EMOJI_INTRO_DURATION: u64 = 30;
/// Number badge appears, then the line starts typing.
pub const BADGE_DELAY: u64 = 15;
pub const CHARS_PER_FRAME: Rate = Rate::new(1, 1);
/// Checkmark lands after a line finishes typing.
pub const CHECKMARK_BUFFER: u64 = 20;
pub const FINAL_HOLD: u64 = 45;

/// Frames needed to reveal `lines` one after another with the typewriter effect.
///
/// Callers skip the explainer scene entirely when there are no lines; for an empty slice this
/// still returns the intro + hold frames.
pub fn compute_explainer_duration<S: AsRef<str>>(lines: &[S]) -> u64 {
    let typed = lines.iter().fold(EMOJI_INTRO_DURATION, |acc, line| {
        acc.saturating_add(line_duration(line.as_ref()))
    });
    typed.saturating_add(FINAL_HOLD)
}

/// Frames one line occupies: badge, typing, checkmark.
pub(crate) fn line_duration(line: &str) -> u64 {
    BADGE_DELAY + CHARS_PER_FRAME.ceil_div(text_len(line)) + CHECKMARK_BUFFER
}

#[cfg(test)]
#[path = "../../tests/unit/timing/explainer.rs"]
mod tests;
