use crate::config::model::{TimingOverrides, VideoConfig};
use crate::foundation::math::Rate;
use crate::timing::explainer::compute_explainer_duration;
use crate::timing::schedule::SceneKind;
use crate::timing::setup::compute_setup_duration;
use crate::timing::table::{FPS, TIMING, text_len};

/// Frame where the prompt starts typing.
pub const TYPING_START: u64 = 30;
pub const FRAMES_PER_CHAR: Rate = Rate::new(3, 2);
pub const WORKING_FADE_IN: u64 = 15;
/// How long "working..." stays up after fading in.
pub const WORKING_HOLD: u64 = 90;
/// Added after a recording of known length.
pub const RECORDING_PAD: u64 = 30;

/// Resolved length of every scene slot, in frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SceneDurations {
    pub hook: u64,
    pub plug_and_play: u64,
    pub setup: u64,
    pub explainer: u64,
    pub lets_play: u64,
    pub prompt: u64,
    pub results: u64,
    pub summary: u64,
    pub end: u64,
}

impl SceneDurations {
    pub fn get(&self, kind: SceneKind) -> u64 {
        match kind {
            SceneKind::Hook => self.hook,
            SceneKind::PlugAndPlay => self.plug_and_play,
            SceneKind::Setup => self.setup,
            SceneKind::Explainer => self.explainer,
            SceneKind::LetsPlay => self.lets_play,
            SceneKind::Prompt => self.prompt,
            SceneKind::Results => self.results,
            SceneKind::Summary => self.summary,
            SceneKind::End => self.end,
        }
    }

    /// Durations in [`SceneKind::ALL`] order.
    pub fn to_array(&self) -> [u64; 9] {
        SceneKind::ALL.map(|kind| self.get(kind))
    }

    /// Sum of all nine durations, saturating.
    pub fn total(&self) -> u64 {
        self.to_array()
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(*d))
    }
}

/// Resolve every scene length for `config`: the override when present, otherwise the
/// content-derived default.
pub fn resolve_scene_durations(config: &VideoConfig) -> SceneDurations {
    let o: TimingOverrides = config.overrides();
    let durations = SceneDurations {
        hook: o.hook_duration.unwrap_or(TIMING.hook),
        plug_and_play: o.plug_and_play_duration.unwrap_or(TIMING.plug_and_play),
        setup: o
            .setup_duration
            .unwrap_or_else(|| compute_setup_duration(&config.setup)),
        explainer: o
            .explainer_duration
            .unwrap_or_else(|| default_explainer_duration(config)),
        lets_play: o.lets_play_duration.unwrap_or(TIMING.lets_play),
        prompt: o
            .prompt_duration
            .unwrap_or_else(|| compute_prompt_duration(&config.prompt_text)),
        results: o
            .results_duration
            .unwrap_or_else(|| default_results_duration(config)),
        summary: o
            .summary_duration
            .unwrap_or_else(|| default_summary_duration(config)),
        end: o.end_duration.unwrap_or(TIMING.end),
    };
    tracing::debug!(?durations, "resolved scene durations");
    durations
}

/// Typing plus the "working..." hold.
pub fn compute_prompt_duration(prompt_text: &str) -> u64 {
    prompt_typing_end(prompt_text) + WORKING_FADE_IN + WORKING_HOLD
}

/// Scene-local frame where the prompt finishes typing.
pub(crate) fn prompt_typing_end(prompt_text: &str) -> u64 {
    TYPING_START.saturating_add(FRAMES_PER_CHAR.ceil_mul(text_len(prompt_text)))
}

fn default_explainer_duration(config: &VideoConfig) -> u64 {
    let lines = config.explainer_lines();
    if lines.is_empty() {
        0
    } else {
        compute_explainer_duration(lines)
    }
}

fn default_results_duration(config: &VideoConfig) -> u64 {
    match config.results.recording_secs() {
        Some(secs) => FPS.secs_to_frames_ceil(secs).saturating_add(RECORDING_PAD),
        None => TIMING.results,
    }
}

fn default_summary_duration(config: &VideoConfig) -> u64 {
    if config.summary().is_none() {
        0
    } else {
        TIMING.summary
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/resolve.rs"]
mod tests;
