use crate::config::model::VideoConfig;
use crate::foundation::core::FrameRange;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::registry::VisualRegistry;
use crate::timing::resolve::{SceneDurations, resolve_scene_durations};
use crate::timing::schedule::{SceneKind, Schedule, ScheduledScene};

/// A validated config with its resolved timeline, ready for per-frame evaluation.
///
/// Everything here is derived from the config once; evaluating a frame never mutates the plan.
#[derive(Clone, Debug)]
pub struct VideoPlan {
    config: VideoConfig,
    durations: SceneDurations,
    schedule: Schedule,
    duration: u64,
    results_visuals: VisualRegistry,
    summary_visuals: VisualRegistry,
}

impl VideoPlan {
    /// Validate `config`, resolve scene durations and schedule them.
    ///
    /// The composition duration starts out as the content total.
    pub fn new(config: VideoConfig) -> ReelResult<Self> {
        config.validate()?;
        let durations = resolve_scene_durations(&config);
        let schedule = Schedule::from_durations(&durations);
        tracing::debug!(total = schedule.total, "scheduled scenes");
        Ok(Self {
            duration: schedule.total,
            config,
            durations,
            schedule,
            results_visuals: VisualRegistry::results(),
            summary_visuals: VisualRegistry::summary(),
        })
    }

    /// Set the composition duration, never going below the content total.
    pub fn with_duration(mut self, frames: u64) -> Self {
        self.duration = frames.max(self.schedule.total);
        self
    }

    /// Replace the visual registries the routers look names up in.
    pub fn with_registries(mut self, results: VisualRegistry, summary: VisualRegistry) -> Self {
        self.results_visuals = results;
        self.summary_visuals = summary;
        self
    }

    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    pub fn durations(&self) -> &SceneDurations {
        &self.durations
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Content-only length (sum of all scene durations).
    pub fn content_total(&self) -> u64 {
        self.schedule.total
    }

    /// Composition length in frames (content total, possibly extended for audio).
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn results_visuals(&self) -> &VisualRegistry {
        &self.results_visuals
    }

    pub fn summary_visuals(&self) -> &VisualRegistry {
        &self.summary_visuals
    }

    /// Range `kind` occupies in this composition; see [`Schedule::render_range`].
    pub fn render_range(&self, kind: SceneKind) -> FrameRange {
        self.schedule.render_range(kind, self.duration)
    }

    /// Whether the slot has something to render: skipped explainers and absent summaries
    /// occupy no visible span even when an override gives them frames.
    pub fn has_content(&self, kind: SceneKind) -> bool {
        match kind {
            SceneKind::Explainer => !self.config.explainer_lines().is_empty(),
            SceneKind::Summary => !self.config.summary().is_none(),
            _ => true,
        }
    }

    /// Scenes that actually appear on screen, in playback order.
    pub fn visible_scenes(&self) -> Vec<ScheduledScene> {
        self.schedule
            .iter()
            .filter(|s| self.has_content(s.kind) && !self.render_range(s.kind).is_empty())
            .copied()
            .collect()
    }

    pub(crate) fn check_frame(&self, frame: u64) -> ReelResult<()> {
        if frame >= self.duration {
            return Err(ReelError::evaluation(format!(
                "frame {frame} is out of bounds (duration {})",
                self.duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/plan.rs"]
mod tests;
