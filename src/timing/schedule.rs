use crate::foundation::core::{FrameIndex, FrameRange};
use crate::timing::resolve::SceneDurations;
use std::fmt;

/// The nine fixed scene slots, in playback order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    Hook,
    PlugAndPlay,
    Setup,
    Explainer,
    LetsPlay,
    Prompt,
    Results,
    Summary,
    End,
}

impl SceneKind {
    pub const ALL: [SceneKind; 9] = [
        SceneKind::Hook,
        SceneKind::PlugAndPlay,
        SceneKind::Setup,
        SceneKind::Explainer,
        SceneKind::LetsPlay,
        SceneKind::Prompt,
        SceneKind::Results,
        SceneKind::Summary,
        SceneKind::End,
    ];

    /// Position in [`SceneKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hook => "hook",
            Self::PlugAndPlay => "plug-and-play",
            Self::Setup => "setup",
            Self::Explainer => "explainer",
            Self::LetsPlay => "lets-play",
            Self::Prompt => "prompt",
            Self::Results => "results",
            Self::Summary => "summary",
            Self::End => "end",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scene placed on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ScheduledScene {
    pub kind: SceneKind,
    pub start: FrameIndex,
    pub duration: u64,
}

impl ScheduledScene {
    /// `[start, start + duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange::from_start_len(self.start, self.duration)
    }

    pub fn is_empty(&self) -> bool {
        self.duration == 0
    }
}

/// Start offsets for all nine scenes plus the content total.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Schedule {
    pub scenes: [ScheduledScene; 9],
    pub total: u64,
}

impl Schedule {
    /// Prefix-sum `durations` in fixed scene order.
    ///
    /// Zero-length scenes take no span and leave no gap; sums saturate at `u64::MAX`.
    pub fn from_durations(durations: &SceneDurations) -> Self {
        let mut cursor = 0u64;
        let scenes = SceneKind::ALL.map(|kind| {
            let duration = durations.get(kind);
            let scene = ScheduledScene {
                kind,
                start: FrameIndex(cursor),
                duration,
            };
            cursor = cursor.saturating_add(duration);
            scene
        });
        Self {
            scenes,
            total: cursor,
        }
    }

    pub fn scene(&self, kind: SceneKind) -> &ScheduledScene {
        &self.scenes[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledScene> {
        self.scenes.iter()
    }

    /// Range the scene occupies when rendered inside a composition of `composition_duration`
    /// frames.
    ///
    /// The end scene has no cap and runs to the end of the composition, which can be longer
    /// than the content total once audio reconciliation extended it.
    pub fn render_range(&self, kind: SceneKind, composition_duration: u64) -> FrameRange {
        let scene = self.scene(kind);
        if kind == SceneKind::End {
            let end = composition_duration.max(scene.start.0);
            return FrameRange {
                start: scene.start,
                end: FrameIndex(end),
            };
        }
        scene.range()
    }

    /// The scene whose render range contains `frame`; zero-length scenes are never returned.
    pub fn scene_at(&self, frame: FrameIndex, composition_duration: u64) -> Option<&ScheduledScene> {
        self.scenes
            .iter()
            .find(|s| self.render_range(s.kind, composition_duration).contains(frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/schedule.rs"]
mod tests;
