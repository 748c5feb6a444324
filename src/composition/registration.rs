use crate::audio::probe::AudioProbe;
use crate::audio::reconcile::{Reconciled, reconcile_duration};
use crate::config::model::VideoConfig;
use crate::eval::plan::VideoPlan;
use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use crate::timing::resolve::resolve_scene_durations;
use crate::timing::schedule::Schedule;
use crate::timing::table::{CANVAS, FPS};

/// What the host rendering registry receives for one video instance.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRegistration {
    pub id: String,
    pub duration_in_frames: u64,
    pub fps: Fps,
    pub width: u32,
    pub height: u32,
    pub props: VideoConfig,
    /// How the duration was reached (content total, audio outcome).
    pub timing: Reconciled,
    #[serde(skip)]
    plan: VideoPlan,
}

impl CompositionRegistration {
    /// The evaluated plan, with its duration set to [`Self::duration_in_frames`].
    pub fn plan(&self) -> &VideoPlan {
        &self.plan
    }

    pub fn into_plan(self) -> VideoPlan {
        self.plan
    }
}

/// Content-only length of `config`, through the same resolver and scheduler the render path
/// uses.
pub fn content_duration(config: &VideoConfig) -> u64 {
    Schedule::from_durations(&resolve_scene_durations(config)).total
}

/// Validate, schedule and reconcile one video against its audio.
///
/// The probe is awaited exactly once when the config names an audio asset; probe failures
/// fall back to the content duration. Config and id problems are fatal.
#[tracing::instrument(skip(config, probe))]
pub async fn register_composition<P: AudioProbe>(
    id: &str,
    config: VideoConfig,
    probe: &P,
) -> ReelResult<CompositionRegistration> {
    validate_composition_id(id)?;
    let plan = VideoPlan::new(config)?;

    let timing = reconcile_duration(
        plan.content_total(),
        plan.config().audio_src(),
        probe,
        FPS,
    )
    .await;
    if timing.duration == 0 {
        return Err(ReelError::validation(format!(
            "composition '{id}' has zero duration; at least one scene must have frames"
        )));
    }

    let plan = plan.with_duration(timing.duration);
    tracing::info!(
        content = timing.content_total,
        duration = timing.duration,
        "registered composition"
    );

    Ok(CompositionRegistration {
        id: id.to_owned(),
        duration_in_frames: timing.duration,
        fps: FPS,
        width: CANVAS.width,
        height: CANVAS.height,
        props: plan.config().clone(),
        timing,
        plan,
    })
}

/// Ids may only contain `a-z`, `A-Z`, `0-9` and `-`.
pub fn validate_composition_id(id: &str) -> ReelResult<()> {
    if id.is_empty() {
        return Err(ReelError::validation("composition id must not be empty"));
    }
    if let Some(bad) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return Err(ReelError::validation(format!(
            "composition id '{id}' contains '{bad}'; only a-z, A-Z, 0-9 and '-' are allowed"
        )));
    }
    Ok(())
}

/// Every composition registered for the host, in registration order.
#[derive(Clone, Debug, Default)]
pub struct CompositionRegistry {
    entries: Vec<CompositionRegistration>,
}

impl CompositionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `config` under `id`; duplicate ids are rejected before probing.
    pub async fn register_video<P: AudioProbe>(
        &mut self,
        id: &str,
        config: VideoConfig,
        probe: &P,
    ) -> ReelResult<&CompositionRegistration> {
        if self.get(id).is_some() {
            return Err(ReelError::validation(format!(
                "composition id '{id}' is already registered"
            )));
        }
        let registration = register_composition(id, config, probe).await?;
        self.entries.push(registration);
        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    pub fn get(&self, id: &str) -> Option<&CompositionRegistration> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompositionRegistration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registration.rs"]
mod tests;
