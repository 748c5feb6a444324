use crate::audio::probe::AudioProbe;
use crate::foundation::core::Fps;

/// Outcome of a single reconciliation, kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum AudioOutcome {
    /// No audio asset configured; the probe was not called.
    NoAudio,
    /// Probe answered with a duration, converted to frames.
    Measured { audio_frames: u64 },
    /// Probe answered without a usable duration.
    Unknown,
    /// Probe failed; content duration used as is.
    Failed,
}

/// Reconciled composition length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Reconciled {
    pub content_total: u64,
    pub duration: u64,
    pub audio: AudioOutcome,
}

/// Extend `content_total` to cover the audio asset, if there is one and it is longer.
///
/// Probes at most once and never fails: a missing asset, an unparseable container or an
/// unknown duration all fall back to `content_total`.
pub async fn reconcile_duration<P: AudioProbe>(
    content_total: u64,
    audio_asset: Option<&str>,
    probe: &P,
    fps: Fps,
) -> Reconciled {
    let Some(asset) = audio_asset else {
        return Reconciled {
            content_total,
            duration: content_total,
            audio: AudioOutcome::NoAudio,
        };
    };

    let audio = match probe.duration_secs(asset).await {
        Ok(Some(secs)) if secs.is_finite() && secs >= 0.0 => AudioOutcome::Measured {
            audio_frames: fps.secs_to_frames_ceil(secs),
        },
        Ok(_) => {
            tracing::debug!(asset, "audio duration unknown, using content duration");
            AudioOutcome::Unknown
        }
        Err(e) => {
            tracing::warn!(asset, error = %e, "audio probe failed, using content duration");
            AudioOutcome::Failed
        }
    };

    let duration = match audio {
        AudioOutcome::Measured { audio_frames } => content_total.max(audio_frames),
        _ => content_total,
    };
    Reconciled {
        content_total,
        duration,
        audio,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/reconcile.rs"]
mod tests;
