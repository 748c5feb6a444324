use crate::foundation::error::{ReelError, ReelResult};
use std::path::{Path, PathBuf};

/// Asks an external service how long an audio asset is.
///
/// `Ok(None)` means the asset was read but carries no usable duration.
#[allow(async_fn_in_trait)]
pub trait AudioProbe {
    async fn duration_secs(&self, asset: &str) -> ReelResult<Option<f64>>;
}

impl<P: AudioProbe + ?Sized> AudioProbe for &P {
    async fn duration_secs(&self, asset: &str) -> ReelResult<Option<f64>> {
        (**self).duration_secs(asset).await
    }
}

/// Probe for videos without a voiceover; every asset has an unknown duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAudioProbe;

impl AudioProbe for NoAudioProbe {
    async fn duration_secs(&self, _asset: &str) -> ReelResult<Option<f64>> {
        Ok(None)
    }
}

/// Reads container durations with `ffprobe`, resolving asset references against a static
/// asset directory.
///
/// The `ffprobe` child process runs synchronously: awaiting [`AudioProbe::duration_secs`]
/// blocks the calling thread until it exits. Drive it with `pollster::block_on` or from a
/// blocking-friendly thread, not from an async executor's worker.
#[derive(Clone, Debug)]
pub struct FfprobeAudioProbe {
    assets_root: PathBuf,
}

impl FfprobeAudioProbe {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
        }
    }

    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }

    /// Resolve `asset` below the assets root, refusing absolute paths and `..` components.
    pub fn resolve(&self, asset: &str) -> ReelResult<PathBuf> {
        let rel = Path::new(asset.trim_start_matches('/'));
        if rel.as_os_str().is_empty() {
            return Err(ReelError::probe("asset reference is empty"));
        }
        if rel
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)))
        {
            return Err(ReelError::probe(format!(
                "asset reference '{asset}' must stay inside the assets root"
            )));
        }
        Ok(self.assets_root.join(rel))
    }
}

impl AudioProbe for FfprobeAudioProbe {
    async fn duration_secs(&self, asset: &str) -> ReelResult<Option<f64>> {
        let path = self.resolve(asset)?;
        if !path.is_file() {
            return Err(ReelError::probe(format!(
                "audio asset '{}' not found",
                path.display()
            )));
        }
        probe_duration_secs(&path)
    }
}

#[cfg(feature = "media-ffmpeg")]
fn probe_duration_secs(source_path: &Path) -> ReelResult<Option<f64>> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: Option<ProbeFormat>,
    }

    let out = std::process::Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_format"])
        .arg(source_path)
        .output()
        .map_err(|e| ReelError::probe(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(ReelError::probe(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| ReelError::probe(format!("ffprobe json parse failed: {e}")))?;
    Ok(parsed
        .format
        .and_then(|f| f.duration)
        .and_then(|s| s.trim().parse::<f64>().ok()))
}

#[cfg(not(feature = "media-ffmpeg"))]
fn probe_duration_secs(_source_path: &Path) -> ReelResult<Option<f64>> {
    Err(ReelError::probe(
        "audio probing requires the 'media-ffmpeg' feature",
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/audio/probe.rs"]
mod tests;
