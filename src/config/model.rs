use serde::{Deserialize, Serialize};

/// Ordered `name = value` row shown in the setup form (env vars, request headers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValuePair {
    pub name: String,
    pub value: String,
}

/// How the demonstrated extension gets configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "snake_case",
    rename_all_fields = "camelCase",
    deny_unknown_fields
)]
pub enum SetupConfig {
    /// Built-in extension toggled on.
    Builtin {
        extension_name: String,
        extension_description: String,
    },
    /// External extension launched by a shell command.
    Stdio {
        extension_name: String,
        extension_command: String,
    },
    /// External command plus environment variables.
    StdioWithEnv {
        extension_name: String,
        extension_command: String,
        env_vars: Vec<NameValuePair>,
    },
    /// Remote extension reached over HTTP.
    Http {
        extension_name: String,
        endpoint: String,
    },
    /// Remote endpoint plus request headers.
    HttpWithHeaders {
        extension_name: String,
        endpoint: String,
        request_headers: Vec<NameValuePair>,
    },
}

impl SetupConfig {
    pub fn extension_name(&self) -> &str {
        match self {
            Self::Builtin { extension_name, .. }
            | Self::Stdio { extension_name, .. }
            | Self::StdioWithEnv { extension_name, .. }
            | Self::Http { extension_name, .. }
            | Self::HttpWithHeaders { extension_name, .. } => extension_name,
        }
    }

    /// Wire tag of the active variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Builtin { .. } => "builtin",
            Self::Stdio { .. } => "stdio",
            Self::StdioWithEnv { .. } => "stdio_with_env",
            Self::Http { .. } => "http",
            Self::HttpWithHeaders { .. } => "http_with_headers",
        }
    }
}

/// What the results scene shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ResultConfig {
    /// Screen recording of the agent at work.
    Recording {
        recording_path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_in_seconds: Option<f64>,
    },
    Bullets { bullets: Vec<String> },
    /// Custom visual looked up in the results registry.
    Visuals {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        component_name: Option<String>,
    },
}

impl ResultConfig {
    /// Recording length when the config carries a usable (positive, finite) one.
    pub fn recording_secs(&self) -> Option<f64> {
        match self {
            Self::Recording {
                duration_in_seconds: Some(secs),
                ..
            } if secs.is_finite() && *secs > 0.0 => Some(*secs),
            _ => None,
        }
    }
}

/// Optional closing scene before the end card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SummaryConfig {
    #[default]
    None,
    Bullets {
        lines: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Visuals {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        component_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl SummaryConfig {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Per-scene duration overrides in frames; a present field replaces the computed default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plug_and_play_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explainer_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lets_play_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_duration: Option<u64>,
}

/// One timed word inside a caption, times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

/// One caption line with word-level timestamps (seconds from video start).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub id: u32,
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
    pub words: Vec<Word>,
}

/// Root configuration for one video.
///
/// Constructed once by the authoring side and treated as immutable afterwards; every derived
/// value (durations, schedule, frame views) is recomputed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfig {
    pub hook_text: String,
    #[serde(rename = "mcpServerName", alias = "serverName")]
    pub server_name: String,
    pub badge_line: String,
    pub setup: SetupConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explainer_lines: Option<Vec<String>>,
    pub prompt_text: String,
    pub results: ResultConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_lines: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions_data: Option<Vec<Caption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_src: Option<String>,
    pub docs_url: String,
    pub tutorial_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_overrides: Option<TimingOverrides>,
}

impl VideoConfig {
    /// Explainer lines, empty when absent.
    pub fn explainer_lines(&self) -> &[String] {
        self.explainer_lines.as_deref().unwrap_or(&[])
    }

    /// Summary config, defaulting to [`SummaryConfig::None`].
    pub fn summary(&self) -> &SummaryConfig {
        static NONE: SummaryConfig = SummaryConfig::None;
        self.summary.as_ref().unwrap_or(&NONE)
    }

    /// Captions to overlay; `None` when absent or empty.
    pub fn captions(&self) -> Option<&[Caption]> {
        self.captions_data
            .as_deref()
            .filter(|captions| !captions.is_empty())
    }

    pub fn overrides(&self) -> TimingOverrides {
        self.timing_overrides.unwrap_or_default()
    }

    /// Voiceover asset reference, treating an empty string as absent.
    pub fn audio_src(&self) -> Option<&str> {
        self.audio_src.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
