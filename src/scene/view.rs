use crate::config::model::NameValuePair;

/// The component a scene slot renders, with the props it renders with.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum SceneView {
    Hook {
        hook_text: String,
        server_name: String,
    },
    PlugAndPlay {
        badge_line: String,
    },
    SetupBuiltIn {
        extension_name: String,
        extension_description: String,
    },
    SetupStdio {
        extension_name: String,
        extension_command: String,
    },
    SetupStdioWithEnv {
        extension_name: String,
        extension_command: String,
        env_vars: Vec<NameValuePair>,
    },
    SetupHttp {
        extension_name: String,
        endpoint: String,
    },
    SetupHttpWithHeaders {
        extension_name: String,
        endpoint: String,
        request_headers: Vec<NameValuePair>,
    },
    /// Numbered lines; also used for bullet results and bullet summaries.
    Explainer {
        lines: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    LetsPlay,
    Prompt {
        prompt_text: String,
        visible_text: String,
        typing_complete: bool,
    },
    Recording {
        recording_path: String,
    },
    /// A named visual from a [`crate::VisualRegistry`].
    Visual {
        name: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Visible diagnostic shown instead of a visual that could not be resolved.
    Placeholder {
        title: String,
        detail: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    End {
        docs_url: String,
        tutorial_title: String,
    },
}

impl SceneView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}
