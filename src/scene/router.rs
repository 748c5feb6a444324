use crate::config::model::{ResultConfig, SetupConfig, SummaryConfig};
use crate::scene::registry::{VisualProps, VisualRegistry};
use crate::scene::view::SceneView;

/// Setup form matching the configured extension type.
pub fn route_setup(setup: &SetupConfig) -> SceneView {
    match setup {
        SetupConfig::Builtin {
            extension_name,
            extension_description,
        } => SceneView::SetupBuiltIn {
            extension_name: extension_name.clone(),
            extension_description: extension_description.clone(),
        },
        SetupConfig::Stdio {
            extension_name,
            extension_command,
        } => SceneView::SetupStdio {
            extension_name: extension_name.clone(),
            extension_command: extension_command.clone(),
        },
        SetupConfig::StdioWithEnv {
            extension_name,
            extension_command,
            env_vars,
        } => SceneView::SetupStdioWithEnv {
            extension_name: extension_name.clone(),
            extension_command: extension_command.clone(),
            env_vars: env_vars.clone(),
        },
        SetupConfig::Http {
            extension_name,
            endpoint,
        } => SceneView::SetupHttp {
            extension_name: extension_name.clone(),
            endpoint: endpoint.clone(),
        },
        SetupConfig::HttpWithHeaders {
            extension_name,
            endpoint,
            request_headers,
        } => SceneView::SetupHttpWithHeaders {
            extension_name: extension_name.clone(),
            endpoint: endpoint.clone(),
            request_headers: request_headers.clone(),
        },
    }
}

/// Results view; `None` for a visuals config that names no component.
pub fn route_results(results: &ResultConfig, registry: &VisualRegistry) -> Option<SceneView> {
    match results {
        ResultConfig::Recording { recording_path, .. } => Some(SceneView::Recording {
            recording_path: recording_path.clone(),
        }),
        ResultConfig::Bullets { bullets } => Some(SceneView::Explainer {
            lines: bullets.clone(),
            title: None,
        }),
        ResultConfig::Visuals {
            description,
            component_name,
        } => {
            let name = component_name.as_deref().filter(|n| !n.is_empty())?;
            Some(resolve_visual(
                registry,
                name,
                description.as_deref(),
                "results",
            ))
        }
    }
}

/// Summary view; `None` when the video has no summary.
pub fn route_summary(summary: &SummaryConfig, registry: &VisualRegistry) -> Option<SceneView> {
    match summary {
        SummaryConfig::None => None,
        SummaryConfig::Bullets { lines, title } => Some(SceneView::Explainer {
            lines: lines.clone(),
            title: title.clone(),
        }),
        SummaryConfig::Visuals {
            component_name,
            description,
        } => {
            let Some(name) = component_name.as_deref().filter(|n| !n.is_empty()) else {
                return Some(SceneView::Placeholder {
                    title: "Missing summary.componentName".to_owned(),
                    detail: "This video requested summary.type \"visuals\" but no componentName \
                             was provided."
                        .to_owned(),
                    description: description.clone(),
                });
            };
            Some(resolve_visual(
                registry,
                name,
                description.as_deref(),
                "summary",
            ))
        }
    }
}

fn resolve_visual(
    registry: &VisualRegistry,
    name: &str,
    description: Option<&str>,
    slot: &str,
) -> SceneView {
    match registry.get(name) {
        Some(factory) => factory(&VisualProps { description }),
        None => {
            tracing::warn!(slot, name, "unknown visuals component, rendering placeholder");
            SceneView::Placeholder {
                title: format!("Unknown {slot} visuals component: {name}"),
                detail: format!("Register it in the {slot} visuals registry."),
                description: description.map(str::to_owned),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/router.rs"]
mod tests;
