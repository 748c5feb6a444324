use crate::scene::view::SceneView;
use std::collections::BTreeMap;

/// Props every registered visual receives.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisualProps<'a> {
    pub description: Option<&'a str>,
}

/// Builds the view for a registered visual.
pub type VisualFactory = fn(&VisualProps<'_>) -> SceneView;

/// Explicit name -> factory table for custom visuals.
///
/// Lookups are exact and case-sensitive; an unregistered name is the router's problem, which
/// turns it into a diagnostic placeholder.
#[derive(Clone, Debug, Default)]
pub struct VisualRegistry {
    entries: BTreeMap<&'static str, VisualFactory>,
}

impl VisualRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Visuals available to the results scene.
    pub fn results() -> Self {
        Self::empty().with("DemoScene", demo_scene)
    }

    /// Visuals available to the summary scene.
    pub fn summary() -> Self {
        Self::empty()
            .with("SummaryScene", summary_scene)
            .with("GitMCPSummaryScene", git_mcp_summary_scene)
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn with(mut self, name: &'static str, factory: VisualFactory) -> Self {
        self.entries.insert(name, factory);
        self
    }

    pub fn get(&self, name: &str) -> Option<VisualFactory> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

fn visual(name: &'static str, props: &VisualProps<'_>) -> SceneView {
    SceneView::Visual {
        name,
        description: props.description.map(str::to_owned),
    }
}

fn demo_scene(props: &VisualProps<'_>) -> SceneView {
    visual("DemoScene", props)
}

fn summary_scene(props: &VisualProps<'_>) -> SceneView {
    visual("SummaryScene", props)
}

fn git_mcp_summary_scene(props: &VisualProps<'_>) -> SceneView {
    visual("GitMCPSummaryScene", props)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
