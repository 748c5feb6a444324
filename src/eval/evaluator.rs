use crate::eval::plan::VideoPlan;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::captions::{CaptionView, karaoke_caption_at};
use crate::scene::router::{route_results, route_setup, route_summary};
use crate::scene::typewriter::{typewriter_at, visible_prefix};
use crate::scene::view::SceneView;
use crate::timing::resolve::{FRAMES_PER_CHAR, TYPING_START};
use crate::timing::schedule::SceneKind;
use crate::timing::table::FPS;

/// What is on screen at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameView {
    pub frame: FrameIndex,
    pub scene: ActiveScene,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<CaptionView>,
}

/// The scene slot covering the frame and what it renders.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ActiveScene {
    pub kind: SceneKind,
    /// Frame offset inside the scene.
    pub local_frame: u64,
    /// `None` when the slot renders nothing (absent content, unnamed visual).
    pub view: Option<SceneView>,
}

pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(plan))]
    pub fn eval_frame(plan: &VideoPlan, frame: FrameIndex) -> ReelResult<FrameView> {
        plan.check_frame(frame.0)?;

        let scene = plan
            .schedule()
            .scene_at(frame, plan.duration())
            .ok_or_else(|| ReelError::evaluation(format!("no scene covers frame {}", frame.0)))?;
        let local_frame = frame.0 - scene.start.0;
        let view = scene_view(plan, scene.kind, local_frame);

        let caption = plan
            .config()
            .captions()
            .and_then(|captions| karaoke_caption_at(captions, frame, FPS, 0));

        Ok(FrameView {
            frame,
            scene: ActiveScene {
                kind: scene.kind,
                local_frame,
                view,
            },
            caption,
        })
    }
}

impl VideoPlan {
    /// Shorthand for [`Evaluator::eval_frame`].
    pub fn eval_frame(&self, frame: FrameIndex) -> ReelResult<FrameView> {
        Evaluator::eval_frame(self, frame)
    }
}

fn scene_view(plan: &VideoPlan, kind: SceneKind, local_frame: u64) -> Option<SceneView> {
    if !plan.has_content(kind) {
        return None;
    }
    let cfg = plan.config();
    match kind {
        SceneKind::Hook => Some(SceneView::Hook {
            hook_text: cfg.hook_text.clone(),
            server_name: cfg.server_name.clone(),
        }),
        SceneKind::PlugAndPlay => Some(SceneView::PlugAndPlay {
            badge_line: cfg.badge_line.clone(),
        }),
        SceneKind::Setup => Some(route_setup(&cfg.setup)),
        SceneKind::Explainer => Some(SceneView::Explainer {
            lines: cfg.explainer_lines().to_vec(),
            title: None,
        }),
        SceneKind::LetsPlay => Some(SceneView::LetsPlay),
        SceneKind::Prompt => {
            let typed = typewriter_at(&cfg.prompt_text, local_frame, TYPING_START, FRAMES_PER_CHAR);
            Some(SceneView::Prompt {
                prompt_text: cfg.prompt_text.clone(),
                visible_text: visible_prefix(&cfg.prompt_text, typed.visible_units).to_owned(),
                typing_complete: typed.complete,
            })
        }
        SceneKind::Results => route_results(&cfg.results, plan.results_visuals()),
        SceneKind::Summary => route_summary(cfg.summary(), plan.summary_visuals()),
        SceneKind::End => Some(SceneView::End {
            docs_url: cfg.docs_url.clone(),
            tutorial_title: cfg.tutorial_title.clone(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
