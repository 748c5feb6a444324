//! Scene timing and sequencing for short scripted explainer videos.
//!
//! A video is described by one [`VideoConfig`]. From it the crate:
//!
//! - resolves the length of each of the nine fixed scenes ([`resolve_scene_durations`])
//! - lays them end to end ([`Schedule`])
//! - stretches the total to cover a longer voiceover ([`reconcile_duration`])
//! - registers the result with the host ([`register_composition`])
//! - answers "what is on screen at frame N" ([`VideoPlan::eval_frame`])
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod audio;
pub(crate) mod composition;
pub(crate) mod config;
pub(crate) mod eval;
pub(crate) mod scene;
pub(crate) mod timing;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::audio::probe::{AudioProbe, FfprobeAudioProbe, NoAudioProbe};
pub use crate::audio::reconcile::{AudioOutcome, Reconciled, reconcile_duration};
pub use crate::composition::registration::{
    CompositionRegistration, CompositionRegistry, content_duration, register_composition,
    validate_composition_id,
};
pub use crate::config::model::{
    Caption, NameValuePair, ResultConfig, SetupConfig, SummaryConfig, TimingOverrides,
    VideoConfig, Word,
};
pub use crate::eval::evaluator::{ActiveScene, Evaluator, FrameView};
pub use crate::eval::plan::VideoPlan;
pub use crate::scene::captions::{CaptionView, CaptionWordView, karaoke_caption_at};
pub use crate::scene::registry::{VisualFactory, VisualProps, VisualRegistry};
pub use crate::scene::router::{route_results, route_setup, route_summary};
pub use crate::scene::view::SceneView;
pub use crate::timing::explainer::compute_explainer_duration;
pub use crate::timing::resolve::{
    RECORDING_PAD, SceneDurations, compute_prompt_duration, resolve_scene_durations,
};
pub use crate::timing::schedule::{SceneKind, Schedule, ScheduledScene};
pub use crate::timing::setup::{FLOOR_DURATION, compute_setup_duration};
pub use crate::timing::table::{CANVAS, FPS, TIMING, TimingTable};
