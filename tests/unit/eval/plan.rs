use super::*;
use crate::config::model::{ResultConfig, SetupConfig, SummaryConfig, TimingOverrides};

fn base() -> VideoConfig {
    VideoConfig {
        hook_text: "hook".to_owned(),
        server_name: "server".to_owned(),
        badge_line: "badge".to_owned(),
        setup: SetupConfig::Stdio {
            extension_name: "abc".to_owned(),
            extension_command: "run".to_owned(),
        },
        explainer_lines: None,
        prompt_text: "Hello".to_owned(),
        results: ResultConfig::Bullets {
            bullets: vec!["a".to_owned()],
        },
        closing_lines: None,
        summary: None,
        captions_data: None,
        audio_src: None,
        docs_url: "docs".to_owned(),
        tutorial_title: "title".to_owned(),
        timing_overrides: None,
    }
}

#[test]
fn plan_starts_at_content_total() {
    let plan = VideoPlan::new(base()).unwrap();
    assert_eq!(plan.duration(), plan.content_total());
    assert_eq!(plan.content_total(), plan.durations().total());
}

#[test]
fn with_duration_never_shrinks() {
    let plan = VideoPlan::new(base()).unwrap();
    let total = plan.content_total();
    assert_eq!(plan.clone().with_duration(10).duration(), total);
    assert_eq!(plan.with_duration(total + 50).duration(), total + 50);
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = base();
    cfg.results = ResultConfig::Recording {
        recording_path: "r.mp4".to_owned(),
        duration_in_seconds: Some(-1.0),
    };
    let err = VideoPlan::new(cfg).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn skipped_scenes_are_not_visible() {
    let plan = VideoPlan::new(base()).unwrap();
    let kinds: Vec<_> = plan.visible_scenes().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [
            SceneKind::Hook,
            SceneKind::PlugAndPlay,
            SceneKind::Setup,
            SceneKind::LetsPlay,
            SceneKind::Prompt,
            SceneKind::Results,
            SceneKind::End,
        ]
    );
}

#[test]
fn overridden_absent_explainer_holds_but_stays_invisible() {
    let mut cfg = base();
    cfg.timing_overrides = Some(TimingOverrides {
        explainer_duration: Some(40),
        ..TimingOverrides::default()
    });
    let plan = VideoPlan::new(cfg).unwrap();
    assert_eq!(plan.schedule().scene(SceneKind::Explainer).duration, 40);
    assert!(!plan.has_content(SceneKind::Explainer));
    assert!(
        plan.visible_scenes()
            .iter()
            .all(|s| s.kind != SceneKind::Explainer)
    );
}

#[test]
fn summary_and_explainer_visible_when_present() {
    let mut cfg = base();
    cfg.explainer_lines = Some(vec!["why".to_owned()]);
    cfg.summary = Some(SummaryConfig::Bullets {
        lines: vec!["done".to_owned()],
        title: None,
    });
    let plan = VideoPlan::new(cfg).unwrap();
    assert_eq!(plan.visible_scenes().len(), 9);
}

#[test]
fn end_render_range_follows_extended_duration() {
    let plan = VideoPlan::new(base()).unwrap();
    let total = plan.content_total();
    let plan = plan.with_duration(total + 100);
    let end = plan.render_range(SceneKind::End);
    assert_eq!(end.end.0, total + 100);
    assert_eq!(end.len_frames(), 160 + 100);
}

#[test]
fn frames_outside_duration_are_rejected() {
    let plan = VideoPlan::new(base()).unwrap();
    assert!(plan.check_frame(0).is_ok());
    assert!(plan.check_frame(plan.duration() - 1).is_ok());
    assert!(plan.check_frame(plan.duration()).is_err());
}
