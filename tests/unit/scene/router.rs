use super::*;
use crate::config::model::NameValuePair;

#[test]
fn setup_router_covers_every_variant() {
    let cases = [
        (
            SetupConfig::Builtin {
                extension_name: "Developer".to_owned(),
                extension_description: "shell + editor".to_owned(),
            },
            "setup_built_in",
        ),
        (
            SetupConfig::Stdio {
                extension_name: "x".to_owned(),
                extension_command: "run".to_owned(),
            },
            "setup_stdio",
        ),
        (
            SetupConfig::StdioWithEnv {
                extension_name: "x".to_owned(),
                extension_command: "run".to_owned(),
                env_vars: vec![NameValuePair {
                    name: "TOKEN".to_owned(),
                    value: "abc".to_owned(),
                }],
            },
            "setup_stdio_with_env",
        ),
        (
            SetupConfig::Http {
                extension_name: "x".to_owned(),
                endpoint: "https://e".to_owned(),
            },
            "setup_http",
        ),
        (
            SetupConfig::HttpWithHeaders {
                extension_name: "x".to_owned(),
                endpoint: "https://e".to_owned(),
                request_headers: vec![],
            },
            "setup_http_with_headers",
        ),
    ];
    for (setup, component) in cases {
        let view = serde_json::to_value(route_setup(&setup)).unwrap();
        assert_eq!(view["component"], component);
        assert_eq!(view["extension_name"], setup.extension_name());
    }
}

#[test]
fn results_router_dispatches() {
    let reg = VisualRegistry::results();

    let recording = ResultConfig::Recording {
        recording_path: "videos/demo/results.mp4".to_owned(),
        duration_in_seconds: Some(3.0),
    };
    assert_eq!(
        route_results(&recording, &reg),
        Some(SceneView::Recording {
            recording_path: "videos/demo/results.mp4".to_owned()
        })
    );

    let bullets = ResultConfig::Bullets {
        bullets: vec!["a".to_owned(), "b".to_owned()],
    };
    assert_eq!(
        route_results(&bullets, &reg),
        Some(SceneView::Explainer {
            lines: vec!["a".to_owned(), "b".to_owned()],
            title: None,
        })
    );

    let visual = ResultConfig::Visuals {
        description: Some("council votes".to_owned()),
        component_name: Some("DemoScene".to_owned()),
    };
    assert_eq!(
        route_results(&visual, &reg),
        Some(SceneView::Visual {
            name: "DemoScene",
            description: Some("council votes".to_owned()),
        })
    );
}

#[test]
fn results_without_component_name_render_nothing() {
    let reg = VisualRegistry::results();
    let visual = ResultConfig::Visuals {
        description: Some("something".to_owned()),
        component_name: None,
    };
    assert_eq!(route_results(&visual, &reg), None);
}

#[test]
fn unknown_results_visual_degrades_to_placeholder() {
    let reg = VisualRegistry::results();
    let visual = ResultConfig::Visuals {
        description: None,
        component_name: Some("MissingScene".to_owned()),
    };
    let view = route_results(&visual, &reg).unwrap();
    assert!(view.is_placeholder());
    let SceneView::Placeholder { title, .. } = view else {
        unreachable!()
    };
    assert_eq!(title, "Unknown results visuals component: MissingScene");
}

#[test]
fn summary_router_dispatches() {
    let reg = VisualRegistry::summary();
    assert_eq!(route_summary(&SummaryConfig::None, &reg), None);

    let bullets = SummaryConfig::Bullets {
        lines: vec!["done".to_owned()],
        title: Some("Recap".to_owned()),
    };
    assert_eq!(
        route_summary(&bullets, &reg),
        Some(SceneView::Explainer {
            lines: vec!["done".to_owned()],
            title: Some("Recap".to_owned()),
        })
    );

    let visual = SummaryConfig::Visuals {
        component_name: Some("GitMCPSummaryScene".to_owned()),
        description: None,
    };
    assert_eq!(
        route_summary(&visual, &reg),
        Some(SceneView::Visual {
            name: "GitMCPSummaryScene",
            description: None,
        })
    );
}

#[test]
fn summary_visual_problems_become_placeholders() {
    let reg = VisualRegistry::summary();

    let missing = SummaryConfig::Visuals {
        component_name: None,
        description: Some("why it matters".to_owned()),
    };
    match route_summary(&missing, &reg) {
        Some(SceneView::Placeholder {
            title, description, ..
        }) => {
            assert_eq!(title, "Missing summary.componentName");
            assert_eq!(description.as_deref(), Some("why it matters"));
        }
        other => panic!("expected placeholder, got {other:?}"),
    }

    let unknown = SummaryConfig::Visuals {
        component_name: Some("DemoScene".to_owned()),
        description: None,
    };
    match route_summary(&unknown, &reg) {
        Some(SceneView::Placeholder { title, .. }) => {
            assert_eq!(title, "Unknown summary visuals component: DemoScene");
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
}
