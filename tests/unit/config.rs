use super::*;
use crate::tracker::SectionMeasure;

fn parse(v: serde_json::Value) -> FolioConfig {
    FolioConfig::from_reader(v.to_string().as_bytes()).unwrap()
}

#[test]
fn empty_object_reproduces_the_site() {
    let cfg = parse(serde_json::json!({}));
    cfg.validate().unwrap();
    assert_eq!(cfg.sections(), default_sections());
    assert_eq!(cfg.script(), ScriptPreset::Portfolio.script());
    assert_eq!(cfg.editor_options(), EditorOptions::default());

    let doc = cfg.document();
    assert_eq!(doc.len(), 7);
    assert_eq!(doc.extent("about"), Some(SectionExtent::new(1000.0, 2000.0)));
}

#[test]
fn sections_stack_when_positions_are_missing() {
    let cfg = parse(serde_json::json!({
        "sections": [
            { "id": "hero" },
            { "id": "about", "label": "About me", "bottom": 1800.0 },
            { "id": "projects", "top": 2000.0, "mounted": false },
            { "id": "medium" }
        ]
    }));
    cfg.validate().unwrap();

    let sections = cfg.sections();
    assert_eq!(sections[0].label, "hero");
    assert_eq!(sections[1].label, "About me");

    let doc = cfg.document();
    assert_eq!(doc.extent("hero"), Some(SectionExtent::new(0.0, 1000.0)));
    assert_eq!(doc.extent("about"), Some(SectionExtent::new(1000.0, 1800.0)));
    assert_eq!(doc.extent("projects"), None);
    assert_eq!(doc.extent("medium"), Some(SectionExtent::new(3000.0, 4000.0)));
}

#[test]
fn editor_overrides_apply_on_top_of_the_preset() {
    let cfg = parse(serde_json::json!({
        "editor": {
            "preset": "sparta",
            "timings": { "char_interval_ms": 20.0 },
            "indent_unit": 4,
            "palette": { "caret": "#ff0000" },
            "container_width": 150.0
        }
    }));
    cfg.validate().unwrap();
    let opts = cfg.editor_options();
    assert_eq!(opts.timings.char_interval_ms, 20.0);
    assert_eq!(opts.timings.blink_interval_ms, 500.0);
    assert_eq!(opts.metrics.indent_unit, 4);
    assert_eq!(opts.metrics.max_width, 300.0);
    assert_eq!(opts.completion, CompletionMode::HighlightSweep { first_line: 8 });
    assert_eq!(opts.palette.caret, crate::foundation::core::Rgba8::rgb(255, 0, 0));

    let anim = cfg.animation().unwrap();
    assert_eq!(anim.layout().size().width, 150);
    assert_eq!(anim.script().title, "sparta-algorithm.js");
}

#[test]
fn custom_lines_replace_the_script() {
    let cfg = parse(serde_json::json!({
        "editor": {
            "title": "main.rs",
            "lines": [
                { "text": "fn main() {", "color": "function" },
                { "text": "}", "color": "text" }
            ],
            "completion": { "mode": "restart" }
        }
    }));
    cfg.validate().unwrap();
    let script = cfg.script();
    assert_eq!(script.title, "main.rs");
    assert_eq!(script.len(), 2);
}

#[test]
fn validation_errors_are_config_errors() {
    let bad = [
        serde_json::json!({ "viewport": { "width": 0.0 } }),
        serde_json::json!({ "sections": [{ "id": "a" }, { "id": "a" }] }),
        serde_json::json!({ "sections": [{ "id": " " }] }),
        serde_json::json!({ "sections": [{ "id": "a", "top": 10.0, "bottom": 5.0 }] }),
        serde_json::json!({ "editor": { "lines": [] } }),
        serde_json::json!({ "editor": { "timings": { "blink_interval_ms": -1.0 } } }),
        serde_json::json!({ "editor": { "indent_unit": 0 } }),
        serde_json::json!({ "scroll": { "duration_ms": -5.0 } }),
    ];
    for v in bad {
        let cfg = parse(v.clone());
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().starts_with("config error:"), "{v}: {err}");
    }
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = FolioConfig::from_reader("{ \"viewport\": ".as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("config error:"));
    let err = FolioConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open config JSON"));
}
