use super::*;
use crate::foundation::core::SurfaceSize;
use crate::render::scene::MonospaceEstimate;
use crate::typing::state::TypingPhase;

#[test]
fn presets_pick_matching_completion_and_geometry() {
    let p = EditorOptions::for_preset(ScriptPreset::Portfolio);
    assert_eq!(p.completion, CompletionMode::Restart);
    assert_eq!(p.metrics.indent_unit, 4);

    let s = EditorOptions::for_preset(ScriptPreset::Sparta);
    assert_eq!(s.completion, CompletionMode::HighlightSweep { first_line: 8 });
    assert_eq!(s.metrics.indent_unit, 2);
    assert!(
        ScriptPreset::Sparta.script().lines[8]
            .text
            .trim_start()
            .starts_with("while")
    );
}

#[test]
fn resize_never_moves_progress() {
    let mut a = CodeEditorAnimation::from_preset(ScriptPreset::Portfolio, 500.0).unwrap();
    for _ in 0..37 {
        a.advance(50.0);
    }
    let before = a.cursor().clone();

    for w in [320.0, 0.0, 1000.0, 499.5] {
        a.resize(w);
        assert_eq!(a.cursor(), &before);
    }
    assert_eq!(a.layout().size(), SurfaceSize::new(499, 399));
}

#[test]
fn scene_is_none_until_sized() {
    let mut a = CodeEditorAnimation::from_preset(ScriptPreset::Portfolio, 0.0).unwrap();
    assert!(a.scene(&mut MonospaceEstimate::default()).is_none());
    a.resize(400.0);
    let scene = a.scene(&mut MonospaceEstimate::default()).unwrap();
    assert_eq!(scene.size, SurfaceSize::new(400, 320));
}

#[test]
fn full_loop_returns_to_start() {
    let mut a = CodeEditorAnimation::from_preset(ScriptPreset::Portfolio, 500.0).unwrap();
    let steps = a.script().total_chars() + a.script().len();
    for _ in 0..steps {
        assert!(a.advance(50.0));
    }
    assert_eq!(a.cursor().phase(a.script()), TypingPhase::Revealed);
    a.advance(50.0);
    assert_eq!((a.cursor().line(), a.cursor().char_index()), (0, 0));
    assert_eq!(a.cursor().completed_loops(), 1);
}

#[test]
fn invalid_options_are_rejected() {
    let mut o = EditorOptions::default();
    o.timings.char_interval_ms = 0.0;
    assert!(CodeEditorAnimation::new(ScriptPreset::Portfolio.script(), o, 500.0).is_err());

    let mut o = EditorOptions::default();
    o.timings.blink_interval_ms = f64::NAN;
    assert!(o.validate().is_err());
}
