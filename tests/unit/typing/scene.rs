use super::*;
use crate::content::{ColorTag, ScriptLine};
use crate::render::scene::MonospaceEstimate;
use crate::typing::layout::EditorMetrics;
use crate::typing::state::CompletionMode;

fn script() -> Script {
    Script::new(
        "t.php",
        vec![
            ScriptLine::new("class A {", ColorTag::Keyword),
            ScriptLine::new("    $x = 1;", ColorTag::Variable),
            ScriptLine::new("}", ColorTag::Text),
        ],
    )
}

fn layout() -> EditorLayout {
    EditorLayout::fit(500.0, EditorMetrics::portfolio())
}

fn steps(cursor: &mut TypingCursor, script: &Script, n: usize) {
    for _ in 0..n {
        cursor.step(script, CompletionMode::Restart);
    }
}

#[test]
fn revealed_parts_strips_indentation() {
    assert_eq!(revealed_parts("    $x = 1;", 6, 4), (4, "$x"));
    assert_eq!(revealed_parts("    $x = 1;", 2, 4), (2, ""));
    assert_eq!(revealed_parts("abc", 10, 4), (0, "abc"));
    assert_eq!(revealed_parts("", 0, 4), (0, ""));
}

#[test]
fn empty_surface_builds_nothing() {
    let s = script();
    let l = EditorLayout::fit(0.0, EditorMetrics::portfolio());
    let scene = build_editor_scene(
        &s,
        &TypingCursor::new(),
        &l,
        &Palette::default(),
        &mut MonospaceEstimate::default(),
    );
    assert!(scene.is_none());
}

#[test]
fn initial_frame_has_background_gutter_number_and_caret() {
    let s = script();
    let p = Palette::default();
    let scene = build_editor_scene(
        &s,
        &TypingCursor::new(),
        &layout(),
        &p,
        &mut MonospaceEstimate::default(),
    )
    .unwrap();

    let rects: Vec<_> = scene.rects().collect();
    assert_eq!(rects[0], (Rect::new(0.0, 0.0, 500.0, 400.0), p.background));
    assert_eq!(rects[1], (Rect::new(0.0, 0.0, 30.0, 400.0), p.gutter));
    // Caret sits at the code start with nothing revealed.
    assert_eq!(rects[2], (Rect::new(40.0, 17.0, 42.0, 33.0), p.caret));

    let texts: Vec<_> = scene.texts().collect();
    assert_eq!(texts, vec![("1", Point::new(25.0, 30.0), p.line_number)]);
}

#[test]
fn partial_line_is_indented_and_caret_follows_text() {
    let s = script();
    let p = Palette::default();
    let mut c = TypingCursor::new();
    // Line 0 (9 chars) + line advance + 6 chars of line 1.
    steps(&mut c, &s, 9 + 1 + 6);
    assert_eq!((c.line(), c.char_index()), (1, 6));

    let scene =
        build_editor_scene(&s, &c, &layout(), &p, &mut MonospaceEstimate::default()).unwrap();
    let texts: Vec<_> = scene.texts().map(|(t, o, _)| (t, o)).collect();
    assert_eq!(
        texts,
        vec![
            ("1", Point::new(25.0, 30.0)),
            ("class A {", Point::new(40.0, 30.0)),
            ("2", Point::new(25.0, 46.0)),
            ("$x", Point::new(60.0, 46.0)),
        ]
    );

    let caret = scene.rects().last().unwrap();
    // 2 chars * 0.6 * 12px.
    assert!((caret.0.x0 - 74.4).abs() < 1e-9);
    assert_eq!(caret.1, p.caret);
}

#[test]
fn hidden_caret_is_not_drawn() {
    let s = script();
    let p = Palette::default();
    let mut c = TypingCursor::new();
    c.advance(
        &s,
        crate::typing::state::TypingTimings {
            char_interval_ms: 1e9,
            blink_interval_ms: 500.0,
        },
        CompletionMode::Restart,
        500.0,
    );
    assert!(!c.caret_visible());
    let scene =
        build_editor_scene(&s, &c, &layout(), &p, &mut MonospaceEstimate::default()).unwrap();
    assert_eq!(scene.rects().count(), 2);
}

#[test]
fn fully_revealed_script_draws_every_line_without_caret() {
    let s = script();
    let p = Palette::default();
    let mut c = TypingCursor::new();
    steps(&mut c, &s, s.total_chars() + s.len());
    assert!(c.is_fully_revealed(&s));

    let scene =
        build_editor_scene(&s, &c, &layout(), &p, &mut MonospaceEstimate::default()).unwrap();
    let code: Vec<_> = scene
        .texts()
        .filter(|(_, _, color)| *color != p.line_number)
        .map(|(t, _, _)| t)
        .collect();
    assert_eq!(code, vec!["class A {", "$x = 1;", "}"]);
    assert_eq!(scene.rects().count(), 2);
}

#[test]
fn sweep_highlight_band_spans_code_area() {
    let s = script();
    let p = Palette::default();
    let mode = CompletionMode::HighlightSweep { first_line: 1 };
    let mut c = TypingCursor::new();
    for _ in 0..(s.total_chars() + s.len() + 51) {
        c.step(&s, mode);
    }
    let scene =
        build_editor_scene(&s, &c, &layout(), &p, &mut MonospaceEstimate::default()).unwrap();
    let (rect, color) = scene.rects().nth(2).unwrap();
    assert_eq!(rect, Rect::new(30.0, 32.0, 500.0, 48.0));
    assert_eq!(color, p.highlight.with_opacity(0.5 * 0.2));
}

#[test]
fn lines_below_the_surface_are_culled() {
    let lines = (0..40)
        .map(|i| ScriptLine::new(format!("l{i}"), ColorTag::Text))
        .collect();
    let s = Script::new("long", lines);
    let mut c = TypingCursor::new();
    steps(&mut c, &s, s.total_chars() + s.len());
    let scene = build_editor_scene(
        &s,
        &c,
        &layout(),
        &Palette::default(),
        &mut MonospaceEstimate::default(),
    )
    .unwrap();
    // 25 visible lines, each a number plus code.
    assert_eq!(scene.texts().count(), 50);
}
