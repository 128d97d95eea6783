use super::*;

#[test]
fn portfolio_preset_matches_editor_listing() {
    let script = ScriptPreset::Portfolio.script();
    assert_eq!(script.title, "Portfolio.php");
    assert_eq!(script.len(), 43);
    assert_eq!(script.lines[0], ScriptLine::new("<?php", ColorTag::Keyword));
    assert_eq!(script.lines[3].text, "namespace App\\Models;");
    assert_eq!(script.lines[5].color, ColorTag::Class);
}

#[test]
fn sparta_preset_repeats_its_block() {
    let script = ScriptPreset::Sparta.script();
    assert_eq!(script.len(), 46);
    assert_eq!(script.lines[..23], script.lines[23..]);
    assert_eq!(script.lines[8].text, "  while (path.length > 0) {");
}

#[test]
fn total_chars_counts_scalar_values() {
    let script = Script::new(
        "x",
        vec![
            ScriptLine::new("abc", ColorTag::Text),
            ScriptLine::new("", ColorTag::Text),
            ScriptLine::new("héllo", ColorTag::String),
        ],
    );
    assert_eq!(script.total_chars(), 8);
    assert!(!script.is_empty());
}

#[test]
fn palette_resolves_tags_and_accepts_partial_overrides() {
    let p: Palette = serde_json::from_value(serde_json::json!({ "keyword": "#ff0000" })).unwrap();
    assert_eq!(p.color(ColorTag::Keyword), Rgba8::rgb(255, 0, 0));
    assert_eq!(p.color(ColorTag::Comment), Palette::default().comment);
    assert_eq!(p.background, Rgba8::rgb(0x0f, 0x17, 0x2a));
}
