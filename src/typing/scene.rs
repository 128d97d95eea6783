use crate::content::{Palette, Script};
use crate::foundation::core::{Point, Rect};
use crate::render::scene::{Scene, TextAlign, TextMeasure};
use crate::typing::layout::{EditorLayout, leading_whitespace};
use crate::typing::state::TypingCursor;

/// Alpha multiplier applied to the sweep highlight color at full opacity.
const HIGHLIGHT_ALPHA: f64 = 0.2;

/// Split the first `revealed` characters of `text` into leading-whitespace columns and the
/// drawable remainder.
pub(crate) fn revealed_parts(text: &str, revealed: usize, indent_unit: usize) -> (usize, &str) {
    let end = text
        .char_indices()
        .nth(revealed)
        .map_or(text.len(), |(i, _)| i);
    let prefix = &text[..end];
    let (columns, ws_chars) = leading_whitespace(prefix, indent_unit);
    let start = prefix
        .char_indices()
        .nth(ws_chars)
        .map_or(prefix.len(), |(i, _)| i);
    (columns, &prefix[start..])
}

/// Build the draw operations for the current animation state.
///
/// Returns `None` while the surface is empty. Drawing never moves the cursor.
pub fn build_editor_scene(
    script: &Script,
    cursor: &TypingCursor,
    layout: &EditorLayout,
    palette: &Palette,
    measure: &mut dyn TextMeasure,
) -> Option<Scene> {
    let size = layout.size();
    if size.is_empty() {
        return None;
    }
    let width = f64::from(size.width);
    let height = f64::from(size.height);
    let indent_unit = layout.metrics().indent_unit;
    let font_size = layout.font_size();
    let line_height = layout.line_height();

    let mut scene = Scene::new(size);
    scene.fill_rect(Rect::new(0.0, 0.0, width, height), palette.background);
    scene.fill_rect(
        Rect::new(0.0, 0.0, layout.gutter_width(), height),
        palette.gutter,
    );

    if let Some(h) = cursor.highlight() {
        let y = layout.highlight_y(h.line);
        scene.fill_rect(
            Rect::new(layout.gutter_width(), y, width, y + line_height),
            palette
                .highlight
                .with_opacity(h.opacity() * HIGHLIGHT_ALPHA),
        );
    }

    let last = cursor.line().min(script.len().saturating_sub(1));
    for (i, line) in script.lines.iter().enumerate().take(last + 1) {
        if !layout.is_line_visible(i) {
            break;
        }
        let baseline = layout.baseline(i);
        scene.text(
            Point::new(layout.line_number_right(), baseline),
            (i + 1).to_string(),
            palette.line_number,
            font_size,
            TextAlign::Right,
        );

        let current = i == cursor.line();
        let revealed = if current {
            cursor.char_index()
        } else {
            line.char_count()
        };
        let (columns, visible) = revealed_parts(&line.text, revealed, indent_unit);
        let x = layout.start_x() + layout.indent_offset(columns);
        scene.text(
            Point::new(x, baseline),
            visible,
            palette.color(line.color),
            font_size,
            TextAlign::Left,
        );

        if current && cursor.caret_visible() {
            let caret_x = x + measure.measure(visible, font_size);
            let caret_y = layout.caret_y(i);
            scene.fill_rect(
                Rect::new(
                    caret_x,
                    caret_y,
                    caret_x + layout.caret_width(),
                    caret_y + line_height,
                ),
                palette.caret,
            );
        }
    }

    Some(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/typing/scene.rs"]
mod tests;
