use crate::foundation::error::{FolioError, FolioResult};

/// RGBA8 brush carried through Parley layouts.
pub(crate) type TextBrush = [u8; 4];

/// Parley contexts plus the single registered code font.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
}

impl TextLayoutEngine {
    /// Register `font_bytes` and build an engine that lays out text in that family.
    pub(crate) fn new(font_bytes: &[u8]) -> FolioResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| FolioError::render("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FolioError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
        })
    }

    /// Registered family name.
    pub(crate) fn family(&self) -> &str {
        &self.family
    }

    /// Shape `text` as a single unbroken line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> parley::Layout<TextBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Advance width of `text` as a single line.
    pub(crate) fn measure(&mut self, text: &str, size_px: f32) -> f64 {
        if text.is_empty() || !size_px.is_finite() || size_px <= 0.0 {
            return 0.0;
        }
        f64::from(self.layout_line(text, size_px, [0, 0, 0, 255]).full_width())
    }
}
