use std::path::Path;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{FolioError, FolioResult};
use crate::render::backend::{FrameRGBA, Rasterizer};
use crate::render::scene::{DrawOp, MonospaceEstimate, Scene, TextAlign, TextMeasure};
use crate::render::text::TextLayoutEngine;

struct LoadedFont {
    engine: TextLayoutEngine,
    data: vello_cpu::peniko::FontData,
}

/// CPU rasterizer powered by `vello_cpu`, with optional Parley-shaped text.
///
/// Without a font, text runs are skipped (a warning is logged once) and measurement falls back to
/// [`MonospaceEstimate`].
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    font: Option<LoadedFont>,
    fallback: MonospaceEstimate,
    warned_missing_font: bool,
}

impl Default for CpuRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRasterizer {
    /// Rasterizer without a font.
    pub fn new() -> Self {
        Self {
            ctx: None,
            font: None,
            fallback: MonospaceEstimate::default(),
            warned_missing_font: false,
        }
    }

    /// Rasterizer drawing text with the given TTF/OTF bytes.
    pub fn with_font_bytes(font_bytes: Vec<u8>) -> FolioResult<Self> {
        let engine = TextLayoutEngine::new(&font_bytes)?;
        tracing::debug!(family = engine.family(), "registered code font");
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font: Some(LoadedFont { engine, data }),
            ..Self::new()
        })
    }

    /// Rasterizer drawing text with the font at `path`.
    pub fn with_font_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            FolioError::config(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::with_font_bytes(bytes)
    }

    /// Whether a font is loaded.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> FolioResult<R>,
    ) -> FolioResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        origin: kurbo::Point,
        text: &str,
        color: Rgba8,
        font_size: f64,
        align: TextAlign,
    ) {
        let Some(font) = self.font.as_mut() else {
            if !self.warned_missing_font {
                tracing::warn!("no font loaded, text is not drawn");
                self.warned_missing_font = true;
            }
            return;
        };

        let layout = font
            .engine
            .layout_line(text, font_size as f32, color.to_array());
        let x = match align {
            TextAlign::Left => origin.x,
            TextAlign::Right => origin.x - f64::from(layout.full_width()),
        };

        for line in layout.lines() {
            let dy = origin.y - f64::from(line.metrics().baseline);
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, dy)));
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let [r, g, b, a] = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font.data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }
}

impl TextMeasure for CpuRasterizer {
    fn measure(&mut self, text: &str, font_size: f64) -> f64 {
        match self.font.as_mut() {
            Some(font) => font.engine.measure(text, font_size as f32),
            None => self.fallback.measure(text, font_size),
        }
    }
}

impl Rasterizer for CpuRasterizer {
    fn rasterize(&mut self, scene: &Scene) -> FolioResult<Option<FrameRGBA>> {
        if scene.size.is_empty() {
            return Ok(None);
        }
        let width = u16::try_from(scene.size.width)
            .map_err(|_| FolioError::render("surface width exceeds u16"))?;
        let height = u16::try_from(scene.size.height)
            .map_err(|_| FolioError::render("surface height exceeds u16"))?;

        let data = self.with_ctx_mut(width, height, |this, ctx| {
            for op in &scene.ops {
                match op {
                    DrawOp::FillRect { rect, color } => {
                        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            color.r, color.g, color.b, color.a,
                        ));
                        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                            rect.x0, rect.y0, rect.x1, rect.y1,
                        ));
                    }
                    DrawOp::Text {
                        origin,
                        text,
                        color,
                        font_size,
                        align,
                    } => this.draw_text(ctx, *origin, text, *color, *font_size, *align),
                }
            }

            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap.data_as_u8_slice().to_vec())
        })?;

        Ok(Some(FrameRGBA {
            width: scene.size.width,
            height: scene.size.height,
            data,
            premultiplied: true,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
