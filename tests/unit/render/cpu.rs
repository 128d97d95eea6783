use super::*;
use crate::foundation::core::{Point, Rect, SurfaceSize};

#[test]
fn empty_surface_is_not_ready() {
    let mut r = CpuRasterizer::new();
    let scene = Scene::new(SurfaceSize::new(0, 120));
    assert!(r.rasterize(&scene).unwrap().is_none());
}

#[test]
fn fills_rects_in_paint_order() {
    let mut r = CpuRasterizer::new();
    let mut scene = Scene::new(SurfaceSize::new(8, 4));
    scene.fill_rect(Rect::new(0.0, 0.0, 8.0, 4.0), Rgba8::rgb(10, 20, 30));
    scene.fill_rect(Rect::new(4.0, 0.0, 8.0, 4.0), Rgba8::rgb(200, 100, 50));

    let frame = r.rasterize(&scene).unwrap().unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(1, 1), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(6, 2), Some([200, 100, 50, 255]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn text_without_font_is_skipped() {
    let mut r = CpuRasterizer::new();
    assert!(!r.has_font());
    let mut scene = Scene::new(SurfaceSize::new(16, 16));
    scene.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Rgba8::rgb(0, 0, 0));
    scene.text(
        Point::new(0.0, 12.0),
        "abc",
        Rgba8::rgb(255, 255, 255),
        12.0,
        TextAlign::Left,
    );
    let frame = r.rasterize(&scene).unwrap().unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn surface_resize_reallocates_context() {
    let mut r = CpuRasterizer::new();
    let a = r.rasterize(&Scene::new(SurfaceSize::new(4, 4))).unwrap().unwrap();
    let b = r.rasterize(&Scene::new(SurfaceSize::new(6, 2))).unwrap().unwrap();
    assert_eq!(a.data.len(), 64);
    assert_eq!(b.data.len(), 48);
}

#[test]
fn oversized_surface_is_a_render_error() {
    let mut r = CpuRasterizer::new();
    let err = r
        .rasterize(&Scene::new(SurfaceSize::new(70_000, 1)))
        .unwrap_err();
    assert!(err.to_string().starts_with("render error:"));
}

#[test]
fn measurement_falls_back_to_monospace() {
    let mut r = CpuRasterizer::new();
    assert!((r.measure("four", 10.0) - 24.0).abs() < 1e-9);
}

#[test]
fn garbage_font_bytes_are_rejected() {
    assert!(CpuRasterizer::with_font_bytes(vec![1, 2, 3, 4]).is_err());
}
