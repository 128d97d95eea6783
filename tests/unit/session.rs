use super::*;
use crate::content::ScriptPreset;
use crate::encode::sink::InMemorySink;
use crate::render::cpu::CpuRasterizer;

fn session(width: f64, fps: u32) -> RecordSession<CpuRasterizer> {
    let anim = CodeEditorAnimation::from_preset(ScriptPreset::Portfolio, width).unwrap();
    RecordSession::new(anim, CpuRasterizer::new(), fps).unwrap()
}

#[test]
fn zero_fps_is_rejected() {
    let anim = CodeEditorAnimation::from_preset(ScriptPreset::Portfolio, 100.0).unwrap();
    assert!(RecordSession::new(anim, CpuRasterizer::new(), 0).is_err());
}

#[test]
fn advance_is_forward_only() {
    let mut s = session(100.0, 20);
    // 20 fps feeds exactly one reveal interval per frame.
    assert_eq!(s.advance_to(500.0).unwrap(), 10);
    assert_eq!(s.elapsed_ms(), 500.0);
    assert!(s.advance_to(100.0).is_err());
    assert!(s.advance_to(f64::NAN).is_err());
    assert_eq!(s.advance_to(500.0).unwrap(), 0);
}

#[test]
fn frame_at_offset_has_surface_size() {
    let mut s = session(100.0, 20);
    let frame = s.render_frame_at(250.0).unwrap().unwrap();
    assert_eq!((frame.width, frame.height), (100, 80));
    // Top-left pixel is the gutter color.
    assert_eq!(frame.pixel(0, 0), Some([0x0a, 0x0f, 0x1c, 255]));
}

#[test]
fn empty_surface_renders_nothing() {
    let mut s = session(0.0, 20);
    assert!(s.render_frame_at(100.0).unwrap().is_none());
    let mut sink = InMemorySink::new();
    assert!(s.render_range(100.0, &mut sink).is_err());
}

#[test]
fn range_pushes_one_frame_per_interval() {
    let mut s = session(100.0, 20);
    let mut sink = InMemorySink::new();
    let stats = s.render_range(300.0, &mut sink).unwrap();
    assert_eq!(stats.frames, 6);
    assert_eq!(stats.reveal_steps, 5);
    assert!(sink.is_ended());
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 100,
            height: 80,
            fps: 20
        })
    );
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);
}
