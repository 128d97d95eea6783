use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#0f172a").unwrap(), Rgba8::rgb(15, 23, 42));
    assert_eq!(
        Rgba8::from_hex("4F46E580").unwrap(),
        Rgba8::rgba(79, 70, 229, 128)
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
    assert!(Rgba8::from_hex("#+f+f+f").is_err());
    assert!(Rgba8::from_hex("-1ff00ff").is_err());
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_value(json!("#8b5cf6")).unwrap();
    assert_eq!(c, Rgba8::rgb(0x8b, 0x5c, 0xf6));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#8b5cf6"));

    let translucent = Rgba8::rgba(1, 2, 3, 4);
    assert_eq!(serde_json::to_value(translucent).unwrap(), json!("#01020304"));
}

#[test]
fn with_opacity_scales_alpha_only() {
    let c = Rgba8::rgb(79, 70, 229).with_opacity(0.2);
    assert_eq!((c.r, c.g, c.b), (79, 70, 229));
    assert_eq!(c.a, 51);
    assert_eq!(Rgba8::rgb(1, 1, 1).with_opacity(7.0).a, 255);
}

#[test]
fn zero_sized_surface_is_empty() {
    assert!(SurfaceSize::new(0, 10).is_empty());
    assert!(SurfaceSize::new(10, 0).is_empty());
    assert!(!SurfaceSize::new(1, 1).is_empty());
}
