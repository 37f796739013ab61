use turntable_core::color::{ColorOption, Rgb8};
use turntable_core::config::ViewerConfig;
use turntable_core::consts::{DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENT_LOADS, DEFAULT_TOTAL_FRAMES};
use turntable_core::error::TurntableError;
use turntable_core::probe::ProbeMode;
use turntable_core::viewer::FrameViewer;

const PRODUCT_TOML: &str = r##"
product_id = "city-hatch"

[[colors]]
id = "sand"
name = "Desert Sand"
hex = "#d8c3a5"
background = "#f5f0e8"

[[colors]]
id = "night"
name = "Night Blue"
hex = "#1d3557"
frames = [12, 0, 6]
"##;

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_parse_applies_defaults() {
    let config = ViewerConfig::from_toml_str(PRODUCT_TOML).unwrap();
    assert_eq!(config.product_id, "city-hatch");
    assert_eq!(config.total_frames, DEFAULT_TOTAL_FRAMES);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.max_concurrent_loads, DEFAULT_MAX_CONCURRENT_LOADS);
    assert_eq!(config.colors.len(), 2);
    assert_eq!(config.colors[0].frames, None);
    assert_eq!(config.colors[1].frames, Some(vec![12, 0, 6]));
}

#[test]
fn test_default_total_frames_is_24() {
    assert_eq!(DEFAULT_TOTAL_FRAMES, 24);
    let config = ViewerConfig::from_toml_str(PRODUCT_TOML).unwrap();
    assert_eq!(
        ProbeMode::for_color(&config.colors[0], config.total_frames),
        ProbeMode::AutoDetect { total_frames: 24 }
    );
}

#[test]
fn test_toml_roundtrip_of_example() {
    let example = ViewerConfig::example();
    let text = example.to_toml_string().unwrap();
    let parsed = ViewerConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, example);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("product.toml");
    std::fs::write(&path, PRODUCT_TOML).unwrap();
    let config = ViewerConfig::load(&path).unwrap();
    assert_eq!(config.color_index("night").unwrap(), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = ViewerConfig::load(std::path::Path::new("/nonexistent/product.toml")).unwrap_err();
    assert!(matches!(err, TurntableError::Io(_)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let err = ViewerConfig::from_toml_str("product_id = ").unwrap_err();
    assert!(matches!(err, TurntableError::Config(_)));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_no_colors_rejected() {
    let config = ViewerConfig::new("p", vec![]);
    assert!(matches!(config.validate(), Err(TurntableError::NoColors)));
    assert!(matches!(FrameViewer::new(&config), Err(TurntableError::NoColors)));
}

#[test]
fn test_zero_total_frames_rejected() {
    let config = ViewerConfig::new("p", vec![ColorOption::new("a", "A", "#000")]).with_total_frames(0);
    assert!(matches!(
        config.validate(),
        Err(TurntableError::InvalidFrameCount(0))
    ));
}

#[test]
fn test_drag_sensitivity_must_be_finite_and_positive() {
    for value in ["0.0", "-0.5", "inf", "nan"] {
        let text = format!("drag_sensitivity = {value}\n{PRODUCT_TOML}");
        assert!(
            matches!(
                ViewerConfig::from_toml_str(&text),
                Err(TurntableError::InvalidDragSensitivity(_))
            ),
            "{value} should be rejected"
        );
    }

    let text = format!("drag_sensitivity = 0.25\n{PRODUCT_TOML}");
    assert_eq!(ViewerConfig::from_toml_str(&text).unwrap().drag_sensitivity, 0.25);
}

#[test]
fn test_bad_swatch_rejected() {
    let config = ViewerConfig::new("p", vec![ColorOption::new("a", "A", "teal")]);
    assert!(matches!(
        config.validate(),
        Err(TurntableError::InvalidColor(_))
    ));
}

#[test]
fn test_unknown_color_lookup() {
    let config = ViewerConfig::example();
    assert!(matches!(
        config.color_index("purple"),
        Err(TurntableError::UnknownColor(_))
    ));
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[test]
fn test_parse_long_hex() {
    let c = Rgb8::parse_hex("#1D3557").unwrap();
    assert_eq!(c, Rgb8 { r: 0x1d, g: 0x35, b: 0x57 });
    assert_eq!(c.to_string(), "#1d3557");
}

#[test]
fn test_parse_short_hex() {
    assert_eq!(
        Rgb8::parse_hex("#fa0").unwrap(),
        Rgb8 { r: 0xff, g: 0xaa, b: 0x00 }
    );
    assert_eq!(Rgb8::parse_hex("000").unwrap(), Rgb8::default());
}

#[test]
fn test_parse_invalid_hex() {
    for bad in ["", "#12", "#12345", "#gg0000", "#ééé", "#+f+f+f", "+1+"] {
        assert!(Rgb8::parse_hex(bad).is_err(), "{bad} should fail");
    }
}

#[test]
fn test_backdrop_optional() {
    let plain = ColorOption::new("a", "A", "#fff");
    assert_eq!(plain.backdrop().unwrap(), None);
    let with_bg = plain.with_background("#000000");
    assert_eq!(with_bg.backdrop().unwrap(), Some(Rgb8::default()));
}

#[test]
fn test_luminance_extremes() {
    assert_eq!(Rgb8::default().luminance(), 0.0);
    assert!((Rgb8::parse_hex("#ffffff").unwrap().luminance() - 1.0).abs() < 1e-4);
}
