use super::*;

#[test]
fn empty_object_gives_defaults() {
    let cfg = ExportConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ExportConfig::default());
    cfg.validate().unwrap();
}

#[test]
fn fields_parse_with_hex_colour() {
    let cfg = ExportConfig::from_json_str(
        r##"{"ticks": 8, "tick_ms": 40, "scale": 0.5, "method": "area_averaging",
            "width": 64, "background": "#102030", "alpha_mode": false}"##,
    )
    .unwrap();
    assert_eq!(cfg.ticks, 8);
    assert_eq!(cfg.tick_ms, 40);
    assert_eq!(cfg.method, InterpolationMethod::AreaAveraging);
    assert_eq!(cfg.width, Some(64));
    assert_eq!(cfg.height, None);
    assert_eq!(cfg.background, Color::rgb(0x10, 0x20, 0x30));
    assert!(!cfg.alpha_mode);
    cfg.validate().unwrap();
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ExportConfig::from_json_str(r#"{"fps": 30}"#).unwrap_err();
    assert!(matches!(err, SpriteError::Validation(_)));
}

#[test]
fn validation_catches_bad_ranges() {
    let bad = [
        ExportConfig {
            scale: 0.0,
            ..ExportConfig::default()
        },
        ExportConfig {
            scale: f32::NAN,
            ..ExportConfig::default()
        },
        ExportConfig {
            ticks: 2,
            tick_ms: 0,
            ..ExportConfig::default()
        },
        ExportConfig {
            width: Some(0),
            ..ExportConfig::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
}

#[test]
fn load_reports_missing_file() {
    let err = ExportConfig::load("/definitely/missing/export.json").unwrap_err();
    assert!(err.to_string().contains("open export config"));
}
