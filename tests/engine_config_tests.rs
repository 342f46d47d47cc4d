use oscillo_rs::api::ViewportEngineConfig;
use oscillo_rs::core::Viewport;
use oscillo_rs::lod::GridStyle;
use oscillo_rs::render::Color;

#[test]
fn config_round_trips_through_json() {
    let config = ViewportEngineConfig::new(Viewport::new(1500, 1000))
        .with_time_span(2.5)
        .with_channel_stroke_width(2.0)
        .with_palette(vec![Color::rgb(0.1, 0.2, 0.3), Color::rgb(0.4, 0.5, 0.6)]);

    let json = config.to_json_pretty().expect("serialize config");
    let parsed = ViewportEngineConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_field_defaults() {
    let parsed =
        ViewportEngineConfig::from_json_str(r#"{ "viewport": { "width": 640, "height": 480 } }"#)
            .expect("parse minimal config");

    assert_eq!(parsed.viewport, Viewport::new(640, 480));
    assert_eq!(parsed.time_span, 1.0);
    assert_eq!(parsed.channel_stroke_width, 3.0);
    assert_eq!(parsed.grid_style, GridStyle::default());
    assert!(parsed.palette_override.is_none());
}

#[test]
fn invalid_configs_are_rejected_by_validate() {
    let zero_viewport = ViewportEngineConfig::new(Viewport::new(0, 600));
    assert!(zero_viewport.validate().is_err());

    let bad_span = ViewportEngineConfig::new(Viewport::new(800, 600)).with_time_span(-1.0);
    assert!(bad_span.validate().is_err());

    let bad_stroke =
        ViewportEngineConfig::new(Viewport::new(800, 600)).with_channel_stroke_width(0.0);
    assert!(bad_stroke.validate().is_err());

    let empty_palette = ViewportEngineConfig::new(Viewport::new(800, 600)).with_palette(Vec::new());
    assert!(empty_palette.validate().is_err());

    let bad_color = ViewportEngineConfig::new(Viewport::new(800, 600))
        .with_palette(vec![Color::rgb(2.0, 0.0, 0.0)]);
    assert!(bad_color.validate().is_err());
}
