//! Host-config presets and enum values through serde.

#![cfg(feature = "serde")]

use cardfit::{FitAxis, HorizontalAlignment, ImageSizes, ImageStyle, Size, SizeMode};

#[test]
fn image_sizes_from_host_config() {
    let sizes: ImageSizes =
        serde_json::from_str(r#"{ "small": 32, "medium": 64, "large": 128 }"#).unwrap();
    assert_eq!(sizes, ImageSizes::new(32, 64, 128));
    assert_eq!(sizes.min, ImageSizes::DEFAULT_MIN);
}

#[test]
fn missing_presets_fall_back_to_defaults() {
    let sizes: ImageSizes = serde_json::from_str(r#"{ "large": 200 }"#).unwrap();
    assert_eq!(sizes.small, ImageSizes::DEFAULT_SMALL);
    assert_eq!(sizes.medium, ImageSizes::DEFAULT_MEDIUM);
    assert_eq!(sizes.large, 200);
}

#[test]
fn enums_use_lowercase_names() {
    assert_eq!(serde_json::to_string(&SizeMode::Medium).unwrap(), r#""medium""#);
    assert_eq!(
        serde_json::from_str::<SizeMode>(r#""stretch""#).unwrap(),
        SizeMode::Stretch
    );
    assert_eq!(
        serde_json::from_str::<ImageStyle>(r#""person""#).unwrap(),
        ImageStyle::Person
    );
    assert_eq!(
        serde_json::from_str::<HorizontalAlignment>(r#""right""#).unwrap(),
        HorizontalAlignment::Right
    );
    assert_eq!(serde_json::to_string(&FitAxis::Height).unwrap(), r#""height""#);
}

#[test]
fn size_serializes_as_object() {
    let json = serde_json::to_value(Size::new(100, 50)).unwrap();
    assert_eq!(json, serde_json::json!({ "width": 100, "height": 50 }));
}
