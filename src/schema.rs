//! Adaptive Card `Image` element properties.
//!
//! Parses `(key, value)` property pairs, such as the flattened JSON members
//! of an `Image` element, into an [`ImageElement`]. Problems never abort the
//! parse; they come back as [`ParseWarning`]s and the property keeps its
//! default.
//!
//! # Example
//!
//! ```
//! use cardfit::{ImageStyle, SizeMode, parse_image};
//!
//! let result = parse_image([
//!     ("type", "Image"),
//!     ("url", "https://example.com/avatar.png"),
//!     ("size", "Small"),
//!     ("style", "person"),
//! ]);
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.image.size, SizeMode::Small);
//! assert_eq!(result.image.style, ImageStyle::Person);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::fit::{FitAxis, ImageFit, ImageSizes, SizeMode};
use crate::measure::FitTracker;
use crate::present::{HorizontalAlignment, ImageProps, ImageStyle, RenderPlan};

/// Schema keys that carry no sizing information. Accepted without warnings.
/// Sorted for binary search.
const KNOWN_EXTRAS: &[&str] = &[
    "backgroundcolor",
    "fallback",
    "height",
    "id",
    "isvisible",
    "requires",
    "selectaction",
    "separator",
    "spacing",
    "type",
    "width",
];

/// A string did not name any variant of an enumeration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} value {value:?}")]
pub struct ParseEnumError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

fn parse_variant<T: Copy>(
    kind: &'static str,
    table: &[(&str, T)],
    s: &str,
) -> Result<T, ParseEnumError> {
    let s = s.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|&(_, v)| v)
        .ok_or_else(|| ParseEnumError {
            kind,
            value: String::from(s),
        })
}

impl FromStr for SizeMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(
            "size",
            &[
                ("auto", Self::Auto),
                ("stretch", Self::Stretch),
                ("small", Self::Small),
                ("medium", Self::Medium),
                ("large", Self::Large),
            ],
            s,
        )
    }
}

impl FromStr for FitAxis {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("fit axis", &[("width", Self::Width), ("height", Self::Height)], s)
    }
}

impl FromStr for ImageStyle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(
            "image style",
            &[("default", Self::Default), ("person", Self::Person)],
            s,
        )
    }
}

impl FromStr for HorizontalAlignment {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(
            "horizontal alignment",
            &[
                ("left", Self::Left),
                ("center", Self::Center),
                ("right", Self::Right),
            ],
            s,
        )
    }
}

/// Parsed `Image` element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageElement {
    /// Image source, trimmed.
    pub url: Option<String>,
    /// Alternate text.
    pub alt_text: Option<String>,
    /// Declared size.
    pub size: SizeMode,
    /// Image style.
    pub style: ImageStyle,
    /// Declared alignment, if any.
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

impl ImageElement {
    /// An element without a usable url renders nothing.
    pub fn is_valid(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }

    /// Presentation properties borrowed from this element.
    pub fn props(&self) -> ImageProps<'_> {
        ImageProps {
            style: self.style,
            horizontal_alignment: self.horizontal_alignment,
            alt_text: self.alt_text.as_deref(),
            in_image_set: false,
        }
    }

    /// Start tracking measurements for this element.
    pub fn tracker(&self, sizes: ImageSizes) -> FitTracker {
        FitTracker::new(ImageFit::new(self.size).sizes(sizes))
    }

    /// Render plan for this element, `None` when the element is invalid.
    pub fn render_plan<'a>(&'a self, tracker: &FitTracker) -> Option<RenderPlan<'a>> {
        self.is_valid().then(|| tracker.render_plan(&self.props()))
    }
}

/// Result of parsing element properties.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed element.
    pub image: ImageElement,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from property parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key is not an `Image` property.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid { key: &'static str, error: ParseEnumError },
}

/// Parse `Image` element properties. Keys are case-insensitive.
pub fn parse_image<'a, I>(pairs: I) -> ParseResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut image = ImageElement::default();
    let mut warnings = Vec::new();
    let mut seen: Vec<&'static str> = Vec::new();

    for (raw_key, value) in pairs {
        let key = raw_key.trim().to_ascii_lowercase();
        let Some(canonical) = dispatch_key(&key, value, &mut image, &mut warnings) else {
            if KNOWN_EXTRAS.binary_search(&key.as_str()).is_err() {
                warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(raw_key),
                    value: String::from(value),
                });
            }
            continue;
        };
        if seen.contains(&canonical) {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(raw_key),
                value: String::from(value),
            });
        } else {
            seen.push(canonical);
        }
    }

    if !image.is_valid() {
        log::debug!("image element has no usable url");
    }
    ParseResult { image, warnings }
}

/// Apply one recognized key. Returns its canonical name, or `None` when the
/// key is not an `Image` property.
fn dispatch_key(
    key: &str,
    value: &str,
    image: &mut ImageElement,
    warnings: &mut Vec<ParseWarning>,
) -> Option<&'static str> {
    match key {
        "url" => {
            image.url = Some(String::from(value.trim()));
            Some("url")
        }
        "alttext" => {
            image.alt_text = Some(String::from(value));
            Some("altText")
        }
        "size" => {
            set_or_warn(&mut image.size, value.parse(), "size", warnings);
            Some("size")
        }
        "style" => {
            set_or_warn(&mut image.style, value.parse(), "style", warnings);
            Some("style")
        }
        "horizontalalignment" => {
            let mut alignment = image.horizontal_alignment.unwrap_or_default();
            if set_or_warn(&mut alignment, value.parse(), "horizontalAlignment", warnings) {
                image.horizontal_alignment = Some(alignment);
            }
            Some("horizontalAlignment")
        }
        _ => None,
    }
}

fn set_or_warn<T>(
    field: &mut T,
    parsed: Result<T, ParseEnumError>,
    key: &'static str,
    warnings: &mut Vec<ParseWarning>,
) -> bool {
    match parsed {
        Ok(v) => {
            *field = v;
            true
        }
        Err(error) => {
            warnings.push(ParseWarning::ValueInvalid { key, error });
            false
        }
    }
}
