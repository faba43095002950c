//! Presentation decisions made alongside the fit.

use crate::fit::{Size, SizeMode};

/// Image element style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageStyle {
    /// Rectangular.
    #[default]
    Default,
    /// Cropped to a circle.
    Person,
}

/// Declared horizontal alignment of an element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalAlignment {
    /// Left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Right edge.
    Right,
}

/// Cross-axis alignment of the image inside its wrapper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelfAlignment {
    /// Leading edge.
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
    /// Fills the cross axis.
    Stretch,
}

/// Resolve self-alignment. Stretch-sized images always stretch.
pub fn self_alignment(alignment: Option<HorizontalAlignment>, mode: SizeMode) -> SelfAlignment {
    if mode == SizeMode::Stretch {
        return SelfAlignment::Stretch;
    }
    match alignment {
        Some(HorizontalAlignment::Left) => SelfAlignment::Start,
        Some(HorizontalAlignment::Right) => SelfAlignment::End,
        Some(HorizontalAlignment::Center) | None => SelfAlignment::Center,
    }
}

/// Corner radius for a fitted image. Person images become circles.
pub fn corner_radius(style: ImageStyle, size: Option<Size>) -> Option<f64> {
    match (style, size) {
        (ImageStyle::Person, Some(s)) => Some(s.width as f64 / 2.0),
        _ => None,
    }
}

/// Element properties that affect presentation but not the fit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageProps<'a> {
    /// Image style.
    pub style: ImageStyle,
    /// Declared alignment, if any.
    pub horizontal_alignment: Option<HorizontalAlignment>,
    /// Alternate text for assistive technology.
    pub alt_text: Option<&'a str>,
    /// The image sits in a horizontal image set and keeps its own width.
    pub in_image_set: bool,
}

/// Everything a view layer needs to draw one image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderPlan<'a> {
    /// Rendered size. `None` = let the platform size it until the fit is known.
    pub size: Option<Size>,
    /// Corner radius, set for person images once sized.
    pub corner_radius: Option<f64>,
    /// Cross-axis alignment inside the wrapper.
    pub alignment: SelfAlignment,
    /// Draw the broken-image placeholder behind the image.
    pub placeholder: bool,
    /// Accessibility label; the image is only accessible when present.
    pub accessibility_label: Option<&'a str>,
    /// The wrapper grows to fill its parent.
    pub grow: bool,
}

impl<'a> RenderPlan<'a> {
    pub(crate) fn new(
        size: Option<Size>,
        mode: SizeMode,
        props: &ImageProps<'a>,
        placeholder: bool,
    ) -> Self {
        Self {
            size,
            corner_radius: corner_radius(props.style, size),
            alignment: self_alignment(props.horizontal_alignment, mode),
            placeholder,
            accessibility_label: props.alt_text.filter(|t| !t.is_empty()),
            grow: !props.in_image_set,
        }
    }

    /// Whether assistive technology should see this image.
    pub fn is_accessible(&self) -> bool {
        self.accessibility_label.is_some()
    }
}
