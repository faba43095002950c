//! Image fit computation for card layouts.
//!
//! Computes the rendered size of an image from its natural size, the
//! measured size of its container, a size mode, and a fit axis. Pure
//! geometry: no state, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use cardfit::{Container, FitAxis, ImageFit, Size, SizeMode};
//!
//! // Height-led fit of a wide image, clamped to the container width.
//! let fit = ImageFit::new(SizeMode::Auto)
//!     .axis(FitAxis::Height)
//!     .compute(Some(Size::new(400, 100)), Container::new(120.0, 50.0));
//!
//! assert_eq!(fit, Some(Size::new(120, 50)));
//! ```

use num_traits::Float;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Zero-area size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square of the given side.
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Measured layout box of the view holding the image.
///
/// A dimension that is `None`, zero, negative, or not finite has not been
/// measured yet.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Container {
    /// Measured width, in layout units.
    pub width: Option<f64>,
    /// Measured height, in layout units.
    pub height: Option<f64>,
}

impl Container {
    /// Nothing measured.
    pub const UNMEASURED: Self = Self {
        width: None,
        height: None,
    };

    /// Container from a layout callback. Zero dimensions count as unmeasured.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: usable(width),
            height: usable(height),
        }
    }

    /// Only the width is known.
    pub fn width_only(width: f64) -> Self {
        Self {
            width: usable(width),
            height: None,
        }
    }

    /// Only the height is known.
    pub fn height_only(height: f64) -> Self {
        Self {
            width: None,
            height: usable(height),
        }
    }

    /// Width, if measured.
    pub fn known_width(&self) -> Option<f64> {
        self.width.and_then(usable)
    }

    /// Height, if measured.
    pub fn known_height(&self) -> Option<f64> {
        self.height.and_then(usable)
    }

    /// Whether at least one dimension is measured.
    pub fn is_measured(&self) -> bool {
        self.known_width().is_some() || self.known_height().is_some()
    }
}

fn usable(v: f64) -> Option<f64> {
    (v.is_finite() && v > 0.0).then_some(v)
}

/// Declared size of an image element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeMode {
    /// Fit to the container, preserving aspect ratio.
    #[default]
    Auto,
    /// Like [`Auto`](Self::Auto), and the image stretches across its wrapper.
    Stretch,
    /// Fixed preset square.
    Small,
    /// Fixed preset square.
    Medium,
    /// Fixed preset square.
    Large,
}

impl SizeMode {
    /// Whether this mode produces a fixed preset size.
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Small | Self::Medium | Self::Large)
    }
}

/// Which container dimension drives the other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitAxis {
    /// Width-led: height follows from width and aspect ratio.
    ///
    /// The derived height is not clamped to a known container height; the
    /// platform crops overflow.
    Width,
    /// Height-led: width follows from height and aspect ratio, clamped to
    /// the container width.
    Height,
}

impl FitAxis {
    /// Infer the axis from a first layout measurement.
    ///
    /// A container with a width but no height grows vertically, so it is
    /// width-led. Any known height makes it height-led.
    pub fn infer(container: &Container) -> Option<Self> {
        match (container.known_width(), container.known_height()) {
            (Some(_), None) => Some(Self::Width),
            (_, Some(_)) => Some(Self::Height),
            (None, None) => None,
        }
    }
}

/// Host-config image size presets, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImageSizes {
    /// Side of a `small` image.
    pub small: u32,
    /// Side of a `medium` image.
    pub medium: u32,
    /// Side of a `large` image.
    pub large: u32,
    /// Floor used when an axis is known but the container is not.
    /// Zero is treated as 1.
    pub min: u32,
}

impl ImageSizes {
    /// Default `small` side.
    pub const DEFAULT_SMALL: u32 = 40;
    /// Default `medium` side.
    pub const DEFAULT_MEDIUM: u32 = 80;
    /// Default `large` side.
    pub const DEFAULT_LARGE: u32 = 160;
    /// Default minimum floor.
    pub const DEFAULT_MIN: u32 = 18;

    /// Presets with the default minimum floor.
    pub const fn new(small: u32, medium: u32, large: u32) -> Self {
        Self {
            small,
            medium,
            large,
            min: Self::DEFAULT_MIN,
        }
    }

    /// Set the minimum floor.
    pub const fn with_min(mut self, min: u32) -> Self {
        self.min = min;
        self
    }

    /// Side length for a fixed mode, `None` for fitting modes.
    pub const fn fixed(&self, mode: SizeMode) -> Option<u32> {
        match mode {
            SizeMode::Small => Some(self.small),
            SizeMode::Medium => Some(self.medium),
            SizeMode::Large => Some(self.large),
            SizeMode::Auto | SizeMode::Stretch => None,
        }
    }
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SMALL,
            Self::DEFAULT_MEDIUM,
            Self::DEFAULT_LARGE,
        )
    }
}

/// Fit specification for one image.
///
/// # Example
///
/// ```
/// use cardfit::{Container, ImageFit, ImageSizes, Size, SizeMode};
///
/// let fit = ImageFit::new(SizeMode::Medium)
///     .sizes(ImageSizes::new(32, 64, 128))
///     .compute(None, Container::UNMEASURED);
///
/// assert_eq!(fit, Some(Size::square(64)));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageFit {
    /// Declared size of the image.
    pub mode: SizeMode,
    /// `None` until the caller has determined an axis.
    pub axis: Option<FitAxis>,
    /// Host-config presets.
    pub sizes: ImageSizes,
}

impl ImageFit {
    /// Fit with default presets and no axis yet.
    pub fn new(mode: SizeMode) -> Self {
        Self {
            mode,
            axis: None,
            sizes: ImageSizes::default(),
        }
    }

    /// Set the fit axis.
    pub fn axis(mut self, axis: FitAxis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the size presets.
    pub fn sizes(mut self, sizes: ImageSizes) -> Self {
        self.sizes = sizes;
        self
    }

    /// Compute the rendered size.
    ///
    /// Returns `None` while the image is not renderable yet: unknown or
    /// zero natural size, or no axis and nothing measured to infer one.
    pub fn compute(&self, natural: Option<Size>, container: Container) -> Option<Size> {
        // Step 1: Fixed presets ignore aspect ratio and container.
        if let Some(side) = self.sizes.fixed(self.mode) {
            return Some(Size::square(side));
        }

        // Step 2: Need an aspect ratio.
        let natural = natural.filter(|n| !n.is_empty())?;

        // Step 3: Explicit axis wins, otherwise infer from the measurement.
        let axis = self.axis.or_else(|| FitAxis::infer(&container))?;

        // Step 4: Leading dimension drives; fall back to the other one.
        let cw = container.known_width();
        let ch = container.known_height();
        let size = match (axis, cw, ch) {
            (FitAxis::Width, Some(w), _) | (FitAxis::Height, Some(w), None) => {
                width_led(natural, w)
            }
            (FitAxis::Height, _, Some(h)) | (FitAxis::Width, None, Some(h)) => {
                height_led(natural, h, cw)
            }
            // Step 5: Axis known, container gone.
            (_, None, None) => Size::square(self.sizes.min.max(1)),
        };
        Some(size)
    }
}

/// Free-function form of [`ImageFit::compute`].
pub fn compute_fit(
    natural: Option<Size>,
    container: Container,
    mode: SizeMode,
    axis: Option<FitAxis>,
    sizes: &ImageSizes,
) -> Option<Size> {
    ImageFit {
        mode,
        axis,
        sizes: *sizes,
    }
    .compute(natural, container)
}

// ============================================================================
// Internal geometry
// ============================================================================

fn width_led(natural: Size, width: f64) -> Size {
    let height = width * natural.height as f64 / natural.width as f64;
    Size::new(floor_px(width), floor_px(height))
}

fn height_led(natural: Size, height: f64, max_width: Option<f64>) -> Size {
    let mut width = floor_px(height * natural.width as f64 / natural.height as f64);
    if let Some(max) = max_width {
        width = width.min(floor_px(max));
    }
    Size::new(width, floor_px(height))
}

/// Floor to whole pixels. Saturates at the `u32` range.
fn floor_px(v: f64) -> u32 {
    Float::floor(v) as u32
}
