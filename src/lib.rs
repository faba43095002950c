//! Adaptive Card image sizing.
//!
//! Pure geometry plus a little per-image bookkeeping. No rendering, no I/O,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`fit`]: size presets, fit axes, and the aspect-preserving fit computation
//! - [`measure`]: per-image tracker for layout and natural-size callbacks
//! - [`present`]: corner radius, self-alignment, and the render plan
//! - [`schema`]: Image element property parsing (requires `alloc`)
//!
//! # Example
//!
//! ```
//! use cardfit::{Container, FitAxis, ImageFit, Size, SizeMode};
//!
//! let fit = ImageFit::new(SizeMode::Auto)
//!     .axis(FitAxis::Width)
//!     .compute(Some(Size::new(200, 100)), Container::width_only(100.0));
//!
//! assert_eq!(fit, Some(Size::new(100, 50)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod fit;
pub mod measure;
pub mod present;
#[cfg(feature = "alloc")]
pub mod schema;

// Re-exports: core types from fit module
pub use fit::{Container, FitAxis, ImageFit, ImageSizes, Size, SizeMode, compute_fit};
pub use measure::{FitTracker, LoadState, Phase};
pub use present::{HorizontalAlignment, ImageProps, ImageStyle, RenderPlan, SelfAlignment};
#[cfg(feature = "alloc")]
pub use schema::{ImageElement, ParseEnumError, ParseResult, ParseWarning, parse_image};
