//! Per-image measurement tracking.
//!
//! A view receives two independent callbacks, in either order: the layout
//! of its container and the natural size of the loaded image. [`FitTracker`]
//! keeps the latest of each, owns the fit axis once it has been inferred,
//! and recomputes the fit on every update.
//!
//! # Example
//!
//! ```
//! use cardfit::{FitTracker, ImageFit, Phase, Size, SizeMode};
//!
//! let mut tracker = FitTracker::new(ImageFit::new(SizeMode::Auto));
//! assert_eq!(tracker.phase(), Phase::Unmeasured);
//!
//! tracker.on_natural_size(200, 100);
//! assert_eq!(tracker.phase(), Phase::PartiallyMeasured);
//!
//! // Width known, height still open: width-led.
//! let fit = tracker.on_layout(100.0, 0.0);
//! assert_eq!(fit, Some(Size::new(100, 50)));
//! assert_eq!(tracker.phase(), Phase::Fit);
//! ```

use crate::fit::{Container, FitAxis, ImageFit, Size};
use crate::present::{ImageProps, RenderPlan};

/// Where a tracked image is in its measurement lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Neither measurement has arrived.
    Unmeasured,
    /// One measurement arrived, or both did but the fit is still unknown.
    PartiallyMeasured,
    /// A definite size is available.
    Fit,
}

/// Outcome of loading the image source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// No load outcome yet.
    #[default]
    Pending,
    /// Source loaded.
    Loaded,
    /// Source failed to load.
    Failed,
}

/// Measurement state for one rendered image.
#[derive(Clone, Debug, PartialEq)]
pub struct FitTracker {
    fit: ImageFit,
    natural: Option<Size>,
    container: Container,
    load: LoadState,
    torn_down: bool,
}

impl FitTracker {
    /// Start tracking. An axis already set on `fit` is kept as-is.
    pub fn new(fit: ImageFit) -> Self {
        Self {
            fit,
            natural: None,
            container: Container::UNMEASURED,
            load: LoadState::Pending,
            torn_down: false,
        }
    }

    /// Container layout measured.
    ///
    /// The first layout with a usable dimension fixes the fit axis for the
    /// lifetime of this tracker. Fixed-size images ignore layout entirely.
    pub fn on_layout(&mut self, width: f64, height: f64) -> Option<Size> {
        if self.torn_down {
            return None;
        }
        if self.fit.mode.is_fixed() {
            return self.fit();
        }

        log::debug!("image layout measured: {width}x{height}");
        let container = Container::new(width, height);
        if self.fit.axis.is_none() {
            self.fit.axis = FitAxis::infer(&container);
            if let Some(axis) = self.fit.axis {
                log::debug!("image fit axis fixed: {axis:?}");
            }
        }
        self.container = container;
        self.fit()
    }

    /// Natural image size measured. Empty sizes are ignored.
    pub fn on_natural_size(&mut self, width: u32, height: u32) -> Option<Size> {
        if self.torn_down {
            return None;
        }

        let natural = Size::new(width, height);
        if natural.is_empty() {
            log::debug!("ignoring empty natural image size: {width}x{height}");
        } else {
            log::debug!("image natural size measured: {width}x{height}");
            self.natural = Some(natural);
        }
        self.fit()
    }

    /// Image source loaded.
    pub fn on_load(&mut self) {
        if !self.torn_down {
            self.load = LoadState::Loaded;
        }
    }

    /// Image source failed to load; the render plan shows a placeholder.
    pub fn on_load_error(&mut self) {
        if !self.torn_down {
            log::warn!("image failed to load, showing placeholder");
            self.load = LoadState::Failed;
        }
    }

    /// Owning view is gone. Every later callback is a no-op.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    /// Whether [`teardown`](Self::teardown) was called.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Current fit, `None` while not renderable.
    pub fn fit(&self) -> Option<Size> {
        self.fit.compute(self.natural, self.container)
    }

    /// Fit axis, once determined.
    pub fn axis(&self) -> Option<FitAxis> {
        self.fit.axis
    }

    /// Latest usable natural size.
    pub fn natural(&self) -> Option<Size> {
        self.natural
    }

    /// Latest container measurement.
    pub fn container(&self) -> Container {
        self.container
    }

    /// Outcome of loading the image source.
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.fit().is_some() {
            Phase::Fit
        } else if self.natural.is_some() || self.container.is_measured() {
            Phase::PartiallyMeasured
        } else {
            Phase::Unmeasured
        }
    }

    /// Assemble what the view needs to draw this image now.
    pub fn render_plan<'a>(&self, props: &ImageProps<'a>) -> RenderPlan<'a> {
        RenderPlan::new(
            self.fit(),
            self.fit.mode,
            props,
            self.load == LoadState::Failed,
        )
    }
}
