pub mod coords;
pub mod registry;

pub use coords::to_domain;
pub use registry::{PanelIdSeq, PanelRegistry, RegistryError, SharedPanel};

/// Visible window of a time axis, in domain units (epoch milliseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// A range change as reported by (and applied to) a panel's time axis.
/// `Auto` is the reset-zoom case: the panel picks its own extremes and must
/// be propagated as-is, never as stale numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeUpdate {
    Window(AxisRange),
    Auto,
}

/// Current pixel-to-domain mapping of one axis. `plot_size` is the extent of
/// the plot area in pixels along this axis; a non-positive size marks the
/// transient mid-resize state where no mapping exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub range: AxisRange,
    pub plot_origin: f64,
    pub plot_size: f64,
}

impl AxisScale {
    /// Convert a pixel offset on the rendering surface into a domain value
    /// under this scale. Returns `None` while the scale is unusable.
    pub fn value_at(&self, px: f64) -> Option<f64> {
        if !(self.plot_size > 0.0) || !px.is_finite() {
            return None;
        }
        let fraction = (px - self.plot_origin) / self.plot_size;
        Some(self.range.min + fraction * self.range.span())
    }
}

/// Pointer position relative to a panel's rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// A (time, value) pair in data units, as opposed to pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainPoint {
    pub time: f64,
    pub value: f64,
}

#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    #[error("time axis is not ready")]
    AxisUnavailable,
    #[error("range update rejected: {0}")]
    RangeRejected(String),
}

pub type RangeHandler = Box<dyn Fn(RangeUpdate)>;
pub type PointerHandler = Box<dyn Fn(PixelPoint)>;

/// One rendered chart instance participating in synchronization. The chart
/// library behind it is opaque; the engine only reads scales, writes the
/// time range and the cursor marker, and installs one handler of each kind
/// at registration time.
pub trait Panel {
    fn id(&self) -> &str;

    /// Exactly one panel per group is the master: the primary candle panel
    /// that normally drives range changes.
    fn is_master(&self) -> bool;

    /// Current pixel-to-domain scale of the time axis, if usable.
    fn time_scale(&self) -> Option<AxisScale>;

    /// Current pixel-to-domain scale of the value axis, if usable.
    fn value_scale(&self) -> Option<AxisScale>;

    fn set_time_range(&mut self, update: RangeUpdate) -> Result<(), PanelError>;

    /// Position of this panel's vertical cursor line, if one was created.
    fn cursor_marker(&self) -> Option<f64>;

    /// Create the cursor line or move it in place; never duplicates it.
    fn set_cursor_marker(&mut self, time: f64);

    fn on_range_change(&mut self, handler: RangeHandler);
    fn on_pointer_move(&mut self, handler: PointerHandler);
}
