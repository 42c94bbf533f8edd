use crate::{DomainPoint, Panel, PixelPoint};

/// Map a raw pointer position within a panel's pixel space into domain
/// coordinates using that panel's current axis scales. Returns `None` when
/// either scale is unusable (e.g. mid-resize); callers skip that tick.
pub fn to_domain(panel: &dyn Panel, pixel: PixelPoint) -> Option<DomainPoint> {
    let time = panel.time_scale()?.value_at(pixel.x)?;
    let value = panel.value_scale()?.value_at(pixel.y)?;
    Some(DomainPoint { time, value })
}
