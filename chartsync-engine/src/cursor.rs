use crate::SyncEngine;
use chartsync_core::{to_domain, PixelPoint};
use std::time::Instant;

impl SyncEngine {
    /// Cursor broadcast: push a vertical marker at the hovered timestamp to
    /// every panel except the source. Returns the number of markers touched.
    ///
    /// The whole broadcast is skipped when the pointer surface re-fires an
    /// unchanged pixel position; a throttle window further limits how often
    /// each target panel's existing marker is moved.
    pub fn handle_pointer_move(&self, source_id: &str, pixel: PixelPoint) -> usize {
        let state = self.state();
        let panels = state.panels.borrow();
        let Some(source) = panels.get(source_id) else {
            log::debug!("pointer move from unregistered panel {source_id}");
            return 0;
        };

        let domain = to_domain(&*source.borrow(), pixel);
        if let Some(point) = domain {
            state.cursor.set(Some(point));
        }

        // Global de-dup on the raw pixel, before any per-panel work.
        if state.last_pointer_x.get() == Some(pixel.x) {
            return 0;
        }
        state.last_pointer_x.set(Some(pixel.x));

        let Some(domain) = domain else {
            log::debug!("cursor tick skipped: {source_id} scale unavailable");
            return 0;
        };

        let now = Instant::now();
        let mut touched = 0;
        for entry in panels.iter() {
            if entry.borrow().id() == source_id {
                continue;
            }
            let mut panel = entry.borrow_mut();
            if panel.cursor_marker().is_some() && !self.marker_due(panel.id(), now) {
                continue;
            }
            state
                .marker_touched_at
                .borrow_mut()
                .insert(panel.id().to_string(), now);
            panel.set_cursor_marker(domain.time);
            touched += 1;
        }
        touched
    }

    fn marker_due(&self, panel_id: &str, now: Instant) -> bool {
        let touched_at = self.state().marker_touched_at.borrow();
        match touched_at.get(panel_id) {
            Some(last) => now.duration_since(*last) >= self.state().config.cursor_throttle,
            None => true,
        }
    }
}
