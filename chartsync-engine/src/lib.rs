mod cursor;
mod range;

use chartsync_core::{DomainPoint, PanelRegistry, RegistryError, SharedPanel};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Tunable parameters of the synchronization engine.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Minimum interval between two cursor-marker moves on the same panel.
    pub cursor_throttle: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            cursor_throttle: Duration::from_millis(150),
        }
    }
}

pub(crate) struct EngineState {
    pub(crate) config: SyncConfig,
    pub(crate) panels: RefCell<PanelRegistry>,
    /// Reentrancy guard for range propagation: true only while a broadcast
    /// is in flight up the current call stack.
    pub(crate) range_lock: Cell<bool>,
    /// De-duplication key of the cursor broadcaster. Its own namespace;
    /// cursor sync and range sync never cross-suppress.
    pub(crate) last_pointer_x: Cell<Option<f64>>,
    /// Wall-clock instant of each panel's last applied marker touch,
    /// keyed by panel id. Populated lazily, cleared only on engine drop.
    pub(crate) marker_touched_at: RefCell<HashMap<String, Instant>>,
    /// Domain position under the cursor, for status-display collaborators.
    pub(crate) cursor: Cell<Option<DomainPoint>>,
}

/// Context object owning all mutable synchronization state for one group of
/// panels. Cloning yields another handle to the same group; independent
/// engines synchronize independent groups.
#[derive(Clone)]
pub struct SyncEngine {
    inner: Rc<EngineState>,
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::with_config(SyncConfig::default())
    }

    pub fn with_config(config: SyncConfig) -> Self {
        Self {
            inner: Rc::new(EngineState {
                config,
                panels: RefCell::new(PanelRegistry::new()),
                range_lock: Cell::new(false),
                last_pointer_x: Cell::new(None),
                marker_touched_at: RefCell::new(HashMap::new()),
                cursor: Cell::new(None),
            }),
        }
    }

    /// Register a panel and attach the engine as its only range-change and
    /// pointer-move handler. Collaborators must not react to the same raw
    /// notifications themselves.
    pub fn register(&self, panel: SharedPanel) -> Result<(), RegistryError> {
        self.inner.panels.borrow_mut().register(panel.clone())?;
        let id = panel.borrow().id().to_string();

        let weak = Rc::downgrade(&self.inner);
        let source = id.clone();
        panel.borrow_mut().on_pointer_move(Box::new(move |pixel| {
            if let Some(engine) = Self::upgrade(&weak) {
                engine.handle_pointer_move(&source, pixel);
            }
        }));

        let weak = Rc::downgrade(&self.inner);
        let source = id;
        panel.borrow_mut().on_range_change(Box::new(move |update| {
            if let Some(engine) = Self::upgrade(&weak) {
                engine.handle_range_change(&source, update);
            }
        }));
        Ok(())
    }

    fn upgrade(weak: &Weak<EngineState>) -> Option<SyncEngine> {
        weak.upgrade().map(|inner| SyncEngine { inner })
    }

    pub(crate) fn state(&self) -> &EngineState {
        &self.inner
    }

    pub fn panel_count(&self) -> usize {
        self.inner.panels.borrow().len()
    }

    /// Last domain position seen under the cursor, updated on every pointer
    /// move including de-duplicated ones.
    pub fn cursor_position(&self) -> Option<DomainPoint> {
        self.inner.cursor.get()
    }

    /// True only while a range broadcast is in flight; observable as false
    /// before and after every external event.
    pub fn is_propagating(&self) -> bool {
        self.inner.range_lock.get()
    }
}
