use crate::Panel;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedPanel = Rc<RefCell<dyn Panel>>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("panel id already registered: {0}")]
    DuplicateId(String),
}

/// Ordered collection of the active panels. Insertion order is creation
/// order and is the order broadcasts visit panels in. Panels stay for the
/// whole session; there is no removal path.
#[derive(Default)]
pub struct PanelRegistry {
    panels: Vec<SharedPanel>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, panel: SharedPanel) -> Result<(), RegistryError> {
        let id = panel.borrow().id().to_string();
        if self.panels.iter().any(|p| p.borrow().id() == id) {
            return Err(RegistryError::DuplicateId(id));
        }
        log::debug!("registered panel {id}");
        self.panels.push(panel);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedPanel> {
        self.panels.iter()
    }

    pub fn get(&self, id: &str) -> Option<SharedPanel> {
        self.panels
            .iter()
            .find(|p| p.borrow().id() == id)
            .map(Rc::clone)
    }

    pub fn master(&self) -> Option<SharedPanel> {
        self.panels
            .iter()
            .find(|p| p.borrow().is_master())
            .map(Rc::clone)
    }
}

/// Allocator for builder-assigned panel identifiers.
#[derive(Default)]
pub struct PanelIdSeq {
    next: u64,
}

impl PanelIdSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("panel_{}", self.next);
        self.next += 1;
        id
    }
}
