use crate::artifacts::core::error::Result;
use crate::artifacts::history::checkout_history::History;
use crate::artifacts::history::descriptions::Descriptions;
use crate::artifacts::history::store::HistoryStore;
use std::cell::RefCell;

/// History store that lives only as long as the process
#[derive(Debug)]
pub struct MemoryHistory {
    history: RefCell<History>,
    descriptions: RefCell<Descriptions>,
}

impl MemoryHistory {
    pub fn new(limit: usize) -> Self {
        MemoryHistory {
            history: RefCell::new(History::empty(limit)),
            descriptions: RefCell::new(Descriptions::default()),
        }
    }

    pub fn with_history(history: History) -> Self {
        MemoryHistory {
            history: RefCell::new(history),
            descriptions: RefCell::new(Descriptions::default()),
        }
    }
}

impl HistoryStore for MemoryHistory {
    fn limit(&self) -> usize {
        self.history.borrow().limit()
    }

    fn load(&self) -> Result<History> {
        Ok(self.history.borrow().clone())
    }

    fn save(&self, history: &History) -> Result<()> {
        *self.history.borrow_mut() = history.clone();
        Ok(())
    }

    fn load_descriptions(&self) -> Result<Descriptions> {
        Ok(self.descriptions.borrow().clone())
    }

    fn save_descriptions(&self, descriptions: &Descriptions) -> Result<()> {
        *self.descriptions.borrow_mut() = descriptions.clone();
        Ok(())
    }
}
