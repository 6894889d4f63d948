use crate::calendar::{self, YearMonth};
use crate::modal::ModalState;
use crate::models::{CalendarView, ViewResponse};
use crate::store::LogStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Everything the calendar page shows. Handlers hold the lock for a whole
/// action, so each action sees the previous one's persisted result.
#[derive(Debug, Clone)]
pub struct Session {
    pub store: LogStore,
    pub month: YearMonth,
    pub modal: ModalState,
}

impl Session {
    pub fn new(store: LogStore, month: YearMonth) -> Self {
        Self {
            store,
            month,
            modal: ModalState::Closed,
        }
    }

    pub fn render(&self) -> CalendarView {
        calendar::render(self.month, &self.store)
    }

    pub fn view(&self) -> ViewResponse {
        ViewResponse {
            calendar: self.render(),
            modal: self.modal.view(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, session: Session) -> Self {
        Self {
            data_path,
            session: Arc::new(Mutex::new(session)),
        }
    }
}
