//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every state change goes
//! through `AppContext::apply`, which mutates the store, persists the new
//! state and bumps the revision counter.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::state::{AppState, AppStore};
use crate::storage::{load_state, save_state, LocalStorage};

/// Transient status message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub config: StoredValue<AppConfig>,
    /// Incremented after every applied mutation
    pub revision: ReadSignal<u32>,
    set_revision: WriteSignal<u32>,
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
    notice_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        let (revision, set_revision) = signal(0u32);
        let (notice, set_notice) = signal::<Option<Notice>>(None);
        Self {
            store,
            config: StoredValue::new(config),
            revision,
            set_revision,
            notice,
            set_notice,
            notice_seq: StoredValue::new(0),
        }
    }

    /// Mutate state, then persist it. Log lines written inside `f` are
    /// visible to revision watchers.
    pub fn apply<R>(&self, action: &str, f: impl FnOnce(&mut AppState) -> R) -> R {
        let result = {
            let mut state = self.store.write();
            f(&mut *state)
        };
        log::debug!(
            "[STATE] {}: {}",
            action,
            self.store.with_untracked(|state| state.summary())
        );
        self.persist();
        self.set_revision.update(|v| *v += 1);
        result
    }

    /// Write the current state to localStorage, reporting failures
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            log::error!("[STORAGE] Save failed: {}", e);
            self.notify(format!("Could not save your list: {}", e));
        }
    }

    fn try_persist(&self) -> AppResult<()> {
        let key = self.config.with_value(|c| c.storage_key.clone());
        let storage = LocalStorage::open()?;
        self.store.with_untracked(|state| save_state(&storage, &key, state))
    }

    /// Show a notice that clears itself after `notice_ms`
    pub fn notify(&self, text: impl Into<String>) {
        let id = self.notice_seq.with_value(|v| *v + 1);
        self.notice_seq.set_value(id);
        self.set_notice.set(Some(Notice { id, text: text.into() }));
        self.set_revision.update(|v| *v += 1);

        let set_notice = self.set_notice;
        let delay = self.config.with_value(|c| c.notice_ms);
        Timeout::new(delay, move || {
            // A newer notice replaces this one and owns its own timer
            set_notice.update(|current| {
                if current.as_ref().map(|n| n.id) == Some(id) {
                    *current = None;
                }
            });
        })
        .forget();
    }
}

/// Saved state from localStorage, or an empty list
pub fn initial_state(storage_key: &str) -> AppState {
    match LocalStorage::open().and_then(|storage| load_state(&storage, storage_key)) {
        Ok(Some(state)) => {
            log::info!("[APP] Restored {}", state.summary());
            state
        }
        Ok(None) => {
            log::info!("[APP] No saved list under {:?}, starting empty", storage_key);
            AppState::new()
        }
        Err(e) => {
            log::warn!("[APP] Ignoring saved list: {}", e);
            AppState::new()
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
