//! Dashboard filters and saved reports, persisted as one JSON document.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{config::DASHBOARD_STORE_KEY, storage, timing};
use crate::data::{DashboardFilters, FiltersPatch, SavedReport};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    #[serde(default)]
    pub filters: DashboardFilters,
    #[serde(default)]
    pub saved_reports: Vec<SavedReport>,
}

impl DashboardState {
    pub fn set_filters(&mut self, patch: FiltersPatch) {
        self.filters = self.filters.merged(patch);
    }

    /// Snapshot the current filters under `name`, newest first.
    /// Returns `None` (and changes nothing) when the trimmed name is empty.
    pub fn save_current_report(
        &mut self,
        name: &str,
        id: String,
        created_at: String,
    ) -> Option<&SavedReport> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.saved_reports.insert(
            0,
            SavedReport {
                id,
                name: name.to_string(),
                created_at,
                filters: self.filters,
            },
        );
        self.saved_reports.first()
    }

    /// Returns `false` for an unknown id.
    pub fn load_report(&mut self, id: &str) -> bool {
        match self.saved_reports.iter().find(|r| r.id == id) {
            Some(report) => {
                self.filters = report.filters;
                true
            }
            None => false,
        }
    }

    /// Returns `false` for an unknown id.
    pub fn delete_report(&mut self, id: &str) -> bool {
        let before = self.saved_reports.len();
        self.saved_reports.retain(|r| r.id != id);
        self.saved_reports.len() != before
    }
}

fn load_state() -> DashboardState {
    match storage::load_json::<DashboardState>(DASHBOARD_STORE_KEY) {
        Ok(Some(state)) => state,
        Ok(None) => DashboardState::default(),
        Err(err) => {
            tracing::warn!(%err, "stored dashboard state unreadable; using defaults");
            DashboardState::default()
        }
    }
}

fn persist_state(state: &DashboardState) {
    if let Err(err) = storage::save_json(DASHBOARD_STORE_KEY, state) {
        tracing::warn!(%err, "failed to persist dashboard state");
    }
}

#[derive(Clone, Copy)]
pub struct DashboardStore {
    state: Signal<DashboardState>,
}

impl DashboardStore {
    pub fn load() -> Self {
        Self {
            state: Signal::new(load_state()),
        }
    }

    pub fn filters(&self) -> DashboardFilters {
        self.state.read().filters
    }

    pub fn saved_reports(&self) -> Vec<SavedReport> {
        self.state.read().saved_reports.clone()
    }

    pub fn set_filters(&mut self, patch: FiltersPatch) {
        let mut state = self.state.write();
        state.set_filters(patch);
        persist_state(&state);
    }

    /// Returns `false` when the name is blank.
    pub fn save_current_report(&mut self, name: &str) -> bool {
        let id = uuid::Uuid::new_v4().to_string();
        let mut state = self.state.write();
        let saved = state
            .save_current_report(name, id, timing::now_rfc3339())
            .map(|r| r.name.clone());
        match saved {
            Some(name) => {
                tracing::info!(report = %name, "report saved");
                persist_state(&state);
                true
            }
            None => false,
        }
    }

    pub fn load_report(&mut self, id: &str) {
        let mut state = self.state.write();
        if state.load_report(id) {
            persist_state(&state);
        }
    }

    pub fn delete_report(&mut self, id: &str) {
        let mut state = self.state.write();
        if state.delete_report(id) {
            persist_state(&state);
        }
    }
}

pub fn use_dashboard() -> DashboardStore {
    use_context::<DashboardStore>()
}
