//! Which dataset the overview shows: the mock feed or an uploaded workbook.

use dioxus::prelude::*;

use crate::data::DashboardData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceMode {
    #[default]
    Mock,
    File,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSourceState {
    pub mode: DataSourceMode,
    pub file_data: Option<DashboardData>,
    pub file_name: Option<String>,
}

impl DataSourceState {
    pub fn set_file_data(&mut self, data: DashboardData, file_name: Option<String>) {
        self.mode = DataSourceMode::File;
        self.file_data = Some(data);
        self.file_name = file_name;
    }

    pub fn reset_to_mock(&mut self) {
        self.mode = DataSourceMode::Mock;
        self.file_data = None;
        self.file_name = None;
    }

    /// Uploaded data, only while in file mode.
    pub fn active_file_data(&self) -> Option<&DashboardData> {
        match self.mode {
            DataSourceMode::File => self.file_data.as_ref(),
            DataSourceMode::Mock => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct DataSourceStore {
    state: Signal<DataSourceState>,
}

impl DataSourceStore {
    pub fn new() -> Self {
        Self {
            state: Signal::new(DataSourceState::default()),
        }
    }

    pub fn mode(&self) -> DataSourceMode {
        self.state.read().mode
    }

    pub fn file_name(&self) -> Option<String> {
        self.state.read().file_name.clone()
    }

    pub fn active_file_data(&self) -> Option<DashboardData> {
        self.state.read().active_file_data().cloned()
    }

    pub fn set_file_data(&mut self, data: DashboardData, file_name: Option<String>) {
        tracing::info!(
            file = file_name.as_deref().unwrap_or("<unnamed>"),
            points = data.time_series.len(),
            "switched to uploaded data"
        );
        self.state.write().set_file_data(data, file_name);
    }

    pub fn reset_to_mock(&mut self) {
        tracing::info!("switched back to mock data");
        self.state.write().reset_to_mock();
    }
}

impl Default for DataSourceStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_data_source() -> DataSourceStore {
    use_context::<DataSourceStore>()
}
