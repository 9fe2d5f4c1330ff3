use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::model::{Dataset, Metric};
use crate::data::pivot::WideTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded table (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Path of the loaded file, shown in the top bar.
    pub source: Option<PathBuf>,

    /// One pivoted table per panel, in [`Metric::ALL`] order (cached).
    pub tables: Vec<(Metric, WideTable)>,

    /// Per-method colours, shared by all three panels.
    pub colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded table, pivot it and assign colours.
    pub fn set_dataset(&mut self, source: PathBuf, dataset: Dataset) {
        self.tables = Metric::ALL
            .iter()
            .map(|&metric| (metric, WideTable::from_dataset(&dataset, metric)))
            .collect();
        self.colors = ColorMap::new(&dataset.metodos);

        self.source = Some(source);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// The cached wide table for one panel.
    pub fn table(&self, metric: Metric) -> Option<&WideTable> {
        self.tables
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, t)| t)
    }
}
