use std::collections::BTreeMap;

use super::model::{Dataset, Metric};

// ---------------------------------------------------------------------------
// WideTable – long-to-wide reshape of one measurement
// ---------------------------------------------------------------------------

/// One metric of the dataset in wide form: rows are the sorted distinct
/// `Valor` keys, columns are the sorted distinct `Metodo` labels, and a cell
/// holds the measurement for that (valor, metodo) pair or `None` if the pair
/// is absent from the input. Missing cells are never interpolated or
/// zero-filled; they render as breaks in the line.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    /// Row index: ascending distinct `Valor` keys.
    pub index: Vec<f64>,
    /// Column labels: sorted distinct `Metodo` names.
    pub columns: Vec<String>,
    /// Row-major grid, `cells[row][col]`.
    cells: Vec<Vec<Option<f64>>>,
}

impl WideTable {
    /// Pivot the dataset for one metric.
    ///
    /// Explicit grouping: collect (valor, metodo) → measurement into a map,
    /// then materialize the dense grid over the dataset's key indices. The
    /// loader rejects duplicate pairs, so each map key is written once.
    pub fn from_dataset(dataset: &Dataset, metric: Metric) -> Self {
        let mut grouped: BTreeMap<(u64, &str), f64> = BTreeMap::new();
        for obs in &dataset.observations {
            grouped.insert(
                (obs.valor.to_bits(), obs.metodo.as_str()),
                metric.value_of(obs),
            );
        }

        let cells: Vec<Vec<Option<f64>>> = dataset
            .valores
            .iter()
            .map(|valor| {
                dataset
                    .metodos
                    .iter()
                    .map(|metodo| grouped.get(&(valor.to_bits(), metodo.as_str())).copied())
                    .collect()
            })
            .collect();

        WideTable {
            index: dataset.valores.clone(),
            columns: dataset.metodos.clone(),
            cells,
        }
    }

    /// Number of rows (distinct `Valor` keys).
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    /// Number of columns (distinct `Metodo` labels).
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Cell at (row, col); `None` means the pair was absent from the input.
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row][col]
    }

    /// One column as (valor, measurement) pairs, in ascending `Valor` order.
    pub fn series(&self, col: usize) -> impl Iterator<Item = (f64, Option<f64>)> + '_ {
        self.index
            .iter()
            .zip(self.cells.iter())
            .map(move |(&valor, row)| (valor, row[col]))
    }
}
