use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Observation – one row of the benchmark CSV
// ---------------------------------------------------------------------------

/// One benchmark measurement: a method applied to one input value.
///
/// Field names follow the CSV headers produced by the benchmark harness
/// (`Valor,Metodo,Resultado,Tempo(s),Erro`); extra columns in the file are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    /// Independent variable (x-axis).
    #[serde(rename = "Valor")]
    pub valor: f64,
    /// Method label distinguishing the series.
    #[serde(rename = "Metodo")]
    pub metodo: String,
    /// Computed result for (valor, metodo).
    #[serde(rename = "Resultado")]
    pub resultado: f64,
    /// Mean execution time in seconds.
    #[serde(rename = "Tempo(s)")]
    pub tempo_s: f64,
    /// Absolute error against the reference implementation.
    #[serde(rename = "Erro")]
    pub erro: f64,
}

// ---------------------------------------------------------------------------
// Metric – which measurement column a chart panel shows
// ---------------------------------------------------------------------------

/// The three measurements plotted against `Valor`, one panel each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Resultado,
    Tempo,
    Erro,
}

impl Metric {
    /// Panel order, left to right.
    pub const ALL: [Metric; 3] = [Metric::Resultado, Metric::Tempo, Metric::Erro];

    /// Panel title.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Resultado => "Resultado",
            Metric::Tempo => "Tempo",
            Metric::Erro => "Erro",
        }
    }

    /// Y-axis label (the time panel carries its unit).
    pub fn y_label(self) -> &'static str {
        match self {
            Metric::Resultado => "Resultado",
            Metric::Tempo => "Tempo (s)",
            Metric::Erro => "Erro",
        }
    }

    /// Select this metric's measurement from a row.
    pub fn value_of(self, obs: &Observation) -> f64 {
        match self {
            Metric::Resultado => obs.resultado,
            Metric::Tempo => obs.tempo_s,
            Metric::Erro => obs.erro,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed key indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// All observations in file order.
    pub observations: Vec<Observation>,
    /// Sorted distinct `Valor` keys (wide-table row index).
    pub valores: Vec<f64>,
    /// Sorted distinct `Metodo` labels (wide-table columns).
    pub metodos: Vec<String>,
}

impl Dataset {
    /// Build key indices from the loaded rows.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let mut valores: Vec<f64> = observations.iter().map(|o| o.valor).collect();
        valores.sort_by(f64::total_cmp);
        valores.dedup_by(|a, b| a.to_bits() == b.to_bits());

        let metodos: BTreeSet<&str> = observations.iter().map(|o| o.metodo.as_str()).collect();
        let metodos: Vec<String> = metodos.into_iter().map(str::to_string).collect();

        Dataset {
            observations,
            valores,
            metodos,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(valor: f64, metodo: &str) -> Observation {
        Observation {
            valor,
            metodo: metodo.to_string(),
            resultado: 0.0,
            tempo_s: 0.0,
            erro: 0.0,
        }
    }

    #[test]
    fn keys_are_sorted_and_distinct() {
        let ds = Dataset::from_observations(vec![
            obs(2.0, "NR-sqrt"),
            obs(1.0, "math.h"),
            obs(2.0, "math.h"),
            obs(1.0, "NR-sqrt"),
        ]);
        assert_eq!(ds.valores, vec![1.0, 2.0]);
        assert_eq!(ds.metodos, vec!["NR-sqrt", "math.h"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_table_has_no_keys() {
        let ds = Dataset::from_observations(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.valores.is_empty());
        assert!(ds.metodos.is_empty());
    }

    #[test]
    fn metric_labels() {
        assert_eq!(Metric::Tempo.title(), "Tempo");
        assert_eq!(Metric::Tempo.y_label(), "Tempo (s)");
        assert_eq!(Metric::Erro.y_label(), "Erro");
    }

    #[test]
    fn metric_selects_the_right_field() {
        let o = Observation {
            valor: 1.0,
            metodo: "math.h".into(),
            resultado: 10.0,
            tempo_s: 0.5,
            erro: 0.01,
        };
        assert_eq!(Metric::Resultado.value_of(&o), 10.0);
        assert_eq!(Metric::Tempo.value_of(&o), 0.5);
        assert_eq!(Metric::Erro.value_of(&o), 0.01);
    }
}
