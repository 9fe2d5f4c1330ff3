use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Columns the CSV header must contain. Anything else is ignored.
pub const EXPECTED_COLUMNS: [&str; 5] = ["Valor", "Metodo", "Resultado", "Tempo(s)", "Erro"];

#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not exist or cannot be opened for reading.
    #[error("cannot read '{path}': {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Header/shape mismatch or an unparsable cell.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// The same (Valor, Metodo) pair appears twice. The pivot would be
    /// ambiguous, so the file is rejected outright.
    #[error("duplicate (Valor, Metodo) pair: ({valor}, {metodo})")]
    DuplicateKey { valor: f64, metodo: String },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a benchmark table from a comma-separated file.
///
/// The header row must contain at least the [`EXPECTED_COLUMNS`]; rows with
/// a field count that disagrees with the header are rejected. A header-only
/// file yields an empty dataset.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::FileUnreadable {
        path: path.display().to_string(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::MalformedInput {
            reason: format!("cannot read header row: {e}"),
        })?
        .iter()
        .map(str::to_string)
        .collect();

    for expected in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == expected) {
            return Err(LoadError::MalformedInput {
                reason: format!("missing column '{expected}' in header {headers:?}"),
            });
        }
    }

    let mut observations: Vec<Observation> = Vec::new();
    let mut seen: BTreeSet<(u64, String)> = BTreeSet::new();

    for (row_no, result) in reader.deserialize::<Observation>().enumerate() {
        let obs = result.map_err(|e| LoadError::MalformedInput {
            reason: format!("row {}: {e}", row_no + 1),
        })?;

        if !seen.insert((obs.valor.to_bits(), obs.metodo.clone())) {
            return Err(LoadError::DuplicateKey {
                valor: obs.valor,
                metodo: obs.metodo,
            });
        }
        observations.push(obs);
    }

    Ok(Dataset::from_observations(observations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Write a throwaway CSV under the system temp dir.
    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "benchview_{}_{name}.csv",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("writing temp csv");
        path
    }

    const WELL_FORMED: &str = "\
Valor,Metodo,Resultado,Tempo(s),Erro
1,A,10,0.1,0.01
2,A,20,0.2,0.02
1,B,15,0.15,0.03
";

    #[test]
    fn loads_well_formed_file() {
        let path = temp_csv("ok", WELL_FORMED);
        let ds = load_csv(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.valores, vec![1.0, 2.0]);
        assert_eq!(ds.metodos, vec!["A", "B"]);
        assert_eq!(ds.observations[0].resultado, 10.0);
        assert_eq!(ds.observations[2].tempo_s, 0.15);
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let path = temp_csv("twice", WELL_FORMED);
        let first = load_csv(&path).unwrap();
        let second = load_csv(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(first, second);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let path = temp_csv(
            "extra",
            "Valor,Metodo,Resultado,Tempo(s),Erro,Comentario\n1,A,10,0.1,0.01,ok\n",
        );
        let ds = load_csv(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.observations[0].metodo, "A");
    }

    #[test]
    fn header_only_file_is_empty_not_an_error() {
        let path = temp_csv("header_only", "Valor,Metodo,Resultado,Tempo(s),Erro\n");
        let ds = load_csv(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(ds.is_empty());
    }

    #[test]
    fn missing_column_is_malformed() {
        let path = temp_csv("no_erro", "Valor,Metodo,Resultado,Tempo(s)\n1,A,10,0.1\n");
        let err = load_csv(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        match err {
            LoadError::MalformedInput { reason } => assert!(reason.contains("Erro")),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_cell_is_malformed() {
        let path = temp_csv(
            "bad_cell",
            "Valor,Metodo,Resultado,Tempo(s),Erro\n1,A,banana,0.1,0.01\n",
        );
        let err = load_csv(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, LoadError::MalformedInput { .. }));
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let path = temp_csv(
            "dup",
            "Valor,Metodo,Resultado,Tempo(s),Erro\n1,A,10,0.1,0.01\n1,A,11,0.1,0.01\n",
        );
        let err = load_csv(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        match err {
            LoadError::DuplicateKey { valor, metodo } => {
                assert_eq!(valor, 1.0);
                assert_eq!(metodo, "A");
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn nonexistent_path_is_unreadable() {
        let path = std::env::temp_dir().join("benchview_definitely_not_here.csv");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::FileUnreadable { .. }));
    }
}
