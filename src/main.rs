mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::BenchViewApp;
use eframe::egui;
use state::AppState;

/// Exactly one positional argument names the input file. Any other count
/// means the caller gets usage help and nothing is loaded.
fn parse_args(args: &[String]) -> Option<PathBuf> {
    match args {
        [path] => Some(PathBuf::from(path)),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = parse_args(&args) else {
        println!("Usage: benchview <file.csv>");
        return Ok(());
    };

    // Load before opening the window so a bad path fails fast.
    let dataset = data::loader::load_csv(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "Loaded {} observations ({} valores × {} metodos)",
        dataset.len(),
        dataset.valores.len(),
        dataset.metodos.len()
    );

    let mut app_state = AppState::default();
    app_state.set_dataset(path, dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 540.0])
            .with_min_inner_size([900.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Benchview – Method Comparison",
        options,
        Box::new(move |_cc| Ok(Box::new(BenchViewApp::new(app_state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("cannot open a display surface")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_becomes_the_input_path() {
        let args = vec!["bench.csv".to_string()];
        assert_eq!(parse_args(&args), Some(PathBuf::from("bench.csv")));
    }

    #[test]
    fn zero_arguments_ask_for_usage() {
        assert_eq!(parse_args(&[]), None);
    }

    #[test]
    fn extra_arguments_ask_for_usage() {
        let args = vec!["a.csv".to_string(), "b.csv".to_string()];
        assert_eq!(parse_args(&args), None);
    }
}
