use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::Metric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Metric panel – one of the three charts
// ---------------------------------------------------------------------------

/// Render one metric panel: heading, plot with one line per method,
/// axis labels and a legend.
pub fn metric_panel(ui: &mut Ui, state: &AppState, metric: Metric) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(metric.title());
    });

    let Some(table) = state.table(metric) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No data loaded.");
        });
        return;
    };

    Plot::new(format!("panel_{}", metric.title()))
        .legend(Legend::default())
        .x_axis_label("Valor")
        .y_axis_label(metric.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (col, metodo) in table.columns.iter().enumerate() {
                let color = state.colors.color_for(metodo);

                // One Line per contiguous run; the legend groups them by name.
                for segment in split_segments(table.series(col)) {
                    let points: PlotPoints = segment.into();
                    let line = Line::new(points)
                        .name(metodo)
                        .color(color)
                        .width(2.0);
                    plot_ui.line(line);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Gap splitting
// ---------------------------------------------------------------------------

/// Split one wide-table column into contiguous runs of present cells.
/// A missing cell breaks the line; nothing is interpolated or zero-filled.
pub fn split_segments(
    series: impl Iterator<Item = (f64, Option<f64>)>,
) -> Vec<Vec<[f64; 2]>> {
    let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (x, cell) in series {
        match cell {
            Some(y) => current.push([x, y]),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_breaks_the_line_into_two_segments() {
        let series = vec![
            (1.0, Some(10.0)),
            (2.0, None),
            (3.0, Some(30.0)),
            (4.0, Some(40.0)),
        ];
        let segments = split_segments(series.into_iter());
        assert_eq!(
            segments,
            vec![vec![[1.0, 10.0]], vec![[3.0, 30.0], [4.0, 40.0]]]
        );
    }

    #[test]
    fn all_missing_yields_no_segments() {
        let series = vec![(1.0, None), (2.0, None)];
        assert!(split_segments(series.into_iter()).is_empty());
    }

    #[test]
    fn empty_series_yields_no_segments() {
        assert!(split_segments(std::iter::empty()).is_empty());
    }

    #[test]
    fn unbroken_series_is_one_segment() {
        let series = vec![(1.0, Some(1.0)), (2.0, Some(2.0)), (3.0, Some(3.0))];
        let segments = split_segments(series.into_iter());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 3);
    }
}
