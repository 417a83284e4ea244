use std::ops::Range;
use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info, warn};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::perf::{compute_metrics, Metric, Sample};

pub const NO_DATA_MESSAGE: &str =
    "Please fill in the sample data with actual times from the results file";

const THREADS_DESC: &str = "Number of Threads";

#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    /// The sample set was empty; nothing was written.
    NoData,
    Written { plot: PathBuf, csv: PathBuf },
}

/// Computes metrics for `samples` and writes the chart and the metrics table.
pub fn run(samples: &[Sample], config: &ReportConfig) -> ReportResult<RunOutcome> {
    let Some(metrics) = compute_metrics(samples) else {
        warn!("no samples to report");
        return Ok(RunOutcome::NoData);
    };

    for m in &metrics {
        info!(
            "threads {:>3}  time {:.6} s  speedup {:>6.3}  efficiency {:>6.2}%",
            m.thread_count, m.elapsed_secs, m.speedup, m.efficiency
        );
    }

    let plot = render_report(&metrics, config)?;
    let csv = write_metrics_csv(&metrics, config)?;

    Ok(RunOutcome::Written { plot, csv })
}

/// Draws speedup (left) and efficiency (right) against thread count and
/// saves the figure as a PNG, replacing any previous one.
pub fn render_report(metrics: &[Metric], config: &ReportConfig) -> ReportResult<PathBuf> {
    if let Some(m) = metrics
        .iter()
        .find(|m| !m.speedup.is_finite() || !m.efficiency.is_finite())
    {
        return Err(ReportError::NonFiniteMetric {
            thread_count: m.thread_count,
        });
    }

    create_output_dir(config)?;
    let path = config.plot_path();
    debug!(path = %path.display(), points = metrics.len(), "rendering plots");

    {
        let root = BitMapBackend::new(&path, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let (left, right) = root.split_horizontally(config.width / 2);
        draw_speedup(&left, metrics, config.font)?;
        draw_efficiency(&right, metrics, config.font)?;

        root.present()?;
    }

    Ok(path)
}

fn draw_speedup<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    metrics: &[Metric],
    font: &str,
) -> ReportResult<()> {
    let threads: Vec<f64> = metrics.iter().map(|m| m.thread_count as f64).collect();
    let y_max = metrics
        .iter()
        .map(|m| m.speedup)
        .chain(threads.iter().copied())
        .fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption("Speedup vs Number of Threads", (font, 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(thread_range(&threads), 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .x_desc(THREADS_DESC)
        .y_desc("Speedup")
        .draw()?;

    chart
        .draw_series(
            LineSeries::new(
                metrics.iter().map(|m| (m.thread_count as f64, m.speedup)),
                BLUE.stroke_width(2),
            )
            .point_size(4),
        )?
        .label("Actual Speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            threads.iter().map(|&t| (t, t)),
            8,
            6,
            RED.stroke_width(2),
        ))?
        .label("Ideal Speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((font, 13))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_efficiency<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    metrics: &[Metric],
    font: &str,
) -> ReportResult<()> {
    let threads: Vec<f64> = metrics.iter().map(|m| m.thread_count as f64).collect();
    let y_max = metrics.iter().map(|m| m.efficiency).fold(100.0, f64::max);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption("Efficiency vs Number of Threads", (font, 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(thread_range(&threads), 0.0..y_max * 1.1)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc(THREADS_DESC)
        .y_desc("Efficiency (%)")
        .draw()?;

    chart.draw_series(
        LineSeries::new(
            metrics.iter().map(|m| (m.thread_count as f64, m.efficiency)),
            GREEN.stroke_width(2),
        )
        .point_size(4),
    )?;

    Ok(())
}

/// x axis covering every thread count with a little room at both ends.
fn thread_range(threads: &[f64]) -> Range<f64> {
    let min = threads.iter().copied().fold(f64::INFINITY, f64::min);
    let max = threads.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((max - min) * 0.05).max(0.5);
    (min - pad)..(max + pad)
}

/// Writes the derived metrics as CSV with a header row.
pub fn write_metrics_csv(metrics: &[Metric], config: &ReportConfig) -> ReportResult<PathBuf> {
    create_output_dir(config)?;
    let path = config.csv_path();

    let mut writer = csv::Writer::from_path(&path)?;
    for m in metrics {
        writer.serialize(m)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), rows = metrics.len(), "wrote metrics");
    Ok(path)
}

fn create_output_dir(config: &ReportConfig) -> ReportResult<()> {
    std::fs::create_dir_all(&config.output_dir).map_err(|source| ReportError::Io {
        path: config.output_dir.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FONT;
    use crate::perf_data::PERF_DATA_OMP_MXM;

    // plotters draws text through the system font database.
    fn font_available() -> bool {
        let available = (FONT, 12).into_font().box_size("0").is_ok();
        if !available {
            eprintln!("no '{FONT}' font on this host, skipping");
        }
        available
    }

    fn temp_config() -> (tempfile::TempDir, ReportConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::with_output_dir(dir.path().join("results"));
        (dir, config)
    }

    fn is_png(path: &std::path::Path) -> bool {
        let bytes = std::fs::read(path).unwrap();
        bytes.starts_with(&[0x89, b'P', b'N', b'G'])
    }

    #[test]
    fn empty_samples_write_nothing() {
        let (_dir, config) = temp_config();
        assert_eq!(run(&[], &config).unwrap(), RunOutcome::NoData);
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn zero_elapsed_time_is_rejected_before_drawing() {
        let (_dir, config) = temp_config();
        let samples = [
            Sample { thread_count: 1, elapsed_secs: 1.0 },
            Sample { thread_count: 2, elapsed_secs: 0.0 },
        ];
        let metrics = compute_metrics(&samples).unwrap();

        let err = render_report(&metrics, &config).unwrap_err();
        assert!(matches!(err, ReportError::NonFiniteMetric { thread_count: 2 }));
        assert!(!config.plot_path().exists());
    }

    #[test]
    fn metrics_csv_has_header_and_one_row_per_sample() {
        let (_dir, config) = temp_config();
        let metrics = compute_metrics(&PERF_DATA_OMP_MXM).unwrap();

        let path = write_metrics_csv(&metrics, &config).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "thread_count,elapsed_secs,speedup,efficiency");
        assert!(lines[1].starts_with("1,0.269674,1.0,100.0"));
        assert!(lines[5].starts_with("16,0.049701,5.42"));
    }

    #[test]
    fn thread_range_pads_both_ends() {
        let range = thread_range(&[1.0, 2.0, 4.0, 8.0, 16.0]);
        assert!(range.start < 1.0 && range.end > 16.0);

        let single = thread_range(&[4.0]);
        assert_eq!(single, 3.5..4.5);

        assert_eq!(thread_range(&[]), 0.0..1.0);
    }

    #[test]
    fn rendering_twice_overwrites_the_plot() {
        if !font_available() {
            return;
        }
        let (_dir, config) = temp_config();
        let metrics = compute_metrics(&PERF_DATA_OMP_MXM).unwrap();

        let first = render_report(&metrics, &config).unwrap();
        let second = render_report(&metrics, &config).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, config.plot_path());
        assert!(is_png(&second));
    }

    #[test]
    fn run_writes_plot_and_metrics() {
        if !font_available() {
            return;
        }
        let (_dir, config) = temp_config();

        let outcome = run(&PERF_DATA_OMP_MXM, &config).unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Written {
                plot: config.plot_path(),
                csv: config.csv_path(),
            }
        );
        assert!(is_png(&config.plot_path()));
        assert!(config.csv_path().exists());
    }
}
