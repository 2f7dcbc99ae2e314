use serde::{Deserialize, Serialize};

use crate::{MS_PER_SEC, config::Config, dataset::Dataset};

/// Which view of the measurements to derive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Raw,
    Throughput,
}

impl Mode {
    /// Derives the view value from a raw time in milliseconds.
    pub fn derive(&self, time_ms: f64) -> f64 {
        match self {
            Mode::Raw => time_ms,
            Mode::Throughput => MS_PER_SEC / time_ms,
        }
    }

    /// Table cell rendering: raw values as-is, throughput to three decimals.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Mode::Raw => format!("{value}"),
            Mode::Throughput => format!("{value:.3}"),
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            Mode::Raw => "Execution time (ms)",
            Mode::Throughput => "Performance (1/ms)",
        }
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            Mode::Raw => "Benchmark Results - Execution Time",
            Mode::Throughput => "Benchmark Results - Performance",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Mode::Raw => "exec_time",
            Mode::Throughput => "performance",
        }
    }
}

/// One derived view of the dataset: every configured series, every thread
/// count, in declared order, with absent measurements kept explicit. Both
/// report sinks consume this so they can never diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub mode: Mode,
    pub row_label: String,
    pub threads: Vec<u32>,
    pub series: Vec<SeriesPoints>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoints {
    pub label: String,
    /// One entry per thread-axis value, `None` where no measurement exists.
    pub points: Vec<(u32, Option<f64>)>,
}

/// Derives a view without touching the dataset: repeatable, order taken from
/// the config, absence propagated as `None`.
pub fn derive_view(dataset: &Dataset, config: &Config, mode: Mode) -> ReportView {
    let series = config
        .series
        .iter()
        .map(|def| SeriesPoints {
            label: def.label.clone(),
            points: config
                .threads
                .iter()
                .map(|&threads| {
                    let value = dataset.lookup(&def.key, threads).map(|time| mode.derive(time));
                    (threads, value)
                })
                .collect(),
        })
        .collect();

    ReportView {
        mode,
        row_label: config.row_label.clone(),
        threads: config.threads.clone(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeriesDef;

    fn test_config() -> Config {
        Config {
            name: "test".to_owned(),
            row_label: "Scheduling Type".to_owned(),
            threads: vec![1, 2, 4],
            series: vec![
                SeriesDef::new("static_default", "Static (default)"),
                SeriesDef::new("dynamic_default", "Dynamic (default)"),
            ],
            plots: Vec::new(),
        }
    }

    fn test_dataset() -> Dataset {
        Dataset::parse(r#"{"static_default": {"1": 500, "2": 250}}"#).unwrap()
    }

    #[test]
    fn throughput_is_inverse_of_raw() {
        let dataset = test_dataset();
        let config = test_config();

        let raw = derive_view(&dataset, &config, Mode::Raw);
        let perf = derive_view(&dataset, &config, Mode::Throughput);

        for (raw_series, perf_series) in raw.series.iter().zip(&perf.series) {
            for (&(t, raw_val), &(pt, perf_val)) in raw_series.points.iter().zip(&perf_series.points) {
                assert_eq!(t, pt);
                match (raw_val, perf_val) {
                    (Some(r), Some(p)) => assert!((p - MS_PER_SEC / r).abs() < 1e-9),
                    (None, None) => {}
                    other => panic!("raw/throughput absence diverged at {t}: {other:?}"),
                }
            }
        }
        assert!((perf.series[0].points[0].1.unwrap() - 2.0).abs() < 1e-9);
        assert!((perf.series[0].points[1].1.unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn absent_measurement_stays_absent() {
        let view = derive_view(&test_dataset(), &test_config(), Mode::Throughput);
        assert_eq!(view.series[0].points[2], (4, None));
        assert!(view.series[1].points.iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn order_follows_config_not_dataset() {
        let dataset =
            Dataset::parse(r#"{"b": {"1": 2, "8": 3}, "a": {"8": 1, "1": 4}}"#).unwrap();
        let config = Config {
            name: "test".to_owned(),
            row_label: "Series".to_owned(),
            threads: vec![8, 1],
            series: vec![SeriesDef::new("a", "A"), SeriesDef::new("b", "B")],
            plots: Vec::new(),
        };

        let view = derive_view(&dataset, &config, Mode::Raw);
        assert_eq!(view.series[0].label, "A");
        assert_eq!(view.series[0].points, vec![(8, Some(1.0)), (1, Some(4.0))]);
        assert_eq!(view.series[1].points, vec![(8, Some(3.0)), (1, Some(2.0))]);
    }

    #[test]
    fn deriving_is_repeatable_and_does_not_mutate() {
        let dataset = test_dataset();
        let config = test_config();

        let first = derive_view(&dataset, &config, Mode::Raw);
        let _ = derive_view(&dataset, &config, Mode::Throughput);
        let third = derive_view(&dataset, &config, Mode::Raw);
        assert_eq!(first, third);
    }

    #[test]
    fn empty_dataset_yields_all_absent() {
        let view = derive_view(&Dataset::default(), &test_config(), Mode::Raw);
        assert_eq!(view.series.len(), 2);
        for series in &view.series {
            assert_eq!(series.points.len(), 3);
            assert!(series.points.iter().all(|(_, v)| v.is_none()));
        }
    }
}
