use std::path::{Path, PathBuf};

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Legend, Title},
    element::{AxisType, Symbol},
    series::Line,
};
use common::{
    plot::{Plot, ensure_plot_dir, present_points},
    transform::ReportView,
};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_WIDTH: u32 = 1000;
const DEFAULT_HEIGHT: u32 = 600;

/// One labeled line with markers per configured series over the thread axis.
/// Absent measurements contribute no point, so a series with no data at all
/// keeps its legend entry but draws nothing.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LineBasic {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[typetag::serde]
impl Plot for LineBasic {
    fn name(&self) -> &'static str {
        "line-basic"
    }

    fn render(&self, view: &ReportView, out_dir: &Path) -> Result<PathBuf> {
        ensure_plot_dir(out_dir)?;

        let mut chart = Chart::new()
            .title(Title::new().text(view.mode.chart_title()))
            .legend(Legend::new())
            .x_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .name("Number of threads"),
            )
            .y_axis(Axis::new().type_(AxisType::Value).name(view.mode.y_label()));

        for series in &view.series {
            let points = present_points(series);
            debug!("Series {} has {} points", series.label, points.len());
            chart = chart.series(
                Line::new()
                    .name(series.label.as_str())
                    .symbol(Symbol::Circle)
                    .data(
                        points
                            .into_iter()
                            .map(|(threads, value)| vec![f64::from(threads), value])
                            .collect::<Vec<_>>(),
                    ),
            );
        }

        let path = out_dir.join(format!("{}.svg", view.mode.file_stem()));
        let mut renderer = ImageRenderer::new(
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        );
        renderer
            .save(&chart, &path)
            .context("Render line chart")?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use common::{
        config::{Config, SeriesDef},
        dataset::Dataset,
        transform::{Mode, derive_view},
    };

    use super::*;

    fn test_view(mode: Mode) -> ReportView {
        let dataset = Dataset::parse(r#"{"static_default": {"1": 500, "2": 250}}"#).unwrap();
        let config = Config {
            name: "test".to_owned(),
            row_label: "Scheduling Type".to_owned(),
            threads: vec![1, 2, 4],
            series: vec![
                SeriesDef::new("static_default", "Static (default)"),
                SeriesDef::new("dynamic_default", "Dynamic (default)"),
            ],
            plots: Vec::new(),
        };
        derive_view(&dataset, &config, mode)
    }

    #[test]
    fn renders_svg_into_created_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("media");

        let path = LineBasic::default()
            .render(&test_view(Mode::Raw), &out_dir)
            .unwrap();

        assert_eq!(path, out_dir.join("exec_time.svg"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("svg"));
    }

    #[test]
    fn throughput_mode_uses_its_own_file() {
        let dir = tempfile::tempdir().unwrap();

        let path = LineBasic::default()
            .render(&test_view(Mode::Throughput), dir.path())
            .unwrap();

        assert_eq!(path, dir.path().join("performance.svg"));
    }

    #[test]
    fn plot_list_roundtrips_through_yaml() {
        let plots: Vec<Box<dyn Plot>> = vec![Box::new(LineBasic::default())];
        let yaml = serde_yml::to_string(&plots).unwrap();
        let back: Vec<Box<dyn Plot>> = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(back.len(), 1);
        assert_eq!(back[0].name(), "line-basic");
    }
}
