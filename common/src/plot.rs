use core::fmt::Debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

use dyn_clone::{DynClone, clone_trait_object};
use eyre::Result;

use crate::transform::{ReportView, SeriesPoints};

/// A chart sink. Implementations take the same derived view the table is
/// rendered from and write one image file for it under `out_dir`.
#[typetag::serde(tag = "type")]
pub trait Plot: Debug + DynClone + Send + Sync {
    fn name(&self) -> &'static str;
    /// Renders the view and returns the path of the written file.
    fn render(&self, view: &ReportView, out_dir: &Path) -> Result<PathBuf>;
}
clone_trait_object!(Plot);

/// Creates the output directory if needed. Safe to call on every run.
pub fn ensure_plot_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// The pairs a chart may draw for one series. Absent measurements are
/// omitted entirely so no line segment is fabricated through them.
pub fn present_points(series: &SeriesPoints) -> Vec<(u32, f64)> {
    series
        .points
        .iter()
        .filter_map(|&(threads, value)| value.map(|value| (threads, value)))
        .collect()
}
