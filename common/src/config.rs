use serde::{Deserialize, Serialize};

use crate::plot::Plot;

/// Everything the pipeline needs besides the dataset itself. The series set
/// and thread axis are fixed configuration, never derived from the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    /// Header of the row-label column, e.g. "Scheduling Type".
    pub row_label: String,
    /// Ordered thread counts shared by all series (the x axis).
    pub threads: Vec<u32>,
    /// Ordered series definitions; table rows and chart lines follow this
    /// order, not the dataset key order.
    pub series: Vec<SeriesDef>,
    pub plots: Vec<Box<dyn Plot>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDef {
    pub key: String,
    pub label: String,
}

impl SeriesDef {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_owned(),
            label: label.to_owned(),
        }
    }
}

impl Config {
    /// The stock scheduling-strategy variant of this tool.
    pub fn scheduling_default() -> Self {
        Self {
            name: "scheduling".to_owned(),
            row_label: "Scheduling Type".to_owned(),
            threads: vec![1, 2, 4, 6, 8, 10, 12, 14, 16],
            series: vec![
                SeriesDef::new("static_default", "Static (default)"),
                SeriesDef::new("dynamic_default", "Dynamic (default)"),
                SeriesDef::new("static_10", "Static (chunk size = 10)"),
                SeriesDef::new("dynamic_10", "Dynamic (chunk size = 10)"),
            ],
            plots: Vec::new(),
        }
    }
}
