use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use crate::error::{DataError, ReportError};

/// Measured times in milliseconds, keyed by series key and thread count.
/// Loaded once per run and read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    series: HashMap<String, HashMap<u32, f64>>,
}

impl Dataset {
    /// Reads and parses the results file. Either the whole dataset loads or
    /// the run aborts, there is no partial success and no retry.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let raw = fs::read_to_string(path).map_err(|err| ReportError::DataUnavailable {
            path: path.to_owned(),
            source: err.into(),
        })?;
        let dataset = Self::parse(&raw).map_err(|source| ReportError::DataUnavailable {
            path: path.to_owned(),
            source,
        })?;
        debug!("Loaded {} series from {}", dataset.series.len(), path.display());
        Ok(dataset)
    }

    /// Parses the nested mapping series-key -> thread-count -> time (ms).
    /// Thread counts are stored as text keys and must parse as positive
    /// integers; missing series or thread counts are fine, they are absent
    /// measurements.
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        let nested: HashMap<String, HashMap<String, f64>> = serde_json::from_str(raw)?;

        let mut series = HashMap::new();
        for (key, timings) in nested {
            let mut by_threads = HashMap::new();
            for (threads, time) in timings {
                let parsed = threads
                    .parse::<u32>()
                    .ok()
                    .filter(|t| *t > 0)
                    .ok_or_else(|| DataError::ThreadKey(threads.clone()))?;
                by_threads.insert(parsed, time);
            }
            series.insert(key, by_threads);
        }
        Ok(Self { series })
    }

    /// The measurement for a (series, thread count) pair, if one was taken.
    pub fn lookup(&self, key: &str, threads: u32) -> Option<f64> {
        self.series.get(key).and_then(|timings| timings.get(&threads)).copied()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
