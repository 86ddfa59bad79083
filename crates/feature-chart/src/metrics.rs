// File: crates/feature-chart/src/metrics.rs
// Summary: Table of collected metric samples (one timestamp column, many feature columns) loaded from CSV.
// Notes:
// - Headers are matched case-insensitively; the time column may be called
//   `timestamp`, `time` or `ts`.
// - Empty or non-numeric cells (e.g. a collector that failed to read a value)
//   are kept as gaps and skipped when a feature is extracted.

use std::io::Read;
use std::path::Path;

use log::warn;

use crate::data::ChartData;
use crate::error::InputError;

const TIME_COLUMNS: [&str; 3] = ["timestamp", "time", "ts"];

pub struct MetricsTable {
    /// Feature column names, in file order.
    features: Vec<String>,
    timestamps: Vec<Option<f64>>,
    /// One row per sample, one cell per feature.
    rows: Vec<Vec<Option<f64>>>,
}

impl MetricsTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(InputError::io(path))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        let time_idx = headers
            .iter()
            .position(|h| TIME_COLUMNS.contains(&h.as_str()))
            .ok_or_else(|| InputError::MissingColumn(TIME_COLUMNS[0].to_string()))?;

        let feature_idx: Vec<usize> = (0..headers.len()).filter(|i| *i != time_idx).collect();
        let features = feature_idx.iter().map(|i| headers[*i].clone()).collect();

        let mut timestamps = Vec::new();
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let cell = |i: usize| rec.get(i).and_then(parse_cell);
            timestamps.push(cell(time_idx));
            rows.push(feature_idx.iter().map(|i| cell(*i)).collect());
        }

        Ok(Self { features, timestamps, rows })
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Number of samples (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Timestamps and values of one feature. Rows missing either are skipped.
    pub fn chart_data(&self, feature: &str) -> Result<ChartData, InputError> {
        let col = self
            .features
            .iter()
            .position(|f| f.eq_ignore_ascii_case(feature))
            .ok_or_else(|| InputError::UnknownFeature {
                feature: feature.to_string(),
                available: self.features.clone(),
            })?;

        let mut data = ChartData::default();
        let mut skipped = 0usize;
        for (ts, row) in self.timestamps.iter().zip(&self.rows) {
            match (ts, row.get(col).copied().flatten()) {
                (Some(ts), Some(v)) => {
                    data.timestamps.push(*ts);
                    data.values.push(v);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!("skipped {skipped} of {} samples without a '{feature}' value", self.len());
        }
        Ok(data)
    }
}

fn parse_cell(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}
