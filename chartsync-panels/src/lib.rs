use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod builder;
pub mod options;
pub mod series;

pub use builder::{build_panels, PanelConfig, PanelData, PanelKind};
pub use options::merge_options;

/// Backtest output consumed by the chart builder: one candle series plus any
/// number of named auxiliary series (volume, cash, indicators).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub candles: CandleSeries,
    #[serde(default)]
    pub series: Vec<SeriesDef>,
}

/// OHLC data as parallel arrays, time in epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleSeries {
    pub x: Vec<f64>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDef {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Per-series overrides merged over the default panel options.
    #[serde(default = "default_options")]
    pub options: serde_json::Value,
    #[serde(default)]
    pub range: Option<RangeBand>,
}

fn default_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Shaded band around a series. Each edge is either one constant or one
/// value per data point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeBand {
    pub min: BandEdge,
    pub max: BandEdge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BandEdge {
    Scalar(f64),
    PerPoint(Vec<f64>),
}

impl BandEdge {
    pub fn at(&self, idx: usize) -> Option<f64> {
        match self {
            BandEdge::Scalar(value) => Some(*value),
            BandEdge::PerPoint(values) => values.get(idx).copied(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Dataset {
    pub fn load_from_file(path: &Path) -> Result<Self, DatasetError> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), DatasetError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
