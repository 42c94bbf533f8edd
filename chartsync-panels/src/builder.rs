use crate::options::{candle_panel_options, default_panel_options, merge_options};
use crate::series::{band_rows, candle_rows, xy_rows};
use crate::Dataset;
use chartsync_core::PanelIdSeq;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Candles,
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    Candles(Vec<[f64; 5]>),
    Line {
        points: Vec<(f64, f64)>,
        band: Option<Vec<(f64, f64, f64)>>,
    },
}

/// Everything a chart-construction collaborator needs to build one panel
/// and register it with the sync engine.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub id: String,
    pub title: String,
    pub kind: PanelKind,
    /// The candle panel drives the group; exactly one per dataset.
    pub master: bool,
    pub options: Value,
    pub data: PanelData,
}

/// Turn a dataset into ordered panel configs: the candle panel first and
/// flagged master, then one slave panel per auxiliary series, with ids in
/// creation order and per-series option overrides applied.
pub fn build_panels(dataset: &Dataset) -> Vec<PanelConfig> {
    let mut ids = PanelIdSeq::new();
    let mut panels = Vec::with_capacity(1 + dataset.series.len());

    panels.push(PanelConfig {
        id: ids.next_id(),
        title: "OHLC".to_string(),
        kind: PanelKind::Candles,
        master: true,
        options: candle_panel_options(),
        data: PanelData::Candles(candle_rows(&dataset.candles)),
    });

    for series in &dataset.series {
        panels.push(PanelConfig {
            id: ids.next_id(),
            title: series.name.clone(),
            kind: PanelKind::Line,
            master: false,
            options: merge_options(&default_panel_options(&series.name), &series.options),
            data: PanelData::Line {
                points: xy_rows(&series.x, &series.y),
                band: band_rows(series),
            },
        });
    }

    panels
}
