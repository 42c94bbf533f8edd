use chartsync_panels::series::{band_rows, candle_rows, xy_rows};
use chartsync_panels::{
    build_panels, BandEdge, CandleSeries, Dataset, PanelData, PanelKind, RangeBand, SeriesDef,
};
use serde_json::json;

fn sample_dataset() -> Dataset {
    Dataset {
        candles: CandleSeries {
            x: vec![1000.0, 2000.0, 3000.0],
            open: vec![10.0, 11.0, 12.0],
            high: vec![10.5, 11.5, 12.5],
            low: vec![9.5, 10.5, 11.5],
            close: vec![10.2, 11.2, 12.2],
        },
        series: vec![
            SeriesDef {
                name: "volume".to_string(),
                x: vec![1000.0, 2000.0, 3000.0],
                y: vec![500.0, 700.0, 650.0],
                options: json!({}),
                range: None,
            },
            SeriesDef {
                name: "psar".to_string(),
                x: vec![1000.0, 2000.0, 3000.0],
                y: vec![10.1, 11.1, 12.1],
                options: json!({"height_pct": 20}),
                range: Some(RangeBand {
                    min: BandEdge::Scalar(9.0),
                    max: BandEdge::PerPoint(vec![11.0, 12.0, 13.0]),
                }),
            },
        ],
    }
}

#[test]
fn candle_rows_pair_up_parallel_arrays() {
    let rows = candle_rows(&sample_dataset().candles);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], [2000.0, 11.0, 11.5, 10.5, 11.2]);
}

#[test]
fn mismatched_candle_arrays_truncate_to_shortest() {
    let mut candles = sample_dataset().candles;
    candles.close.pop();
    let rows = candle_rows(&candles);
    assert_eq!(rows.len(), 2);
}

#[test]
fn xy_rows_zip_to_the_shorter_side() {
    let rows = xy_rows(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
    assert_eq!(rows, vec![(1.0, 10.0), (2.0, 20.0)]);
}

#[test]
fn band_edges_mix_scalar_and_per_point() {
    let dataset = sample_dataset();
    let rows = band_rows(&dataset.series[1]).unwrap();
    assert_eq!(
        rows,
        vec![
            (1000.0, 9.0, 11.0),
            (2000.0, 9.0, 12.0),
            (3000.0, 9.0, 13.0),
        ]
    );
    assert!(band_rows(&dataset.series[0]).is_none());
}

#[test]
fn short_per_point_edge_drops_trailing_rows() {
    let mut dataset = sample_dataset();
    dataset.series[1].range = Some(RangeBand {
        min: BandEdge::PerPoint(vec![9.0]),
        max: BandEdge::Scalar(13.0),
    });
    let rows = band_rows(&dataset.series[1]).unwrap();
    assert_eq!(rows, vec![(1000.0, 9.0, 13.0)]);
}

#[test]
fn builder_puts_the_master_candle_panel_first() {
    let panels = build_panels(&sample_dataset());

    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0].kind, PanelKind::Candles);
    assert!(panels[0].master);
    assert_eq!(panels[0].id, "panel_0");
    assert!(matches!(&panels[0].data, PanelData::Candles(rows) if rows.len() == 3));

    let masters = panels.iter().filter(|p| p.master).count();
    assert_eq!(masters, 1);
    let ids: Vec<&str> = panels.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["panel_0", "panel_1", "panel_2"]);
}

#[test]
fn builder_merges_series_overrides_into_defaults() {
    let panels = build_panels(&sample_dataset());

    let volume = &panels[1];
    assert_eq!(volume.options["height_pct"], json!(10));
    assert_eq!(volume.options["value_axis"]["title"], json!("volume"));

    let psar = &panels[2];
    assert_eq!(psar.options["height_pct"], json!(20));
    assert_eq!(psar.options["tooltip"]["enabled"], json!(false));
    assert!(matches!(
        &psar.data,
        PanelData::Line { band: Some(rows), .. } if rows.len() == 3
    ));
}

#[test]
fn dataset_round_trips_through_a_file() {
    let dataset = sample_dataset();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("backtest.json");

    dataset.save_to_file(&path).unwrap();
    let loaded = Dataset::load_from_file(&path).unwrap();

    assert_eq!(loaded.candles.x, dataset.candles.x);
    assert_eq!(loaded.series.len(), 2);
    assert_eq!(loaded.series[1].name, "psar");
    match &loaded.series[1].range.as_ref().unwrap().max {
        BandEdge::PerPoint(values) => assert_eq!(values.len(), 3),
        BandEdge::Scalar(_) => panic!("expected per-point edge"),
    }
}

#[test]
fn missing_series_defaults_to_empty() {
    let raw = json!({
        "candles": {
            "x": [1000.0],
            "open": [1.0],
            "high": [2.0],
            "low": [0.5],
            "close": [1.5],
        }
    });
    let dataset: Dataset = serde_json::from_value(raw).unwrap();
    assert!(dataset.series.is_empty());
    let panels = build_panels(&dataset);
    assert_eq!(panels.len(), 1);
}
