use serde_json::{json, Value};

/// Recursive option merge: where both sides carry a nested mapping the maps
/// merge key by key; any other override value replaces the default
/// wholesale, arrays included. Pure function, neither input is mutated.
pub fn merge_options(base: &Value, over: &Value) -> Value {
    match (base, over) {
        (Value::Object(base_map), Value::Object(over_map)) => {
            let mut out = base_map.clone();
            for (key, value) in over_map {
                let merged = match base_map.get(key) {
                    Some(existing) => merge_options(existing, value),
                    None => value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        _ => over.clone(),
    }
}

/// Defaults for the primary candle panel.
pub fn candle_panel_options() -> Value {
    json!({
        "height_pct": 40,
        "time_axis": { "kind": "datetime", "crosshair": true },
        "value_axis": { "title": "OHLC", "opposite": false, "crosshair": true },
        "tooltip": { "enabled": false },
    })
}

/// Defaults for an auxiliary series panel.
pub fn default_panel_options(title: &str) -> Value {
    json!({
        "height_pct": 10,
        "time_axis": { "kind": "datetime", "crosshair": true },
        "value_axis": { "title": title, "opposite": false, "crosshair": true },
        "tooltip": { "enabled": false },
        "markers": { "enabled": false },
    })
}
