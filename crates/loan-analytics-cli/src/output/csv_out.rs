use serde_json::Value;
use std::io;

use super::{flatten_rows, render_scalar};

/// Write output as CSV to stdout: envelopes flatten to field,value rows,
/// reference-table arrays to one record per row.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);
            let mut rows: Vec<(String, String)> = Vec::new();
            flatten_rows("", result, &mut rows);

            let _ = wtr.write_record(["field", "value"]);
            for (field, val) in &rows {
                let _ = wtr.write_record([field.as_str(), val.as_str()]);
            }
        }
        Value::Array(arr) => write_records(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&render_scalar(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_records(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(render_scalar).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&render_scalar(item)]);
        }
    }
}
