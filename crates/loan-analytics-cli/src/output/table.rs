use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten_rows, render_scalar};

/// Render output as a table using the tabled crate.
///
/// Computation envelopes become a Field/Value table over the flattened
/// result (nested sections get dotted keys), followed by warnings and
/// the methodology line. Reference-table arrays become one row per entry.
pub fn print_table(value: &Value) {
    match value {
        Value::Array(arr) => print_record_table(arr),
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);

            let mut rows: Vec<(String, String)> = Vec::new();
            flatten_rows("", result, &mut rows);

            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (field, val) in &rows {
                builder.push_record([field.as_str(), val.as_str()]);
            }
            println!("{}", Table::from(builder));

            if let Some(Value::Array(warnings)) = map.get("warnings") {
                if !warnings.is_empty() {
                    println!("\nWarnings:");
                    for w in warnings {
                        if let Value::String(s) = w {
                            println!("  - {}", s);
                        }
                    }
                }
            }

            if let Some(Value::String(methodology)) = map.get("methodology") {
                println!("\nMethodology: {}", methodology);
            }
        }
        _ => println!("{}", value),
    }
}

fn print_record_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Column headers from the first record
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(render_scalar).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", render_scalar(item));
        }
    }
}
