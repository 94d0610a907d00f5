use serde_json::Value;

use super::render_scalar;

/// Print just the key answer value from the output.
///
/// Heuristic: search the result (including nested sections) for
/// well-known output fields in priority order, then fall back to the
/// first field of the result object.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "monthly_payment",
        "present_value_of_payments",
        "net_gain_or_loss",
        "break_even_rate_pct",
        "real_monthly_rate",
        "total_paid",
    ];

    for key in &priority_keys {
        if let Some(val) = find_key(result, key) {
            if !val.is_null() {
                println!("{}", render_scalar(val));
                return;
            }
        }
    }

    if let Value::Object(map) = result {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, render_scalar(val));
            return;
        }
    }

    println!("{}", render_scalar(result));
}

/// Depth-first search for a key anywhere in a JSON object tree.
fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map
            .get(key)
            .or_else(|| map.values().find_map(|v| find_key(v, key))),
        _ => None,
    }
}
