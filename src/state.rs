use serde_json::Value;

use crate::error::{GeoPlotError, Result};

/// Resolves a slash-delimited path against a nested state value.
///
/// Each segment is dispatched on the current node's capability: object nodes
/// are traversed by key, array nodes by parsed positional index. Fails with
/// [`GeoPlotError::PathNotFound`] if a segment is absent, an index does not
/// parse or is out of range, or a leaf is reached with path remaining.
pub fn resolve<'a>(state: &'a Value, path: &str) -> Result<&'a Value> {
    let mut node = state;
    for segment in path.split('/') {
        node = match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        }
        .ok_or_else(|| GeoPlotError::PathNotFound {
            path: path.to_string(),
        })?;
    }
    Ok(node)
}

/// Interprets a resolved node as a per-agent array of `[lat, lon]` pairs.
pub fn as_coordinate_pairs(value: &Value, path: &str) -> Result<Vec<[f64; 2]>> {
    let rows = value
        .as_array()
        .ok_or_else(|| malformed(path, "expected an array of coordinate pairs"))?;
    rows.iter()
        .map(|row| {
            let pair = row
                .as_array()
                .filter(|pair| pair.len() == 2)
                .ok_or_else(|| malformed(path, "expected [lat, lon] pairs"))?;
            let lat = pair[0]
                .as_f64()
                .ok_or_else(|| malformed(path, "non-numeric latitude"))?;
            let lon = pair[1]
                .as_f64()
                .ok_or_else(|| malformed(path, "non-numeric longitude"))?;
            Ok([lat, lon])
        })
        .collect()
}

/// Flattens a resolved numeric payload depth-first into a flat scalar list,
/// one entry per agent regardless of the source array's nesting.
pub fn flatten_numbers(value: &Value, path: &str) -> Result<Vec<f64>> {
    let mut out = Vec::new();
    collect_numbers(value, path, &mut out)?;
    Ok(out)
}

fn collect_numbers(value: &Value, path: &str, out: &mut Vec<f64>) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_numbers(item, path, out)?;
            }
            Ok(())
        }
        Value::Number(number) => {
            let scalar = number
                .as_f64()
                .ok_or_else(|| malformed(path, "number does not fit in f64"))?;
            out.push(scalar);
            Ok(())
        }
        other => Err(malformed(path, &format!("expected numeric data, found {other}"))),
    }
}

fn malformed(path: &str, reason: &str) -> GeoPlotError {
    GeoPlotError::MalformedData {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_object_path() {
        let state = json!({"agents": {"citizens": {"count": 42}}});
        assert_eq!(resolve(&state, "agents/citizens/count").unwrap(), &json!(42));
    }

    #[test]
    fn resolves_array_index_segments() {
        let state = json!({"agents": [{"pos": [1.5, 2.5]}]});
        assert_eq!(resolve(&state, "agents/0/pos/1").unwrap(), &json!(2.5));
    }

    #[test]
    fn missing_key_is_path_not_found() {
        let state = json!({"agents": {}});
        let err = resolve(&state, "agents/citizens/count").unwrap_err();
        assert!(matches!(err, GeoPlotError::PathNotFound { .. }));
    }

    #[test]
    fn index_out_of_range_fails() {
        let state = json!({"agents": [1, 2]});
        assert!(resolve(&state, "agents/5").is_err());
    }

    #[test]
    fn traversal_into_leaf_fails() {
        let state = json!({"count": 3});
        assert!(resolve(&state, "count/deeper").is_err());
    }

    #[test]
    fn flattens_nested_numeric_payloads() {
        let value = json!([[1.0], [2.0], [3.5]]);
        assert_eq!(flatten_numbers(&value, "x").unwrap(), vec![1.0, 2.0, 3.5]);
    }

    #[test]
    fn non_numeric_payload_is_malformed() {
        let value = json!([["not a number"]]);
        let err = flatten_numbers(&value, "x").unwrap_err();
        assert!(matches!(err, GeoPlotError::MalformedData { .. }));
    }

    #[test]
    fn coordinate_pairs_require_two_entries() {
        assert!(as_coordinate_pairs(&json!([[1.0]]), "p").is_err());
        let pairs = as_coordinate_pairs(&json!([[40.7, -74.0]]), "p").unwrap();
        assert_eq!(pairs, vec![[40.7, -74.0]]);
    }
}
