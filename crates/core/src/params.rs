//! Helpers for reading generator parameters out of a JSON object.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key
//! or a value of the wrong type yields the default, so these never fail.
//! The `*_in` variants also clamp into the parameter's documented range.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Like [`param_f64`], clamped to `[min, max]`. NaN falls back to `default`.
pub fn param_f64_in(params: &Value, name: &str, default: f64, min: f64, max: f64) -> f64 {
    let v = param_f64(params, name, default);
    if v.is_nan() {
        default
    } else {
        v.clamp(min, max)
    }
}

/// Extracts a count from `params[name]`, clamped to `[min, max]`.
///
/// Integers and finite floats are both accepted; floats are rounded and
/// negatives clamp to `min`.
pub fn param_usize_in(params: &Value, name: &str, default: usize, min: usize, max: usize) -> usize {
    params
        .get(name)
        .and_then(|v| {
            v.as_u64()
                .map(|u| u as f64)
                .or_else(|| v.as_f64().filter(|f| f.is_finite()))
        })
        .map(|v| v.round().clamp(min as f64, max as f64) as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_reads_integers_and_floats() {
        let params = json!({"amplitude": 12.5, "layers": 4});
        assert_eq!(param_f64(&params, "amplitude", 10.0), 12.5);
        assert_eq!(param_f64(&params, "layers", 3.0), 4.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_mistyped() {
        let params = json!({"blur": "soft", "variance": null});
        assert_eq!(param_f64(&params, "blur", 20.0), 20.0);
        assert_eq!(param_f64(&params, "variance", 50.0), 50.0);
        assert_eq!(param_f64(&params, "smoothness", 70.0), 70.0);
        assert_eq!(param_f64(&json!([1, 2]), "blur", 20.0), 20.0);
    }

    // -- clamped helpers --

    #[test]
    fn param_f64_in_clamps_both_ends() {
        let params = json!({"lo": -5.0, "hi": 500.0, "ok": 42.0});
        assert_eq!(param_f64_in(&params, "lo", 1.0, 0.0, 100.0), 0.0);
        assert_eq!(param_f64_in(&params, "hi", 1.0, 0.0, 100.0), 100.0);
        assert_eq!(param_f64_in(&params, "ok", 1.0, 0.0, 100.0), 42.0);
        assert_eq!(param_f64_in(&params, "missing", 7.0, 0.0, 100.0), 7.0);
    }

    #[test]
    fn param_usize_in_clamps_and_rounds() {
        let params = json!({"n": 40, "neg": -3, "float": 6.4});
        assert_eq!(param_usize_in(&params, "n", 6, 3, 12), 12);
        assert_eq!(param_usize_in(&params, "neg", 6, 3, 12), 3);
        assert_eq!(param_usize_in(&params, "float", 0, 3, 12), 6);
        assert_eq!(param_usize_in(&params, "missing", 6, 3, 12), 6);
    }

    #[test]
    fn param_usize_in_ignores_non_numbers() {
        let params = json!({"n": "seven"});
        assert_eq!(param_usize_in(&params, "n", 5, 1, 9), 5);
    }
}
