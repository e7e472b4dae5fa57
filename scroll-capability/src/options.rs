use crate::Axis;
use crate::number::{ToNumber, check_number_or_zero};

/// Configuration for load-more checks.
///
/// This type is `Copy`; adapters can tweak a field with the `with_*` builders and hand the result
/// to their controller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadOptions {
    /// Enables/disables loading. When disabled, checks never request a load.
    pub enabled: bool,

    /// The axis the list scrolls along.
    pub axis: Axis,

    /// Distance before the scroll limit at which loading starts.
    ///
    /// `0` only loads once the limit itself is reached.
    pub load_threshold: f64,

    /// Quiet period after the last scroll event before the load check runs.
    pub debounce_ms: u64,
}

impl LoadOptions {
    pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

    pub fn new() -> Self {
        Self {
            enabled: true,
            axis: Axis::Y,
            load_threshold: 0.0,
            debounce_ms: Self::DEFAULT_DEBOUNCE_MS,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the load threshold. Values that are not numbers reset it to `0`.
    pub fn with_load_threshold(mut self, load_threshold: impl ToNumber) -> Self {
        self.load_threshold = check_number_or_zero(load_threshold);
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "json")]
impl LoadOptions {
    /// Builds options from loosely typed configuration.
    ///
    /// Missing keys are filled from [`LoadOptions::default`]. Numeric fields may be given as
    /// strings (`"load_threshold": "20"`); values that do not coerce fall back to their default.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        use serde_json::{Number, Value};

        let defaults = Self::default();
        let mut merged = value.clone();
        crate::value::defaults_deep(
            &mut merged,
            &serde_json::json!({
                "enabled": defaults.enabled,
                "axis": defaults.axis.as_str(),
                "load_threshold": defaults.load_threshold,
                "debounce_ms": defaults.debounce_ms,
            }),
        );

        if let Value::Object(map) = &mut merged {
            coerce_number_field(map, "load_threshold", defaults.load_threshold, Number::from_f64);
            coerce_number_field(map, "debounce_ms", defaults.debounce_ms as f64, |n| {
                Some(Number::from(n.max(0.0) as u64))
            });
        }

        let options: Self = serde_json::from_value(merged)?;
        sdebug!(
            enabled = options.enabled,
            axis = options.axis.as_str(),
            load_threshold = options.load_threshold,
            debounce_ms = options.debounce_ms,
            "LoadOptions::from_json"
        );
        Ok(options)
    }
}

/// Replaces `map[key]` with its coerced numeric form, using `default` for non-numbers.
#[cfg(feature = "json")]
fn coerce_number_field(
    map: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    default: f64,
    to_json: impl Fn(f64) -> Option<serde_json::Number>,
) {
    let Some(field) = map.get_mut(key) else {
        return;
    };
    let n = crate::check_number(&*field, default);
    let n = if n.is_finite() { n } else { default };
    if let Some(number) = to_json(n) {
        *field = serde_json::Value::Number(number);
    }
}
