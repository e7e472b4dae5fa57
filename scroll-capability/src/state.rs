use crate::load::check_load_capability;
use crate::number::{ToNumber, check_number_or_zero};
use crate::{Axis, AxisPair, ScrollProp};

/// A typed snapshot of a scrollbar's geometry and position.
///
/// Missing fields deserialize to zero (with `feature = "serde"`), which matches how partial state
/// is treated everywhere else in this crate. The `thumb_move` field is named `move` on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollBarState {
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub thumb_move: AxisPair<f64>,
    pub size: AxisPair<f64>,
    pub offset: AxisPair<f64>,
    pub limit: AxisPair<f64>,
}

impl ScrollBarState {
    pub fn get(&self, prop: ScrollProp) -> AxisPair<f64> {
        match prop {
            ScrollProp::Move => self.thumb_move,
            ScrollProp::Size => self.size,
            ScrollProp::Offset => self.offset,
            ScrollProp::Limit => self.limit,
        }
    }

    pub fn get_axis(&self, prop: ScrollProp, axis: Axis) -> f64 {
        self.get(prop).get(axis)
    }

    fn get_mut(&mut self, prop: ScrollProp) -> &mut AxisPair<f64> {
        match prop {
            ScrollProp::Move => &mut self.thumb_move,
            ScrollProp::Size => &mut self.size,
            ScrollProp::Offset => &mut self.offset,
            ScrollProp::Limit => &mut self.limit,
        }
    }

    /// Stores a coerced value; anything that is not a number is stored as `0`.
    pub fn set_axis(&mut self, prop: ScrollProp, axis: Axis, value: impl ToNumber) {
        self.get_mut(prop).set(axis, check_number_or_zero(value));
    }

    /// Whether the offset on `axis` reached the load zone in front of its limit.
    pub fn can_load(&self, axis: Axis, load_threshold: impl ToNumber) -> bool {
        check_load_capability(
            self.limit.get(axis),
            self.offset.get(axis),
            load_threshold,
        )
    }
}

/// The result of a typed scroll state lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollStateValue {
    /// The lookup was narrowed to one axis.
    Axis(f64),
    /// Both axes of the requested region.
    Pair(AxisPair<f64>),
}

/// Reads `prop` from an optional scrollbar state, optionally narrowed to one axis.
///
/// A missing state degrades the same way an empty one would: without an axis the caller gets a
/// zeroed pair, with an axis there is nothing to read and `None` is returned.
pub fn scroll_state(
    state: Option<&ScrollBarState>,
    prop: ScrollProp,
    axis: Option<Axis>,
) -> Option<ScrollStateValue> {
    match (state, axis) {
        (Some(state), Some(axis)) => Some(ScrollStateValue::Axis(state.get_axis(prop, axis))),
        (Some(state), None) => Some(ScrollStateValue::Pair(state.get(prop))),
        (None, Some(_)) => None,
        (None, None) => Some(ScrollStateValue::Pair(AxisPair::default())),
    }
}

/// Reads the state at the dotted path `prop` of an arbitrary scrollbar value.
///
/// - An unresolved path yields an empty object.
/// - `axis` `"x"`/`"y"` narrows the resolved state to that key; `None` when it is absent.
/// - Any other `axis` returns the resolved state as is.
///
/// ```
/// use scroll_capability::get_scroll_state;
/// use serde_json::json;
///
/// let bar = json!({ "move": { "x": 5, "y": 9 } });
/// assert_eq!(get_scroll_state(Some(&bar), "x", "move"), Some(json!(5)));
/// assert_eq!(get_scroll_state(Some(&json!({})), "x", "move"), None);
/// assert_eq!(get_scroll_state(None, "", "move"), Some(json!({})));
/// ```
#[cfg(feature = "json")]
pub fn get_scroll_state(
    scroll_bar: Option<&serde_json::Value>,
    axis: &str,
    prop: &str,
) -> Option<serde_json::Value> {
    use serde_json::{Map, Value};

    let empty = Value::Object(Map::new());
    let state = crate::value::get(scroll_bar, prop).unwrap_or(&empty);

    match Axis::parse(axis) {
        Some(axis) => crate::value::get(Some(state), axis.as_str()).cloned(),
        None => Some(state.clone()),
    }
}
