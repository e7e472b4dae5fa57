use crate::number::{ToNumber, check_number_or_zero};

/// Decides whether a list scrolled close enough to its end to load more content.
///
/// All three inputs are coerced with [`crate::check_number_or_zero`] first, so strings, missing
/// values and NaN never make this fail. The load zone starts `load_threshold` units before
/// `limit_y` and includes its boundary:
///
/// ```
/// use scroll_capability::check_load_capability;
///
/// assert!(check_load_capability(100, 100, 0));
/// assert!(!check_load_capability(100, 79, 20));
/// assert!(check_load_capability(100, 80, 20));
/// assert!(check_load_capability("100", "90", "10"));
/// ```
pub fn check_load_capability(
    limit_y: impl ToNumber,
    offset_y: impl ToNumber,
    load_threshold: impl ToNumber,
) -> bool {
    let limit_y = check_number_or_zero(limit_y);
    let offset_y = check_number_or_zero(offset_y);
    let load_threshold = check_number_or_zero(load_threshold);

    let can_load = offset_y >= limit_y - load_threshold;
    strace!(
        limit_y,
        offset_y,
        load_threshold,
        can_load,
        "check_load_capability"
    );
    can_load
}

/// Remaining distance before [`check_load_capability`] turns `true`.
///
/// Returns `0.0` once the offset is inside the load zone.
pub fn distance_to_load(
    limit_y: impl ToNumber,
    offset_y: impl ToNumber,
    load_threshold: impl ToNumber,
) -> f64 {
    let trigger_at = check_number_or_zero(limit_y) - check_number_or_zero(load_threshold);
    let remaining = trigger_at - check_number_or_zero(offset_y);
    // `inf - inf` yields NaN for fully unbounded inputs.
    if remaining.is_nan() {
        0.0
    } else {
        remaining.max(0.0)
    }
}
