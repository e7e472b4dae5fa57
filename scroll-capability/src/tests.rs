use crate::*;

use alloc::string::String;
use proptest::prelude::*;

#[test]
fn check_number_treats_omitted_values_as_zero() {
    assert_eq!(check_number(None::<f64>, 0.0), 0.0);
    assert_eq!(check_number(None::<f64>, 5.0), 0.0);
    assert_eq!(check_number(None::<&str>, 7.0), 0.0);
    assert_eq!(check_number_or_zero(None::<i32>), 0.0);
    assert_eq!(check_number(Some(3), 7.0), 3.0);
}

#[test]
fn check_number_defaults_present_non_numbers() {
    assert_eq!(check_number("abc", 5.0), 5.0);
    assert_eq!(check_number(Some("abc"), 5.0), 5.0);
    assert_eq!(check_number("", -1.0), -1.0);
    assert_eq!(check_number(f64::NAN, 2.5), 2.5);
}

#[test]
fn check_number_ignores_byte_order_marks() {
    assert_eq!(check_number("\u{feff}42", 0.0), 42.0);
    assert_eq!(check_number(" \u{feff}-1.5\u{feff} ", 0.0), -1.5);
    assert_eq!(parse_number("\u{feff}"), Err(NumberError::Empty));
}

#[test]
fn check_number_coerces_numeric_text() {
    assert_eq!(check_number("3.5", 0.0), 3.5);
    assert_eq!(check_number("  -12 ", 0.0), -12.0);
    assert_eq!(check_number("1e3", 0.0), 1000.0);
    assert_eq!(check_number(".5", 0.0), 0.5);
    assert_eq!(check_number("0x1F", 0.0), 31.0);
    assert_eq!(check_number("0b101", 0.0), 5.0);
    assert_eq!(check_number("-Infinity", 0.0), f64::NEG_INFINITY);
    assert_eq!(check_number(String::from("42"), 0.0), 42.0);
}

#[test]
fn check_number_falls_back_for_non_numbers() {
    assert_eq!(check_number("abc", 5.0), 5.0);
    assert_eq!(check_number("", 5.0), 5.0);
    assert_eq!(check_number("   ", 5.0), 5.0);
    assert_eq!(check_number("12px", 5.0), 5.0);
    assert_eq!(check_number("NaN", 5.0), 5.0);
    assert_eq!(check_number("inf", 5.0), 5.0);
    assert_eq!(check_number("-0x10", 5.0), 5.0);
    assert_eq!(check_number("0x", 5.0), 5.0);
    assert_eq!(check_number(f64::NAN, 5.0), 5.0);
    assert_eq!(check_number(f32::NAN, 5.0), 5.0);
}

#[test]
fn check_number_accepts_plain_numbers() {
    assert_eq!(check_number(3u8, 0.0), 3.0);
    assert_eq!(check_number(-4i64, 0.0), -4.0);
    assert_eq!(check_number(2.25f32, 0.0), 2.25);
    assert_eq!(check_number(true, 0.0), 1.0);
    assert_eq!(check_number(false, 9.0), 0.0);
    assert_eq!(check_number(f64::INFINITY, 0.0), f64::INFINITY);
}

#[test]
fn parse_number_reports_why_it_failed() {
    assert_eq!(parse_number(""), Err(NumberError::Empty));
    assert_eq!(parse_number(" \t"), Err(NumberError::Empty));
    assert_eq!(parse_number("ten"), Err(NumberError::Invalid));
    assert_eq!(parse_number("1_000"), Err(NumberError::Invalid));
    assert_eq!(f64::NAN.to_number(), Err(NumberError::NotANumber));
    assert_eq!(None::<u32>.to_number(), Ok(0.0));
    assert_eq!(parse_number("+Infinity"), Ok(f64::INFINITY));
    assert_eq!(parse_number("0o17"), Ok(15.0));
}

#[test]
fn load_capability_is_inclusive_at_the_boundary() {
    assert!(check_load_capability(100, 100, 0));
    assert!(!check_load_capability(100, 99, 0));
    assert!(!check_load_capability(100, 79, 20));
    assert!(check_load_capability(100, 80, 20));
    assert!(check_load_capability(100, 120, 20));
}

#[test]
fn load_capability_coerces_inputs() {
    assert!(check_load_capability("100", "90", "10"));
    assert!(!check_load_capability("100", "89.5", "10"));
    // Garbage collapses to zero on every side.
    assert!(check_load_capability("abc", None::<f64>, ""));
    assert!(check_load_capability(100.0, f64::NAN, 200));
    assert!(!check_load_capability(100.0, f64::NAN, "x"));
}

#[test]
fn distance_to_load_shrinks_to_zero() {
    assert_eq!(distance_to_load(100, 50, 20), 30.0);
    assert_eq!(distance_to_load(100, 80, 20), 0.0);
    assert_eq!(distance_to_load(100, 95, 20), 0.0);
    assert_eq!(distance_to_load("100", "abc", "10"), 90.0);
    assert_eq!(
        distance_to_load(f64::INFINITY, 0, f64::INFINITY),
        0.0,
        "unbounded limit and threshold cancel out"
    );
}

#[test]
fn axis_parse_only_accepts_x_and_y() {
    assert_eq!(Axis::parse("x"), Some(Axis::X));
    assert_eq!(Axis::parse("y"), Some(Axis::Y));
    assert_eq!(Axis::parse(""), None);
    assert_eq!(Axis::parse("X"), None);
    assert_eq!(Axis::parse("z"), None);
    assert_eq!(Axis::Y.cross(), Axis::X);
    assert_eq!(Axis::default(), Axis::Y);
}

#[test]
fn scroll_prop_round_trips_names() {
    for prop in [
        ScrollProp::Move,
        ScrollProp::Size,
        ScrollProp::Offset,
        ScrollProp::Limit,
    ] {
        assert_eq!(ScrollProp::parse(prop.as_str()), Some(prop));
    }
    assert_eq!(ScrollProp::parse("move.x"), None);
}

#[test]
fn scroll_bar_state_reads_and_writes_by_axis() {
    let mut state = ScrollBarState::default();
    state.set_axis(ScrollProp::Move, Axis::X, 5);
    state.set_axis(ScrollProp::Move, Axis::Y, "9");
    state.set_axis(ScrollProp::Limit, Axis::Y, "not a number");

    assert_eq!(state.get(ScrollProp::Move), AxisPair::new(5.0, 9.0));
    assert_eq!(state.get_axis(ScrollProp::Move, Axis::Y), 9.0);
    assert_eq!(state.get_axis(ScrollProp::Limit, Axis::Y), 0.0);
}

#[test]
fn scroll_bar_state_can_load_uses_its_axis() {
    let mut state = ScrollBarState::default();
    state.limit = AxisPair::new(50.0, 400.0);
    state.offset = AxisPair::new(50.0, 370.0);

    assert!(state.can_load(Axis::X, 0));
    assert!(!state.can_load(Axis::Y, 20));
    assert!(state.can_load(Axis::Y, 30));
    assert!(state.can_load(Axis::Y, "30"));
}

#[test]
fn typed_scroll_state_degrades_like_dynamic_lookup() {
    let mut state = ScrollBarState::default();
    state.thumb_move = AxisPair::new(5.0, 9.0);

    assert_eq!(
        scroll_state(Some(&state), ScrollProp::Move, Some(Axis::X)),
        Some(ScrollStateValue::Axis(5.0))
    );
    assert_eq!(
        scroll_state(Some(&state), ScrollProp::Move, None),
        Some(ScrollStateValue::Pair(AxisPair::new(5.0, 9.0)))
    );
    assert_eq!(scroll_state(None, ScrollProp::Move, Some(Axis::X)), None);
    assert_eq!(
        scroll_state(None, ScrollProp::Move, None),
        Some(ScrollStateValue::Pair(AxisPair::default()))
    );
}

#[test]
fn load_options_builders() {
    let options = LoadOptions::default()
        .with_axis(Axis::X)
        .with_load_threshold("24")
        .with_debounce_ms(0)
        .with_enabled(false);

    assert_eq!(options.axis, Axis::X);
    assert_eq!(options.load_threshold, 24.0);
    assert_eq!(options.debounce_ms, 0);
    assert!(!options.enabled);

    assert_eq!(
        LoadOptions::new().with_load_threshold("wide").load_threshold,
        0.0
    );
    assert_eq!(
        LoadOptions::default().debounce_ms,
        LoadOptions::DEFAULT_DEBOUNCE_MS
    );
}

proptest! {
    #[test]
    fn check_number_never_returns_nan(s in "\\PC*", default in -1.0e6f64..1.0e6) {
        let n = check_number(s.as_str(), default);
        prop_assert!(!n.is_nan());
    }

    #[test]
    fn check_number_is_deterministic(s in "[-+0-9.eExob ]{0,12}") {
        let first = check_number(s.as_str(), 1.5);
        let second = check_number(s.as_str(), 1.5);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn check_number_round_trips_formatted_floats(n in -1.0e9f64..1.0e9) {
        let text = std::format!("{n}");
        prop_assert_eq!(check_number(text.as_str(), 0.0), n);
    }

    #[test]
    fn load_capability_matches_the_comparison(
        limit in -1.0e6f64..1.0e6,
        offset in -1.0e6f64..1.0e6,
        threshold in 0.0f64..1.0e4,
    ) {
        prop_assert_eq!(
            check_load_capability(limit, offset, threshold),
            offset >= limit - threshold
        );
        prop_assert_eq!(
            check_load_capability(limit, offset, threshold),
            distance_to_load(limit, offset, threshold) == 0.0
        );
    }
}

#[cfg(feature = "json")]
mod json {
    use crate::value::*;
    use crate::*;

    use alloc::string::String;
    use alloc::vec;
    use serde_json::json;

    fn keys(path: &str) -> alloc::vec::Vec<String> {
        parse_path(path)
    }

    #[test]
    fn get_scroll_state_narrows_by_axis() {
        let bar = json!({ "move": { "x": 5, "y": 9 } });
        assert_eq!(get_scroll_state(Some(&bar), "x", "move"), Some(json!(5)));
        assert_eq!(get_scroll_state(Some(&bar), "y", "move"), Some(json!(9)));
    }

    #[test]
    fn get_scroll_state_without_axis_returns_the_whole_state() {
        let bar = json!({ "move": { "x": 5, "y": 9 } });
        assert_eq!(
            get_scroll_state(Some(&bar), "", "move"),
            Some(json!({ "x": 5, "y": 9 }))
        );
        assert_eq!(
            get_scroll_state(Some(&bar), "z", "move"),
            Some(json!({ "x": 5, "y": 9 }))
        );
    }

    #[test]
    fn get_scroll_state_degrades_on_missing_data() {
        assert_eq!(get_scroll_state(Some(&json!({})), "x", "move"), None);
        assert_eq!(get_scroll_state(None, "", "move"), Some(json!({})));
        assert_eq!(get_scroll_state(None, "y", "move"), None);
        assert_eq!(
            get_scroll_state(Some(&json!({ "move": { "x": 1 } })), "y", "move"),
            None
        );
        // Malformed shapes never panic.
        assert_eq!(get_scroll_state(Some(&json!(42)), "", "a.b.c"), Some(json!({})));
        assert_eq!(get_scroll_state(Some(&json!({ "move": 3 })), "x", "move"), None);
        assert_eq!(
            get_scroll_state(Some(&json!({ "move": null })), "", "move"),
            Some(json!(null))
        );
    }

    #[test]
    fn get_scroll_state_follows_nested_paths() {
        let bar = json!({ "bars": [{ "offset": { "y": 12 } }] });
        assert_eq!(
            get_scroll_state(Some(&bar), "y", "bars[0].offset"),
            Some(json!(12))
        );
        assert_eq!(
            get_scroll_state(Some(&bar), "y", "bars.0.offset"),
            Some(json!(12))
        );
    }

    #[test]
    fn get_scroll_state_is_idempotent() {
        let bar = json!({ "move": { "x": 5 } });
        let first = get_scroll_state(Some(&bar), "x", "move");
        let second = get_scroll_state(Some(&bar), "x", "move");
        assert_eq!(first, second);
        assert_eq!(bar, json!({ "move": { "x": 5 } }));
    }

    #[test]
    fn typed_state_deserializes_from_partial_json() {
        let state: ScrollBarState =
            serde_json::from_value(json!({ "move": { "x": 5 }, "limit": { "y": 300 } })).unwrap();
        assert_eq!(state.thumb_move, AxisPair::new(5.0, 0.0));
        assert_eq!(state.limit.y, 300.0);
        assert_eq!(state.offset, AxisPair::default());

        let value = serde_json::to_value(state).unwrap();
        assert_eq!(
            get_scroll_state(Some(&value), "x", "move"),
            Some(json!(5.0))
        );
    }

    #[test]
    fn parse_path_handles_dots_and_brackets() {
        assert_eq!(keys("a.b"), vec!["a", "b"]);
        assert_eq!(keys("a[0].b"), vec!["a", "0", "b"]);
        assert_eq!(keys("a[0][1]"), vec!["a", "0", "1"]);
        assert_eq!(keys(r#"a["b.c"].d"#), vec!["a", "b.c", "d"]);
        assert_eq!(keys(r#"a['it\'s']"#), vec!["a", "it's"]);
        assert_eq!(keys("a..b"), vec!["a", "", "b"]);
        assert_eq!(keys(".a"), vec!["", "a"]);
        assert_eq!(keys("a."), vec!["a", ""]);
        assert_eq!(keys(""), vec![""]);
        assert_eq!(keys("a["), vec!["a["]);
    }

    #[test]
    fn get_reads_nested_values() {
        let v = json!({ "a": { "b": [10, { "c": null }] }, "x.y": 1 });
        assert_eq!(get(Some(&v), "a.b[0]"), Some(&json!(10)));
        assert_eq!(get(Some(&v), "a.b.1.c"), Some(&json!(null)));
        assert_eq!(get(Some(&v), "x.y"), Some(&json!(1)));
        assert_eq!(get(Some(&v), "a.b.01"), None);
        assert_eq!(get(Some(&v), "a.b.+1"), None);
        assert_eq!(get(Some(&v), "a.missing.c"), None);
        assert_eq!(get(None, "a"), None);
        assert_eq!(get(Some(&v), ""), None);
    }

    #[test]
    fn get_or_only_defaults_unresolved_paths() {
        let v = json!({ "a": null });
        assert_eq!(get_or(Some(&v), "a", json!(1)), json!(null));
        assert_eq!(get_or(Some(&v), "b", json!(1)), json!(1));
    }

    #[test]
    fn defaults_deep_fills_only_missing_keys() {
        let mut target = json!({ "a": { "b": 1 }, "n": null, "list": [1] });
        defaults_deep(
            &mut target,
            &json!({ "a": { "b": 2, "c": 3 }, "n": 4, "list": [9, 2], "d": "x" }),
        );
        assert_eq!(
            target,
            json!({ "a": { "b": 1, "c": 3 }, "n": null, "list": [1, 2], "d": "x" })
        );
    }

    #[test]
    fn defaults_deep_ignores_mismatched_shapes() {
        let mut target = json!({ "a": 1 });
        defaults_deep(&mut target, &json!({ "a": { "b": 2 } }));
        assert_eq!(target, json!({ "a": 1 }));

        let mut scalar = json!(3);
        defaults_deep(&mut scalar, &json!({ "a": 1 }));
        assert_eq!(scalar, json!(3));
    }

    #[test]
    fn predicates_follow_loose_semantics() {
        assert!(is_array(&json!([])));
        assert!(!is_array(&json!({})));

        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!(true)));
        assert!(is_empty(&json!(12)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!("a")));
        assert!(!is_empty(&json!([0])));
        assert!(!is_empty(&json!({ "a": null })));
    }

    #[test]
    fn json_values_coerce_like_text() {
        assert_eq!(check_number(&json!("3.5"), 0.0), 3.5);
        assert_eq!(check_number(&json!(7), 0.0), 7.0);
        assert_eq!(check_number(&json!(true), 0.0), 1.0);
        assert_eq!(check_number(&json!(null), 2.0), 2.0);
        assert_eq!(check_number(&json!([1]), 2.0), 2.0);
        assert!(check_load_capability(&json!("100"), &json!(90), &json!("10")));
    }

    #[test]
    fn load_options_from_json_fills_and_coerces() {
        let options =
            LoadOptions::from_json(&json!({ "axis": "x", "load_threshold": "20" })).unwrap();
        assert_eq!(options.axis, Axis::X);
        assert_eq!(options.load_threshold, 20.0);
        assert!(options.enabled);
        assert_eq!(options.debounce_ms, LoadOptions::DEFAULT_DEBOUNCE_MS);

        let options =
            LoadOptions::from_json(&json!({ "load_threshold": "wide", "debounce_ms": "40" }))
                .unwrap();
        assert_eq!(options.load_threshold, 0.0);
        assert_eq!(options.debounce_ms, 40);

        assert_eq!(LoadOptions::from_json(&json!({})).unwrap(), LoadOptions::default());
        assert!(LoadOptions::from_json(&json!({ "axis": "z" })).is_err());
        assert!(LoadOptions::from_json(&json!([1, 2])).is_err());
    }
}
