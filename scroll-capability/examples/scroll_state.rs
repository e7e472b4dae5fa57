use scroll_capability::{LoadOptions, get_scroll_state, value};
use serde_json::json;

fn main() {
    let bar = json!({
        "move": { "x": 0, "y": 42.5 },
        "size": { "y": 80 },
    });

    println!("move.y={:?}", get_scroll_state(Some(&bar), "y", "move"));
    println!("move={:?}", get_scroll_state(Some(&bar), "", "move"));
    println!("size.x={:?}", get_scroll_state(Some(&bar), "x", "size"));
    println!("offset={:?}", get_scroll_state(Some(&bar), "", "offset"));

    let mut config = json!({ "load_threshold": "64" });
    value::defaults_deep(&mut config, &json!({ "axis": "y", "enabled": true }));
    match LoadOptions::from_json(&config) {
        Ok(options) => println!("options={options:?}"),
        Err(err) => println!("invalid options: {err}"),
    }
}
