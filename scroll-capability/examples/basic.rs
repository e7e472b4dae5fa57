use scroll_capability::{Axis, ScrollBarState, check_load_capability, check_number};

fn main() {
    // Values as they might arrive from a loosely typed config or event payload.
    let limit = "1200";
    let threshold = "";

    println!("threshold={}", check_number(threshold, 0.0));
    for offset in [1000, 1179, 1200] {
        println!(
            "offset={offset} can_load={}",
            check_load_capability(limit, offset, threshold)
        );
    }

    let mut state = ScrollBarState::default();
    state.limit.y = 1200.0;
    state.offset.y = 1150.0;
    println!("state can_load(threshold=50)={}", state.can_load(Axis::Y, 50));
}
