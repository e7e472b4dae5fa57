use scroll_capability::LoadOptions;
use scroll_capability_adapter::LoadMoreController;

const ROW_HEIGHT: u64 = 20;
const VIEWPORT: u64 = 200;
const PAGE_SIZE: u64 = 25;

fn main() {
    let mut rows = PAGE_SIZE;
    let mut c = LoadMoreController::new(
        LoadOptions::default()
            .with_load_threshold(ROW_HEIGHT * 3)
            .with_debounce_ms(50),
    );
    c.on_limit(rows * ROW_HEIGHT - VIEWPORT);

    // Simulate a user scrolling in bursts: ten frames of scrolling, then a pause.
    let mut offset = 0u64;
    for frame in 0..400u64 {
        let now_ms = frame * 16;
        let limit = rows * ROW_HEIGHT - VIEWPORT;
        if frame % 20 < 10 {
            offset = (offset + 15).min(limit);
            if let Some(req) = c.on_scroll(offset, now_ms) {
                println!("t={now_ms}ms request={req:?}");
            }
        }
        if let Some(req) = c.tick(now_ms) {
            println!("t={now_ms}ms request={req:?}");
            // Pretend the data source answers immediately.
            rows += PAGE_SIZE;
            c.on_limit(rows * ROW_HEIGHT - VIEWPORT);
            c.finish_loading(c.page() < 3);
        }
    }

    println!("rows={rows} status={:?} page={}", c.status(), c.page());
}
