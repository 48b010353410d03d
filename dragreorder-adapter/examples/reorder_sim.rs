use dragreorder::{VisibleItem, VisibleWindow};
use dragreorder_adapter::{DismissValue, ReorderController, ReorderOptions, sample_list};

const ROW: i32 = 48;
const VIEWPORT: i32 = 480;

fn layout(c: &ReorderController<u64, String>, scroll: i32) -> VisibleWindow<u64> {
    let items = c
        .list()
        .iter()
        .enumerate()
        .map(|(i, it)| VisibleItem::new(*it.key(), i, i as i32 * ROW - scroll, ROW as u32))
        .filter(|it| it.end() > 0 && it.offset < VIEWPORT)
        .collect();
    VisibleWindow::new(items, 0, VIEWPORT)
}

fn main() {
    // Example: the 100-row demo screen, driven without a UI toolkit.
    //
    // The host would:
    // - rebuild the visible window after every layout/scroll change
    // - forward long-press drag callbacks to the controller
    // - call tick(now_ms) every frame and scroll the real list by the returned delta
    let max_scroll = 100 * ROW - VIEWPORT;
    let mut c = ReorderController::new(sample_list(100), ReorderOptions::default());
    let mut scroll = 0i32;
    let mut now_ms = 0u64;

    let w = layout(&c, scroll);
    c.on_drag_start(&w, 440.0, &mut || println!("haptic: long press"));
    println!("dragging {:?}", c.drag().dragged_key());

    for _ in 0..40 {
        now_ms += 16;
        let w = layout(&c, scroll);
        let update = c.on_drag(&w, 6.0, now_ms);
        if let Some(m) = update.moved {
            println!("t={now_ms} move {} -> {}", m.from, m.to);
        }
        if let Some(delta) = c.tick(now_ms + 16) {
            scroll = (scroll + delta as i32).clamp(0, max_scroll);
        }
    }
    c.on_drag_end();
    println!("scroll={scroll} row 10 now at index {:?}", c.list().index_of(&10));

    // Swipe row 3 away to the start.
    c.swipe(&3, -120.0, 360.0);
    if c.release_swipe(&3) == DismissValue::DismissedToStart {
        println!("deleted row 3, {} rows left", c.list().len());
    }

    for action in c.accessibility_actions(0) {
        println!("a11y action on row 0: {}", action.label);
    }
}
