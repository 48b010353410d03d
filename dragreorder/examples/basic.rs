// Example: drag the first of four rows to the bottom and watch the moves.
use dragreorder::{DragController, ListMutator, VisibleItem, VisibleWindow};

struct Rows(Vec<&'static str>);

impl ListMutator<&'static str> for Rows {
    fn move_item(&mut self, from: usize, to: usize) {
        let row = self.0.remove(from);
        self.0.insert(to, row);
        println!("move {from} -> {to}: {:?}", self.0);
    }

    fn delete(&mut self, key: &&'static str) {
        self.0.retain(|k| k != key);
    }
}

fn window(rows: &Rows) -> VisibleWindow<&'static str> {
    let items = rows
        .0
        .iter()
        .enumerate()
        .map(|(i, &k)| VisibleItem::new(k, i, i as i32 * 48, 48))
        .collect();
    VisibleWindow::new(items, 0, 480)
}

fn main() {
    let mut rows = Rows(vec!["alpha", "beta", "gamma", "delta"]);
    let mut drag = DragController::default();

    let started = drag.on_drag_start(&window(&rows), 20.0, &mut || println!("bzz"));
    println!("started={started} key={:?}", drag.dragged_key());

    for _ in 0..30 {
        let w = window(&rows);
        drag.on_drag(&w, 5.0, &mut rows);
    }
    let w = window(&rows);
    println!(
        "index={:?} translation={}",
        drag.current_index(),
        drag.item_translation(&w, drag.current_index().unwrap_or(0))
    );

    drag.on_drag_end();
    println!("final: {:?}", rows.0);
}
