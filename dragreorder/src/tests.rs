use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i32
    }
}

/// Records moves and applies them to a plain key vector.
#[derive(Debug, Default)]
struct Recorder {
    keys: Vec<char>,
    moves: Vec<(usize, usize)>,
}

impl Recorder {
    fn new(keys: &[char]) -> Self {
        Self {
            keys: keys.to_vec(),
            ..Self::default()
        }
    }
}

impl ListMutator<char> for Recorder {
    fn move_item(&mut self, from: usize, to: usize) {
        self.moves.push((from, to));
        if from < self.keys.len() && to < self.keys.len() {
            let k = self.keys.remove(from);
            self.keys.insert(to, k);
        }
    }

    fn delete(&mut self, key: &char) {
        self.keys.retain(|k| k != key);
    }
}

/// Lays out uniformly sized rows the way a vertical virtualized list would.
fn layout(keys: &[char], size: u32, scroll: i32, viewport: i32) -> VisibleWindow<char> {
    let items = keys
        .iter()
        .enumerate()
        .map(|(i, &k)| VisibleItem::new(k, i, i as i32 * size as i32 - scroll, size))
        .filter(|it| it.end() > 0 && it.offset < viewport)
        .collect();
    VisibleWindow::new(items, 0, viewport)
}

/// Stacks rows whose height depends on their key, starting at offset 0.
fn stack(keys: &[char], size_of: impl Fn(char) -> u32, viewport: i32) -> VisibleWindow<char> {
    let mut offset = 0i32;
    let items = keys
        .iter()
        .enumerate()
        .map(|(i, &k)| {
            let item = VisibleItem::new(k, i, offset, size_of(k));
            offset += item.size as i32;
            item
        })
        .collect();
    VisibleWindow::new(items, 0, viewport)
}

fn abcd() -> [char; 4] {
    ['A', 'B', 'C', 'D']
}

#[test]
fn item_for_translates_absolute_to_window_index() {
    let keys: Vec<char> = ('a'..='j').collect();
    let w = layout(&keys, 10, 30, 40);
    assert_eq!(w.first_index(), Some(3));
    assert_eq!(w.item_for(3).map(|it| it.key), Some('d'));
    assert_eq!(w.item_for(6).map(|it| it.key), Some('g'));
    assert!(w.item_for(2).is_none());
    assert!(w.item_for(7).is_none());

    let empty = VisibleWindow::<char>::default();
    assert!(empty.item_for(0).is_none());
}

#[test]
fn item_at_is_inclusive_and_first_match_wins() {
    let w = layout(&abcd(), 50, 0, 200);
    assert_eq!(w.item_at(0).map(|it| it.key), Some('A'));
    // Shared edge belongs to the earlier item.
    assert_eq!(w.item_at(50).map(|it| it.key), Some('A'));
    assert_eq!(w.item_at(51).map(|it| it.key), Some('B'));
    assert_eq!(w.item_at(200).map(|it| it.key), Some('D'));
    assert!(w.item_at(201).is_none());
    assert!(w.item_at(-1).is_none());
}

#[test]
fn drag_start_outside_items_stays_idle() {
    let w = layout(&abcd(), 50, 0, 400);
    let mut c = DragController::default();
    let mut pulses = 0;
    let mut haptics = || pulses += 1;

    assert!(!c.on_drag_start(&w, 250.0, &mut haptics));
    assert!(!c.on_drag_start(&w, -3.0, &mut haptics));
    assert_eq!(c.phase(), DragPhase::Idle);
    assert!(c.session().is_none());
    assert_eq!(pulses, 0);

    let mut rec = Recorder::new(&abcd());
    let update = c.on_drag(&w, 120.0, &mut rec);
    assert_eq!(update, DragUpdate::default());
    assert!(rec.moves.is_empty());
}

#[test]
fn drag_start_captures_anchor_and_pulses_once() {
    let w = layout(&abcd(), 50, 0, 400);
    let mut c = DragController::default();
    let mut pulses = 0;

    assert!(c.on_drag_start(&w, 75.4, &mut || pulses += 1));
    assert_eq!(pulses, 1);
    assert_eq!(c.phase(), DragPhase::Dragging);
    let s = c.session().unwrap();
    assert_eq!(s.key(), &'B');
    assert_eq!(s.current_index(), 1);
    assert_eq!(s.anchor().offset, 50);
    assert_eq!(s.dragged_distance(), 0.0);
}

#[test]
fn haptics_can_be_disabled() {
    let w = layout(&abcd(), 50, 0, 400);
    let mut c = DragController::new(DragOptions::new().with_haptics(false));
    let mut pulses = 0;
    assert!(c.on_drag_start(&w, 10.0, &mut || pulses += 1));
    assert_eq!(pulses, 0);
}

#[test]
fn drag_a_past_b_far_edge_emits_single_move() {
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    let w = layout(&rec.keys, 50, 0, 400);
    assert!(c.on_drag_start(&w, 10.0, &mut NoHaptics));

    // Overlapping B but not past its far edge yet.
    let update = c.on_drag(&w, 30.0, &mut rec);
    assert_eq!(update.moved, None);
    let update = c.on_drag(&w, 20.0, &mut rec);
    assert_eq!(update.moved, None);

    let update = c.on_drag(&w, 1.0, &mut rec);
    assert_eq!(update.moved, Some(Move { from: 0, to: 1 }));
    assert_eq!(rec.moves, [(0, 1)]);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(rec.keys, ['B', 'A', 'C', 'D']);

    // Host re-lays out after the move; further small moves do not reorder again.
    let w = layout(&rec.keys, 50, 0, 400);
    c.on_drag(&w, 5.0, &mut rec);
    assert_eq!(rec.moves.len(), 1);
}

#[test]
fn stale_window_does_not_repeat_move() {
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    let w = layout(&rec.keys, 50, 0, 400);
    c.on_drag_start(&w, 10.0, &mut NoHaptics);
    c.on_drag(&w, 60.0, &mut rec);
    assert_eq!(rec.moves, [(0, 1)]);

    // Same (stale) window: hovered index 1 now resolves to B's old slot.
    c.on_drag(&w, 1.0, &mut rec);
    c.on_drag(&w, 1.0, &mut rec);
    assert_eq!(rec.moves, [(0, 1)]);
}

#[test]
fn dragging_up_moves_backward() {
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    let w = layout(&rec.keys, 50, 0, 400);
    assert!(c.on_drag_start(&w, 160.0, &mut NoHaptics));
    assert_eq!(c.current_index(), Some(3));

    // D spans 150..200. Moving up 49 keeps start at 101, still below C's start (100).
    assert_eq!(c.on_drag(&w, -49.0, &mut rec).moved, None);
    let update = c.on_drag(&w, -2.0, &mut rec);
    assert_eq!(update.moved, Some(Move { from: 3, to: 2 }));
    assert_eq!(rec.keys, ['A', 'B', 'D', 'C']);

    let w = layout(&rec.keys, 50, 0, 400);
    let update = c.on_drag(&w, -50.0, &mut rec);
    assert_eq!(update.moved, Some(Move { from: 2, to: 1 }));
    assert_eq!(rec.keys, ['A', 'D', 'B', 'C']);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn full_drag_walks_item_to_the_end() {
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    let mut w = layout(&rec.keys, 50, 0, 400);
    c.on_drag_start(&w, 25.0, &mut NoHaptics);

    for _ in 0..160 {
        c.on_drag(&w, 1.0, &mut rec);
        w = layout(&rec.keys, 50, 0, 400);
    }

    assert_eq!(rec.keys, ['B', 'C', 'D', 'A']);
    assert_eq!(rec.moves, [(0, 1), (1, 2), (2, 3)]);
    assert_eq!(c.current_index(), Some(3));
}

#[test]
fn small_jitter_never_reorders() {
    let mut rng = Lcg::new(7);
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    let w = layout(&rec.keys, 50, 0, 400);
    c.on_drag_start(&w, 70.0, &mut NoHaptics);

    // Stay within +/- 49 of the press position.
    let mut total = 0i32;
    for _ in 0..500 {
        let mut step = rng.gen_range_i32(-5, 6);
        if (total + step).abs() > 49 {
            step = -step;
        }
        total += step;
        let update = c.on_drag(&w, step as f32, &mut rec);
        assert_eq!(update.moved, None);
    }
    assert!(rec.moves.is_empty());
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn hovered_item_out_of_window_skips_reorder() {
    let keys: Vec<char> = ('a'..='j').collect();
    let mut rec = Recorder::new(&keys);
    let mut c = DragController::default();
    let w = layout(&rec.keys, 10, 0, 40);
    c.on_drag_start(&w, 5.0, &mut NoHaptics);

    // The list scrolled so item 0 is no longer laid out.
    let scrolled = layout(&rec.keys, 10, 20, 40);
    let update = c.on_drag(&scrolled, 30.0, &mut rec);
    assert_eq!(update.moved, None);
    assert!(rec.moves.is_empty());
}

#[test]
fn over_scroll_reports_signed_overflow() {
    let keys: Vec<char> = ('a'..='j').collect();
    let mut rec = Recorder::new(&keys);
    let mut c = DragController::default();
    let w = layout(&rec.keys, 50, 0, 200);
    assert_eq!(c.over_scroll(&w), 0.0);

    // Item d spans 150..200, flush with the trailing edge.
    c.on_drag_start(&w, 170.0, &mut NoHaptics);
    assert_eq!(c.over_scroll(&w), 0.0);

    let update = c.on_drag(&w, 40.0, &mut rec);
    assert_eq!(update.over_scroll, 40.0);
    assert!(update.needs_scroll());

    // Back above the start position but still inside: no overflow either way.
    let update = c.on_drag(&w, -60.0, &mut rec);
    assert_eq!(update.over_scroll, 0.0);
    c.on_drag_end();

    // Dragging a up 15 past the leading edge.
    c.on_drag_start(&w, 10.0, &mut NoHaptics);
    let update = c.on_drag(&w, -15.0, &mut rec);
    assert_eq!(update.over_scroll, -15.0);
}

#[test]
fn over_scroll_ignores_overflow_against_direction() {
    let keys: Vec<char> = ('a'..='j').collect();
    let mut rec = Recorder::new(&keys);
    let mut c = DragController::default();
    // Item e (200..250) is partially past the trailing edge at 220.
    let w = layout(&rec.keys, 50, 0, 220);
    c.on_drag_start(&w, 205.0, &mut NoHaptics);
    let update = c.on_drag(&w, -5.0, &mut rec);
    assert_eq!(update.over_scroll, 0.0);
}

#[test]
fn item_translation_follows_pointer() {
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    let w = layout(&rec.keys, 50, 0, 400);
    assert_eq!(c.item_translation(&w, 0), 0.0);

    c.on_drag_start(&w, 10.0, &mut NoHaptics);
    c.on_drag(&w, 30.0, &mut rec);
    assert_eq!(c.item_translation(&w, 0), 30.0);
    assert_eq!(c.item_translation(&w, 1), 0.0);

    c.on_drag(&w, 31.0, &mut rec);
    let w = layout(&rec.keys, 50, 0, 400);
    // A now sits at index 1 (offset 50); it is drawn 11 below its slot.
    assert_eq!(c.item_translation(&w, 1), 11.0);
    assert_eq!(c.item_translation(&w, 0), 0.0);
}

#[test]
fn end_and_cancel_reset_session() {
    let keys: Vec<char> = ('a'..='j').collect();
    let mut rng = Lcg::new(42);

    for round in 0..50 {
        let mut rec = Recorder::new(&keys);
        let mut c = DragController::default();
        let mut w = layout(&rec.keys, 20, 0, 200);
        let y = rng.gen_range_i32(0, 200) as f32;
        assert!(c.on_drag_start(&w, y, &mut NoHaptics));
        for _ in 0..rng.gen_range_i32(1, 40) {
            c.on_drag(&w, rng.gen_range_i32(-30, 31) as f32, &mut rec);
            w = layout(&rec.keys, 20, 0, 200);
        }

        if round % 2 == 0 {
            c.on_drag_end();
        } else {
            c.on_drag_cancel();
        }
        assert_eq!(c.phase(), DragPhase::Idle);
        assert_eq!(c.dragged_distance(), 0.0);
        assert!(c.current_index().is_none());
        assert!(c.dragged_key().is_none());
        assert_eq!(c.over_scroll(&w), 0.0);

        let mut sorted = rec.keys.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, keys);
    }
}

#[test]
fn restart_replaces_session() {
    let w = layout(&abcd(), 50, 0, 400);
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    c.on_drag_start(&w, 10.0, &mut NoHaptics);
    c.on_drag(&w, 20.0, &mut rec);
    c.on_drag_start(&w, 120.0, &mut NoHaptics);
    assert_eq!(c.dragged_key(), Some(&'C'));
    assert_eq!(c.dragged_distance(), 0.0);
}

#[test]
fn direction_is_relative_to_hovered_layout() {
    let w = layout(&abcd(), 50, 0, 400);
    let mut s = DragSession::new(w.items()[1].clone());
    let hovered = w.item_for(1).unwrap();
    assert_eq!(s.direction(hovered), DragDirection::Backward);
    s.accumulate(0.5);
    assert_eq!(s.direction(hovered), DragDirection::Forward);
    assert_eq!(s.projected_span(), Span::new(50.5, 100.5));
    assert_eq!(s.projected_span().len(), 50.0);
}

#[test]
fn short_item_crosses_tall_neighbour_at_its_far_edge() {
    // A and C are 20 tall, B is 100.
    let size_of = |k| if k == 'B' { 100 } else { 20 };
    let mut rec = Recorder::new(&['A', 'B', 'C']);
    let mut c = DragController::default();
    let mut w = stack(&rec.keys, size_of, 400);
    assert!(c.on_drag_start(&w, 5.0, &mut NoHaptics));

    let mut crossed_at = Vec::new();
    for d in 1..=130 {
        if c.on_drag(&w, 1.0, &mut rec).moved.is_some() {
            crossed_at.push(d);
        }
        w = stack(&rec.keys, size_of, 400);
    }

    // B's far edge is 120 and A's projected end is 20 + d. C then spans 120..140.
    assert_eq!(crossed_at, [101, 121]);
    assert_eq!(rec.moves, [(0, 1), (1, 2)]);
    assert_eq!(rec.keys, ['B', 'C', 'A']);
    assert_eq!(c.hovered_item(&w).map(|it| (it.key, it.offset)), Some(('A', 120)));
}

#[test]
fn tall_item_walks_one_short_row_per_step() {
    let size_of = |k| if k == 'T' { 100 } else { 20 };
    let mut rec = Recorder::new(&['T', 'a', 'b', 'c', 'd']);
    let mut c = DragController::default();
    let mut w = stack(&rec.keys, size_of, 400);
    assert!(c.on_drag_start(&w, 10.0, &mut NoHaptics));

    // Projected span 50..150 is past both a (100..120) and b (120..140). Only the first is taken.
    let update = c.on_drag(&w, 50.0, &mut rec);
    assert_eq!(update.moved, Some(Move { from: 0, to: 1 }));
    w = stack(&rec.keys, size_of, 400);
    assert_eq!(c.on_drag(&w, 0.0, &mut rec).moved, Some(Move { from: 1, to: 2 }));
    w = stack(&rec.keys, size_of, 400);
    // c spans 140..160 and is not passed yet.
    assert_eq!(c.on_drag(&w, 0.0, &mut rec).moved, None);
    assert_eq!(rec.keys, ['a', 'b', 'T', 'c', 'd']);

    for _ in 0..40 {
        c.on_drag(&w, 1.0, &mut rec);
        w = stack(&rec.keys, size_of, 400);
    }
    assert_eq!(rec.moves, [(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(rec.keys, ['a', 'b', 'c', 'd', 'T']);
}

#[test]
fn relocate_points_session_at_new_index() {
    let mut rec = Recorder::new(&abcd());
    let mut c = DragController::default();
    c.relocate(2);
    assert!(c.current_index().is_none());

    let w = layout(&rec.keys, 50, 0, 400);
    c.on_drag_start(&w, 110.0, &mut NoHaptics);
    assert_eq!(c.hovered_item(&w).map(|it| it.key), Some('C'));

    // The host removed A on its own.
    rec.delete(&'A');
    c.relocate(1);
    let w = layout(&rec.keys, 50, 0, 400);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.hovered_item(&w).map(|it| it.key), Some('C'));
    assert_eq!(c.dragged_distance(), 0.0);
    assert_eq!(c.session().map(|s| s.anchor().offset), Some(100));
}
