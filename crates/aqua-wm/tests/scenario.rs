//! End-to-end desktop session scenarios against the public API, plus a
//! property check that no sequence of operations can push a committed
//! window origin out of the container.

use aqua_core::{Point, Rect, Size};
use aqua_wm::{WindowManager, WindowSpec};

use proptest::prelude::*;

#[test]
fn test_photo_viewer_session() {
    let mut wm = WindowManager::new(Size::new(1200.0, 800.0));

    // Open a photo viewer: centered.
    let id = wm.create_window(WindowSpec::new("Photos").with_size(800.0, 600.0), ());
    assert_eq!(wm.get(id).unwrap().rect, Rect::new(200.0, 100.0, 800.0, 600.0));

    // Drag it 50 right, 30 down by the header and release.
    wm.begin_drag(id, Point::new(600.0, 116.0)).unwrap();
    wm.drag_to(Point::new(650.0, 146.0));
    wm.end_drag();
    assert_eq!(wm.get(id).unwrap().rect, Rect::new(250.0, 130.0, 800.0, 600.0));

    // Minimize: header-only strip at the same origin.
    assert!(wm.minimize(id));
    let w = wm.get(id).unwrap();
    assert_eq!(w.rect, Rect::new(250.0, 130.0, 800.0, 32.0));
    assert!(!w.content_visible);

    // The container shrinks while it sits minimized.
    wm.container_resized(Size::new(900.0, 700.0));

    // Restore: pre-minimize size comes back, position re-clamped into the
    // smaller container, window focused.
    assert!(wm.restore(id));
    let w = wm.get(id).unwrap();
    assert_eq!(w.rect, Rect::new(100.0, 100.0, 800.0, 600.0));
    assert!(w.content_visible);
    assert!(!w.is_minimized());
}

#[test]
fn test_singleton_reopen_focuses_instead_of_duplicating() {
    let mut wm = WindowManager::new(Size::new(1200.0, 800.0));
    let photos = wm.create_window(WindowSpec::new("Photos").with_size(800.0, 600.0), ());
    let notes = wm.create_window(WindowSpec::new("Notes"), ());

    // "Re-launch" flow: look up by title, focus the live instance.
    let existing = wm.find_by_title("Photos").unwrap();
    assert_eq!(existing, photos);
    wm.bring_to_front(existing);
    assert_eq!(wm.len(), 2);
    assert!(wm.get(photos).unwrap().z > wm.get(notes).unwrap().z);

    // Once closed, the title is free again.
    wm.close(photos);
    assert_eq!(wm.find_by_title("Photos"), None);
}

#[test]
fn test_paint_order_is_back_to_front() {
    let mut wm = WindowManager::new(Size::new(1200.0, 800.0));
    let a = wm.create_window(WindowSpec::new("A"), ());
    let b = wm.create_window(WindowSpec::new("B"), ());
    let c = wm.create_window(WindowSpec::new("C"), ());
    wm.bring_to_front(b);

    let ids: Vec<_> = wm.paint_order().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![a, c, b]);
}

#[derive(Debug, Clone)]
enum Op {
    Create { w: f32, h: f32 },
    Focus(usize),
    Minimize(usize),
    Restore(usize),
    Close(usize),
    Drag { nth: usize, dx: f32, dy: f32 },
    Resize { w: f32, h: f32 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (50.0f32..2000.0, 50.0f32..2000.0).prop_map(|(w, h)| Op::Create { w, h }),
        (0usize..8).prop_map(Op::Focus),
        (0usize..8).prop_map(Op::Minimize),
        (0usize..8).prop_map(Op::Restore),
        (0usize..8).prop_map(Op::Close),
        (0usize..8, -3000.0f32..3000.0, -3000.0f32..3000.0)
            .prop_map(|(nth, dx, dy)| Op::Drag { nth, dx, dy }),
        (100.0f32..2500.0, 100.0f32..2500.0).prop_map(|(w, h)| Op::Resize { w, h }),
    ]
}

fn nth_id(wm: &WindowManager<()>, nth: usize) -> Option<u64> {
    wm.windows().get(nth % wm.len().max(1)).map(|w| w.id)
}

proptest! {
    /// Containment invariant: after any operation sequence, every committed
    /// origin satisfies 0 <= x <= max(0, cw - w) and likewise for y.
    #[test]
    fn prop_windows_stay_contained(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut wm = WindowManager::new(Size::new(1200.0, 800.0));
        for op in ops {
            match op {
                Op::Create { w, h } => {
                    wm.create_window(WindowSpec::new("W").with_size(w, h), ());
                }
                Op::Focus(nth) => {
                    if let Some(id) = nth_id(&wm, nth) {
                        wm.bring_to_front(id);
                    }
                }
                Op::Minimize(nth) => {
                    if let Some(id) = nth_id(&wm, nth) {
                        wm.minimize(id);
                    }
                }
                Op::Restore(nth) => {
                    if let Some(id) = nth_id(&wm, nth) {
                        wm.restore(id);
                    }
                }
                Op::Close(nth) => {
                    if let Some(id) = nth_id(&wm, nth) {
                        wm.close(id);
                    }
                }
                Op::Drag { nth, dx, dy } => {
                    if let Some(id) = nth_id(&wm, nth) {
                        let origin = wm.get(id).unwrap().rect.origin();
                        let grab = Point::new(origin.x + 1.0, origin.y + 1.0);
                        if wm.begin_drag(id, grab).is_ok() {
                            wm.drag_to(Point::new(grab.x + dx, grab.y + dy));
                            wm.end_drag();
                        }
                    }
                }
                Op::Resize { w, h } => {
                    wm.container_resized(Size::new(w, h));
                }
            }

            let container = wm.container();
            for w in wm.windows() {
                let max_x = (container.w - w.rect.w).max(0.0);
                let max_y = (container.h - w.rect.h).max(0.0);
                prop_assert!(
                    w.rect.x >= 0.0 && w.rect.x <= max_x,
                    "x escaped: {} not in [0, {max_x}]", w.rect.x
                );
                prop_assert!(
                    w.rect.y >= 0.0 && w.rect.y <= max_y,
                    "y escaped: {} not in [0, {max_y}]", w.rect.y
                );
            }
        }
    }

    /// The focused window always holds the strict z maximum, below the
    /// overlay band, no matter how often focus bounces.
    #[test]
    fn prop_focus_is_strict_max(focus_seq in prop::collection::vec(0usize..5, 1..200)) {
        let mut wm = WindowManager::new(Size::new(1200.0, 800.0));
        let ids: Vec<_> = (0..5)
            .map(|i| wm.create_window(WindowSpec::new(format!("W{i}")), ()))
            .collect();
        for nth in focus_seq {
            let id = ids[nth];
            wm.bring_to_front(id);
            let z = wm.get(id).unwrap().z;
            prop_assert!(z < wm.config().overlay_z);
            for other in wm.windows() {
                if other.id != id {
                    prop_assert!(other.z < z);
                }
            }
        }
    }
}
