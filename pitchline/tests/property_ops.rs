use pitchline::geometry::catmull::SEGMENT_STEPS;
use pitchline::{DragState, Editor, NullMarkers, MAX_POINTS};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Ev {
    Down { x: i16, y: i16 },
    Move { x: i16, y: i16 },
    Up,
}

fn ev_strategy() -> impl Strategy<Value = Ev> {
    // Coordinates deliberately overshoot the canvas so moves exercise
    // clamping; downs are pre-clamped like the input adapter guarantees.
    prop_oneof![
        (0i16..=800, 0i16..=400).prop_map(|(x, y)| Ev::Down { x, y }),
        (-200i16..=1000, -200i16..=600).prop_map(|(x, y)| Ev::Move { x, y }),
        Just(Ev::Up),
    ]
}

fn check_invariants(ed: &Editor) {
    let pts = ed.points();
    // I1: non-decreasing in x.
    assert!(pts.windows(2).all(|w| w[0].x <= w[1].x));
    // I2: bounded size.
    assert!(pts.len() <= MAX_POINTS);
    // I3: unique ids.
    let mut ids: Vec<u32> = pts.iter().map(|p| p.id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), pts.len());
    // Coordinates stay finite and inside the canvas.
    for p in pts {
        assert!(p.x >= 0.0 && p.x <= ed.width());
        assert!(p.y >= 0.0 && p.y <= ed.height());
    }
    // I4: curve length tracks the point count.
    if pts.len() < 2 {
        assert!(ed.curve().is_empty());
    } else {
        assert_eq!(
            ed.curve().len(),
            (pts.len() - 1) * (SEGMENT_STEPS as usize + 1)
        );
    }
    // A live drag always refers to an existing point.
    if let DragState::Dragging(id) = ed.drag_state() {
        assert!(pts.iter().any(|p| p.id == id));
    }
}

proptest! {
    #[test]
    fn random_pointer_sequences_preserve_invariants(
        events in proptest::collection::vec(ev_strategy(), 0..200)
    ) {
        let mut ed = Editor::with_default_points(800.0, 400.0);
        check_invariants(&ed);
        for ev in events {
            match ev {
                Ev::Down { x, y } => {
                    ed.pointer_down(x as f32, y as f32, &mut NullMarkers).unwrap();
                }
                Ev::Move { x, y } => {
                    ed.pointer_move(x as f32, y as f32, &mut NullMarkers);
                }
                Ev::Up => {
                    ed.pointer_up(&mut NullMarkers);
                }
            }
            check_invariants(&ed);
        }
    }

    #[test]
    fn interpolator_output_is_identical_across_calls(
        pts in proptest::collection::vec((0f32..800.0, 0f32..400.0), 2..10)
    ) {
        let input: Vec<pitchline::Vec2> = pts
            .iter()
            .map(|&(x, y)| pitchline::Vec2 { x, y })
            .collect();
        let a = pitchline::geometry::catmull::sample_curve(&input);
        let b = pitchline::geometry::catmull::sample_curve(&input);
        prop_assert_eq!(a.len(), (input.len() - 1) * (SEGMENT_STEPS as usize + 1));
        prop_assert_eq!(a, b);
    }
}
