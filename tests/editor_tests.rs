#![cfg(target_arch = "wasm32")]

use js_sys::{Float32Array, Reflect, Uint32Array, Uint8Array};
use pitchline_wasm::Editor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

fn kind_of(v: &JsValue) -> String {
    get(v, "kind").as_string().unwrap()
}

#[wasm_bindgen_test]
fn seeded_editor_exposes_points_and_curve() {
    let ed = Editor::new(800.0, 400.0);
    assert_eq!(ed.point_count(), 2);

    let pd = ed.get_point_data();
    let ids = Uint32Array::new(&get(&pd, "ids"));
    let pos = Float32Array::new(&get(&pd, "positions"));
    let sel = Uint8Array::new(&get(&pd, "selected"));
    assert_eq!(ids.length(), 2);
    assert_eq!(pos.length(), 4);
    assert_eq!(sel.length(), 2);
    assert_eq!(pos.get_index(0), 50.0);
    assert_eq!(pos.get_index(1), 200.0);
    assert_eq!(pos.get_index(2), 750.0);

    // 1 segment * 17 samples * 2 floats
    assert_eq!(ed.get_curve_data().length(), 34);
}

#[wasm_bindgen_test]
fn pointer_cycle_selects_drags_and_releases() {
    let mut ed = Editor::new(800.0, 400.0);
    let ver = ed.geom_version();

    let out = ed.pointer_down(400.0, 200.0);
    assert_eq!(kind_of(&out), "created");
    assert_eq!(ed.point_count(), 3);
    assert!(ed.geom_version() > ver);

    let out = ed.pointer_down(402.0, 198.0);
    assert_eq!(kind_of(&out), "selected");
    let ds = ed.drag_state();
    assert!(get(&ds, "dragging").as_bool().unwrap());

    assert!(ed.pointer_move(500.0, 250.0));
    let id = get(&ds, "id").as_f64().unwrap() as u32;
    let p: pitchline::ControlPoint = serde_wasm_bindgen::from_value(ed.get_point(id)).unwrap();
    assert_eq!(p.id.0, id);
    assert_eq!(p.x, 500.0);
    assert_eq!(p.y, 250.0);

    assert!(ed.pointer_up());
    assert!(!get(&ed.drag_state(), "dragging").as_bool().unwrap());
    assert!(!ed.pointer_move(100.0, 100.0));
}

#[wasm_bindgen_test]
fn create_point_returns_null_at_capacity() {
    let mut ed = Editor::empty(800.0, 400.0);
    for i in 0..Editor::max_points() {
        assert!(ed.create_point(10.0 * i as f32, 50.0).is_some());
    }
    assert!(ed.create_point(790.0, 50.0).is_none());
    assert_eq!(ed.point_count(), Editor::max_points());
}

#[wasm_bindgen_test]
fn capacity_pointer_down_is_ignored() {
    let mut ed = Editor::empty(800.0, 400.0);
    for i in 0..Editor::max_points() {
        ed.create_point(60.0 * i as f32, 300.0);
    }
    let out = ed.pointer_down(700.0, 100.0);
    assert_eq!(kind_of(&out), "ignored");
    assert_eq!(ed.point_count(), Editor::max_points());
}

#[wasm_bindgen_test]
fn grid_data_covers_canvas_at_spacing() {
    let ed = Editor::empty(200.0, 100.0);
    let grid = ed.get_grid_data(50.0);
    // 5 vertical (0,50,100,150,200) + 3 horizontal (0,50,100), 4 floats each.
    assert_eq!(grid.length(), (5 + 3) * 4);
    assert_eq!(ed.get_grid_data(0.0).length(), 0);
    // Spacing finer than renderable returns empty instead of stalling.
    assert_eq!(ed.get_grid_data(1e-5).length(), 0);
}
