use crate::error;
use crate::interop;
use crate::Editor;
use js_sys::Float32Array;
use pitchline::{CreateError, DownOutcome, DragState, NullMarkers, HIT_RADIUS, MAX_POINTS};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn outcome_to_js(out: DownOutcome) -> JsValue {
    match out {
        DownOutcome::Selected { id } => interop::obj(&[
            ("kind", JsValue::from_str("selected")),
            ("id", JsValue::from_f64(id.0 as f64)),
        ]),
        DownOutcome::Created { id } => interop::obj(&[
            ("kind", JsValue::from_str("created")),
            ("id", JsValue::from_f64(id.0 as f64)),
        ]),
        DownOutcome::Ignored => interop::obj(&[("kind", JsValue::from_str("ignored"))]),
    }
}

#[wasm_bindgen]
impl Editor {
    /// Editor pre-seeded with the two default boundary points.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Editor {
        Editor::rs_new(width, height)
    }

    /// Editor with no points.
    pub fn empty(width: f32, height: f32) -> Editor {
        Editor::rs_empty(width, height)
    }

    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }
    pub fn width(&self) -> f32 {
        self.inner.width()
    }
    pub fn height(&self) -> f32 {
        self.inner.height()
    }
    pub fn point_count(&self) -> u32 {
        self.inner.point_count() as u32
    }
    pub fn max_points() -> u32 {
        MAX_POINTS as u32
    }
    pub fn hit_radius() -> f32 {
        HIT_RADIUS
    }

    // Pointer events

    /// Returns `{kind:'selected'|'created'|'ignored', id?}`.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> JsValue {
        match self.inner.pointer_down(x, y, &mut NullMarkers) {
            Ok(out) => outcome_to_js(out),
            Err(e) => error::marker_failed(e.message),
        }
    }
    pub fn pointer_down_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if x < 0.0 || x > self.inner.width() {
            return error::out_of_range("x", 0.0, self.inner.width(), x);
        }
        if y < 0.0 || y > self.inner.height() {
            return error::out_of_range("y", 0.0, self.inner.height(), y);
        }
        match self.inner.pointer_down(x, y, &mut NullMarkers) {
            Ok(out) => error::ok(outcome_to_js(out)),
            Err(e) => error::marker_failed(e.message),
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.inner.pointer_move(x, y, &mut NullMarkers)
    }
    pub fn pointer_move_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let moved = self.inner.pointer_move(x, y, &mut NullMarkers);
        error::ok(JsValue::from_bool(moved))
    }

    pub fn pointer_up(&mut self) -> bool {
        self.inner.pointer_up(&mut NullMarkers)
    }

    /// Point id, or `null` when rejected (capacity).
    pub fn create_point(&mut self, x: f32, y: f32) -> Option<u32> {
        self.inner
            .create_point(x, y, &mut NullMarkers)
            .ok()
            .map(|id| id.0)
    }
    pub fn create_point_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.inner.create_point(x, y, &mut NullMarkers) {
            Ok(id) => error::ok(JsValue::from_f64(id.0 as f64)),
            Err(CreateError::Capacity) => error::capacity(MAX_POINTS),
            Err(CreateError::Marker(e)) => error::marker_failed(e.message),
        }
    }

    // State getters for the rendering collaborator

    /// `{dragging: bool, id?}`.
    pub fn drag_state(&self) -> JsValue {
        match self.inner.drag_state() {
            DragState::Dragging(id) => interop::obj(&[
                ("dragging", JsValue::from_bool(true)),
                ("id", JsValue::from_f64(id.0 as f64)),
            ]),
            DragState::Idle => interop::obj(&[("dragging", JsValue::from_bool(false))]),
        }
    }

    /// `{id, x, y}`, or `null` for an unknown id.
    pub fn get_point(&self, id: u32) -> JsValue {
        match self.inner.points().iter().find(|p| p.id.0 == id) {
            Some(p) => serde_wasm_bindgen::to_value(p).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }
    pub fn get_point_res(&self, id: u32) -> JsValue {
        match self.inner.points().iter().find(|p| p.id.0 == id) {
            Some(p) => error::ok(serde_wasm_bindgen::to_value(p).unwrap_or(JsValue::NULL)),
            None => error::invalid_id("point", id),
        }
    }

    /// `{ids: Uint32Array, positions: Float32Array, selected: Uint8Array}`,
    /// in x-sorted order; `positions` is interleaved xy.
    pub fn get_point_data(&self) -> JsValue {
        let (ids, pos, sel) = self.inner.point_arrays();
        interop::obj(&[
            ("ids", interop::arr_u32(&ids).into()),
            ("positions", interop::arr_f32(&pos).into()),
            ("selected", interop::arr_u8(&sel).into()),
        ])
    }

    /// Curve polyline as interleaved xy; empty below two points.
    pub fn get_curve_data(&self) -> Float32Array {
        interop::arr_f32(&self.inner.curve_array())
    }

    /// Background grid as interleaved segment endpoints (x1,y1,x2,y2)*,
    /// vertical lines then horizontal, at the given spacing. Static with
    /// respect to point edits; the renderer draws it once per resize.
    pub fn get_grid_data(&self, spacing: f32) -> Float32Array {
        interop::arr_f32(&self.inner.grid_array(spacing))
    }
}
