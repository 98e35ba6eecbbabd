pub mod model;
pub mod render;
pub mod geometry {
    pub mod catmull;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod picking;
}

pub use model::{ControlPoint, DownOutcome, DragState, PointId, Vec2};
pub use render::{MarkerError, MarkerSink, NullMarkers};

use geometry::catmull;
use geometry::tolerance::clamp;
use std::fmt;

/// Capacity of the control-point set.
pub const MAX_POINTS: usize = 10;

/// Pointer hit-test radius around a point, per axis (strict `<`).
pub const HIT_RADIUS: f32 = 10.0;

/// Horizontal inset of the two default boundary points.
pub const EDGE_INSET: f32 = 50.0;

/// Cap on grid lines per axis; finer spacings are rejected as unrenderable.
pub const MAX_GRID_LINES: usize = 10_000;

/// Why a `create_point` call was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateError {
    /// The set already holds `MAX_POINTS` points.
    Capacity,
    /// The rendering collaborator could not allocate a marker; the point was
    /// not added.
    Marker(MarkerError),
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateError::Capacity => write!(f, "point capacity ({MAX_POINTS}) reached"),
            CreateError::Marker(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CreateError {}

/// Interactive curve editor: a bounded set of control points kept sorted by
/// ascending x, a drag state machine driven by pointer events, and a cached
/// Catmull-Rom polyline recomputed after every mutation.
///
/// All coordinates are canvas-local logical pixels; device-pixel-ratio
/// scaling is the input adapter's job. Events must arrive pre-serialized
/// (single-threaded, no internal queue).
pub struct Editor {
    points: Vec<ControlPoint>, // sorted by x ascending
    drag: DragState,
    width: f32,
    height: f32,
    curve: Vec<Vec2>,
    next_id: u32,
    geom_ver: u64,
}

impl Editor {
    pub fn new(width: f32, height: f32) -> Editor {
        Editor {
            points: Vec::new(),
            drag: DragState::Idle,
            width,
            height,
            curve: Vec::new(),
            next_id: 0,
            geom_ver: 1,
        }
    }

    /// Editor pre-seeded with two boundary points spanning the canvas width
    /// at its vertical midpoint.
    pub fn with_default_points(width: f32, height: f32) -> Editor {
        let mut ed = Editor::new(width, height);
        let inset = EDGE_INSET.min(width * 0.5);
        ed.seed(inset, height * 0.5);
        ed.seed(width - inset, height * 0.5);
        ed
    }

    /// Monotonic version; increments on every point mutation.
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Control points in current x-sorted order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Cached curve polyline; empty while fewer than two points exist.
    pub fn curve(&self) -> &[Vec2] {
        &self.curve
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Adds a point at `(x, y)` directly, bypassing the hit-test. Atomic
    /// with the sink: the point lands in the set only if `marker_created`
    /// succeeds.
    pub fn create_point(
        &mut self,
        x: f32,
        y: f32,
        sink: &mut dyn MarkerSink,
    ) -> Result<PointId, CreateError> {
        if self.points.len() >= MAX_POINTS {
            return Err(CreateError::Capacity);
        }
        self.insert_point(x, y, sink).map_err(CreateError::Marker)
    }

    /// Pointer pressed at `(x, y)`. Selects the first point within
    /// `HIT_RADIUS` and starts a drag; otherwise creates a point if capacity
    /// allows; otherwise does nothing.
    pub fn pointer_down(
        &mut self,
        x: f32,
        y: f32,
        sink: &mut dyn MarkerSink,
    ) -> Result<DownOutcome, MarkerError> {
        if !x.is_finite() || !y.is_finite() {
            return Ok(DownOutcome::Ignored);
        }
        // A down while a drag is live means the matching up was lost; finish
        // the old drag first.
        if self.drag != DragState::Idle {
            self.pointer_up(sink);
        }
        if let Some(id) = algorithms::picking::hit_point(&self.points, x, y, HIT_RADIUS) {
            self.drag = DragState::Dragging(id);
            sink.marker_selected(id, true);
            return Ok(DownOutcome::Selected { id });
        }
        if self.points.len() >= MAX_POINTS {
            return Ok(DownOutcome::Ignored);
        }
        let id = self.insert_point(x, y, sink)?;
        Ok(DownOutcome::Created { id })
    }

    /// Pointer moved to `(x, y)`. Moves the dragged point, clamped to the
    /// canvas bounds, and re-sorts: a drag may change the points' relative
    /// x-order, which is observable behavior. Returns whether a point moved.
    pub fn pointer_move(&mut self, x: f32, y: f32, sink: &mut dyn MarkerSink) -> bool {
        let id = match self.drag {
            DragState::Dragging(id) => id,
            DragState::Idle => return false,
        };
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let cx = clamp(x, 0.0, self.width);
        let cy = clamp(y, 0.0, self.height);
        match self.points.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.x = cx;
                p.y = cy;
            }
            None => return false,
        }
        sink.marker_moved(id, cx, cy);
        self.resort();
        self.refresh_curve();
        self.bump();
        sink.curve_changed(&self.curve);
        true
    }

    /// Pointer released. Ends the drag and clears the selection highlight.
    /// Returns whether a drag was live.
    pub fn pointer_up(&mut self, sink: &mut dyn MarkerSink) -> bool {
        match self.drag {
            DragState::Dragging(id) => {
                sink.marker_selected(id, false);
                self.drag = DragState::Idle;
                true
            }
            DragState::Idle => false,
        }
    }

    // Typed-array-friendly getters for pull-based renderers.

    /// `(ids, interleaved xy positions, selected flags)` in x-sorted order.
    pub fn point_arrays(&self) -> (Vec<u32>, Vec<f32>, Vec<u8>) {
        let selected = self.drag.dragging_id();
        let mut ids = Vec::with_capacity(self.points.len());
        let mut pos = Vec::with_capacity(self.points.len() * 2);
        let mut sel = Vec::with_capacity(self.points.len());
        for p in &self.points {
            ids.push(p.id.0);
            pos.push(p.x);
            pos.push(p.y);
            sel.push(u8::from(selected == Some(p.id)));
        }
        (ids, pos, sel)
    }

    /// Curve samples as interleaved xy.
    pub fn curve_array(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.curve.len() * 2);
        for s in &self.curve {
            out.push(s.x);
            out.push(s.y);
        }
        out
    }

    /// Background grid as interleaved segment endpoints (x1,y1,x2,y2),
    /// vertical lines then horizontal, at the given spacing. Empty for a
    /// non-positive, non-finite, or finer-than-`MAX_GRID_LINES` spacing.
    /// Lines sit at integer multiples of `spacing`: accumulating f32 sums
    /// instead would stall once `spacing` drops under the ulp at the running
    /// coordinate, and the count would drift with rounding.
    pub fn grid_array(&self, spacing: f32) -> Vec<f32> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Vec::new();
        }
        let cols = (self.width / spacing).floor() as usize;
        let rows = (self.height / spacing).floor() as usize;
        if cols >= MAX_GRID_LINES || rows >= MAX_GRID_LINES {
            return Vec::new();
        }
        let mut segs = Vec::with_capacity((cols + rows + 2) * 4);
        for i in 0..=cols {
            let x = i as f32 * spacing;
            segs.extend_from_slice(&[x, 0.0, x, self.height]);
        }
        for i in 0..=rows {
            let y = i as f32 * spacing;
            segs.extend_from_slice(&[0.0, y, self.width, y]);
        }
        segs
    }

    // Seeding bypasses the sink: pull-based renderers pick the markers up on
    // their first frame, push-based hosts seed via create_point instead.
    fn seed(&mut self, x: f32, y: f32) {
        let id = self.alloc_id();
        self.points.push(ControlPoint { id, x, y });
        self.resort();
        self.refresh_curve();
        self.bump();
    }

    fn insert_point(
        &mut self,
        x: f32,
        y: f32,
        sink: &mut dyn MarkerSink,
    ) -> Result<PointId, MarkerError> {
        let id = PointId(self.next_id);
        // Marker first: a failed allocation must leave the set untouched.
        sink.marker_created(id, x, y)?;
        self.next_id += 1;
        self.points.push(ControlPoint { id, x, y });
        self.resort();
        self.refresh_curve();
        self.bump();
        sink.curve_changed(&self.curve);
        Ok(id)
    }

    fn alloc_id(&mut self) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        id
    }

    // Stable, so x-ties keep insertion order.
    fn resort(&mut self) {
        self.points.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    fn refresh_curve(&mut self) {
        if self.points.len() < 2 {
            self.curve.clear();
            return;
        }
        let positions: Vec<Vec2> = self.points.iter().map(ControlPoint::pos).collect();
        self.curve = catmull::sample_curve(&positions);
    }

    fn bump(&mut self) {
        self.geom_ver += 1;
    }
}
