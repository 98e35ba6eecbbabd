use crate::model::{ControlPoint, PointId};

/// First point (in current x-sorted order) whose axis-wise distance to
/// `(x, y)` is strictly under `radius` on both axes. Chebyshev box, not
/// euclidean: matches the square grab area users get around each marker.
pub fn hit_point(points: &[ControlPoint], x: f32, y: f32, radius: f32) -> Option<PointId> {
    points
        .iter()
        .find(|p| (p.x - x).abs() < radius && (p.y - y).abs() < radius)
        .map(|p| p.id)
}
