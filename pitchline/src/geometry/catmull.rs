use crate::model::Vec2;

/// Samples per curve segment; each segment contributes `SEGMENT_STEPS + 1`
/// output points (t inclusive at both ends).
pub const SEGMENT_STEPS: u32 = 16;

pub const TENSION: f32 = 0.5;

/// Catmull-Rom polyline through `points`, in order, at the default density.
///
/// Fewer than two points yields an empty polyline. Consecutive segments share
/// an endpoint and that sample is emitted twice; callers stroking the result
/// as a polyline are unaffected and downstream code relies on the exact
/// `(n-1)*(SEGMENT_STEPS+1)` length.
pub fn sample_curve(points: &[Vec2]) -> Vec<Vec2> {
    sample_curve_with(points, SEGMENT_STEPS)
}

pub fn sample_curve_with(points: &[Vec2], steps: u32) -> Vec<Vec2> {
    let n = points.len();
    if n < 2 || steps == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity((n - 1) * (steps as usize + 1));
    for i in 0..n - 1 {
        // Tangent neighbors, clamped at both ends of the sequence.
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            out.push(Vec2 {
                x: catmull_axis(p0.x, p1.x, p2.x, p3.x, t),
                y: catmull_axis(p0.y, p1.y, p2.y, p3.y, t),
            });
        }
    }
    out
}

#[inline]
fn catmull_axis(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    TENSION
        * (2.0 * p1
            + (-p0 + p2) * t
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
            + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}
