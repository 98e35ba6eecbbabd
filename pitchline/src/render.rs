use crate::model::{PointId, Vec2};
use std::fmt;

/// A marker sink could not allocate the visual resource for a point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerError {
    pub message: String,
}

impl MarkerError {
    pub fn new(message: impl Into<String>) -> MarkerError {
        MarkerError {
            message: message.into(),
        }
    }
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker creation failed: {}", self.message)
    }
}

impl std::error::Error for MarkerError {}

/// Rendering collaborator seam. The editor owns the domain points; a sink
/// owns whatever visual objects mirror them and is told about every change.
///
/// `marker_created` is the only fallible notification: if the sink cannot
/// allocate a marker the point is not added to the set at all. The rest are
/// fire-and-forget and default to no-ops, so pull-based renderers that poll
/// `geom_version` can implement nothing.
pub trait MarkerSink {
    fn marker_created(&mut self, id: PointId, x: f32, y: f32) -> Result<(), MarkerError> {
        let _ = (id, x, y);
        Ok(())
    }

    fn marker_moved(&mut self, id: PointId, x: f32, y: f32) {
        let _ = (id, x, y);
    }

    fn marker_selected(&mut self, id: PointId, selected: bool) {
        let _ = (id, selected);
    }

    fn curve_changed(&mut self, samples: &[Vec2]) {
        let _ = samples;
    }
}

/// No-op sink for pull-based renderers and tests.
pub struct NullMarkers;

impl MarkerSink for NullMarkers {}
