use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Opaque control-point identifier. Allocated from a monotonic counter and
/// never reused within one editor lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ControlPoint {
    pub id: PointId,
    pub x: f32,
    pub y: f32,
}

impl ControlPoint {
    pub fn pos(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }
}

/// Whether the editor is currently tracking a point being moved, and which one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(PointId),
}

impl DragState {
    pub fn dragging_id(&self) -> Option<PointId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(*id),
        }
    }
}

/// Result of a `pointer_down`: hit an existing point, created a new one, or
/// did nothing (capacity reached).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownOutcome {
    Selected { id: PointId },
    Created { id: PointId },
    Ignored,
}
