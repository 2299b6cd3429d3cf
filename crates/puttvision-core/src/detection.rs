//! Input detection types produced by the upstream inference engine.
//!
//! A [`Detection`] is one candidate observation for one frame. Detections
//! are ephemeral: the tracker consumes one set per tick and retains nothing
//! past it. Malformed inputs (NaN confidence, zero-area boxes) are the
//! detection source's responsibility to filter; the core treats any
//! syntactically valid detection as trustworthy.

use serde::{Deserialize, Serialize};

/// Semantic class of a detected object.
///
/// The engine maintains at most one active track per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectClass {
    /// The golf ball.
    Ball,
    /// The putter head.
    Putter,
}

impl ObjectClass {
    /// Short string tag used in logs and wire payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Putter => "putter",
        }
    }
}

impl std::fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned bounding box in image pixel coordinates.
///
/// Invariant (caller-supplied): `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge (px).
    pub x1: f32,
    /// Top edge (px).
    pub y1: f32,
    /// Right edge (px).
    pub x2: f32,
    /// Bottom edge (px).
    pub y2: f32,
}

impl BoundingBox {
    /// Creates a bounding box from its corner coordinates.
    #[must_use]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Center point of the box, the position fed to the tracker.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    /// Box width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Box height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

/// One candidate observation from the detection source for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Semantic class of the detected object.
    pub class: ObjectClass,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f32,
    /// Bounding box in image coordinates.
    pub bbox: BoundingBox,
}

impl Detection {
    /// Creates a detection.
    #[must_use]
    pub fn new(class: ObjectClass, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            class,
            confidence,
            bbox,
        }
    }
}
