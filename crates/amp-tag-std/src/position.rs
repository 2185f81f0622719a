//! Position: a point in a cell's coordinate space.

use amp_tag_core::{Spec, StoreRecord};
use serde::{Deserialize, Serialize};

use crate::attrs::attr_spec;

/// A 3D position. Coordinates must be finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl StoreRecord for Position {
    fn spec() -> Spec {
        attr_spec().with("Position")
    }

    fn check(&self) -> Result<(), String> {
        for (axis, v) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !v.is_finite() {
                return Err(format!("position {} is not finite: {}", axis, v));
            }
        }
        Ok(())
    }
}
