//! Toroidal world bounds.

use steer_core::{SteerError, SteerResult, Vec2};

/// A bounded rectangular world whose opposite edges are glued together.
///
/// Agents leaving one edge re-enter at the opposite one; there is no
/// collision with the boundary.  The wrap is applied by the world after each
/// integration step, never by the entity itself.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    /// Fails fast with [`SteerError::Config`] on non-positive dimensions.
    pub fn new(width: f32, height: f32) -> SteerResult<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(SteerError::Config(format!(
                "world dimensions must be > 0, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Wrap a position that crossed an edge back to the opposite edge.
    ///
    /// Each axis wraps independently, so an x-only crossing leaves y
    /// untouched.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        let mut wrapped = pos;
        if wrapped.x > self.width {
            wrapped.x = 0.0;
        } else if wrapped.x < 0.0 {
            wrapped.x = self.width - 1.0;
        }
        if wrapped.y > self.height {
            wrapped.y = 0.0;
        } else if wrapped.y < 0.0 {
            wrapped.y = self.height - 1.0;
        }
        wrapped
    }
}
