//! Per-behavior weights used by both combination strategies.

use crate::BehaviorKind;

/// A positive weight per behavior kind, defaulting to 1.0 for every
/// implemented kind.
///
/// Weights scale each behavior's contribution before the combined force is
/// capped, so relative magnitudes are what matters (see the flock demo,
/// where separation/alignment/cohesion run at 3/4/2).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightTable([f32; BehaviorKind::COUNT]);

impl WeightTable {
    pub fn new() -> Self {
        let mut weights = [0.0; BehaviorKind::COUNT];
        for kind in BehaviorKind::IMPLEMENTED {
            weights[kind.index()] = 1.0;
        }
        Self(weights)
    }

    /// Weight for `kind`; 0.0 for unimplemented kinds.
    #[inline]
    pub fn get(&self, kind: BehaviorKind) -> f32 {
        self.0[kind.index()]
    }

    /// Assign a weight.  Returns `true` on success, `false` (and leaves the
    /// table untouched) when `value` is not strictly positive or `kind` has
    /// no force law yet.
    pub fn assign(&mut self, kind: BehaviorKind, value: f32) -> bool {
        if kind.is_implemented() && value > 0.0 {
            self.0[kind.index()] = value;
            true
        } else {
            false
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new()
    }
}
