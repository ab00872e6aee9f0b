use thiserror::Error;

use crate::BehaviorKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    /// A behavior requiring the `target` reference (seek, arrive, pursuit)
    /// was enabled without one being set — a wiring error in the scene, not
    /// a runtime condition.
    #[error("behavior '{0}' is enabled but no target vehicle is set")]
    MissingTarget(BehaviorKind),

    /// A behavior requiring the `to_avoid` reference (flee, evade) was
    /// enabled without one being set.
    #[error("behavior '{0}' is enabled but no to-avoid vehicle is set")]
    MissingAvoidTarget(BehaviorKind),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
