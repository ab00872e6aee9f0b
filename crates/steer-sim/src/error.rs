use steer_behavior::BehaviorError;
use steer_core::{SteerError, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] SteerError),

    /// A behavior was enabled without its required vehicle reference — a
    /// scene wiring error, surfaced on the first tick that evaluates it.
    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    /// An engine's `target`/`to_avoid` points at an ID the registry has
    /// never assigned.
    #[error("vehicle {0} is not in the world registry")]
    VehicleNotFound(VehicleId),
}

pub type SimResult<T> = Result<T, SimError>;
