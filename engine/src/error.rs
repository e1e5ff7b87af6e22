use ballroom_shared::vec3::Axis;
use thiserror::Error;

/// Errors raised while placing bodies in the spawn volume.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// The spawn region shrunk by the body's own extent is empty: the body
    /// cannot fit inside the nominal volume at all.
    #[error("body {id} cannot fit in the spawn volume: effective range inverted on the {axis} axis")]
    VolumeTooSmall { id: u32, axis: Axis },

    /// The trial budget ran out with overlap still present.
    #[error("failed to place body {id} after {trials} trials")]
    Exhausted { id: u32, trials: u32 },
}
