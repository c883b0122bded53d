//! Per-frame input snapshot.
//!
//! The window layer polls its keyboard once per frame and hands the result to
//! the simulation, which never touches the input device itself.

/// Movement keys held down during the current frame.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Walk forward along the facing direction.
    pub forward: bool,
    /// Walk backward, at a fraction of the base speed.
    pub backward: bool,
    /// Turn the view to the left.
    pub turn_left: bool,
    /// Turn the view to the right.
    pub turn_right: bool,
}

impl Controls {
    /// No keys held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Only the forward key held.
    pub fn walking() -> Self {
        Self {
            forward: true,
            ..Self::default()
        }
    }
}
