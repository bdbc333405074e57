//! One-time mount lifecycle driving the hero reveal transition.

/// Whether the first paint has happened.
///
/// The host moves this to [`MountState::Mounted`] once, right after first
/// paint. There is no way back to `Initial`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MountState {
    #[default]
    Initial,
    Mounted,
}

impl MountState {
    /// State after the host reports a completed paint.
    #[must_use]
    pub fn after_paint(self) -> Self {
        MountState::Mounted
    }

    pub fn is_mounted(self) -> bool {
        self == MountState::Mounted
    }

    /// Classes for the reveal container: hidden and offset until mounted.
    pub fn reveal_class(self) -> &'static str {
        match self {
            MountState::Initial => "reveal reveal-initial",
            MountState::Mounted => "reveal reveal-mounted",
        }
    }
}
