// SPDX-License-Identifier: MPL-2.0
//! View-mode switch sub-component.
//!
//! Both surfaces stay mounted at all times, in a fixed order. The mode only
//! decides which one is visible and interactive.

use crate::domain::gallery::ViewMode;

/// The mode whose surface hosts the load-more sentinel.
pub const PAGING_MODE: ViewMode = ViewMode::Grid;

/// How one surface is presented for the current mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayer {
    /// 1.0 when active, 0.0 when hidden.
    pub opacity: f32,
    /// Whether the surface receives pointer input.
    pub interactive: bool,
}

impl SurfaceLayer {
    pub const ACTIVE: Self = Self {
        opacity: 1.0,
        interactive: true,
    };

    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        interactive: false,
    };
}

/// View-mode state.
#[derive(Debug, Clone, Default)]
pub struct State {
    mode: ViewMode,
}

/// Messages for the view-mode switch.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Flip to the other mode.
    Toggle,
    /// Select a mode explicitly.
    Set(ViewMode),
}

/// Effects produced by the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The active mode changed.
    Switched(ViewMode),
}

impl State {
    #[must_use]
    pub fn new(initial: ViewMode) -> Self {
        Self { mode: initial }
    }

    /// Handle a switch message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let next = match msg {
            Message::Toggle => self.mode.toggled(),
            Message::Set(mode) => mode,
        };
        if next == self.mode {
            return Effect::None;
        }
        self.mode = next;
        Effect::Switched(next)
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether the load-more sentinel is live.
    #[must_use]
    pub fn is_paging(&self) -> bool {
        self.mode == PAGING_MODE
    }

    /// Presentation of the surface belonging to `surface`.
    #[must_use]
    pub fn layer(&self, surface: ViewMode) -> SurfaceLayer {
        if surface == self.mode {
            SurfaceLayer::ACTIVE
        } else {
            SurfaceLayer::HIDDEN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        let mut state = State::new(ViewMode::Dots);
        assert_eq!(state.handle(Message::Toggle), Effect::Switched(ViewMode::Grid));
        assert!(state.is_paging());
        assert_eq!(state.handle(Message::Toggle), Effect::Switched(ViewMode::Dots));
        assert!(!state.is_paging());
    }

    #[test]
    fn setting_the_current_mode_is_a_no_op() {
        let mut state = State::new(ViewMode::Grid);
        assert_eq!(state.handle(Message::Set(ViewMode::Grid)), Effect::None);
    }

    #[test]
    fn exactly_one_surface_is_active() {
        for mode in ViewMode::ALL {
            let state = State::new(mode);
            let layers: Vec<_> = ViewMode::ALL.iter().map(|m| state.layer(*m)).collect();

            assert_eq!(layers.iter().filter(|l| l.interactive).count(), 1);
            let active = state.layer(mode);
            assert!(active.opacity > 0.99);
            assert!(!state.layer(mode.toggled()).interactive);
            assert!(state.layer(mode.toggled()).opacity < 0.01);
        }
    }
}
