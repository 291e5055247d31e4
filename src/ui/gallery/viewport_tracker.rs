// SPDX-License-Identifier: MPL-2.0
//! Viewport tracker sub-component.
//!
//! Holds the shared fine-pointer signal. The signal is sampled from the
//! injected [`PointerProbe`] when the tracker attaches and again on every
//! window resize while attached.

use crate::application::port::PointerProbe;
use iced::{event, window, Size, Subscription};
use std::fmt;
use std::sync::Arc;

/// Viewport tracker state.
#[derive(Clone)]
pub struct State {
    probe: Arc<dyn PointerProbe>,
    fine_pointer: bool,
    attached: bool,
    size: Option<Size>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("fine_pointer", &self.fine_pointer)
            .field("attached", &self.attached)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Messages for the viewport tracker.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The window was resized.
    Resized(Size),
}

/// Effects produced by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The fine-pointer signal flipped.
    PointerClassChanged(bool),
}

impl State {
    /// Creates a detached tracker. The signal reads `false` until attached.
    #[must_use]
    pub fn new(probe: Arc<dyn PointerProbe>) -> Self {
        Self {
            probe,
            fine_pointer: false,
            attached: false,
            size: None,
        }
    }

    /// Starts listening for resizes and samples the probe.
    pub fn attach(&mut self) -> Effect {
        self.attached = true;
        self.evaluate()
    }

    /// Stops listening. Resizes reported afterwards are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Handle a tracker message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Resized(size) => {
                if !self.attached {
                    return Effect::None;
                }
                self.size = Some(size);
                self.evaluate()
            }
        }
    }

    fn evaluate(&mut self) -> Effect {
        let fine_pointer = self.probe.signals().is_fine_pointer();
        if fine_pointer == self.fine_pointer {
            return Effect::None;
        }
        self.fine_pointer = fine_pointer;
        Effect::PointerClassChanged(fine_pointer)
    }

    #[must_use]
    pub fn is_fine_pointer(&self) -> bool {
        self.fine_pointer
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Last reported window size.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Resize listener; empty while detached.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        if self.attached {
            event::listen_with(resize_event)
        } else {
            Subscription::none()
        }
    }
}

fn resize_event(event: event::Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::StaticProbe;
    use crate::domain::pointer::DeviceSignals;
    use std::sync::Mutex;

    /// Probe whose signals can be swapped between samples.
    #[derive(Default)]
    struct SwitchableProbe(Mutex<DeviceSignals>);

    impl PointerProbe for SwitchableProbe {
        fn signals(&self) -> DeviceSignals {
            self.0.lock().expect("probe lock").clone()
        }
    }

    #[test]
    fn signal_is_sampled_on_attach() {
        let mut state = State::new(Arc::new(StaticProbe::mouse()));
        assert!(!state.is_fine_pointer());

        assert_eq!(state.attach(), Effect::PointerClassChanged(true));
        assert!(state.is_fine_pointer());
    }

    #[test]
    fn touch_device_is_never_fine() {
        let mut state = State::new(Arc::new(StaticProbe::touch()));
        assert_eq!(state.attach(), Effect::None);
        assert!(!state.is_fine_pointer());
    }

    #[test]
    fn resize_re_evaluates_the_probe() {
        let probe = Arc::new(SwitchableProbe::default());
        let mut state = State::new(probe.clone());
        state.attach();
        assert!(state.is_fine_pointer());

        probe.0.lock().expect("probe lock").max_touch_points = 5;
        let effect = state.handle(Message::Resized(Size::new(800.0, 600.0)));

        assert_eq!(effect, Effect::PointerClassChanged(false));
        assert_eq!(state.size(), Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn detached_tracker_ignores_resizes() {
        let probe = Arc::new(SwitchableProbe::default());
        let mut state = State::new(probe.clone());
        state.attach();
        state.detach();

        probe.0.lock().expect("probe lock").touch_start = true;
        let effect = state.handle(Message::Resized(Size::new(800.0, 600.0)));

        assert_eq!(effect, Effect::None);
        assert!(state.is_fine_pointer());
        assert!(state.size().is_none());
    }
}
