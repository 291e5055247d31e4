// SPDX-License-Identifier: MPL-2.0
//! Pointer capability port definition.
//!
//! The probe is injected into the viewport tracker so widgets share one
//! fine-pointer signal and tests can stub the device.

use crate::domain::pointer::DeviceSignals;

/// Port reporting the capability signals of the current pointer device.
pub trait PointerProbe: Send + Sync {
    /// Samples the device signals. Called again on every viewport resize.
    fn signals(&self) -> DeviceSignals;
}

/// Probe returning fixed signals.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe(pub DeviceSignals);

impl StaticProbe {
    /// A desktop mouse without touch support.
    #[must_use]
    pub fn mouse() -> Self {
        Self(DeviceSignals {
            touch_start: false,
            max_touch_points: 0,
            platform: "desktop".to_string(),
        })
    }

    /// A touch screen device.
    #[must_use]
    pub fn touch() -> Self {
        Self(DeviceSignals {
            touch_start: true,
            max_touch_points: 10,
            platform: "touch".to_string(),
        })
    }
}

impl PointerProbe for StaticProbe {
    fn signals(&self) -> DeviceSignals {
        self.0.clone()
    }
}
