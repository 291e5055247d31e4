// SPDX-License-Identifier: MPL-2.0
//! Pointer signals of the host platform.

use crate::application::port::PointerProbe;
use crate::domain::pointer::DeviceSignals;

/// Environment variable overriding the reported touch point count.
pub const ENV_TOUCH_POINTS: &str = "FOLIO_GALLERY_TOUCH_POINTS";

/// Environment variable overriding the reported platform string.
pub const ENV_PLATFORM: &str = "FOLIO_GALLERY_PLATFORM";

/// Reports the compile-time target platform, with environment overrides for
/// kiosk or tablet deployments where the windowing system hides touch input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPointerProbe;

impl SystemPointerProbe {
    fn signals_from(touch_points: Option<String>, platform: Option<String>) -> DeviceSignals {
        let max_touch_points = touch_points
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let platform = platform.unwrap_or_else(|| {
            format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
        });

        DeviceSignals {
            touch_start: max_touch_points > 0,
            max_touch_points,
            platform,
        }
    }
}

impl PointerProbe for SystemPointerProbe {
    fn signals(&self) -> DeviceSignals {
        Self::signals_from(
            std::env::var(ENV_TOUCH_POINTS).ok(),
            std::env::var(ENV_PLATFORM).ok(),
        )
    }
}
