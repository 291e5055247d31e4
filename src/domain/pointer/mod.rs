// SPDX-License-Identifier: MPL-2.0
//! Pointer device classification.
//!
//! A device counts as a fine (mouse-capable) pointer unless it reports touch
//! capability or identifies itself as a mobile/tablet platform. Either signal
//! alone is enough to classify it as coarse.

/// Platform identifiers that mark a mobile or tablet device.
/// Matched case-insensitively as substrings of the platform string.
pub const MOBILE_PLATFORM_PATTERNS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Raw capability signals reported by a device.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceSignals {
    /// Whether touch-start events are supported.
    pub touch_start: bool,
    /// Maximum simultaneous touch points reported by the device.
    pub max_touch_points: u32,
    /// Platform identifier string (user agent, OS name, ...).
    pub platform: String,
}

impl DeviceSignals {
    /// Returns `true` if the device reports any touch capability.
    #[must_use]
    pub fn has_touch(&self) -> bool {
        self.touch_start || self.max_touch_points > 0
    }

    /// Returns `true` if the platform string matches a mobile/tablet pattern.
    #[must_use]
    pub fn is_mobile_platform(&self) -> bool {
        let platform = self.platform.to_lowercase();
        MOBILE_PLATFORM_PATTERNS
            .iter()
            .any(|pattern| platform.contains(pattern))
    }

    /// Returns `true` if the device is a fine (mouse-capable) pointer.
    #[must_use]
    pub fn is_fine_pointer(&self) -> bool {
        !(self.has_touch() || self.is_mobile_platform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> DeviceSignals {
        DeviceSignals {
            touch_start: false,
            max_touch_points: 0,
            platform: "Linux x86_64".to_string(),
        }
    }

    #[test]
    fn plain_desktop_is_fine_pointer() {
        assert!(desktop().is_fine_pointer());
    }

    #[test]
    fn touch_start_alone_marks_coarse() {
        let signals = DeviceSignals {
            touch_start: true,
            ..desktop()
        };
        assert!(!signals.is_fine_pointer());
    }

    #[test]
    fn touch_points_alone_mark_coarse() {
        let signals = DeviceSignals {
            max_touch_points: 5,
            ..desktop()
        };
        assert!(!signals.is_fine_pointer());
    }

    #[test]
    fn mobile_platform_alone_marks_coarse() {
        let signals = DeviceSignals {
            platform: "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)".to_string(),
            ..desktop()
        };
        assert!(signals.is_mobile_platform());
        assert!(!signals.is_fine_pointer());
    }

    #[test]
    fn platform_match_ignores_case() {
        let signals = DeviceSignals {
            platform: "OPERA MINI/8.0".to_string(),
            ..desktop()
        };
        assert!(signals.is_mobile_platform());
    }
}
