//! Browser classification from the user-agent string.

use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::JsValue;

static IOS_DEVICE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPad|iPhone|iPod").unwrap());
// Leftmost match wins: Safari only counts if no Chrome (desktop, Android or
// iOS "CriOS") or Android token precedes it.
static SAFARI_FAMILY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)chrome|crios|android|safari").unwrap());

/// Device/browser flags, computed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    pub is_ios: bool,
    pub is_safari: bool,
}

impl DeviceProfile {
    /// Classify a user agent. `has_ms_stream` is true when the window exposes
    /// `MSStream`, which old IE mobile set while claiming to be an iPhone.
    pub fn from_user_agent(user_agent: &str, has_ms_stream: bool) -> Self {
        let is_ios = IOS_DEVICE_REGEX.is_match(user_agent) && !has_ms_stream;
        let is_safari = SAFARI_FAMILY_REGEX
            .find(user_agent)
            .map(|m| m.as_str().eq_ignore_ascii_case("safari"))
            .unwrap_or(false);
        Self { is_ios, is_safari }
    }

    /// Classify the running browser.
    pub fn detect() -> Self {
        let window = gloo_utils::window();
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let has_ms_stream =
            js_sys::Reflect::has(&window, &JsValue::from_str("MSStream")).unwrap_or(false);
        let profile = Self::from_user_agent(&user_agent, has_ms_stream);
        log::debug!("Device profile: {:?}", profile);
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const IPHONE_CHROME: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/118.0.5993.69 Mobile/15E148 Safari/604.1";
    const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Mobile Safari/537.36";
    const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";
    const MAC_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
    const IPAD_SAFARI: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";

    #[test]
    fn iphone_safari_is_ios_and_safari() {
        let p = DeviceProfile::from_user_agent(IPHONE_SAFARI, false);
        assert!(p.is_ios);
        assert!(p.is_safari);
    }

    #[test]
    fn chrome_on_ios_is_ios_but_not_safari() {
        let p = DeviceProfile::from_user_agent(IPHONE_CHROME, false);
        assert!(p.is_ios);
        assert!(!p.is_safari);
    }

    #[test]
    fn android_and_desktop_chrome_are_not_safari() {
        for ua in [ANDROID_CHROME, DESKTOP_CHROME] {
            let p = DeviceProfile::from_user_agent(ua, false);
            assert_eq!(p, DeviceProfile { is_ios: false, is_safari: false }, "{ua}");
        }
    }

    #[test]
    fn desktop_safari_and_ipad() {
        assert_eq!(
            DeviceProfile::from_user_agent(MAC_SAFARI, false),
            DeviceProfile { is_ios: false, is_safari: true }
        );
        assert!(DeviceProfile::from_user_agent(IPAD_SAFARI, false).is_ios);
    }

    #[test]
    fn ms_stream_disqualifies_ios() {
        assert!(!DeviceProfile::from_user_agent(IPHONE_SAFARI, true).is_ios);
    }

    #[test]
    fn safari_match_is_case_insensitive() {
        assert!(DeviceProfile::from_user_agent("some SAFARI build", false).is_safari);
        assert!(!DeviceProfile::from_user_agent("ANDROID safari", false).is_safari);
    }
}
