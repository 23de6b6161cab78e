use serde::Serialize;

/// Lightweight client metadata derived once at link creation and kept
/// immutable in the history ledger.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub ip: String,
    pub user_agent: String,
    pub browser: String,
    pub operating_system: String,
    pub device: String,
}

impl ClientInfo {
    pub fn derive(ip: &str, user_agent: &str) -> Self {
        let normalized = user_agent.to_ascii_lowercase();
        Self {
            ip: ip.to_string(),
            user_agent: user_agent.to_string(),
            browser: classify_browser(&normalized).to_string(),
            operating_system: classify_os(&normalized).to_string(),
            device: classify_device(&normalized).to_string(),
        }
    }
}

// Classification is case-insensitive substring matching against a fixed
// priority list. Edge ships "Chrome" in its user agent and Android ships
// "Linux", so the more specific tokens are checked first.
fn classify_browser(ua: &str) -> &'static str {
    if ua.contains("firefox") {
        "Firefox"
    } else if ua.contains("edg") {
        "Edge"
    } else if ua.contains("chrome") {
        "Chrome"
    } else if ua.contains("safari") {
        "Safari"
    } else {
        "Unknown"
    }
}

fn classify_os(ua: &str) -> &'static str {
    if ua.contains("android") {
        "Android"
    } else if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ios") {
        "iOS"
    } else if ua.contains("windows") {
        "Windows"
    } else if ua.contains("mac os") || ua.contains("macintosh") {
        "MacOS"
    } else if ua.contains("linux") {
        "Linux"
    } else {
        "Unknown"
    }
}

fn classify_device(ua: &str) -> &'static str {
    if ua.contains("ipad") || ua.contains("tablet") {
        "Tablet"
    } else if ua.contains("mobile") {
        "Mobile"
    } else {
        "Desktop"
    }
}
