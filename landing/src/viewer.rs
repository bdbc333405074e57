//! Viewer session handed over by the auth provider through `localStorage`.

use serde::Deserialize;
use velocity_storefront::ViewerSession;

/// Storage key the auth provider writes the viewer capability to.
pub const VIEWER_KEY: &str = "velocity.viewer";

/// `{ "recognized": true, "displayName": "Sarah Johnson" }`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewerCapability {
    #[serde(default)]
    recognized: bool,
    #[serde(default)]
    display_name: Option<String>,
}

/// Session described by a stored capability.
fn session_from_json(raw: &str) -> Result<ViewerSession, serde_json::Error> {
    let cap: ViewerCapability = serde_json::from_str(raw)?;
    Ok(ViewerSession::from_capability(cap.recognized, cap.display_name))
}

/// Parse a stored capability; anything unreadable is a guest.
pub fn parse_session(raw: &str) -> ViewerSession {
    match session_from_json(raw) {
        Ok(session) => session,
        Err(err) => {
            web_sys::console::warn_1(&format!("[velocity] ignoring {VIEWER_KEY}: {err}").into());
            ViewerSession::Guest
        }
    }
}

/// Read the current viewer; guest when storage is unavailable or empty.
pub fn load_session() -> ViewerSession {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return ViewerSession::Guest;
    };
    match storage.get_item(VIEWER_KEY) {
        Ok(Some(raw)) => parse_session(&raw),
        _ => ViewerSession::Guest,
    }
}
