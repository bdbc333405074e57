//! Viewer session as seen by the page.
//!
//! The auth provider lives outside this crate; it only reports whether the
//! viewer is recognized and, optionally, their display name.

/// Who is looking at the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerSession {
    /// Anonymous visitor: offered login and registration.
    #[default]
    Guest,
    /// Signed-in viewer: welcomed and offered the dashboard.
    Recognized { display_name: Option<String> },
}

impl ViewerSession {
    /// Build a session from the auth provider's `{ recognized, displayName? }`.
    pub fn from_capability(recognized: bool, display_name: Option<String>) -> Self {
        if recognized {
            ViewerSession::Recognized { display_name }
        } else {
            ViewerSession::Guest
        }
    }

    /// A recognized viewer with the given display name.
    pub fn recognized(display_name: impl Into<String>) -> Self {
        ViewerSession::Recognized {
            display_name: Some(display_name.into()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, ViewerSession::Recognized { .. })
    }

    /// First whitespace-delimited token of the display name.
    pub fn first_name(&self) -> Option<&str> {
        match self {
            ViewerSession::Guest => None,
            ViewerSession::Recognized { display_name } => display_name
                .as_deref()
                .and_then(|name| name.split_whitespace().next()),
        }
    }

    /// Greeting for the navigation bar; `None` for guests.
    pub fn welcome_message(&self) -> Option<String> {
        match self {
            ViewerSession::Guest => None,
            ViewerSession::Recognized { .. } => Some(match self.first_name() {
                Some(first) => format!("Welcome, {first}!"),
                None => "Welcome!".to_string(),
            }),
        }
    }
}
