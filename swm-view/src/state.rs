//! The dashboard's view-state machine.
//!
//! `ViewState` is the only mutable state in the dashboard. It changes solely
//! through the named transitions below, each of which is total: toggles and
//! tab selection cannot fail, and `login`/`logout` always land in a defined
//! session state. Transitions that the user should be told about return the
//! [`Notice`] to display.
//!
//! Rendering decisions go through [`ViewState::screen`], which the view tree
//! matches exhaustively, so the dashboard subtree is never built while the
//! session is logged out and exactly one panel is built while logged in.

use serde::{Deserialize, Serialize};
use swm_data::model::Identity;

use crate::config::DashboardConfig;

/// Login state. The demo login takes no credentials and always succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    LoggedIn(Identity),
}

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Layout width mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn toggled(self) -> Self {
        match self {
            Viewport::Desktop => Viewport::Mobile,
            Viewport::Mobile => Viewport::Desktop,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Mobile => "mobile",
        }
    }
}

/// Content panel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Sensors,
    Analytics,
}

impl Tab {
    /// Tabs in the order the tab bar shows them.
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Sensors, Tab::Analytics];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Sensors => "Sensors",
            Tab::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short-lived message confirming an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// What the top-level view should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Only the login affordance.
    Login,
    /// Chrome plus exactly one content panel.
    Dashboard { identity: &'a Identity, tab: Tab },
}

/// Session, theme, viewport and tab state of one browser session.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    session: Session,
    theme: Theme,
    viewport: Viewport,
    active_tab: Tab,
    demo_identity: Identity,
}

impl ViewState {
    /// Logged-out state seeded from `config`.
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            session: Session::LoggedOut,
            theme: config.theme,
            viewport: config.viewport,
            active_tab: config.tab,
            demo_identity: config.demo_identity.clone(),
        }
    }

    /// Demo login: assigns the configured identity without asking for
    /// credentials. Not an authentication mechanism.
    pub fn login(&mut self) -> Notice {
        self.session = Session::LoggedIn(self.demo_identity.clone());
        log::info!("Logged in as {}", self.demo_identity.email);
        Notice::success("Successfully logged in!")
    }

    pub fn logout(&mut self) -> Notice {
        self.session = Session::LoggedOut;
        log::info!("Logged out");
        Notice::success("Successfully logged out!")
    }

    pub fn toggle_theme(&mut self) -> Notice {
        self.theme = self.theme.toggled();
        log::info!("Theme set to {}", self.theme.as_str());
        Notice::success(format!("Switched to {} mode", self.theme.as_str()))
    }

    pub fn toggle_viewport(&mut self) -> Notice {
        self.viewport = self.viewport.toggled();
        log::info!("Viewport set to {}", self.viewport.as_str());
        Notice::success(format!("Switched to {} view", self.viewport.as_str()))
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            log::debug!("Tab {:?} -> {:?}", self.active_tab, tab);
        }
        self.active_tab = tab;
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.session {
            Session::LoggedOut => Screen::Login,
            Session::LoggedIn(identity) => Screen::Dashboard {
                identity,
                tab: self.active_tab,
            },
        }
    }

    pub fn session_active(&self) -> bool {
        matches!(self.session, Session::LoggedIn(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.session {
            Session::LoggedIn(identity) => Some(identity),
            Session::LoggedOut => None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
