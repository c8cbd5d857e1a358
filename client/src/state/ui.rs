//! Local UI chrome state (theme, navigation).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the data layer so the sidebar and theme
//! controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::services::ServiceId;

/// Top-level dashboard sections, in sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Overview,
    Persons,
    Homework,
    Grading,
    Wordbook,
    AiWeekly,
    Catalog,
    Files,
    Finance,
    Efficiency,
    Docs,
    Wake,
    Skills,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Self::Overview,
        Self::Persons,
        Self::Homework,
        Self::Grading,
        Self::Wordbook,
        Self::AiWeekly,
        Self::Catalog,
        Self::Files,
        Self::Finance,
        Self::Efficiency,
        Self::Docs,
        Self::Wake,
        Self::Skills,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Persons => "/persons",
            Self::Homework => "/homework",
            Self::Grading => "/homework/grading",
            Self::Wordbook => "/wordbook",
            Self::AiWeekly => "/ai-weekly",
            Self::Catalog => "/catalog",
            Self::Files => "/files",
            Self::Finance => "/finance",
            Self::Efficiency => "/efficiency",
            Self::Docs => "/docs",
            Self::Wake => "/wake",
            Self::Skills => "/skills",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Persons => "Persons",
            Self::Homework => "Homework",
            Self::Grading => "Grading",
            Self::Wordbook => "Wordbook",
            Self::AiWeekly => "AI Weekly",
            Self::Catalog => "Service Catalog",
            Self::Files => "Files",
            Self::Finance => "Finance",
            Self::Efficiency => "Efficiency",
            Self::Docs => "Docs",
            Self::Wake => "Remote Wake",
            Self::Skills => "Skills",
        }
    }

    /// Backend the section depends on; `None` for the overview.
    #[must_use]
    pub fn service(self) -> Option<ServiceId> {
        match self {
            Self::Overview => None,
            Self::Persons => Some(ServiceId::Persons),
            Self::Homework | Self::Grading => Some(ServiceId::Homework),
            Self::Wordbook => Some(ServiceId::Wordbook),
            Self::AiWeekly => Some(ServiceId::AiWeekly),
            Self::Catalog => Some(ServiceId::Config),
            Self::Files => Some(ServiceId::FileGateway),
            Self::Finance => Some(ServiceId::Finance),
            Self::Efficiency => Some(ServiceId::Efficiency),
            Self::Docs => Some(ServiceId::DocService),
            Self::Wake => Some(ServiceId::RemoteWake),
            Self::Skills => Some(ServiceId::Skills),
        }
    }

    /// Section owning `path`, by longest matching prefix.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .filter(|s| {
                let p = s.path();
                p == "/" || path == p || path.strip_prefix(p).is_some_and(|rest| rest.starts_with('/'))
            })
            .max_by_key(|s| s.path().len())
            .unwrap_or_default()
    }
}

/// UI state for theme and sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, nav_expanded: true }
    }
}
