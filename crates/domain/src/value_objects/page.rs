//! Page catalogue - the route surface of the site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A top-level page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    Sponsors,
    Team,
    Chambers,
    Glimpse,
    Creators,
    Events,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Sponsors,
        Page::Team,
        Page::Chambers,
        Page::Glimpse,
        Page::Creators,
        Page::Events,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Sponsors => "/sponsors",
            Page::Team => "/team",
            Page::Chambers => "/chambers",
            Page::Glimpse => "/glimpse",
            Page::Creators => "/creators",
            Page::Events => "/events",
        }
    }

    /// Heading shown on the page itself.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "SAE",
            Page::Sponsors => "Sponsors",
            Page::Team => "Team",
            Page::Chambers => "4 Chambers",
            Page::Glimpse => "Glimpses",
            Page::Creators => "Creators",
            Page::Events => "Events",
        }
    }

    /// Label in the floating navigation menu.
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "HOME",
            Page::Sponsors => "SPONSORS",
            Page::Team => "TEAM",
            Page::Chambers => "4 CHAMBERS",
            Page::Glimpse => "GLIMPSE",
            Page::Creators => "CREATORS",
            Page::Events => "EVENTS",
        }
    }

    /// Browser tab title.
    pub fn document_title(self) -> String {
        match self {
            Page::Home => "SAE | Society of Automotive Engineers".to_string(),
            other => format!("{} | SAE", other.title()),
        }
    }

    /// Pages listed in the navigation menu (Home is reached via its own button).
    pub fn nav_items() -> impl Iterator<Item = Page> {
        Self::ALL.into_iter().filter(|p| *p != Page::Home)
    }

    /// Resolve a path; anything unknown falls back to Home.
    pub fn from_path(path: &str) -> Page {
        path.parse().unwrap_or(Page::Home)
    }
}

impl FromStr for Page {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim().trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|p| p.path().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| DomainError::parse(format!("unknown page path: {s}")))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_resolves_to_its_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Page::from_path("/nope"), Page::Home);
        assert_eq!(Page::from_path("/team/extra"), Page::Home);
        assert!("/nope".parse::<Page>().is_err());
    }

    #[test]
    fn trailing_slash_query_and_case_are_tolerated() {
        assert_eq!(Page::from_path("/team/"), Page::Team);
        assert_eq!(Page::from_path("/Events?ref=nav"), Page::Events);
        assert_eq!(Page::from_path(""), Page::Home);
    }

    #[test]
    fn nav_menu_lists_six_pages_in_order() {
        let labels: Vec<&str> = Page::nav_items().map(Page::nav_label).collect();
        assert_eq!(
            labels,
            vec!["SPONSORS", "TEAM", "4 CHAMBERS", "GLIMPSE", "CREATORS", "EVENTS"]
        );
    }

    #[test]
    fn document_titles() {
        assert_eq!(Page::Team.document_title(), "Team | SAE");
        assert!(Page::Home.document_title().starts_with("SAE"));
    }
}
