/// Identifier of a single screen in the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    MainApp,
    Dashboard,
    Reports,
    Billing,
    Profile,
    NotFound,
}

impl Page {
    /// Resolves a request path to a page. Matching is exact: unknown paths,
    /// the empty string, and partial matches all resolve to `NotFound`.
    pub fn resolve(path: &str) -> Page {
        match path {
            "/" => Page::Landing,
            "/app" => Page::MainApp,
            "/dashboard" => Page::Dashboard,
            "/reports" => Page::Reports,
            "/billing" => Page::Billing,
            "/profile" => Page::Profile,
            _ => Page::NotFound,
        }
    }

    /// Whether the shared chrome (sidebar + header) wraps this page.
    /// Only the landing page draws full-screen without it.
    pub fn uses_chrome(self) -> bool {
        !matches!(self, Page::Landing)
    }

    /// Canonical path for navigation. `NotFound` has no address of its own.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Landing => Some("/"),
            Page::MainApp => Some("/app"),
            Page::Dashboard => Some("/dashboard"),
            Page::Reports => Some("/reports"),
            Page::Billing => Some("/billing"),
            Page::Profile => Some("/profile"),
            Page::NotFound => None,
        }
    }

    /// Display title used by the header bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Smart Research Assistant",
            Page::MainApp => "Research Assistant",
            Page::Dashboard => "Research Dashboard",
            Page::Reports => "Reports History",
            Page::Billing => "Billing & Usage",
            Page::Profile => "Profile Settings",
            Page::NotFound => "Page Not Found",
        }
    }
}

/// Pages listed in the sidebar, in display order.
pub const NAV_PAGES: [Page; 5] = [
    Page::MainApp,
    Page::Dashboard,
    Page::Reports,
    Page::Billing,
    Page::Profile,
];
