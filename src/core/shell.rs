//! Application shell: route table, sidebar state and the header search bar.

/// Pages reachable from the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Employees,
    Departments,
    ShiftTypes,
    Login,
}

impl Route {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Employees,
        Self::Departments,
        Self::ShiftTypes,
        Self::Login,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Employees => "/employees",
            Self::Departments => "/departments",
            Self::ShiftTypes => "/shifttype",
            Self::Login => "/login",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Employees => "Employees",
            Self::Departments => "Departments",
            Self::ShiftTypes => "Shift types",
            Self::Login => "Login",
        }
    }

    /// Matches `path` with or without a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Whether the route is listed in the sidebar. Login is reached on its own.
    #[must_use]
    pub const fn in_navigation(self) -> bool {
        !matches!(self, Self::Login)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    pub collapsed: bool,
    pub open_mobile: bool,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    /// Hidden while the sidebar is collapsed.
    pub label: Option<&'static str>,
    pub active: bool,
}

const BRAND: &str = "Shift Planner";
const BRAND_SHORT: &str = "SP";

/// Layout state: current route plus sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    route: Route,
    sidebar: Sidebar,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Route::Dashboard)
    }
}

impl Shell {
    #[must_use]
    pub const fn new(route: Route) -> Self {
        Self {
            route,
            sidebar: Sidebar {
                collapsed: false,
                open_mobile: false,
            },
        }
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub const fn sidebar(&self) -> Sidebar {
        self.sidebar
    }

    /// Switches page and closes the mobile sidebar.
    pub const fn navigate(&mut self, route: Route) {
        self.route = route;
        self.sidebar.open_mobile = false;
    }

    pub const fn toggle_collapsed(&mut self) {
        self.sidebar.collapsed = !self.sidebar.collapsed;
    }

    pub const fn toggle_mobile(&mut self) {
        self.sidebar.open_mobile = !self.sidebar.open_mobile;
    }

    #[must_use]
    pub const fn brand(&self) -> &'static str {
        if self.sidebar.collapsed {
            BRAND_SHORT
        } else {
            BRAND
        }
    }

    #[must_use]
    pub const fn page_title(&self) -> &'static str {
        self.route.title()
    }

    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        Route::ALL
            .into_iter()
            .filter(|route| route.in_navigation())
            .map(|route| NavItem {
                route,
                label: (!self.sidebar.collapsed).then(|| route.title()),
                active: route == self.route,
            })
            .collect()
    }
}

/// Header search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    value: String,
    placeholder: String,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new("Search...")
    }
}

impl SearchBar {
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
