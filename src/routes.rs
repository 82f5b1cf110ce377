use std::fmt;

/// Top-level screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Map a path to a route. The root path lands on login.
    pub fn parse(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" | "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }

    /// Reachable only with a session.
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Dashboard)
    }

    /// Reachable only without a session.
    pub fn requires_guest(self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Apply both guards to a requested route and return where the user ends up.
pub fn resolve(requested: Route, authenticated: bool) -> Route {
    if requested.requires_auth() && !authenticated {
        Route::Login
    } else if requested.requires_guest() && authenticated {
        Route::Dashboard
    } else {
        requested
    }
}
