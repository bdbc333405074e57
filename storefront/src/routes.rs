//! Paths the page links to. Routing itself belongs to the host.

/// Navigation targets offered by the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
    Register,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }
}
