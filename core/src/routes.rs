//! Fixed path → page table.

use percent_encoding::percent_decode_str;

/// A page of the site, with its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Feed,
    About,
    Post { id: String },
    NotFound,
}

impl Route {
    /// Match a request path. Query strings and a trailing slash are ignored.
    /// Path parameters are percent-decoded; one that is not UTF-8 once
    /// decoded matches nothing.
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        if !path.is_empty() && !path.starts_with('/') {
            return Route::NotFound;
        }
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["blog"] => Route::Feed,
            ["about"] => Route::About,
            ["post", id] if !id.is_empty() => match percent_decode_str(id).decode_utf8() {
                Ok(id) => Route::Post { id: id.into_owned() },
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Feed => "Feed",
            Route::About => "About",
            Route::Post { .. } => "Post",
            Route::NotFound => "Page Not Found",
        }
    }

    /// Navigation entry to highlight while this route is shown.
    pub fn nav_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Feed | Route::Post { .. } => "/blog",
            Route::About => "/about",
            Route::NotFound => "",
        }
    }
}
