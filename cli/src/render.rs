//! Route → hook → page.

use maud::Markup;

use blog_core::{pages, BlogClient, FetchError, PostHook, PostsHook, Route, Transport};

/// A full HTML document plus the error of the fetch behind it, if it failed.
/// The page already shows the error; `error` lets the host report it too.
#[derive(Debug)]
pub struct Rendered {
    pub page: Markup,
    pub error: Option<FetchError>,
}

/// Resolve `path`, fetch whatever the page needs and render the full HTML
/// document.
pub async fn render_path<Tr: Transport>(
    path: &str,
    client: &BlogClient,
    transport: Tr,
    home_limit: u32,
    search: &str,
) -> Rendered {
    let route = Route::resolve(path);
    tracing::debug!(?route, path, "resolved route");

    let (body, error) = match &route {
        Route::Home => {
            let hook = PostsHook::new(client.clone(), transport);
            let state = hook.fetch(Some(home_limit)).await;
            (pages::home_page(&state), state.error().cloned())
        }
        Route::Feed => {
            let hook = PostsHook::new(client.clone(), transport);
            let state = hook.fetch(None).await;
            (pages::feed_page(&state, search), state.error().cloned())
        }
        Route::Post { id } => {
            let hook = PostHook::new(client.clone(), transport);
            let state = hook.fetch(id.clone()).await;
            (pages::post_page(&state), state.error().cloned())
        }
        Route::About => (pages::about_page(), None),
        Route::NotFound => (pages::not_found_page(), None),
    };
    Rendered {
        page: pages::document(route.title(), route.nav_path(), body),
        error,
    }
}
