//! Page bodies and the surrounding HTML document.
//!
//! Pages take hook snapshots, never hooks, so they stay pure and can be
//! rendered for any state in tests.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::components::{
    error_banner, link_button, notice, post_card, spinner, ButtonSize, ButtonVariant,
};
use crate::date::long_date;
use crate::markdown::render_markdown;
use crate::state::FetchState;
use crate::types::Post;

pub const SITE_NAME: &str = "MiniBlog";

/// Posts shown on the home page.
pub const HOME_LIMIT: u32 = 3;

const NAV: [(&str, &str); 3] = [("/", "Home"), ("/blog", "Blog"), ("/about", "About")];

/// Wrap a page body in the site layout: header navigation, main column and
/// footer. `current` marks the active navigation entry.
pub fn document(title: &str, current: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
            }
            body class="min-h-screen bg-gray-100" {
                header class="bg-white shadow-sm" {
                    nav class="max-w-5xl mx-auto px-4 py-4 flex items-center justify-between" {
                        a class="text-xl font-bold text-gray-900" href="/" { (SITE_NAME) }
                        ul class="flex gap-6" {
                            @for (href, label) in NAV {
                                li {
                                    @if href == current {
                                        a class="text-blue-600 font-medium" href=(href) aria-current="page" { (label) }
                                    } @else {
                                        a class="text-gray-600 hover:text-gray-900" href=(href) { (label) }
                                    }
                                }
                            }
                        }
                    }
                }
                main class="max-w-5xl mx-auto px-4 py-8" { (body) }
                footer class="text-center text-sm text-gray-500 py-6" {
                    "© " (SITE_NAME)
                }
            }
        }
    }
}

const LOAD_ERROR: &str = "Error loading posts. Please try again later.";
const NO_POSTS: &str = "No posts found. Check back later for new content!";

pub fn home_page(latest: &FetchState<Vec<Post>>) -> Markup {
    html! {
        section class="py-12" {
            div class="text-center mb-12" {
                h1 class="text-4xl font-extrabold text-gray-900" { "Welcome to " (SITE_NAME) }
                p class="mt-5 max-w-xl mx-auto text-xl text-gray-500" {
                    "A simple blog platform showcasing the latest thoughts and ideas."
                }
            }
        }
        section class="py-8" {
            div class="flex items-center justify-between mb-8" {
                h2 class="text-2xl font-bold text-gray-900" { "Latest Posts" }
                (link_button("/blog", "View all posts", ButtonVariant::Outline, ButtonSize::Sm))
            }
            @if latest.is_loading() {
                (spinner())
            } @else if latest.error().is_some() {
                (error_banner(html! { p { (LOAD_ERROR) } }))
            } @else if latest.data().is_empty() {
                (notice(NO_POSTS))
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    @for post in latest.data() {
                        (post_card(post))
                    }
                }
            }
        }
    }
}

/// Case-insensitive match of `term` against title, content and author. An
/// empty term matches everything.
pub fn filter_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle)
                || post
                    .author
                    .as_deref()
                    .is_some_and(|author| author.to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn feed_page(posts: &FetchState<Vec<Post>>, search: &str) -> Markup {
    let matches = filter_posts(posts.data(), search);
    html! {
        div class="space-y-6" {
            div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4" {
                h1 class="text-3xl font-bold text-gray-900" { "Feed" }
                form method="get" action="/blog" {
                    input type="search" name="q" value=(search) placeholder="Search posts..."
                        class="w-full px-4 py-2 border border-gray-300 rounded-md";
                }
            }
            @if posts.is_loading() {
                (spinner())
            } @else if posts.error().is_some() {
                (error_banner(html! { p { (LOAD_ERROR) } }))
            } @else if matches.is_empty() {
                @if search.is_empty() {
                    (notice(NO_POSTS))
                } @else {
                    (notice("No posts match your search criteria. Try a different search term."))
                }
            } @else {
                div class="grid grid-cols-1 gap-8" {
                    @for post in &matches {
                        (post_card(post))
                    }
                }
            }
            @if !matches.is_empty() {
                div class="pt-4 text-gray-500 text-sm" {
                    (showing_line(matches.len(), search))
                }
            }
        }
    }
}

fn showing_line(count: usize, search: &str) -> String {
    let noun = if count == 1 { "post" } else { "posts" };
    if search.is_empty() {
        format!("Showing {count} {noun}")
    } else {
        format!("Showing {count} {noun} matching \"{search}\"")
    }
}

pub fn post_page(post: &FetchState<Option<Post>>) -> Markup {
    if post.is_loading() {
        return spinner();
    }
    let loaded = match (post.error(), post.data()) {
        (None, Some(loaded)) => loaded,
        (error, _) => {
            let message = match error {
                Some(err) if !err.is_not_found() => err.to_string(),
                _ => "The requested post could not be found.".to_string(),
            };
            return error_banner(html! {
                h2 class="text-xl font-bold mb-2" { "Error Loading Post" }
                p { (message) }
                div class="mt-4" {
                    (link_button("/blog", "Back to Feed", ButtonVariant::Outline, ButtonSize::Md))
                }
            });
        }
    };

    let date = loaded.published_at.as_deref().and_then(|iso| long_date(iso).map(|d| (iso, d)));
    html! {
        article class="max-w-3xl mx-auto" {
            header class="mb-8" {
                h1 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-4" { (loaded.title) }
                div class="flex items-center text-gray-500" {
                    @if let Some(author) = &loaded.author {
                        span class="font-medium" { (author) }
                    }
                    @if let Some((iso, formatted)) = &date {
                        span class="mx-2" { "•" }
                        time datetime=(iso) { (formatted) }
                    }
                }
            }
            div class="prose prose-lg max-w-none" {
                (PreEscaped(render_markdown(&loaded.content)))
            }
        }
    }
}

pub fn about_page() -> Markup {
    html! {
        div class="max-w-3xl mx-auto" {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "About " (SITE_NAME) }
            div class="prose prose-lg max-w-none" {
                p {
                    "Welcome to " (SITE_NAME) ", a simple platform for sharing thoughts, "
                    "ideas, and stories."
                }
                h2 { "Our Mission" }
                p {
                    "We believe in simplicity and good design: a clean, intuitive "
                    "interface for readers and writers that puts the content first."
                }
                h2 { "Future Plans" }
                ul {
                    li { "User authentication and profiles" }
                    li { "Comments and interactions" }
                    li { "Rich text editing" }
                    li { "Categories and tags" }
                    li { "Dark mode support" }
                }
                h2 { "Contact Us" }
                p {
                    "Questions, suggestions or feedback? Reach us at "
                    a class="text-blue-600 hover:text-blue-800" href="mailto:contact@miniblog.example" {
                        "contact@miniblog.example"
                    }
                    "."
                }
            }
        }
    }
}

pub fn not_found_page() -> Markup {
    html! {
        div class="flex flex-col items-center justify-center py-16 text-center" {
            h1 class="text-9xl font-bold text-gray-200" { "404" }
            h2 class="text-3xl font-bold text-gray-900 mt-8" { "Page Not Found" }
            p class="text-gray-600 mt-4 max-w-md" {
                "The page you're looking for doesn't exist or has been moved."
            }
            div class="mt-8" {
                (link_button("/", "Back to Home", ButtonVariant::Primary, ButtonSize::Md))
            }
        }
    }
}
