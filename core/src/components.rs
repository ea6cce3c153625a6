//! Reusable UI kit: card, button, post card and status blocks.
//!
//! Every component is a pure function of already-resolved data returning
//! `maud::Markup`. Styling is expressed only as utility class strings.

use maud::{html, Markup};

use crate::date::long_date;
use crate::types::Post;

/// Characters of `content` kept when a post has no excerpt.
pub const SUMMARY_LEN: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Bordered,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

pub fn card_classes(variant: CardVariant, padding: Padding, extra: &str) -> String {
    let variant = match variant {
        CardVariant::Default => "",
        CardVariant::Bordered => "border border-gray-200",
        CardVariant::Elevated => "shadow-md",
    };
    let padding = match padding {
        Padding::None => "",
        Padding::Sm => "p-3",
        Padding::Md => "p-5",
        Padding::Lg => "p-7",
    };
    join_classes(&["bg-white rounded-lg overflow-hidden", variant, padding, extra])
}

pub fn card(variant: CardVariant, padding: Padding, extra: &str, body: Markup) -> Markup {
    html! {
        div class=(card_classes(variant, padding, extra)) { (body) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700",
        ButtonVariant::Secondary => "bg-gray-200 text-gray-900 hover:bg-gray-300",
        ButtonVariant::Outline => "border border-blue-600 text-blue-600 hover:bg-blue-50",
    };
    let size = match size {
        ButtonSize::Sm => "px-3 py-1.5 text-sm",
        ButtonSize::Md => "px-4 py-2 text-base",
        ButtonSize::Lg => "px-6 py-3 text-lg",
    };
    join_classes(&["inline-flex items-center rounded-md font-medium", variant, size])
}

pub fn button(label: &str, variant: ButtonVariant, size: ButtonSize) -> Markup {
    html! {
        button type="button" class=(button_classes(variant, size)) { (label) }
    }
}

/// A button wrapped in a link to `href`.
pub fn link_button(href: &str, label: &str, variant: ButtonVariant, size: ButtonSize) -> Markup {
    html! {
        a href=(href) { (button(label, variant, size)) }
    }
}

/// Card text for a post: the excerpt verbatim, otherwise the first
/// `SUMMARY_LEN` characters of the content with `...` appended when cut.
pub fn summary(post: &Post) -> String {
    if let Some(excerpt) = post.excerpt.as_deref().filter(|e| !e.is_empty()) {
        return excerpt.to_string();
    }
    let mut chars = post.content.chars();
    let head: String = chars.by_ref().take(SUMMARY_LEN).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Link target for a post, preferring the slug over the id.
pub fn post_link(post: &Post) -> String {
    let target = post
        .slug
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&post.id);
    format!("/post/{target}")
}

pub fn post_card(post: &Post) -> Markup {
    let link = post_link(post);
    let date = post.published_at.as_deref().and_then(|iso| long_date(iso).map(|d| (iso, d)));
    let body = html! {
        div class="space-y-3" {
            a href=(link) {
                h3 class="text-xl font-semibold text-gray-900 hover:text-blue-600" { (post.title) }
            }
            div class="flex items-center text-sm text-gray-500" {
                @if let Some(author) = &post.author {
                    span class="font-medium" { (author) }
                }
                @if let Some((iso, formatted)) = &date {
                    span class="mx-1" { "•" }
                    time datetime=(iso) { (formatted) }
                }
            }
            p class="text-gray-600" { (summary(post)) }
            div class="pt-2" {
                a class="text-blue-600 hover:text-blue-800 font-medium text-sm" href=(link) { "Read more →" }
            }
        }
    };
    card(CardVariant::Bordered, Padding::Md, "hover:shadow-md transition-shadow duration-200", body)
}

pub fn spinner() -> Markup {
    html! {
        div class="flex justify-center items-center h-64" role="status" {
            div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-500" {}
        }
    }
}

pub fn error_banner(body: Markup) -> Markup {
    html! {
        div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded" role="alert" { (body) }
    }
}

pub fn notice(message: &str) -> Markup {
    html! {
        div class="bg-gray-50 border border-gray-200 text-gray-700 px-4 py-5 rounded text-center" {
            p { (message) }
        }
    }
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_content(len: usize) -> Post {
        Post::new("42", "Title", "x".repeat(len))
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let summary = summary(&post_with_content(200));
        assert_eq!(summary, format!("{}...", "x".repeat(150)));
    }

    #[test]
    fn content_at_limit_is_not_marked() {
        assert_eq!(summary(&post_with_content(150)), "x".repeat(150));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let post = Post::new("1", "T", "é".repeat(151));
        assert_eq!(summary(&post), format!("{}...", "é".repeat(150)));
    }

    #[test]
    fn excerpt_wins_over_content() {
        let mut post = post_with_content(500);
        post.excerpt = Some("Short teaser".to_string());
        assert_eq!(summary(&post), "Short teaser");
    }

    #[test]
    fn link_prefers_slug() {
        let mut post = post_with_content(10);
        post.slug = Some("my-post".to_string());
        assert_eq!(post_link(&post), "/post/my-post");
    }

    #[test]
    fn link_falls_back_to_id() {
        assert_eq!(post_link(&post_with_content(10)), "/post/42");
    }

    #[test]
    fn card_classes_skip_empty_parts() {
        assert_eq!(
            card_classes(CardVariant::Default, Padding::None, ""),
            "bg-white rounded-lg overflow-hidden"
        );
        assert_eq!(
            card_classes(CardVariant::Bordered, Padding::Lg, "extra"),
            "bg-white rounded-lg overflow-hidden border border-gray-200 p-7 extra"
        );
    }

    #[test]
    fn button_renders_variant_and_size() {
        let html = button("Go", ButtonVariant::Outline, ButtonSize::Sm).into_string();
        assert!(html.contains("border-blue-600"));
        assert!(html.contains("text-sm"));
        assert!(html.contains(">Go</button>"));
    }

    #[test]
    fn post_card_renders_date_and_link() {
        let mut post = post_with_content(10);
        post.published_at = Some("2024-01-05T00:00:00Z".to_string());
        post.slug = Some("hello".to_string());
        let html = post_card(&post).into_string();

        assert!(html.contains(r#"href="/post/hello""#));
        assert!(html.contains("January 5, 2024"));
        assert!(html.contains(r#"datetime="2024-01-05T00:00:00Z""#));
        assert!(html.contains("Read more →"));
    }

    #[test]
    fn post_card_omits_unparseable_date() {
        let mut post = post_with_content(10);
        post.published_at = Some("soon".to_string());
        let html = post_card(&post).into_string();
        assert!(!html.contains("<time"));
    }

    #[test]
    fn post_card_escapes_title() {
        let post = Post::new("1", "<script>x</script>", "body");
        let html = post_card(&post).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
