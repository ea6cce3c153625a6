//! Command-line configuration.

use clap::Parser;

use blog_core::pages::HOME_LIMIT;

#[derive(Parser, Debug, Clone)]
#[command(name = "blog-render")]
#[command(version)]
#[command(about = "Fetch posts from a blog API and print a rendered page", long_about = None)]
pub struct Config {
    /// Site path to render, e.g. `/`, `/blog`, `/post/my-post`
    #[arg(default_value = "/")]
    pub path: String,

    /// Origin of the posts API
    #[arg(long, env = "BLOG_API_URL", default_value = "http://127.0.0.1:3000")]
    pub api: String,

    /// Number of posts shown on the home page
    #[arg(long, default_value_t = HOME_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Filter the feed by this search term
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}
