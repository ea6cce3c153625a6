//! Host side of the blog client: performs HTTP with `ureq` and prints pages.

pub mod config;
pub mod render;
pub mod transport;

pub use config::Config;
pub use render::{render_path, Rendered};
pub use transport::UreqTransport;
