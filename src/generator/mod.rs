//! Output generators driven by a resolved manifest.
//!
//! - [`filter`] decides which sitemap candidates are published
//! - [`sitemap`] renders and writes `sitemap.xml`
//! - [`head`] renders the shared `<head>` tags

pub mod filter;
pub mod head;
pub mod sitemap;

pub use filter::SitemapItem;
pub use head::render_head;
pub use sitemap::build_sitemap;
