//! # shopscout
//!
//! Browser-driven product search for shopping sites.
//!
//! ## Architecture
//!
//! ```text
//! Site lookup → Browser (search) → Extract + filter → Results file → Backend
//! ```
//!
//! - [`site`]: supported sites, their selectors and extractors
//! - [`scraper`]: Chrome session, search navigation, concurrent collection
//! - [`sink`]: JSON results file and optional backend submission
//!
//! ## Quick Start
//!
//! ```bash
//! # Search the default site
//! shopscout search "ryzen 9"
//!
//! # Post results to a local backend as well
//! shopscout search "ryzen 9" --submit --route /api/products
//!
//! # List supported sites
//! shopscout sites
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together configuration
/// and the backend client.
pub mod app;

/// Command-line interface using clap.
///
/// - `search <query>` - Search a site and save matching products
/// - `sites` - List supported sites
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/shopscout/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`ProductRecord`](domain::ProductRecord): Extractor output, any field may be missing
/// - [`Product`](domain::Product): A complete, kept listing
/// - [`SearchQuery`](domain::SearchQuery): Search text and relevance tokens
pub mod domain;

/// Browser automation and product collection.
///
/// - [`ChromeSession`](scraper::ChromeSession): chromiumoxide-based browser
/// - [`ProductNode`](scraper::ProductNode): Read-only view of one result element
/// - [`Extractor`](scraper::Extractor): Site-specific element → record mapping
/// - [`collect`](scraper::collect): Concurrent extraction and relevance filtering
pub mod scraper;

/// Result persistence and backend submission.
pub mod sink;

/// Supported sites.
pub mod site;
