pub mod client;
pub mod error;
pub mod extract;
pub mod lookup;

pub use client::Po10Client;
pub use error::ScraperError;
pub use extract::{parse_results, rewrite_venue_href};
pub use lookup::parse_profile_links;
