//! Profile links from the athlete lookup page.

use std::sync::LazyLock;

use po10_core::ProfileLinks;
use scraper::{Html, Selector};

/// Element id of the block holding lookup matches.
const RESULTS_CONTAINER_ID: &str = "cphBody_pnlResults";

static RESULTS_CONTAINER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("#{RESULTS_CONTAINER_ID}")).expect("valid selector")
});
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

/// Extracts the profile links from a lookup response.
///
/// The first link's href is joined onto `athletes_base` to form the primary
/// link. The second link's href is kept verbatim. Later links are ignored. A
/// page without the results container counts as no match.
#[must_use]
pub fn parse_profile_links(html: &str, athletes_base: &str) -> ProfileLinks {
    let document = Html::parse_document(html);

    let Some(container) = document.select(&RESULTS_CONTAINER).next() else {
        tracing::debug!("lookup page has no results container");
        return ProfileLinks::default();
    };

    let mut hrefs = container
        .select(&LINK)
        .filter_map(|a| a.value().attr("href"));

    let primary = hrefs.next().map(|href| format!("{athletes_base}{href}"));
    let secondary = hrefs.next().map(str::to_owned);

    ProfileLinks { primary, secondary }
}
