//! Integration tests for `Po10Client::resolve` and `Po10Client::extract`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use po10_core::{RosterEntry, NO_VENUE_LINK};
use po10_scraper::{Po10Client, ScraperError};

fn test_client(base_url: &str) -> Po10Client {
    Po10Client::with_base_url(base_url, 5, "po10-test/0.1")
        .expect("failed to build test Po10Client")
}

fn lookup_body(links: &str) -> String {
    format!(
        r#"<html><body><div id="cphBody_pnlResults"><table><tr><td>{links}</td></tr></table></div></body></html>"#
    )
}

fn profile_body() -> String {
    let row = |event: &str, venue: &str| {
        format!(
            "<tr><td>{event}</td><td>16:05</td><td></td><td></td><td></td><td>4</td>\
             <td></td><td></td><td></td><td>{venue}</td><td>Parkrun</td><td>6 Jan 24</td></tr>"
        )
    };
    format!(
        "<html><body><table>\
         <tr><td></td><td><b>Event</b></td><td><b>Perf</b></td></tr>\
         <tr><td>2024 SEN Corstorphine</td></tr>\
         {}{}{}\
         </table></body></html>",
        row("Event", "Venue"),
        row("parkrun", r#"<a href="../athletics/venue/cramond">Cramond</a>"#),
        row("5K", "Portobello"),
    )
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_posts_name_and_club_and_joins_primary_link() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/athletes/athleteslookup.aspx"))
        .and(query_param("surname", "O'Brien"))
        .and(query_param("firstname", "Steven"))
        .and(query_param("club", "Corstorphine"))
        .respond_with(ResponseTemplate::new(200).set_body_string(lookup_body(
            r#"<a href="profile.aspx?athleteid=42">Profile</a>
               <a href="https://www.runbritainrankings.com/runners/profile.aspx?athleteid=42">rB</a>"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let links = client
        .resolve(&RosterEntry::new("Steven", "O'Brien"))
        .await
        .expect("resolve should succeed");

    assert_eq!(
        links.primary,
        Some(format!("{}/athletes/profile.aspx?athleteid=42", server.uri()))
    );
    assert_eq!(
        links.secondary.as_deref(),
        Some("https://www.runbritainrankings.com/runners/profile.aspx?athleteid=42")
    );
}

#[tokio::test]
async fn resolve_without_matches_returns_empty_links() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/athletes/athleteslookup.aspx"))
        .respond_with(ResponseTemplate::new(200).set_body_string(lookup_body("")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let links = client
        .resolve(&RosterEntry::new("Moray", "Anderson"))
        .await
        .expect("resolve should succeed");

    assert!(links.primary.is_none());
    assert!(links.secondary.is_none());
}

#[tokio::test]
async fn resolve_propagates_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/athletes/athleteslookup.aspx"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve(&RosterEntry::new("Moray", "Anderson")).await;

    match result {
        Err(ScraperError::UnexpectedStatus { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.contains("athleteslookup.aspx"), "got url: {url}");
        }
        other => panic!("expected ScraperError::UnexpectedStatus, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// extract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extract_returns_rows_from_profile_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/athletes/profile.aspx"))
        .and(query_param("athleteid", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_string(profile_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let link = format!("{}/athletes/profile.aspx?athleteid=42", server.uri());
    let results = client.extract(&link).await.expect("extract should succeed");

    assert_eq!(results.len(), 2, "header repeat should be skipped");
    assert_eq!(results[0].event, "parkrun");
    assert_eq!(
        results[0].venue_link,
        format!("{}/athletics/venue/cramond", server.uri())
    );
    assert_eq!(results[0].category, "SEN");
    assert_eq!(results[1].event, "5K");
    assert_eq!(results[1].venue_link, NO_VENUE_LINK);
}

#[tokio::test]
async fn extract_propagates_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let link = format!("{}/athletes/profile.aspx?athleteid=1", server.uri());
    let result = client.extract(&link).await;

    assert!(
        matches!(result, Err(ScraperError::UnexpectedStatus { status: 404, .. })),
        "expected UnexpectedStatus(404), got: {result:?}"
    );
}

#[tokio::test]
async fn extract_rejects_relative_link() {
    let client = test_client("http://127.0.0.1:9");
    let result = client.extract("profile.aspx?athleteid=1").await;
    assert!(
        matches!(result, Err(ScraperError::InvalidUrl { .. })),
        "expected InvalidUrl, got: {result:?}"
    );
}

#[tokio::test]
async fn extract_of_page_without_tables_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>gone</body></html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let link = format!("{}/athletes/profile.aspx?athleteid=2", server.uri());
    let results = client.extract(&link).await.expect("extract should succeed");
    assert!(results.is_empty());
}
