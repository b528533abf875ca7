//! HTTP client for the Power of 10 athlete lookup and profile pages.
//!
//! Requests are issued one at a time. There is no retry: a network failure or
//! a non-2xx status is returned to the caller as a [`ScraperError`].

use std::time::Duration;

use po10_core::{AppConfig, ProfileLinks, RaceResult, RosterEntry};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::extract::parse_results;
use crate::lookup::parse_profile_links;

/// Client for the results site.
///
/// Use [`Po10Client::from_config`] for the configured site or
/// [`Po10Client::with_base_url`] to point at a mock server in tests.
pub struct Po10Client {
    client: Client,
    site_base: String,
}

impl Po10Client {
    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// See [`Po10Client::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::with_base_url(
            &config.site_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client against a custom site base (scheme and host).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`ScraperError::InvalidUrl`] if `base_url` does not
    /// parse as a URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let site_base = base_url.trim_end_matches('/').to_owned();
        Url::parse(&site_base).map_err(|e| ScraperError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, site_base })
    }

    /// Scheme and host of the site, without a trailing slash.
    #[must_use]
    pub fn site_base(&self) -> &str {
        &self.site_base
    }

    /// Base that relative profile hrefs from the lookup page are joined onto.
    #[must_use]
    pub fn athletes_base(&self) -> String {
        format!("{}/athletes/", self.site_base)
    }

    /// Looks up an athlete and returns the profile links from the first
    /// matching row.
    ///
    /// An athlete with no match yields empty [`ProfileLinks`], not an error.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    pub async fn resolve(&self, entry: &RosterEntry) -> Result<ProfileLinks, ScraperError> {
        let url = self.lookup_url(entry)?;
        tracing::debug!(athlete = %entry.full_name(), url = %url, "looking up athlete");

        let response = self.client.post(url.clone()).send().await?;
        let body = Self::success_body(response, url.as_str()).await?;

        Ok(parse_profile_links(&body, &self.athletes_base()))
    }

    /// Fetches a profile page and extracts every result row from its
    /// performance tables.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `profile_link` is not a URL.
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    pub async fn extract(&self, profile_link: &str) -> Result<Vec<RaceResult>, ScraperError> {
        let url = Url::parse(profile_link).map_err(|e| ScraperError::InvalidUrl {
            url: profile_link.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self.client.get(url).send().await?;
        let body = Self::success_body(response, profile_link).await?;

        Ok(parse_results(&body, &self.site_base))
    }

    /// Builds the lookup URL with the athlete's surname, first name and club
    /// as query parameters.
    fn lookup_url(&self, entry: &RosterEntry) -> Result<Url, ScraperError> {
        let base = format!("{}athleteslookup.aspx", self.athletes_base());
        let mut url = Url::parse(&base).map_err(|e| ScraperError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("surname", &entry.last_name)
            .append_pair("firstname", &entry.first_name)
            .append_pair("club", &entry.club);

        Ok(url)
    }

    async fn success_body(response: reqwest::Response, url: &str) -> Result<String, ScraperError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
