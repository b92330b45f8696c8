// src/job_listings/job_scraper.rs
use super::{JobListing, ListingSource, NOT_AVAILABLE, NO_LINK};
use anyhow::{anyhow, Context, Result};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{error, info, warn};
use url::form_urlencoded::byte_serialize;

pub const DEFAULT_SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Class names of the public results page. They are not a stable contract.
const CARD_SELECTOR: &str = "div.base-card";
const TITLE_SELECTOR: &str = "h3.base-search-card__title";
const COMPANY_SELECTOR: &str = "h4.base-search-card__subtitle";
const LOCATION_SELECTOR: &str = "span.job-search-card__location";
const LINK_SELECTOR: &str = "a";

struct ListingSelectors {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
}

impl ListingSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            card: parse_selector(CARD_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            company: parse_selector(COMPANY_SELECTOR)?,
            location: parse_selector(LOCATION_SELECTOR)?,
            link: parse_selector(LINK_SELECTOR)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid selector {}: {}", selector, e))
}

/// Best-effort scraper for the public job search results page.
pub struct JobScraper {
    client: Client,
    search_url: String,
    selectors: ListingSelectors,
}

impl JobScraper {
    pub fn new() -> Result<Self> {
        Self::with_search_url(DEFAULT_SEARCH_URL)
    }

    pub fn with_search_url(search_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            search_url: search_url.to_string(),
            selectors: ListingSelectors::new()?,
        })
    }

    /// Fetches page 1 of the results for a title, location and keywords.
    /// Every failure is logged and yields an empty list.
    pub async fn fetch_listings(
        &self,
        job_title: &str,
        location: &str,
        keywords: &[String],
    ) -> Vec<JobListing> {
        let url = build_search_url(&self.search_url, job_title, location, keywords);
        info!("Fetching job listings: {}", url);

        let response = match self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Error fetching job listings: {}", e);
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Job search returned HTTP {}", status);
            return Vec::new();
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                error!("Failed to read job search body: {}", e);
                return Vec::new();
            }
        };

        let listings = self.parse_listings(&html);
        if listings.is_empty() {
            info!("Job search page contained no listings");
        } else {
            info!("Extracted {} job listings", listings.len());
        }
        listings
    }

    /// Extracts every listing container from a results page. Missing fields
    /// become "N/A", a missing link becomes "#".
    pub fn parse_listings(&self, html: &str) -> Vec<JobListing> {
        let document = Html::parse_document(html);

        document
            .select(&self.selectors.card)
            .map(|card| JobListing {
                title: self.text_of(card, &self.selectors.title),
                company: self.text_of(card, &self.selectors.company),
                location: self.text_of(card, &self.selectors.location),
                url: card
                    .select(&self.selectors.link)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(str::to_string)
                    .unwrap_or_else(|| NO_LINK.to_string()),
                source: ListingSource::Linkedin,
            })
            .collect()
    }

    fn text_of(&self, card: ElementRef<'_>, selector: &Selector) -> String {
        card.select(selector)
            .next()
            .map(|element| clean_text(&element.text().collect::<Vec<_>>().join(" ")))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// `{base}?keywords={title}%20{kw1}%20{kw2}&location={location}`
pub fn build_search_url(
    base: &str,
    job_title: &str,
    location: &str,
    keywords: &[String],
) -> String {
    let mut terms = vec![encode_component(job_title)];
    terms.extend(keywords.iter().map(|k| encode_component(k)));

    format!(
        "{}?keywords={}&location={}",
        base,
        terms.join("%20"),
        encode_component(location)
    )
}

fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
