//! Web search collaborator.
//!
//! Runs a handful of Custom Search queries for the company, picks the most
//! likely official website, scrapes that page for contact details and fills
//! remaining gaps from the search snippets.

use super::extract::{self, clean_text, first_match, max_number};
use super::{SourceCollaborator, SourceError};
use crate::config::SearchConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use firmfuse_shared::{Field, RawSourceRecord, SENTINEL};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Query suffixes appended to the company name.
const QUERY_SUFFIXES: [&str; 5] = ["official website", "company", "about", "contact", "profile"];

/// One Custom Search hit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(default)]
    error: Option<SearchApiError>,
}

#[derive(Debug, Deserialize)]
struct SearchApiError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Contact details scraped from one source of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapedDetails {
    pub address: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub employees: Option<String>,
}

impl ScrapedDetails {
    /// Details from the company's own page.
    pub fn from_page(html: &str) -> Self {
        let text = html2text::from_read(html.as_bytes(), 200);
        Self {
            address: first_match(&text, &extract::PAGE_ADDRESS_RE),
            state: first_match(&text, &extract::STATE_RE),
            postal_code: first_match(&text, &extract::POSTAL_CODE_RE),
            phone: first_match(&text, &extract::PAGE_PHONE_RE),
            email: extract::best_email(html),
            employees: max_number(&text, &extract::PAGE_EMPLOYEES_RE),
        }
    }

    /// Fill whatever is still missing from concatenated search snippets.
    pub fn fill_from_snippets(&mut self, snippets: &str) {
        if self.address.is_none() {
            self.address = first_match(snippets, &extract::SNIPPET_ADDRESS_RE).map(|a| clean_text(&a));
        }
        if self.state.is_none() {
            self.state = first_match(snippets, &extract::STATE_RE);
        }
        if self.postal_code.is_none() {
            self.postal_code = first_match(snippets, &extract::POSTAL_CODE_RE);
        }
        if self.phone.is_none() {
            self.phone = first_match(snippets, &extract::SNIPPET_PHONE_RE);
        }
        if self.email.is_none() {
            self.email = first_match(snippets, &extract::EMAIL_RE);
        }
        if self.employees.is_none() {
            self.employees = max_number(snippets, &extract::SNIPPET_EMPLOYEES_RE);
        }
    }
}

/// Drop hits without links and repeated links, keeping first-seen order.
pub fn dedup_by_link(items: Vec<SearchItem>) -> Vec<SearchItem> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| match &item.link {
            Some(link) if !link.is_empty() => seen.insert(link.clone()),
            _ => false,
        })
        .collect()
}

/// First hit whose domain contains the squashed company name, else the first link.
pub fn pick_website(company_name: &str, items: &[SearchItem]) -> Option<String> {
    let wanted = extract::squash(company_name);
    let links = || items.iter().filter_map(|i| i.link.as_deref());

    links()
        .find(|link| {
            !wanted.is_empty()
                && extract::domain_from_url(link)
                    .map(|d| extract::squash(&d).contains(&wanted))
                    .unwrap_or(false)
        })
        .or_else(|| links().next())
        .map(str::to_string)
}

/// Assemble the raw record from search hits and scraped details.
pub fn build_record(
    company_name: &str,
    items: &[SearchItem],
    website: Option<String>,
    details: ScrapedDetails,
) -> RawSourceRecord {
    let snippets = items
        .iter()
        .filter_map(|i| i.snippet.as_deref())
        .collect::<Vec<_>>()
        .join(" ");
    let description = clean_text(&snippets);
    let or_sentinel = |v: Option<String>| v.filter(|s| !s.is_empty()).unwrap_or_else(|| SENTINEL.to_string());

    RawSourceRecord::new()
        .with(Field::CompanyName, company_name)
        .with(Field::Description, or_sentinel(Some(description)))
        .with(Field::Address, or_sentinel(details.address))
        .with(Field::State, or_sentinel(details.state))
        .with(Field::PostalCode, or_sentinel(details.postal_code))
        .with(Field::Phone, or_sentinel(details.phone))
        .with(Field::Email, or_sentinel(details.email))
        .with(Field::Employees, or_sentinel(details.employees))
        .with(Field::Website, or_sentinel(website))
}

/// Record used when search yields nothing.
pub fn empty_record(company_name: &str) -> RawSourceRecord {
    RawSourceRecord::placeholder(
        company_name,
        format!("No information found for {}.", company_name),
    )
}

pub struct SearchResearcher {
    config: SearchConfig,
    http: reqwest::Client,
}

impl SearchResearcher {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    /// All queries for `company_name`, deduplicated by link.
    async fn search(&self, company_name: &str) -> Result<Vec<SearchItem>, SourceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials("search api key"))?;
        let engine_id = self
            .config
            .engine_id
            .as_deref()
            .ok_or(SourceError::MissingCredentials("search engine id"))?;

        let mut all_items = Vec::new();
        for suffix in QUERY_SUFFIXES {
            let query = format!("{} {}", company_name, suffix);
            match self.single_search(api_key, engine_id, &query).await {
                Ok(items) => all_items.extend(items),
                Err(e) => warn!(query = %query, "search query failed: {}", e),
            }
        }
        Ok(dedup_by_link(all_items))
    }

    async fn single_search(
        &self,
        api_key: &str,
        engine_id: &str,
        query: &str,
    ) -> Result<Vec<SearchItem>, SourceError> {
        let num = self.config.results_per_query.to_string();
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("key", api_key), ("cx", engine_id), ("q", query), ("num", num.as_str())])
            .send()
            .await?;
        debug!(status = %response.status(), query = %query, "search request");

        let body: SearchResponse = response.json().await?;
        if let Some(error) = body.error {
            match error.code {
                429 => warn!("search quota exceeded; quota resets daily or use another key"),
                400 => warn!("search rejected the request; check the engine id and key"),
                _ => {}
            }
            return Err(SourceError::Api {
                code: error.code,
                message: error.message,
            });
        }
        Ok(body.items)
    }

    async fn fetch_page(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .http
            .get(url)
            .timeout(Duration::from_secs(self.config.page_timeout_secs))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SourceCollaborator for SearchResearcher {
    fn name(&self) -> &'static str {
        "search"
    }

    async fn fetch(&self, company_name: &str) -> RawSourceRecord {
        info!("Fetching search data for {}", company_name);

        let items = match self.search(company_name).await {
            Ok(items) if !items.is_empty() => items,
            Ok(_) => {
                warn!("No search results for {}", company_name);
                return empty_record(company_name);
            }
            Err(e) => {
                warn!("Search failed for {}: {}", company_name, e);
                return empty_record(company_name);
            }
        };

        let website = pick_website(company_name, &items);
        let mut details = match &website {
            Some(url) => match self.fetch_page(url).await {
                Ok(html) => ScrapedDetails::from_page(&html),
                Err(e) => {
                    warn!("Website fetch failed for {}: {}", url, e);
                    ScrapedDetails::default()
                }
            },
            None => ScrapedDetails::default(),
        };

        let snippets = items
            .iter()
            .filter_map(|i| i.snippet.as_deref())
            .collect::<Vec<_>>()
            .join(" ");
        details.fill_from_snippets(&snippets);

        build_record(company_name, &items, website, details)
    }
}
