//! Pattern extraction from page text and search snippets.
//!
//! Naive by nature: first match wins, except employee counts which take the
//! largest number mentioned.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[a-zA-Z]+;").unwrap());
static CSS_RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\w+[^{}]*\{[^}]*\}").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://(?:www\.)?([^/?#]+)").unwrap());

pub static PAGE_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+ [^\n]{10,80}?\b(?:Street|St|Avenue|Ave|Road|Rd|Lane|Ln|Blvd|Boulevard|Way|Drive|Dr)\b").unwrap()
});
pub static SNIPPET_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+[\w\s,.-]+(?:Street|Avenue|Drive|Road|Boulevard|Lane|Way|Court|Place|Circle|Terrace)[^\n]{10,100}").unwrap()
});
pub static STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:AL|AK|AZ|AR|CA|CO|CT|DE|FL|GA|HI|ID|IL|IN|IA|KS|KY|LA|ME|MD|MA|MI|MN|MS|MO|MT|NE|NV|NH|NJ|NM|NY|NC|ND|OH|OK|OR|PA|RI|SC|SD|TN|TX|UT|VT|VA|WA|WV|WI|WY|DC)\b").unwrap()
});
pub static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap());
pub static PAGE_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,2}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
pub static SNIPPET_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,2}[-.\s]?)?\(?\d{2,4}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
pub static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());
pub static PAGE_EMPLOYEES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,5})\s+(?:employees|staff|team)").unwrap());
pub static SNIPPET_EMPLOYEES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,5})\s+(?:employees|staff|people)").unwrap());

/// Addresses that are never a company contact.
const SKIPPED_EMAIL_PARTS: &[&str] = &[
    "core@", "admin@", "root@", "noreply@", "no-reply@", "donotreply@", "system@", "webmaster@",
    "postmaster@", "hostmaster@", "abuse@", "@localhost", "@127.", "@192.168.", "@10.", "@172.",
    "@example.com", "@test.com", "@sample.com",
];

/// Role mailboxes ranked ahead of personal ones.
const PREFERRED_EMAIL_PARTS: &[&str] = &[
    "info@", "contact@", "hello@", "support@", "sales@", "marketing@", "hr@", "jobs@", "careers@",
    "media@", "press@", "pr@",
];

/// Strip tags, entities, inline CSS rules and collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let text = TAG_RE.replace_all(text, "");
    let text = ENTITY_RE.replace_all(&text, "");
    let text = CSS_RULE_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Lowercased host of a URL without a leading `www.`.
pub fn domain_from_url(url: &str) -> Option<String> {
    DOMAIN_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Lowercase ASCII alphanumerics only.
pub fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn first_match(text: &str, re: &Regex) -> Option<String> {
    re.find(text).map(|m| m.as_str().trim().to_string())
}

/// Largest number captured by group 1.
pub fn max_number(text: &str, re: &Regex) -> Option<String> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1)?.as_str().parse::<u64>().ok())
        .max()
        .map(|n| n.to_string())
}

/// Best business email in `html`, preferring role mailboxes.
pub fn best_email(html: &str) -> Option<String> {
    let mut preferred = Vec::new();
    let mut others = Vec::new();

    for m in EMAIL_RE.find_iter(html) {
        let email = m.as_str().trim().to_lowercase();
        if SKIPPED_EMAIL_PARTS.iter().any(|skip| email.contains(skip)) {
            continue;
        }
        let domain = email.split_once('@').map(|(_, d)| d).unwrap_or("");
        if domain.len() < 4 || domain.replace('.', "").chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if PREFERRED_EMAIL_PARTS.iter().any(|p| email.starts_with(p)) {
            preferred.push(email);
        } else {
            others.push(email);
        }
    }

    preferred.into_iter().chain(others).next()
}
