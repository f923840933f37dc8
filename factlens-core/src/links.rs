//! Search links into external fact-checking services.
//!
//! Only URLs are built here; nothing is fetched.

use factlens_common::{FactlensError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Marker replaced by the percent-encoded query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Stand-in for the query while a template is validated. Lowercase ASCII so
/// it survives host and path normalization unchanged.
const SAMPLE_QUERY: &str = "factlenssamplequery";

const DEFAULT_SERVICES: [(&str, &str); 5] = [
    ("Snopes", "https://www.snopes.com/search/?q={query}"),
    ("PolitiFact", "https://www.politifact.com/search/?q={query}"),
    (
        "Reuters Fact Check",
        "https://www.reuters.com/site-search/?query={query}",
    ),
    ("AFP Fact Check", "https://factcheck.afp.com/search?keys={query}"),
    (
        "Google Fact Check Explorer",
        "https://toolbox.google.com/factcheck/explorer/search?query={query}",
    ),
];

/// One named link in an analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckLink {
    pub name: String,
    pub url: String,
}

/// A fact-checking service and its search URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactChecker {
    name: String,
    prefix: String,
    suffix: String,
}

impl FactChecker {
    /// Validate `url_template`: exactly one `{query}`, absolute http(s) URL
    /// with a host, placeholder in the path, query or fragment.
    pub fn new(name: impl Into<String>, url_template: &str) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| FactlensError::Template {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(FactlensError::Config(
                "fact checker name must not be blank".to_string(),
            ));
        }
        let (prefix, suffix) = url_template
            .split_once(QUERY_PLACEHOLDER)
            .ok_or_else(|| invalid("missing {query} placeholder"))?;
        if suffix.contains(QUERY_PLACEHOLDER) {
            return Err(invalid("more than one {query} placeholder"));
        }

        let sample = Url::parse(&format!("{prefix}{SAMPLE_QUERY}{suffix}"))
            .map_err(|e| invalid(&e.to_string()))?;
        if !matches!(sample.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        let Some(host) = sample.host_str().filter(|h| !h.is_empty()) else {
            return Err(invalid("URL has no host"));
        };
        let in_authority = host.contains(SAMPLE_QUERY)
            || sample.username().contains(SAMPLE_QUERY)
            || sample.password().is_some_and(|p| p.contains(SAMPLE_QUERY));
        if in_authority {
            return Err(invalid("{query} must not be part of the host or credentials"));
        }
        let in_target = sample.path().contains(SAMPLE_QUERY)
            || sample.query().is_some_and(|q| q.contains(SAMPLE_QUERY))
            || sample.fragment().is_some_and(|f| f.contains(SAMPLE_QUERY));
        if !in_target {
            return Err(invalid("{query} must sit in the path, query or fragment"));
        }

        Ok(Self {
            name,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url_template(&self) -> String {
        format!("{}{QUERY_PLACEHOLDER}{}", self.prefix, self.suffix)
    }

    /// Percent-encode `query` into the template. Never fails.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            urlencoding::encode(query),
            self.suffix
        )
    }
}

/// Snopes, PolitiFact, Reuters, AFP and Google Fact Check Explorer, in order.
pub fn default_fact_checkers() -> Result<Vec<FactChecker>> {
    DEFAULT_SERVICES
        .iter()
        .map(|(name, template)| FactChecker::new(*name, template))
        .collect()
}

/// One link per checker, in checker order.
pub fn build_links(query: &str, checkers: &[FactChecker]) -> Vec<FactCheckLink> {
    checkers
        .iter()
        .map(|checker| FactCheckLink {
            name: checker.name().to_string(),
            url: checker.search_url(query),
        })
        .collect()
}
