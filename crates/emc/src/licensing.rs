//! UK licensing lookup against the eMC site.

use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{EmcError, EmcResult};

/// Request timeout applied to every page fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser-like User-Agent; the eMC site rejects obvious bot agents.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Minimum character count for a section body to count as substantial.
const MIN_SECTION_CHARS: usize = 50;

/// UK licensing information for one queried drug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UkLicensing {
    /// The name as queried.
    pub drug: String,
    /// Therapeutic indications text, or a "not found" message.
    pub uk_indications: String,
    /// Data source label.
    pub source: String,
    /// Product page URL, empty when no product matched.
    pub url: String,
}

/// Scraper for UK licensing text from the eMC product pages.
#[derive(Clone, Debug)]
pub struct EmcScraper {
    base_url: String,
    client: reqwest::Client,
}

impl EmcScraper {
    /// Create a new `EmcScraper` against the given base URL.
    ///
    /// # Errors
    /// Returns `EmcError::InvalidInput` if `base_url` is empty, or
    /// `EmcError::ClientBuild` if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> EmcResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(EmcError::InvalidInput("base_url cannot be empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(EmcError::ClientBuild)?;

        Ok(Self { base_url, client })
    }

    /// Look up UK licensing text for a drug name.
    ///
    /// Searches eMC, follows the first product link and extracts the
    /// therapeutic indications section. A missing product or a product page
    /// without a recognisable indications section yields a `UkLicensing`
    /// carrying the corresponding message.
    ///
    /// # Errors
    /// Returns an error only when a page cannot be fetched or read.
    pub async fn search(&self, drug_name: &str) -> EmcResult<UkLicensing> {
        tracing::debug!("eMC lookup for {}", drug_name);

        let search_url = format!("{}/emc/search", self.base_url);
        let search_html = self
            .fetch_page(&search_url, &[("q", drug_name)])
            .await?;

        let Some(product_path) = first_product_path(&search_html) else {
            return Ok(UkLicensing {
                drug: drug_name.to_string(),
                uk_indications: "No UK product found".to_string(),
                source: "eMC".to_string(),
                url: String::new(),
            });
        };

        let product_url = format!("{}{}", self.base_url, product_path);
        let product_html = self.fetch_page(&product_url, &[]).await?;

        let uk_indications = extract_indication_text(&product_html)
            .unwrap_or_else(|| "UK indications not found in standard format".to_string());

        Ok(UkLicensing {
            drug: drug_name.to_string(),
            uk_indications,
            source: "eMC (UK)".to_string(),
            url: product_url,
        })
    }

    async fn fetch_page(&self, url: &str, query: &[(&str, &str)]) -> EmcResult<String> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(EmcError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmcError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(EmcError::Body)
    }
}

/// Find the path of the first product link on a search results page.
fn first_product_path(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("anchor selector is valid");

    document
        .select(&anchors)
        .filter_map(|anchor| anchor.value().attr("href"))
        .find(|href| href.contains("/emc/product/"))
        .map(|href| href.to_string())
}

/// Extract the therapeutic indications text from a product page.
///
/// Looks for a section header (`4.1`, "Therapeutic indications" or
/// "Indications") whose first `p`/`div` sibling carries substantial text;
/// falls back to any element mentioning "indicated for".
fn extract_indication_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let headers = Selector::parse("h2, h3, h4").expect("header selector is valid");

    for header in document.select(&headers) {
        let title = header.text().collect::<String>().to_lowercase();
        if !(title.contains("4.1") || title.contains("indications")) {
            continue;
        }

        for sibling in header.next_siblings() {
            let Some(element) = ElementRef::wrap(sibling) else {
                continue;
            };
            let name = element.value().name();
            if name != "p" && name != "div" {
                continue;
            }
            let text = element_text(&element);
            if text.chars().count() > MIN_SECTION_CHARS {
                return Some(text);
            }
            // Only the first p/div sibling belongs to this header.
            break;
        }
    }

    for node in document.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        if !text.to_lowercase().contains("indicated for") {
            continue;
        }
        let Some(parent) = node.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let text = element_text(&parent);
        if text.chars().count() > MIN_SECTION_CHARS {
            return Some(text);
        }
    }

    None
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
            <nav><a href="/emc/browse-medicines">Browse</a></nav>
            <ul class="search-results">
                <li><a href="/emc/product/6856/smpc">Risperdal 1mg film-coated tablets</a></li>
                <li><a href="/emc/product/1234/pil">Risperdal oral solution</a></li>
            </ul>
        </body></html>
    "#;

    const PRODUCT_PAGE: &str = r#"
        <html><body>
            <h2>3. Pharmaceutical form</h2>
            <p>Film-coated tablet.</p>
            <h3>4.1 Therapeutic indications</h3>
            <p>Risperdal is indicated for the treatment of schizophrenia and for the
            treatment of moderate to severe manic episodes associated with bipolar
            disorders.</p>
            <h3>4.2 Posology</h3>
            <p>Adults: 2 mg/day.</p>
        </body></html>
    "#;

    #[test]
    fn test_first_product_path_picks_first_product_link() {
        assert_eq!(
            first_product_path(SEARCH_PAGE).as_deref(),
            Some("/emc/product/6856/smpc")
        );
    }

    #[test]
    fn test_first_product_path_ignores_pages_without_products() {
        let html = r#"<html><body><a href="/emc/browse-medicines">Browse</a></body></html>"#;
        assert!(first_product_path(html).is_none());
    }

    #[test]
    fn test_extracts_section_following_header() {
        let text = extract_indication_text(PRODUCT_PAGE).unwrap();
        assert!(text.starts_with("Risperdal is indicated for the treatment of schizophrenia"));
        assert!(!text.contains("Posology"));
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let html = r#"
            <html><body>
                <h2>THERAPEUTIC INDICATIONS</h2>
                <div>This medicine is indicated for the symptomatic relief of seasonal
                allergic rhinitis in adults and children over twelve years.</div>
            </body></html>
        "#;
        let text = extract_indication_text(html).unwrap();
        assert!(text.contains("seasonal"));
    }

    #[test]
    fn test_short_section_body_falls_back_to_indicated_for() {
        let html = r#"
            <html><body>
                <h3>4.1 Therapeutic indications</h3>
                <p>See below.</p>
                <p class="details">This product is indicated for the prophylaxis of migraine
                headache in adults whose attacks occur two or more times per month.</p>
            </body></html>
        "#;
        let text = extract_indication_text(html).unwrap();
        assert!(text.starts_with("This product is indicated for the prophylaxis"));
    }

    #[test]
    fn test_no_recognisable_section_yields_none() {
        let html = r#"<html><body><p>Patient information leaflet.</p></body></html>"#;
        assert!(extract_indication_text(html).is_none());
    }
}
