//! Cursor pagination for list endpoints.
//!
//! List endpoints answer with `{"results": [...], "next": <url-or-null>}`.
//! The `next` URL already carries every query parameter the server needs,
//! so only the first request sends the caller's parameters.

use serde_json::Value;
use tracing::debug;

use super::http::HttpClient;
use super::transport::Transport;
use crate::models::decode::Fields;
use crate::Result;

/// One decoded page envelope.
#[derive(Debug)]
pub struct Page {
    /// Items on this page, in server order
    pub results: Vec<Value>,
    /// URL of the following page, if any
    pub next: Option<String>,
}

impl Page {
    /// Split a page body into its results and cursor.
    ///
    /// A missing `results` reads as empty and a missing or `null` `next`
    /// ends the walk.
    pub fn from_json(body: &Value) -> Result<Self> {
        let fields = Fields::new(body, "")?;
        Ok(Self {
            results: fields.raw_array("results")?.to_vec(),
            next: fields.optional_string("next")?,
        })
    }
}

impl<T: Transport> HttpClient<T> {
    /// Fetch every page starting at `url` and concatenate their results.
    ///
    /// `params` go on the first request only. Any failure aborts the walk and
    /// is returned as-is; results gathered so far are dropped.
    pub async fn fetch_all_pages(&self, url: &str, params: &[(String, String)]) -> Result<Vec<Value>> {
        let mut results = Vec::new();
        let mut cursor = Some(url.to_string());
        let mut pages = 0usize;

        while let Some(page_url) = cursor.take() {
            let mut request = self.request(page_url);
            if pages == 0 {
                request = request.with_query(params.to_vec());
            }

            let body = self.get_json(request).await?;
            let page = Page::from_json(&body)?;
            pages += 1;

            debug!(
                page = pages,
                items = page.results.len(),
                has_next = page.next.is_some(),
                "Fetched page"
            );

            results.extend(page.results);
            cursor = page.next;
        }

        debug!(pages, total = results.len(), "Pagination complete");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_page_with_cursor() {
        let page = Page::from_json(&json!({
            "count": 3,
            "next": "https://api.octopus.energy/v1/products/?page=2",
            "previous": null,
            "results": [{"code": "A"}, {"code": "B"}]
        }))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(
            page.next.as_deref(),
            Some("https://api.octopus.energy/v1/products/?page=2")
        );
    }

    #[test]
    fn test_last_page() {
        let page = Page::from_json(&json!({"results": [], "next": null})).unwrap();
        assert!(page.results.is_empty());
        assert!(page.next.is_none());

        let page = Page::from_json(&json!({})).unwrap();
        assert!(page.results.is_empty());
        assert!(page.next.is_none());
    }

    #[test]
    fn test_malformed_envelope() {
        assert!(matches!(
            Page::from_json(&json!({"results": "nope"})),
            Err(Error::Validation { ref path, .. }) if path == "results"
        ));
        assert!(matches!(
            Page::from_json(&json!({"results": [], "next": 7})),
            Err(Error::Validation { ref path, .. }) if path == "next"
        ));
        assert!(Page::from_json(&json!([1, 2])).is_err());
    }
}
