use tracing::{debug, error};

/// Fetch one URL and return the body text with its HTTP status. Transport
/// failures come back as `(None, 0)` rather than an error; an HTTP error
/// status still returns its body so the not-found classifier can read it.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> (Option<String>, u16) {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            debug!("Fetched {} with status {}", url, status);
            match response.text().await {
                Ok(body) => (Some(body), status),
                Err(e) => {
                    error!("Failed to read body for {}: {}", url, e);
                    (None, 0)
                }
            }
        }
        Err(e) => {
            error!("Request error for {}: {}", url, e);
            (None, 0)
        }
    }
}
