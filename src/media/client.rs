use url::Url;
use worker::*;

use super::page::from_media_page;
use super::refresh::FetchMedia;
use super::timeline::from_account_media_list;
use super::types::Media;
use crate::config::Config;

const CHROME_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] worker::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Media(#[from] crate::media::Error),
}

/// Fetches raw payloads from the Instagram web endpoints and decodes them.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the first page of an account's media listing.
    pub async fn fetch_account_media(
        &self,
        username: &str,
    ) -> std::result::Result<Vec<Media>, FetchError> {
        let url = self.endpoint(&[username])?;
        console_log!("[client] fetching media list for {}", username);

        let body = self.get(url, username).await?;
        let medias = from_account_media_list(&body)?;
        console_log!("[client] decoded {} posts for {}", medias.len(), username);
        Ok(medias)
    }

    /// Builds `{base}/{segments..}/?__a=1&__d=dis`, escaping each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::RustError(format!(
                    "base url {} cannot take a path",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments)
            .push("");
        url.query_pairs_mut()
            .clear()
            .append_pair("__a", "1")
            .append_pair("__d", "dis");
        Ok(url)
    }

    fn headers(&self) -> Result<Headers> {
        let headers = Headers::new();
        headers.set("Accept", "application/json")?;
        headers.set("Accept-Language", "en-US,en;q=0.9")?;
        headers.set("User-Agent", CHROME_UA)?;
        headers.set("X-Ig-App-Id", &self.config.app_id)?;
        headers.set("X-Requested-With", "XMLHttpRequest")?;
        Ok(headers)
    }

    async fn get(&self, url: Url, subject: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let mut init = RequestInit::new();
        init.with_method(Method::Get).with_headers(self.headers()?);

        let request = Request::new_with_init(url.as_str(), &init)?;
        let mut resp = Fetch::Request(request).send().await?;

        let status = resp.status_code();
        let body = resp.bytes().await?;
        console_log!("[client] GET {} status={} len={}", url.path(), status, body.len());

        match status {
            200 => Ok(body),
            404 => Err(FetchError::NotFound(subject.to_string())),
            other => Err(FetchError::Status(other)),
        }
    }
}

impl FetchMedia for Client {
    type Error = FetchError;

    async fn fetch_media_by_code(&self, code: &str) -> std::result::Result<Media, FetchError> {
        let url = self.endpoint(&["p", code])?;
        console_log!("[client] fetching post {}", code);

        let body = self.get(url, code).await?;
        Ok(from_media_page(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        Client::new(Config::from_vars(Some(base.to_string()), None).unwrap())
    }

    #[test]
    fn post_endpoint() {
        let url = client("https://www.instagram.com").endpoint(&["p", "CJvQ2ph5iD1"]).unwrap();
        assert_eq!(url.as_str(), "https://www.instagram.com/p/CJvQ2ph5iD1/?__a=1&__d=dis");
    }

    #[test]
    fn account_endpoint() {
        let url = client("https://www.instagram.com").endpoint(&["catsofinsta"]).unwrap();
        assert_eq!(url.as_str(), "https://www.instagram.com/catsofinsta/?__a=1&__d=dis");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = client("http://localhost:8787/ig/").endpoint(&["p", "ABC"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8787/ig/p/ABC/?__a=1&__d=dis");
    }

    #[test]
    fn endpoint_escapes_segments() {
        let url = client("https://www.instagram.com").endpoint(&["p", "a/b?c"]).unwrap();
        assert_eq!(url.path(), "/p/a%2Fb%3Fc/");
        assert_eq!(url.query(), Some("__a=1&__d=dis"));
    }

    #[test]
    fn endpoint_drops_base_query() {
        let url = client("https://www.instagram.com/?hl=en").endpoint(&["p", "ABC"]).unwrap();
        assert_eq!(url.query(), Some("__a=1&__d=dis"));
    }

    #[test]
    fn decode_errors_pass_through() {
        let err = FetchError::from(crate::media::Error::MalformedPayload(
            "page has no timeline media",
        ));
        assert!(matches!(err, FetchError::Media(crate::media::Error::MalformedPayload(_))));
        assert_eq!(err.to_string(), "malformed payload: page has no timeline media");
    }
}
