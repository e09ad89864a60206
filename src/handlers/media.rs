use serde::Serialize;
use url::Url;
use worker::*;

use crate::config::Config;
use crate::media::{Client, FetchError, FetchMedia};
use crate::utils::instagram::{is_shortcode, is_username, parse_shortcode};

/// Route: `/p/:code`
pub async fn post(_req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let code = match ctx.param("code").filter(|c| is_shortcode(c)) {
        Some(code) => code.to_string(),
        None => return Response::error("Bad Request", 400),
    };

    respond_post(&code, &ctx.env).await
}

/// Route: `/media?url=<post url or shortcode>`
pub async fn lookup(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let req_url = req.url()?;
    let code = match get_query_param(&req_url, "url").and_then(|v| parse_shortcode(&v)) {
        Some(code) => code,
        None => return Response::error("Bad Request", 400),
    };

    respond_post(&code, &ctx.env).await
}

/// Route: `/u/:username`
pub async fn account(_req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let username = match ctx.param("username").filter(|u| is_username(u)) {
        Some(username) => username.to_string(),
        None => return Response::error("Bad Request", 400),
    };

    let client = Client::new(Config::from_env(&ctx.env)?);
    match client.fetch_account_media(&username).await {
        Ok(medias) => json_response(&medias),
        Err(e) => error_response(&username, e),
    }
}

async fn respond_post(code: &str, env: &Env) -> Result<Response> {
    let client = Client::new(Config::from_env(env)?);
    match client.fetch_media_by_code(code).await {
        Ok(media) => json_response(&media),
        Err(e) => error_response(code, e),
    }
}

fn json_response<T: Serialize>(value: &T) -> Result<Response> {
    let headers = Headers::new();
    headers.set("Cache-Control", "no-store")?;
    Ok(Response::from_json(value)?.with_headers(headers))
}

fn error_response(subject: &str, err: FetchError) -> Result<Response> {
    console_log!("[media] lookup for {} failed: {}", subject, err);
    Response::error(err.to_string(), error_status(&err))
}

fn error_status(err: &FetchError) -> u16 {
    match err {
        FetchError::NotFound(_) => 404,
        FetchError::Http(_) | FetchError::Status(_) | FetchError::Media(_) => 502,
    }
}

fn get_query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(error_status(&FetchError::NotFound("ABC".to_string())), 404);
    }

    #[test]
    fn upstream_failures_map_to_502() {
        assert_eq!(error_status(&FetchError::Status(429)), 502);
        assert_eq!(
            error_status(&FetchError::Media(crate::media::Error::MalformedPayload("empty"))),
            502
        );
    }

    #[test]
    fn reads_url_query_param() {
        let url = Url::parse(
            "https://example.com/media?url=https%3A%2F%2Fwww.instagram.com%2Fp%2FABC%2F",
        )
        .unwrap();
        assert_eq!(
            get_query_param(&url, "url").as_deref(),
            Some("https://www.instagram.com/p/ABC/")
        );
        assert_eq!(get_query_param(&url, "missing"), None);
    }
}
