use url::Url;

const SHORTCODE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Path prefixes that are followed by a post shortcode.
const POST_PREFIXES: [&str; 4] = ["p", "reel", "reels", "tv"];

/// Returns true if `code` is non-empty and uses only the shortcode alphabet.
pub fn is_shortcode(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| SHORTCODE_ALPHABET.contains(&b))
}

/// Returns true if `name` could be an account username.
pub fn is_username(name: &str) -> bool {
    (1..=30).contains(&name.len())
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_')
        && !name.bytes().all(|b| b == b'.')
}

/// Pulls a post shortcode out of user input.
///
/// Accepts a bare shortcode, an Instagram post URL (`/p/`, `/reel/`,
/// `/reels/`, `/tv/`, optionally behind a username), or such a URL without
/// its scheme.
pub fn parse_shortcode(input: &str) -> Option<String> {
    let input = input.trim();
    if is_shortcode(input) {
        return Some(input.to_string());
    }

    let url = Url::parse(input)
        .or_else(|_| Url::parse(&format!("https://{input}")))
        .ok()?;

    let host = url.host_str()?;
    if host != "instagram.com" && !host.ends_with(".instagram.com") {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    let position = segments.iter().position(|s| POST_PREFIXES.contains(s))?;
    segments
        .get(position + 1)
        .filter(|code| is_shortcode(code))
        .map(|code| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- is_shortcode ---

    #[test]
    fn accepts_shortcode_alphabet() {
        assert!(is_shortcode("CJvQ2ph5iD1"));
        assert!(is_shortcode("a-b_C9"));
    }

    #[test]
    fn rejects_other_characters() {
        assert!(!is_shortcode(""));
        assert!(!is_shortcode("abc/def"));
        assert!(!is_shortcode("abc def"));
        assert!(!is_shortcode("abc.def"));
    }

    // --- is_username ---

    #[test]
    fn accepts_usernames() {
        assert!(is_username("catsofinsta"));
        assert!(is_username("cats.of_insta2"));
    }

    #[test]
    fn rejects_bad_usernames() {
        assert!(!is_username(""));
        assert!(!is_username("cats-of-insta"));
        assert!(!is_username("../etc"));
        assert!(!is_username(".."));
        assert!(!is_username(&"a".repeat(31)));
    }

    // --- parse_shortcode ---

    #[test]
    fn bare_shortcode() {
        assert_eq!(parse_shortcode(" CJvQ2ph5iD1 "), Some("CJvQ2ph5iD1".to_string()));
    }

    #[test]
    fn post_url() {
        assert_eq!(
            parse_shortcode("https://www.instagram.com/p/ABC123/"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn reel_and_tv_urls() {
        assert_eq!(
            parse_shortcode("https://instagram.com/reel/DEF456"),
            Some("DEF456".to_string())
        );
        assert_eq!(
            parse_shortcode("https://www.instagram.com/reels/DEF456/"),
            Some("DEF456".to_string())
        );
        assert_eq!(
            parse_shortcode("https://www.instagram.com/tv/GHI789/"),
            Some("GHI789".to_string())
        );
    }

    #[test]
    fn username_prefixed_url_with_query() {
        assert_eq!(
            parse_shortcode("https://www.instagram.com/catsofinsta/p/XYZ/?igsh=abc"),
            Some("XYZ".to_string())
        );
    }

    #[test]
    fn url_without_scheme() {
        assert_eq!(
            parse_shortcode("www.instagram.com/p/ABC123/embed/captioned"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn rejects_other_hosts() {
        assert_eq!(parse_shortcode("https://example.com/p/ABC123/"), None);
        assert_eq!(parse_shortcode("https://notinstagram.com/p/ABC123/"), None);
    }

    #[test]
    fn rejects_paths_without_post() {
        assert_eq!(parse_shortcode("https://www.instagram.com/explore/tags/cat/"), None);
        assert_eq!(parse_shortcode("https://www.instagram.com/p/"), None);
        assert_eq!(parse_shortcode(""), None);
    }
}
