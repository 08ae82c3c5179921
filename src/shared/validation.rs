use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for image URL fields (thumbnail, cover image)
    /// Must be an absolute http(s) URL with a non-empty host
    /// - Valid: "https://cdn.example.com/a.png", "http://img.example.com/c?v=2"
    /// - Invalid: "ftp://example.com/a.png", "//cdn.example.com/a.png", "not a url"
    pub static ref IMAGE_URL_REGEX: Regex =
        Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_regex_valid() {
        assert!(IMAGE_URL_REGEX.is_match("https://cdn.example.com/a.png"));
        assert!(IMAGE_URL_REGEX.is_match("http://img.example.com/c?v=2"));
        assert!(IMAGE_URL_REGEX.is_match("https://example.com/covers/1/full.jpg"));
    }

    #[test]
    fn test_image_url_regex_invalid() {
        assert!(!IMAGE_URL_REGEX.is_match("ftp://example.com/a.png")); // wrong scheme
        assert!(!IMAGE_URL_REGEX.is_match("//cdn.example.com/a.png")); // scheme-relative
        assert!(!IMAGE_URL_REGEX.is_match("not a url")); // no scheme
        assert!(!IMAGE_URL_REGEX.is_match("https:// example.com/a.png")); // whitespace
        assert!(!IMAGE_URL_REGEX.is_match("")); // empty
    }
}
