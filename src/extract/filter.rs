// src/extract/filter.rs
// =============================================================================
// This module decides which URLs count as downloadable images.
//
// The rule is a fixed allow-list of filename extensions, matched
// case-insensitively against the *path* component of the URL. Matching on
// the path (not the whole URL string) means a query string like
// "/photo.jpg?width=800" does not defeat the check, and a query that merely
// mentions ".jpg" does not fake it.
//
// Rust concepts:
// - const arrays: The allow-list is fixed at compile time
// - Iterator adapters: any() short-circuits on the first match
// =============================================================================

use url::Url;

// The image formats we download. Anything else found in an <img> tag
// (SVGs, webp, extension-less URLs, ...) is skipped.
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".bmp"];

// Returns true when the URL's path ends with one of the allowed
// image extensions, ignoring case.
//
// Examples:
//   http://example.com/a.jpg          -> true
//   http://example.com/b.PNG          -> true  (case-insensitive)
//   http://example.com/c.svg          -> false (not in the allow-list)
//   http://example.com/photo          -> false (no extension)
//   http://example.com/a.jpg?v=2      -> true  (query ignored)
pub fn has_image_extension(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_allowed_extensions() {
        for name in ["a.jpg", "a.jpeg", "a.png", "a.gif", "a.bmp"] {
            let u = url(&format!("http://example.com/{}", name));
            assert!(has_image_extension(&u), "{} should match", name);
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(has_image_extension(&url("http://example.com/b.PNG")));
        assert!(has_image_extension(&url("http://example.com/B.Jpg")));
    }

    #[test]
    fn test_disallowed_extensions() {
        assert!(!has_image_extension(&url("http://example.com/c.svg")));
        assert!(!has_image_extension(&url("http://example.com/d.webp")));
        assert!(!has_image_extension(&url("http://example.com/archive.tar.gz")));
    }

    #[test]
    fn test_no_extension() {
        assert!(!has_image_extension(&url("http://example.com/d")));
        assert!(!has_image_extension(&url("http://example.com/")));
    }

    #[test]
    fn test_query_string_does_not_defeat_match() {
        assert!(has_image_extension(&url("http://example.com/a.jpg?v=2")));
        // ...and does not fake one either
        assert!(!has_image_extension(&url("http://example.com/page?file=.jpg")));
    }
}
