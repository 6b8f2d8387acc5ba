// src/image.rs
//! Image selection: the aggregator attaches the page's avatar or resized
//! logo to items that have no real media. Anything matching a known
//! logo/avatar URL shape is suppressed; everything else passes through
//! untouched.

/// `None` in, `None` out. Matching is done on a lowercased copy; the URL
/// that passes through is the original, byte for byte.
pub fn select_image(url: Option<&str>, blocked_substrings: &[String]) -> Option<String> {
    let url = url?;
    let lower = url.to_ascii_lowercase();
    if blocked_substrings.iter().any(|b| lower.contains(b.as_str())) {
        return None;
    }
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageSection;

    fn blocked() -> Vec<String> {
        ImageSection::default().blocked_substrings
    }

    #[test]
    fn absent_stays_absent() {
        assert_eq!(select_image(None, &blocked()), None);
    }

    #[test]
    fn logo_urls_are_suppressed_any_case() {
        for url in [
            "https://cdn.example.com/COMPANY-LOGO_200_200.png",
            "https://cdn.example.com/assets/logo.png",
            "https://media.example.com/profile-pic.jpg",
            "https://media.example.com/img_100_100.jpg",
        ] {
            assert_eq!(select_image(Some(url), &blocked()), None, "{url}");
        }
    }

    #[test]
    fn content_image_passes_through_unchanged() {
        let url = "https://media.example.com/feedshare/Recycling-Event.JPG";
        assert_eq!(select_image(Some(url), &blocked()), Some(url.to_string()));
    }
}
