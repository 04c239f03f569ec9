//! Static Content
//!
//! Portfolio text, project links, theme palettes, ASCII art and the fun
//! zone's quotes and fortunes. Nothing here has behavior beyond lookups.

pub mod ascii;
pub mod portfolio;
pub mod sayings;
pub mod themes;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_urls_cover_listing() {
        for n in 1..=5 {
            let key = alloc::format!("project-{}", n);
            assert!(portfolio::project_url(&key).is_some(), "{}", key);
        }
        assert!(portfolio::project_url("project-6").is_none());
    }

    #[test]
    fn test_ascii_keys_are_prefixed() {
        assert!(ascii::keys().all(|k| k.starts_with("ascii-")));
        assert!(ascii::art("ascii-doge").is_some());
        assert!(ascii::art("doge").is_none());
    }

    #[test]
    fn test_sayings_not_empty() {
        assert!(!sayings::QUOTES.is_empty());
        assert!(!sayings::FORTUNES.is_empty());
        assert!(!sayings::RANDOM_SITES.is_empty());
    }
}
