use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, VidquizError};

static URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([A-Za-z0-9_-]{11})",
        r"^(?:https?://)?(?:www\.)?youtu\.be/([A-Za-z0-9_-]{11})",
        r"^(?:https?://)?(?:www\.)?youtube\.com/embed/([A-Za-z0-9_-]{11})",
        r"^(?:https?://)?(?:www\.)?youtube\.com/v/([A-Za-z0-9_-]{11})",
        r"^(?:https?://)?(?:www\.)?youtube\.com/shorts/([A-Za-z0-9_-]{11})",
        r"^(?:https?://)?(?:m\.)?youtube\.com/watch\?v=([A-Za-z0-9_-]{11})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("hardcoded pattern"))
    .collect()
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("hardcoded pattern"));

/// Extract the 11-character video id from any supported YouTube URL form,
/// or from a bare id.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    for pattern in URL_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(input) {
            return Some(captures[1].to_string());
        }
    }

    if BARE_ID.is_match(input) {
        return Some(input.to_string());
    }

    None
}

/// Like `extract_video_id`, but an unrecognizable reference fails with
/// `InvalidVideoUrl` carrying the offending input. This is the checked entry
/// point for hosts; nothing past it sees an unparseable reference.
pub fn parse_video_id(input: &str) -> Result<String> {
    extract_video_id(input).ok_or_else(|| VidquizError::InvalidVideoUrl {
        input: input.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_watch_urls() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn accepts_short_embed_and_shorts_urls() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn accepts_bare_video_id() {
        assert_eq!(
            extract_video_id("  dQw4w9WgXcQ  ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn parse_accepts_what_extract_accepts() {
        assert_eq!(
            parse_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn parse_fails_with_invalid_video_url() {
        let err = parse_video_id("  https://vimeo.com/12345  ").unwrap_err();
        match err {
            VidquizError::InvalidVideoUrl { input } => {
                assert_eq!(input, "https://vimeo.com/12345");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_garbage() {
        for input in [
            "",
            "not a url",
            "https://vimeo.com/12345",
            "https://www.youtube.com/watch?v=tooshort",
            "dQw4w9WgXcQ-extra-chars",
        ] {
            assert_eq!(extract_video_id(input), None, "{input}");
        }
    }
}
