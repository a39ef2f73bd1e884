//! Video reference parsing for YouTube and Vimeo URLs and bare ids.
//!
//! Parsing is total: every input produces some [`VideoRef`]. The id is not
//! validated against the provider's real id format, so garbage input yields
//! a semantically meaningless reference rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Video hosting provider a reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoProvider {
    /// youtube.com / youtu.be
    YouTube,
    /// vimeo.com
    Vimeo,
}

/// A provider plus the video id extracted from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    /// Which provider the reference points at.
    pub provider: VideoProvider,
    /// The extracted (unvalidated) video id.
    pub id: String,
}

#[allow(clippy::expect_used)] // patterns are literals, checked by the tests below
static YOUTUBE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"youtube\.com/watch\?v=([^&?/]+)",
        r"youtube\.com/embed/([^&?/]+)",
        r"youtube\.com/v/([^&?/]+)",
        r"youtu\.be/([^&?/]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static pattern"))
    .collect()
});

#[allow(clippy::expect_used)] // pattern is a literal, checked by the tests below
static VIMEO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vimeo\.com/(\w*/)*(\d+)").expect("static pattern"));

/// Resolve a video URL or bare id into a provider and id.
///
/// The input is trimmed, then matched against the YouTube URL forms
/// (`watch?v=`, `/embed/`, `/v/`, `youtu.be/`) in order, first match
/// winning; the id runs up to the next `&`, `?`, or `/`. Failing those, a
/// Vimeo URL with a trailing numeric path segment is tried, then a purely
/// numeric input is taken as a bare Vimeo id. Anything else is passed
/// through verbatim as a YouTube id.
///
/// # Examples
///
/// ```
/// use quill_helpers::video::{VideoProvider, parse_video_ref};
///
/// let video = parse_video_ref("https://youtu.be/xyz789");
/// assert_eq!(video.provider, VideoProvider::YouTube);
/// assert_eq!(video.id, "xyz789");
///
/// let video = parse_video_ref("55566677");
/// assert_eq!(video.provider, VideoProvider::Vimeo);
/// ```
#[must_use]
pub fn parse_video_ref(input: &str) -> VideoRef {
    let input = input.trim();

    for pattern in YOUTUBE_PATTERNS.iter() {
        if let Some(id) = pattern.captures(input).and_then(|caps| caps.get(1)) {
            return VideoRef {
                provider: VideoProvider::YouTube,
                id: id.as_str().to_string(),
            };
        }
    }

    // The numeric id is the last capture group; earlier groups cover
    // optional interior path segments like /channels/<name>/.
    if let Some(id) = VIMEO_PATTERN.captures(input).and_then(|caps| caps.get(2)) {
        return VideoRef {
            provider: VideoProvider::Vimeo,
            id: id.as_str().to_string(),
        };
    }

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return VideoRef {
            provider: VideoProvider::Vimeo,
            id: input.to_string(),
        };
    }

    VideoRef {
        provider: VideoProvider::YouTube,
        id: input.to_string(),
    }
}
