//! # quill-helpers
//!
//! Host-facing helper library for the quill content runtime: a flat
//! collection of small, independent transformations the host calls from its
//! rendering and form-handling paths.
//!
//! ## What's here
//!
//! - **Excerpt flag**: a request-scoped "currently rendering an excerpt"
//!   bit, set and cleared by pass-through filter hooks
//! - **Enumerators**: labeled maps of the host's content types and taxonomy
//!   terms, for settings UIs
//! - **Request helpers**: canonical current-request URL and an opaque client
//!   fingerprint derived from proxy headers
//! - **Formatting**: number abbreviation (`1100` → `"1.1K"`) and hex color
//!   to RGB/RGBA conversion
//! - **Spam checking**: submitted form fields forwarded to an
//!   Akismet-compatible comment-check endpoint
//! - **Video references**: provider + id extraction from YouTube/Vimeo URLs
//!   and bare ids
//!
//! The host's own machinery stays outside: content-type, taxonomy, and term
//! registries, URL building, and option storage are consumed through the
//! [`ContentRegistry`], [`SiteLinks`], and [`OptionStore`] seams, which also
//! keep every helper unit-testable against fakes.
//!
//! ## Quick start
//!
//! ```rust
//! use quill_helpers::{color, numeric, video};
//!
//! assert_eq!(numeric::abbreviate_number(1100), "1.1K");
//! assert_eq!(color::hex_to_rgb("#1a2b3c")?, (26, 43, 60));
//!
//! let video = video::parse_video_ref("https://youtu.be/xyz789");
//! assert_eq!(video.id, "xyz789");
//! # Ok::<(), quill_helpers::Error>(())
//! ```
//!
//! ## Error handling
//!
//! Fallible operations return [`Result<T, Error>`]. The prevailing policy is
//! to degrade rather than fail: enumeration skips taxonomies it cannot read,
//! and the spam checker treats an unreachable service as a clean verdict.

/// Hex color conversions
pub mod color;
/// Configuration types for the spam integration
pub mod config;
/// Labeled enumerations over the host registries
pub mod enumerate;
/// Error types and result aliases
pub mod error;
/// Request-scoped excerpt-rendering flag
pub mod excerpt;
/// Number formatting helpers
pub mod numeric;
/// Host registry types and the read-only registry seam
pub mod registry;
/// Per-request metadata, URL, and client-identity helpers
pub mod request;
/// Spam classification via the comment-check endpoint
pub mod spam;
/// Video URL and id parsing
pub mod video;

// Re-export commonly used types
pub use color::{hex_to_rgb, hex_to_rgba};
pub use config::{Config, SpamConfig};
pub use enumerate::{all_content_types, all_taxonomy_terms, all_term_ids};
pub use error::{Error, Result};
pub use excerpt::{EXCERPT_END_PRIORITY, EXCERPT_START_PRIORITY, ExcerptFlag, ExcerptScope};
pub use numeric::abbreviate_number;
pub use registry::{ContentRegistry, ContentType, Taxonomy, Term, TermId};
pub use request::{RequestMeta, SiteLinks, client_fingerprint, current_url, ensure_trailing_slash};
pub use spam::{OptionStore, SPAM_COUNT_OPTION, SpamChecker};
pub use video::{VideoProvider, VideoRef, parse_video_ref};
