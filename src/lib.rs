//! # Kore Signature
//!
//! Turns a structured [`Profile`] into an HTML email signature that pastes
//! cleanly into Gmail, Outlook and Apple Mail.
//!
//! ## Features
//! - Eight table-based layouts with inline styles only (no classes, no scripts)
//! - Every profile value is HTML-escaped before it reaches the markup
//! - UTM tagging of outbound links, vCard QR code, CTA button, banner, footer
//! - Localized labels and default texts for eight languages
//! - Best-effort sanitizer for rendering a live preview
//! - Share links and named profile snapshots
//!
//! ## Example
//! ```
//! use kore_signature::{generate, sanitize, Language, LocalizedStrings, Profile, TemplateKind};
//!
//! let mut profile = Profile::default();
//! profile.full_name = "Ada Lovelace".to_string();
//! profile.email = "ada@example.com".to_string();
//!
//! let strings = LocalizedStrings::for_language(Language::En);
//! let html = generate(&profile, TemplateKind::Modern, &strings);
//! assert!(html.contains("Ada Lovelace"));
//!
//! let preview = sanitize(&html);
//! assert!(!preview.contains("<script"));
//! ```

pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod escape;
pub mod fragments;
pub mod icons;
pub mod layouts;
pub mod locale;
pub mod profile;
pub mod render;
pub mod sanitize;
pub mod share;
pub mod store;
pub mod style;
pub mod template;
pub mod utm;

// --- Core types ---
pub use error::{SignatureError, SignatureResult};
pub use locale::{Language, LocalizedStrings};
pub use profile::{
    FontSize, IconStyle, ImageShape, MarketingConfig, Profile, SignatureAddons, SocialLink,
    StyleConfig,
};
pub use template::TemplateKind;

// --- Rendering ---
pub use escape::escape_html;
pub use icons::icon_url;
pub use render::{generate, generate_named};
pub use sanitize::sanitize;
pub use style::{contrast_for, Contrast};
pub use utm::augment_url;

// --- Outer surfaces ---
pub use config::CliConfig;
pub use defaults::{localize_disclaimer, profile_defaults};
pub use share::{decode_share_token, encode_share_token, share_url, token_from_url};
pub use store::{ProfileStore, SavedProfile};

/// Render a signature and its preview-safe copy in one call.
///
/// Returns `(copy, preview)`: `copy` is the unsanitized markup meant for the
/// clipboard, `preview` has gone through [`sanitize`].
pub fn render_with_preview(
    profile: &Profile,
    template: TemplateKind,
    strings: &LocalizedStrings,
) -> (String, String) {
    let html = generate(profile, template, strings);
    let preview = sanitize(&html);
    (html, preview)
}
