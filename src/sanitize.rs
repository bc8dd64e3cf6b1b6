//! Best-effort textual filter for the local preview pane.
//!
//! This does not parse HTML and is not a hardened sanitizer. It exists so the
//! preview never executes anything; the markup users copy into their mail
//! client is the unfiltered output of [`crate::generate`].

use regex::Regex;
use std::sync::OnceLock;

fn script_blocks() -> &'static Regex {
    static SCRIPT_REGEX: OnceLock<Regex> = OnceLock::new();
    SCRIPT_REGEX.get_or_init(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap())
}

fn quoted_handlers() -> &'static Regex {
    static QUOTED_HANDLER_REGEX: OnceLock<Regex> = OnceLock::new();
    QUOTED_HANDLER_REGEX
        .get_or_init(|| Regex::new(r#"(?i)\bon\w+\s*=\s*["'][^"']*["']"#).unwrap())
}

fn bare_handlers() -> &'static Regex {
    static BARE_HANDLER_REGEX: OnceLock<Regex> = OnceLock::new();
    BARE_HANDLER_REGEX.get_or_init(|| Regex::new(r"(?i)\bon\w+\s*=\s*[^\s>]+").unwrap())
}

fn javascript_scheme() -> &'static Regex {
    static JS_SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
    JS_SCHEME_REGEX.get_or_init(|| Regex::new(r"(?i)javascript:").unwrap())
}

fn data_scheme() -> &'static Regex {
    static DATA_SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
    DATA_SCHEME_REGEX.get_or_init(|| Regex::new(r"(?i)data:").unwrap())
}

/// Strip script blocks, inline event handlers and `javascript:` schemes, and
/// defang `data:` URIs to `data-blocked:`.
///
/// `data:` attributes are rewritten rather than removed so the element keeps
/// its place in the layout while the source fails to load.
pub fn sanitize(html: &str) -> String {
    let html = script_blocks().replace_all(html, "");
    let html = quoted_handlers().replace_all(&html, "");
    let html = bare_handlers().replace_all(&html, "");
    let html = javascript_scheme().replace_all(&html, "");
    data_scheme().replace_all(&html, "data-blocked:").into_owned()
}
