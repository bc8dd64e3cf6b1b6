use crate::escape::escape_html;
use crate::sanitize::sanitize;

const LIGHT_CANVAS: &str = "#ffffff";
const DARK_CANVAS: &str = "#111827";

/// Standalone page around a signature, for saving as `signature.html`.
/// The signature markup is embedded as-is.
pub fn html_document(signature: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        escape_html(title),
        signature.trim()
    )
}

/// Sanitized preview page. `dark` paints the canvas the way a dark-mode mail
/// client would, which exposes text colors that vanish on dark backgrounds.
pub fn preview_document(signature: &str, dark: bool) -> String {
    let (canvas, shadow) = if dark {
        (DARK_CANVAS, "none")
    } else {
        (LIGHT_CANVAS, "drop-shadow(0 0 15px rgba(0,0,0,0.1))")
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Signature preview</title>
<style>
  body {{ margin: 0; padding: 32px; background-color: {canvas}; }}
  .preview {{ max-width: 672px; margin: 0 auto; filter: {shadow}; }}
</style>
</head>
<body>
<div class="preview">
{body}
</div>
</body>
</html>
"#,
        canvas = canvas,
        shadow = shadow,
        body = sanitize(signature).trim()
    )
}
