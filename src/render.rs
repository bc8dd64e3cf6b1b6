use std::fmt::{self, Write};

use crate::fragments::SignatureContext;
use crate::layouts::layout_for;
use crate::locale::LocalizedStrings;
use crate::profile::Profile;
use crate::template::TemplateKind;

/// Render the complete signature card.
///
/// The output is a pure function of the three inputs: table layout, inline
/// styles only, every profile value escaped. This is the copy-to-clipboard
/// markup; run [`crate::sanitize`] over it before showing it in a preview.
pub fn generate(profile: &Profile, template: TemplateKind, strings: &LocalizedStrings) -> String {
    let ctx = SignatureContext::new(profile, strings);
    let mut out = String::new();
    match write_card(&ctx, template, &mut out) {
        Ok(()) => out,
        Err(err) => {
            tracing::warn!(template = %template, error = %err, "failed to render signature");
            String::new()
        }
    }
}

/// Render using a template name; unknown names use the fallback layout.
pub fn generate_named(profile: &Profile, template: &str, strings: &LocalizedStrings) -> String {
    generate(profile, TemplateKind::from_name(template), strings)
}

fn write_card(ctx: &SignatureContext<'_>, template: TemplateKind, out: &mut String) -> fmt::Result {
    let s = &ctx.style;
    tracing::debug!(template = %template, "rendering signature");

    // One cell carrying background and radius survives most clients, dark mode included.
    write!(
        out,
        r#"
    <div style="font-family: {}; color: {};">
    <table cellpadding="0" cellspacing="0" border="0" style="background-color: {}; border-radius: {}px; overflow: hidden; max-width: 600px;">
      <tr>
        <td style="padding: 20px;">"#,
        s.font_family, s.text_color, s.card_background, s.card_radius
    )?;
    layout_for(template).write_body(ctx, out)?;
    out.push_str(&ctx.banner());
    out.push_str(&ctx.footer());
    out.push_str(
        r#"
        </td>
      </tr>
    </table>
    </div>
"#,
    );
    Ok(())
}
