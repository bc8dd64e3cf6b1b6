use std::fmt::{self, Write};

use super::{write_name_block, Layout};
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

/// Avatar, heading and logo on one row, contact strip underneath. Also the
/// layout for unrecognised template names.
pub struct Horizontal;

impl Horizontal {
    fn contact_strip(ctx: &SignatureContext<'_>) -> String {
        let s = &ctx.style;
        let mut strip = String::new();
        if !ctx.email.is_empty() {
            strip.push_str(&format!(
                r#"
              <span style="display:inline-block; margin-right: 15px;"><a href="mailto:{email}" style="color: {text}; text-decoration: none;">✉ {email}</a></span>"#,
                email = ctx.email,
                text = s.text_color
            ));
        }
        for (icon, value) in [("📱", &ctx.mobile), ("📞", &ctx.phone)] {
            if !value.is_empty() {
                strip.push_str(&format!(
                    r#"
              <span style="display:inline-block; margin-right: 15px; color: {}; opacity: 0.9;">{} {}</span>"#,
                    s.text_color, icon, value
                ));
            }
        }
        if !ctx.website.is_empty() {
            strip.push_str(&format!(
                r#"
              <span style="display:inline-block; margin-right: 15px;"><a href="{}" style="color: {}; text-decoration: none;">🌐 {}</a></span>"#,
                ctx.website_href,
                s.text_color,
                ctx.website_label()
            ));
        }
        if !ctx.address.is_empty() {
            strip.push_str(&format!(
                r#"
              <span style="display:inline-block; color: {}; opacity: 0.9;">📍 {}</span>"#,
                s.text_color, ctx.address
            ));
        }
        strip
    }
}

impl Layout for Horizontal {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Horizontal
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        let has_avatar = !ctx.avatar_url.is_empty();
        let col_span = usize::from(has_avatar) + 1 + usize::from(ctx.has_logo());

        out.push_str(
            r#"
      <table cellpadding="0" cellspacing="0" border="0" style="width: 100%;">
        <tr>"#,
        );
        if has_avatar {
            write!(
                out,
                r#"
          <td style="vertical-align: middle; padding-right: 15px; width: 80px;">
            <img src="{}" width="80" style="border-radius: {}; display: block;" />
          </td>"#,
                ctx.avatar_url, s.image_radius
            )?;
        }
        out.push_str("\n          <td style=\"vertical-align: middle;\">");
        write_name_block(ctx, out)?;
        out.push_str("\n          </td>");
        if ctx.has_logo() {
            write!(
                out,
                r#"
          <td style="vertical-align: middle; padding-left: 15px; text-align: right;">{}</td>"#,
                ctx.company_logo(LogoPlacement::aligned(Align::Right, "60px"))
            )?;
        }
        write!(
            out,
            r#"
        </tr>
        <tr>
          <td colspan="{col_span}" style="padding-top: 15px;">
            <div style="border-top: 1px solid #eee; padding-top: 10px; font-size: {small};">{strip}
            </div>
            {socials}
            {cta}
            {qr}
          </td>
        </tr>
      </table>"#,
            small = s.small_size,
            strip = Self::contact_strip(ctx),
            socials = ctx.socials(false, Align::Left),
            cta = ctx.cta(Align::Left),
            qr = ctx.qr_code(Align::Left),
        )
    }
}
