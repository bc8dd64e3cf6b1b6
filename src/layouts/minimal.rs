use std::fmt::{self, Write};

use super::{write_name_block, Layout};
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

/// Underlined heading followed by one line of contact details. No avatar.
pub struct Minimal;

impl Layout for Minimal {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Minimal
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        out.push_str(
            r#"
      <table cellpadding="0" cellspacing="0" border="0" style="width: 100%;">
        <tr>
          <td style="vertical-align: bottom; border-bottom: 1px solid #ddd; padding-bottom: 8px;">"#,
        );
        write_name_block(ctx, out)?;
        out.push_str("\n          </td>");
        if ctx.has_logo() {
            write!(
                out,
                r#"
          <td style="vertical-align: bottom; border-bottom: 1px solid #ddd; padding-bottom: 8px; padding-left: 15px; white-space: nowrap; text-align: right;">{}</td>"#,
                ctx.company_logo(LogoPlacement::aligned(Align::Right, "60px"))
            )?;
        }
        out.push_str("\n        </tr>\n      </table>");

        write!(
            out,
            r#"
      <div style="margin-top: 10px; font-size: {}; color: {}; opacity: 0.9; line-height: 1.6;">"#,
            s.small_size, s.text_color
        )?;
        if !ctx.email.is_empty() {
            write!(
                out,
                r#"
        <span style="display: inline-block; margin-right: 12px;"><a href="mailto:{email}" style="text-decoration: none; color: {text};">{email}</a></span>"#,
                email = ctx.email,
                text = s.text_color
            )?;
        }
        if !ctx.mobile.is_empty() {
            write!(
                out,
                r#"
        <span style="display: inline-block; margin-right: 12px;">{}</span>"#,
                ctx.mobile
            )?;
        }
        if !ctx.phone.is_empty() {
            write!(
                out,
                r#"
        <span style="display: inline-block; margin-right: 12px;">{}</span>"#,
                ctx.phone
            )?;
        }
        if !ctx.website.is_empty() {
            write!(
                out,
                r#"
        <span style="display: inline-block; margin-right: 12px;"><a href="{}" style="text-decoration: none; color: {};">{}</a></span>"#,
                ctx.website_href,
                s.theme_color,
                ctx.website_label()
            )?;
        }
        if !ctx.address.is_empty() {
            write!(
                out,
                r#"
        <span style="display: inline-block;">{}</span>"#,
                ctx.address
            )?;
        }
        out.push_str("\n      </div>");

        out.push_str(&ctx.socials(true, Align::Left));
        out.push_str(&ctx.cta(Align::Left));
        out.push_str(&ctx.qr_code(Align::Left));
        Ok(())
    }
}
