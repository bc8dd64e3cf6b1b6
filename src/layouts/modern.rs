use std::fmt::{self, Write};

use super::Layout;
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

/// Avatar on the left, details behind a thick accent rule.
pub struct Modern;

impl Layout for Modern {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Modern
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        let avatar = if ctx.avatar_url.is_empty() {
            String::new()
        } else {
            format!(
                r#"<td style="padding-right: 20px; vertical-align: top;"><img src="{}" alt="{}" width="100" style="border-radius: {}; display: block; object-fit: cover; width: 100px; height: 100px;" /></td>"#,
                ctx.avatar_url, ctx.full_name, s.image_radius
            )
        };
        write!(
            out,
            r#"
      <table cellpadding="0" cellspacing="0" border="0">
        <tr>
          {avatar}
          <td style="vertical-align: top; border-left: 3px solid {theme}; padding-left: 20px;">
            <div style="font-weight: bold; font-size: {name_size}; color: {text};">{name}</div>
            <div style="color: {theme}; font-size: {body}; margin-bottom: 4px;">{title}</div>
            <div style="font-weight: bold; color: {text}; font-size: {small}; opacity: 0.9;">{company}</div>
            {logo}
            {contacts}
            {socials}
            {cta}
            {qr}
          </td>
        </tr>
      </table>"#,
            theme = s.theme_color,
            name_size = s.name_size,
            text = s.text_color,
            name = ctx.full_name,
            body = s.body_size,
            title = ctx.job_title,
            small = s.small_size,
            company = ctx.company,
            logo = ctx.company_logo(LogoPlacement::inline("8px", "4px")),
            contacts = ctx.contact_rows(),
            socials = ctx.socials(false, Align::Left),
            cta = ctx.cta(Align::Left),
            qr = ctx.qr_code(Align::Left),
        )
    }
}
