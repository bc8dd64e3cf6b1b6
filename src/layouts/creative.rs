use std::fmt::{self, Write};

use super::Layout;
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

/// Avatar and icons behind a heavy accent border, bold colored name.
pub struct Creative;

impl Layout for Creative {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Creative
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        let avatar = if ctx.avatar_url.is_empty() {
            String::new()
        } else {
            format!(
                r#"<img src="{}" width="80" height="80" style="border-radius: {}; display: block;" />"#,
                ctx.avatar_url, s.image_radius
            )
        };

        let mut details = String::new();
        for value in [&ctx.email, &ctx.mobile, &ctx.phone] {
            if !value.is_empty() {
                write!(
                    details,
                    r#"
                 <div style="margin-bottom: 2px;">{}</div>"#,
                    value
                )?;
            }
        }
        if !ctx.website.is_empty() {
            write!(
                details,
                r#"
                 <div style="margin-bottom: 2px;"><strong style="color: {};">{}</strong></div>"#,
                s.theme_color,
                ctx.website_label()
            )?;
        }
        if !ctx.address.is_empty() {
            write!(details, "\n                 <div>{}</div>", ctx.address)?;
        }

        write!(
            out,
            r#"
       <table cellpadding="0" cellspacing="0" border="0">
         <tr>
           <td style="border-right: 5px solid {theme}; padding-right: 20px; vertical-align: middle;">
              {avatar}
              {socials}
           </td>
           <td style="padding-left: 20px; vertical-align: middle;">
              <div style="font-size: {name_size}; font-weight: 800; color: {theme}; line-height: 1.1;">{name}</div>
              <div style="font-size: {body}; color: {text}; margin-top: 4px;">{title}</div>

              <div style="margin-top: 12px; font-size: {small}; color: {text}; opacity: 0.9; border-left: 1px solid #ccc; padding-left: 10px;">{details}
              </div>

              <div style="margin-top: 10px; font-weight: bold; font-size: {small}; color: {text}; opacity: 0.7;">{company}</div>
              {logo}
              {cta}
              {qr}
           </td>
         </tr>
       </table>"#,
            theme = s.theme_color,
            socials = ctx.socials(true, Align::Center),
            name_size = s.name_size,
            name = ctx.full_name,
            body = s.body_size,
            text = s.text_color,
            title = ctx.job_title,
            small = s.small_size,
            company = ctx.company,
            logo = ctx.company_logo(LogoPlacement::inline("8px", "0px")),
            cta = ctx.cta(Align::Left),
            qr = ctx.qr_code(Align::Left),
        )
    }
}
