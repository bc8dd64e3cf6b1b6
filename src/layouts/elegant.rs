use std::fmt::{self, Write};

use super::Layout;
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

/// Centered, single column with an underlined uppercase name.
pub struct Elegant;

impl Layout for Elegant {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Elegant
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        let avatar = if ctx.avatar_url.is_empty() {
            String::new()
        } else {
            format!(
                r#"<img src="{}" width="90" height="90" style="border-radius: {}; display: block; border: 1px solid #ddd; padding: 3px;" />"#,
                ctx.avatar_url, s.image_radius
            )
        };

        let mut contacts = String::new();
        if !ctx.email.is_empty() {
            write!(
                contacts,
                r#"
            <div><a href="mailto:{email}" style="color: {text}; text-decoration: none;">{email}</a></div>"#,
                email = ctx.email,
                text = s.text_color
            )?;
        }
        for value in [&ctx.mobile, &ctx.phone] {
            if !value.is_empty() {
                write!(contacts, "\n            <div>{}</div>", value)?;
            }
        }
        if !ctx.website.is_empty() {
            write!(
                contacts,
                r#"
            <div><a href="{}" style="color: {}; text-decoration: none;">{}</a></div>"#,
                ctx.website_href,
                s.theme_color,
                ctx.website_label()
            )?;
        }
        if !ctx.address.is_empty() {
            write!(contacts, "\n            <div>{}</div>", ctx.address)?;
        }

        write!(
            out,
            r#"
      <table cellpadding="0" cellspacing="0" border="0" style="width: 100%; text-align: center; margin: 0 auto;">
        <tr>
          <td align="center" style="padding-bottom: 15px;">
            {avatar}
          </td>
        </tr>
        <tr>
          <td align="center" style="padding-bottom: 5px;">
             <span style="font-size: {name_size}; font-weight: bold; color: {text}; letter-spacing: 1px; border-bottom: 2px solid {theme}; padding-bottom: 3px;">{name}</span>
          </td>
        </tr>
        <tr>
          <td align="center" style="padding-top: 8px; padding-bottom: 15px;">
             <div style="font-size: {body}; font-style: italic; color: {text}; opacity: 0.8;">{title}</div>
             <div style="font-size: {small}; font-weight: bold; color: {text}; margin-top: 4px;">{company}</div>
             {logo}
          </td>
        </tr>
        <tr>
          <td align="center" style="font-size: {small}; color: {text}; opacity: 0.9; line-height: 1.6;">{contacts}
          </td>
        </tr>
        <tr>
          <td align="center" style="padding-top: 15px;">
             {socials}
          </td>
        </tr>
        <tr>
          <td align="center">
            {cta}
            {qr}
          </td>
        </tr>
      </table>"#,
            name_size = s.name_size,
            text = s.text_color,
            theme = s.theme_color,
            name = ctx.full_name_upper,
            body = s.body_size,
            title = ctx.job_title,
            small = s.small_size,
            company = ctx.company,
            logo = ctx.company_logo(LogoPlacement {
                margin_top: "10px",
                margin_bottom: "0px",
                align: Align::Center,
                max_height: "60px",
            }),
            socials = ctx.socials(false, Align::Center),
            cta = ctx.cta(Align::Center),
            qr = ctx.qr_code(Align::Center),
        )
    }
}
