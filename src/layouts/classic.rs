use std::fmt::{self, Write};

use super::Layout;
use crate::escape::escape_html;
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

const SEPARATOR: &str = r#"<span style="margin: 0 5px; color: #ccc;">|</span>"#;

/// Traditional signature: avatar, thin divider, "title @ company" and a
/// pipe-separated phone line.
pub struct Classic;

impl Classic {
    /// Mobile, office phone and email joined by pipes, skipping empty ones.
    fn phone_line(ctx: &SignatureContext<'_>) -> String {
        let s = &ctx.style;
        let abbr = ctx.abbr();
        let mut parts = Vec::new();
        if !ctx.mobile.is_empty() {
            parts.push(format!(
                r#"<span style="display: inline-block;">{} {}</span>"#,
                escape_html(&abbr.m),
                ctx.mobile
            ));
        }
        if !ctx.phone.is_empty() {
            parts.push(format!(
                r#"<span style="display: inline-block;">{} {}</span>"#,
                escape_html(&abbr.p),
                ctx.phone
            ));
        }
        if !ctx.email.is_empty() {
            parts.push(format!(
                r#"<span style="display: inline-block;"><a href="mailto:{email}" style="color: {text}; text-decoration: none;">{label} {email}</a></span>"#,
                email = ctx.email,
                text = s.text_color,
                label = escape_html(&abbr.e),
            ));
        }
        parts.join(SEPARATOR)
    }
}

impl Layout for Classic {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Classic
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        let avatar = if ctx.avatar_url.is_empty() {
            String::new()
        } else {
            format!(
                r#"<td style="padding-right: 15px; vertical-align: middle;"><img src="{}" width="80" style="border-radius: {}; display: block;" /></td>"#,
                ctx.avatar_url, s.image_radius
            )
        };
        let website = if ctx.website.is_empty() {
            String::new()
        } else {
            format!(
                r#"<div style="font-size: {}; margin-top: 2px;"><a href="{}" style="color: {}; text-decoration: none;">{}</a></div>"#,
                s.small_size, ctx.website_href, s.theme_color, ctx.website
            )
        };
        let address = if ctx.address.is_empty() {
            String::new()
        } else {
            format!(
                r#"<div style="font-size: {}; margin-top: 2px; color: {}; opacity: 0.8;">{}</div>"#,
                s.small_size, s.text_color, ctx.address
            )
        };
        write!(
            out,
            r#"
      <table cellpadding="0" cellspacing="0" border="0">
        <tr>
          {avatar}
          <td style="border-left: 1px solid #d1d1d1; padding-left: 15px; vertical-align: middle;">
             <div style="font-size: {name_size}; font-weight: bold; color: {text};">{name}</div>
             <div style="font-size: {body}; color: {text}; opacity: 0.8; margin-bottom: 5px;">{title} <span style="color: {theme};">@</span> {company}</div>
             {logo}
             <div style="font-size: {small}; color: {text}; opacity: 0.9;">
                {phones}
             </div>
             {website}
             {address}
             {socials}
             {qr}
          </td>
        </tr>
      </table>
      {cta}"#,
            name_size = s.name_size,
            text = s.text_color,
            name = ctx.full_name,
            body = s.body_size,
            title = ctx.job_title,
            theme = s.theme_color,
            company = ctx.company,
            logo = ctx.company_logo(LogoPlacement::inline("5px", "8px")),
            small = s.small_size,
            phones = Self::phone_line(ctx),
            socials = ctx.socials(true, Align::Left),
            qr = ctx.qr_code(Align::Left),
            cta = ctx.cta(Align::Left),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Language, LocalizedStrings};
    use crate::profile::Profile;

    fn line(email: &str, phone: &str, mobile: &str) -> String {
        let profile = Profile {
            email: email.to_string(),
            phone: phone.to_string(),
            mobile: mobile.to_string(),
            ..Profile::default()
        };
        let strings = LocalizedStrings::for_language(Language::En);
        let ctx = SignatureContext::new(&profile, &strings);
        Classic::phone_line(&ctx)
    }

    #[test]
    fn test_phone_line_separators() {
        assert_eq!(line("a@b.c", "1", "2").matches(SEPARATOR).count(), 2);
        assert_eq!(line("a@b.c", "", "2").matches(SEPARATOR).count(), 1);
        assert_eq!(line("a@b.c", "1", "").matches(SEPARATOR).count(), 1);
        assert_eq!(line("", "1", "2").matches(SEPARATOR).count(), 1);
        assert_eq!(line("a@b.c", "", "").matches(SEPARATOR).count(), 0);
        assert_eq!(line("", "", ""), "");
    }
}
