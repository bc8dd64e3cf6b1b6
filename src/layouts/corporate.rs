use std::fmt::{self, Write};

use super::Layout;
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

/// Accent bar on top, uppercase name, logo in the top-right corner and an
/// icon-prefixed contact list.
pub struct Corporate;

impl Corporate {
    fn contact_list(ctx: &SignatureContext<'_>) -> String {
        let s = &ctx.style;
        let icon = |entity: &str| {
            format!(
                r#"<span style="color: {}; font-weight: bold;">{}</span>"#,
                s.theme_color, entity
            )
        };
        let link = |href: &str, label: &str| {
            format!(
                r#"<a href="{}" style="text-decoration: none; color: {};">{}</a>"#,
                href, s.text_color, label
            )
        };
        let mail_href = format!("mailto:{}", ctx.email);
        let rows = [
            (&ctx.email, "&#9993;", link(&mail_href, &ctx.email)),
            (&ctx.phone, "&#9742;", ctx.phone.clone()),
            (&ctx.mobile, "&#128241;", ctx.mobile.clone()),
            (&ctx.address, "&#128205;", ctx.address.clone()),
            (
                &ctx.website,
                "&#127760;",
                link(&ctx.website_href, ctx.website_label()),
            ),
        ];
        rows.iter()
            .filter(|(value, _, _)| !value.is_empty())
            .map(|(_, entity, content)| {
                format!(
                    r#"
                <tr><td style="padding: 2px 0;">{} {}</td></tr>"#,
                    icon(*entity),
                    content
                )
            })
            .collect()
    }
}

impl Layout for Corporate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Corporate
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        let avatar = if ctx.avatar_url.is_empty() {
            String::new()
        } else {
            format!(
                r#"<img src="{}" width="100" height="100" style="border-radius: {}; display: block;" />"#,
                ctx.avatar_url, s.image_radius
            )
        };
        let header_logo = if ctx.has_logo() {
            format!(
                r#"<td align="right" style="vertical-align: top;">{}</td>"#,
                ctx.company_logo(LogoPlacement::aligned(Align::Right, "80px"))
            )
        } else {
            String::new()
        };
        write!(
            out,
            r#"
      <table cellpadding="0" cellspacing="0" border="0" style="width: 100%;">
        <tr>
          <td style="background-color: {theme}; height: 8px; font-size: 0; line-height: 0;" colspan="2">&nbsp;</td>
        </tr>
        <tr>
          <td style="padding-top: 20px; vertical-align: top; padding-right: 20px; width: 1px;">
             {avatar}
          </td>
          <td style="padding-top: 20px; vertical-align: top;">
             <table width="100%" cellpadding="0" cellspacing="0" border="0">
               <tr>
                 <td>
                    <div style="font-size: {name_size}; font-weight: bold; color: {text}; text-transform: uppercase; letter-spacing: 0.5px;">{name}</div>
                    <div style="font-size: {body}; color: {theme}; font-weight: bold; margin-bottom: 8px;">{title}</div>
                 </td>
                 {header_logo}
               </tr>
             </table>

             <table cellpadding="0" cellspacing="0" border="0" style="font-size: {small}; color: {text}; width: 100%;">{contacts}
             </table>

             <div style="margin-top: 15px; border-top: 1px solid #eee; padding-top: 10px; display: flex; align-items: center; justify-content: space-between;">
               <span style="font-weight: bold; color: {text}; font-size: {small};">{company}</span>
               {socials}
             </div>
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
            contacts = Self::contact_list(ctx),
            company = ctx.company,
            socials = ctx.socials(true, Align::Left),
            cta = ctx.cta(Align::Left),
            qr = ctx.qr_code(Align::Left),
        )
    }
}
