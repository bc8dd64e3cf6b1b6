use std::fmt::{self, Write};

use super::Layout;
use crate::fragments::{Align, LogoPlacement, SignatureContext};
use crate::style::contrast_for;
use crate::template::TemplateKind;

/// Accent-colored identity panel next to a plain contact column.
pub struct Sidebar;

impl Layout for Sidebar {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Sidebar
    }

    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
        let s = &ctx.style;
        let contrast = contrast_for(&s.theme_color);
        // Cells sit inside the card padding, so their corners are slightly tighter.
        let inner_radius = s.card_radius.saturating_sub(4);
        let avatar = if ctx.avatar_url.is_empty() {
            String::new()
        } else {
            format!(
                r#"<img src="{}" width="80" style="border-radius: {}; margin-bottom: 15px; border: 2px solid {}; display: inline-block;" />"#,
                ctx.avatar_url, s.image_radius, contrast.border
            )
        };
        write!(
            out,
            r#"
      <table cellpadding="0" cellspacing="0" border="0" style="width: 100%; border-collapse: separate;">
        <tr>
          <td width="35%" style="background-color: {theme}; padding: 20px; vertical-align: middle; color: {panel_text}; text-align: center; border-radius: {radius}px;">
             {avatar}
             <div style="font-size: {name_size}; font-weight: bold; line-height: 1.2;">{name}</div>
             <div style="font-size: {small}; opacity: 0.9; margin-top: 5px;">{title}</div>
             <div style="margin-top: 20px;">
                {cta}
             </div>
             {qr}
          </td>
          <td width="65%" style="background-color: {card_bg}; padding: 20px; vertical-align: top; border-radius: 0 {radius}px {radius}px 0;">
             <div style="font-weight: bold; color: {text}; margin-bottom: 10px; font-size: {body};">{company}</div>
             {logo}
             {contacts}
             {socials}
          </td>
        </tr>
      </table>"#,
            theme = s.theme_color,
            panel_text = contrast.text,
            radius = inner_radius,
            name_size = s.name_size,
            name = ctx.full_name,
            small = s.small_size,
            title = ctx.job_title,
            cta = ctx.cta(Align::Center),
            qr = ctx.qr_code(Align::Center),
            card_bg = s.card_background,
            text = s.text_color,
            body = s.body_size,
            company = ctx.company,
            logo = ctx.company_logo(LogoPlacement::inline("0px", "10px")),
            contacts = ctx.contact_rows(),
            socials = ctx.socials(false, Align::Left),
        )
    }
}
