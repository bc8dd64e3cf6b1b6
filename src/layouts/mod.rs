//! Signature layouts.
//!
//! Each [`TemplateKind`] maps to exactly one [`Layout`]. A layout writes only
//! the body of the card; the shared envelope, banner and footer are added by
//! [`crate::render::generate`].

mod classic;
mod corporate;
mod creative;
mod elegant;
mod horizontal;
mod minimal;
mod modern;
mod sidebar;

use std::fmt::{self, Write};

use crate::fragments::{LogoPlacement, SignatureContext};
use crate::template::TemplateKind;

pub use classic::Classic;
pub use corporate::Corporate;
pub use creative::Creative;
pub use elegant::Elegant;
pub use horizontal::Horizontal;
pub use minimal::Minimal;
pub use modern::Modern;
pub use sidebar::Sidebar;

pub trait Layout: Sync {
    fn kind(&self) -> TemplateKind;

    /// Write the card body for `ctx` into `out`.
    fn write_body(&self, ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result;
}

pub fn layout_for(kind: TemplateKind) -> &'static dyn Layout {
    match kind {
        TemplateKind::Classic => &Classic,
        TemplateKind::Modern => &Modern,
        TemplateKind::Minimal => &Minimal,
        TemplateKind::Sidebar => &Sidebar,
        TemplateKind::Horizontal => &Horizontal,
        TemplateKind::Corporate => &Corporate,
        TemplateKind::Elegant => &Elegant,
        TemplateKind::Creative => &Creative,
    }
}

/// Name, title and company heading shared by the MINIMAL and HORIZONTAL
/// layouts. With a logo the heading becomes a two-cell table so the logo can
/// sit in its own column; without one it flows inline.
pub(crate) fn write_name_block(ctx: &SignatureContext<'_>, out: &mut String) -> fmt::Result {
    let s = &ctx.style;
    if ctx.has_logo() {
        write!(
            out,
            r#"
        <table cellpadding="0" cellspacing="0" border="0">
          <tr>
            <td style="vertical-align: middle; padding-right: 15px; font-weight: bold; color: {theme}; font-size: {name_size}; white-space: nowrap;">
               {name}
            </td>
            <td style="vertical-align: middle; border-left: 1px solid #e0e0e0; padding-left: 15px;">
               <div style="font-size: {body}; color: {text}; line-height: 1.2; margin-bottom: 2px; white-space: nowrap;">{title}</div>
               <div style="font-size: {body}; color: {text}; line-height: 1.2; white-space: nowrap;">{company}</div>
            </td>
          </tr>
        </table>"#,
            theme = s.theme_color,
            name_size = s.name_size,
            name = ctx.full_name,
            body = s.body_size,
            text = s.text_color,
            title = ctx.job_title,
            company = ctx.company,
        )
    } else {
        write!(
            out,
            r#"
        <span style="font-weight: bold; color: {theme}; font-size: {name_size};">{name}</span>
        <span style="color: #ccc; margin: 0 8px;">|</span>
        <span style="font-size: {body}; color: {text};">{title}</span>
        <div style="margin-top: 5px; font-size: {small}; color: {text}; opacity: 0.8;">
          {company}
        </div>
        {logo}"#,
            theme = s.theme_color,
            name_size = s.name_size,
            name = ctx.full_name,
            body = s.body_size,
            text = s.text_color,
            title = ctx.job_title,
            small = s.small_size,
            company = ctx.company,
            logo = ctx.company_logo(LogoPlacement::inline("5px", "0px")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_matches_kind() {
        for kind in TemplateKind::ALL {
            assert_eq!(layout_for(kind).kind(), kind);
        }
    }
}
