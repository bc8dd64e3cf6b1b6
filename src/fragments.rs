//! Escaped render context and the markup fragments every layout shares.
//!
//! All user text is escaped once, when the context is built. Fragments and
//! layouts only ever read from the context, so no raw profile value can reach
//! the output.

use crate::escape::escape_html;
use crate::icons::icon_url;
use crate::locale::{Abbreviations, LocalizedStrings};
use crate::profile::{MarketingConfig, Profile, SocialLink};
use crate::style::ResolvedStyle;
use crate::utm::augment_url;

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Placement of the company logo inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub margin_top: &'static str,
    pub margin_bottom: &'static str,
    pub align: Align,
    pub max_height: &'static str,
}

impl LogoPlacement {
    pub const fn inline(margin_top: &'static str, margin_bottom: &'static str) -> Self {
        Self {
            margin_top,
            margin_bottom,
            align: Align::Left,
            max_height: "60px",
        }
    }

    pub const fn aligned(align: Align, max_height: &'static str) -> Self {
        Self {
            margin_top: "0px",
            margin_bottom: "0px",
            align,
            max_height,
        }
    }
}

/// Add-on values after escaping.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapedAddons {
    pub cta_text: String,
    pub cta_url: String,
    pub cta_color: String,
    pub banner_url: String,
    pub disclaimer: String,
    pub green_message: bool,
    pub include_qr: bool,
}

/// Everything a layout needs, already escaped and resolved.
#[derive(Debug, Clone)]
pub struct SignatureContext<'a> {
    pub full_name: String,
    pub full_name_upper: String,
    pub job_title: String,
    pub company: String,
    pub logo_url: String,
    pub logo_link: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub website: String,
    pub address: String,
    pub avatar_url: String,
    pub socials: Vec<SocialLink>,
    pub addons: EscapedAddons,
    pub style: ResolvedStyle,
    pub website_href: String,
    pub logo_href: String,
    pub cta_href: String,
    pub marketing: &'a MarketingConfig,
    pub strings: &'a LocalizedStrings,
}

impl<'a> SignatureContext<'a> {
    pub fn new(profile: &'a Profile, strings: &'a LocalizedStrings) -> Self {
        let marketing = &profile.marketing;
        let mut style = ResolvedStyle::resolve(&profile.style);
        style.font_family = escape_html(&style.font_family);
        style.theme_color = escape_html(&style.theme_color);
        style.text_color = escape_html(&style.text_color);
        style.card_background = escape_html(&style.card_background);

        let website = escape_html(&profile.website);
        let logo_link = escape_html(&profile.logo_link);
        let addons = EscapedAddons {
            cta_text: escape_html(&profile.addons.cta_text),
            cta_url: escape_html(&profile.addons.cta_url),
            cta_color: escape_html(&profile.addons.cta_color),
            banner_url: escape_html(&profile.addons.banner_url),
            disclaimer: escape_html(&profile.addons.disclaimer),
            green_message: profile.addons.green_message,
            include_qr: profile.addons.include_qr,
        };

        Self {
            full_name: escape_html(&profile.full_name),
            full_name_upper: escape_html(&profile.full_name.to_uppercase()),
            job_title: escape_html(&profile.job_title),
            company: escape_html(&profile.company),
            logo_url: escape_html(&profile.logo_url),
            email: escape_html(&profile.email),
            phone: escape_html(&profile.phone),
            mobile: escape_html(&profile.mobile),
            address: escape_html(&profile.address),
            avatar_url: escape_html(&profile.avatar_url),
            socials: profile
                .socials
                .iter()
                .map(|s| SocialLink::new(escape_html(&s.platform), escape_html(&s.url)))
                .collect(),
            website_href: augment_url(&website, marketing),
            logo_href: augment_url(&logo_link, marketing),
            cta_href: augment_url(&addons.cta_url, marketing),
            website,
            logo_link,
            addons,
            style,
            marketing,
            strings,
        }
    }

    pub fn abbr(&self) -> &Abbreviations {
        &self.strings.abbreviations
    }

    /// Website without its scheme, for display.
    pub fn website_label(&self) -> &str {
        let w = self.website.as_str();
        w.strip_prefix("https://")
            .or_else(|| w.strip_prefix("http://"))
            .unwrap_or(w)
    }

    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty()
    }

    /// vCard 3.0 record encoded in the QR fragment.
    pub fn vcard(&self) -> String {
        [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("N:{};;;", self.full_name),
            format!("FN:{}", self.full_name),
            format!("ORG:{}", self.company),
            format!("TITLE:{}", self.job_title),
            format!("TEL;TYPE=WORK,VOICE:{}", self.phone),
            format!("TEL;TYPE=CELL,VOICE:{}", self.mobile),
            format!("EMAIL:{}", self.email),
            format!("URL:{}", self.website),
            format!("ADR;TYPE=WORK:;;{};;;", self.address),
            "END:VCARD".to_string(),
        ]
        .join("\n")
    }

    pub fn qr_code(&self, align: Align) -> String {
        if !self.addons.include_qr {
            return String::new();
        }
        let qr_url = format!(
            "{}?size=300x300&data={}",
            QR_ENDPOINT,
            urlencoding::encode(&self.vcard())
        );
        let margin = if align == Align::Center {
            "15px auto 0"
        } else {
            "15px 0 0"
        };
        format!(
            r#"
      <div style="margin: {margin}; width: 120px;">
        <img src="{qr_url}" alt="Scan Contact" width="120" height="120" style="display: block; border: 2px solid #eee; padding: 4px; background: #fff;" />
      </div>"#
        )
    }

    pub fn socials(&self, minimal: bool, align: Align) -> String {
        if self.socials.is_empty() {
            return String::new();
        }
        let size = if minimal { 16 } else { 24 };
        let margin = if minimal { "6px" } else { "10px" };
        let align_style = if align == Align::Center {
            "text-align: center;"
        } else {
            ""
        };
        let links: String = self
            .socials
            .iter()
            .map(|s| {
                format!(
                    r#"
          <a href="{href}" style="text-decoration: none; display: inline-block; margin-right: 5px;">
            <img src="{icon}" alt="{platform}" width="{size}" height="{size}" style="display: block;" />
          </a>"#,
                    href = augment_url(&s.url, self.marketing),
                    icon = icon_url(&s.platform),
                    platform = s.platform,
                )
            })
            .collect();
        format!(
            r#"
      <div style="margin-top: {margin}; {align_style}">{links}
      </div>"#
        )
    }

    /// Call-to-action button; needs both a label and a target.
    pub fn cta(&self, align: Align) -> String {
        if self.addons.cta_text.is_empty() || self.addons.cta_url.is_empty() {
            return String::new();
        }
        let color = if self.addons.cta_color.is_empty() {
            &self.style.theme_color
        } else {
            &self.addons.cta_color
        };
        let align_style = if align == Align::Center {
            "text-align: center;"
        } else {
            ""
        };
        format!(
            r#"
      <div style="margin-top: 15px; margin-bottom: 10px; {align_style}">
        <a href="{href}" style="background-color: {color}; color: #ffffff; padding: 8px 16px; text-decoration: none; border-radius: 4px; font-weight: bold; font-size: {size}; display: inline-block;">
          {text}
        </a>
      </div>"#,
            href = self.cta_href,
            size = self.style.small_size,
            text = self.addons.cta_text,
        )
    }

    pub fn banner(&self) -> String {
        if self.addons.banner_url.is_empty() {
            return String::new();
        }
        format!(
            r#"
      <div style="margin-top: 15px; margin-bottom: 15px; width: 100%;">
        <img src="{}" style="max-width: 100%; height: auto; display: block; border-radius: 4px;" alt="Banner" />
      </div>"#,
            self.addons.banner_url
        )
    }

    /// Eco message first, then the disclaimer; each block only when present.
    pub fn footer(&self) -> String {
        let mut html = String::new();
        if self.addons.green_message {
            html.push_str(&format!(
                r#"
      <div style="margin-top: 15px; font-size: 11px; color: #2e7d32; font-style: italic;">
        {}
      </div>"#,
                escape_html(&self.strings.eco)
            ));
        }
        if !self.addons.disclaimer.is_empty() {
            html.push_str(&format!(
                r#"
      <div style="margin-top: 10px; font-size: 10px; color: #999999; line-height: 1.4; border-top: 1px solid #eeeeee; padding-top: 5px; text-align: justify;">
        {}
      </div>"#,
                self.addons.disclaimer
            ));
        }
        html
    }

    pub fn company_logo(&self, placement: LogoPlacement) -> String {
        if !self.has_logo() {
            return String::new();
        }
        let align_style = match placement.align {
            Align::Left => "",
            Align::Center => "margin-left: auto; margin-right: auto;",
            Align::Right => "margin-left: auto;",
        };
        let alt = if self.company.is_empty() {
            "Company Logo"
        } else {
            self.company.as_str()
        };
        let img = format!(
            r#"<img src="{}" alt="{}" style="display: block; height: auto; width: auto; max-height: {}; border: 0; {}" />"#,
            self.logo_url, alt, placement.max_height, align_style
        );
        let inner = if self.logo_link.is_empty() {
            img
        } else {
            format!(
                r#"<a href="{}" style="text-decoration: none; border: 0;">{}</a>"#,
                self.logo_href, img
            )
        };
        format!(
            r#"<div style="margin-top: {}; margin-bottom: {};">{}</div>"#,
            placement.margin_top, placement.margin_bottom, inner
        )
    }

    /// Labelled contact table (`E:`, `P:`, ...) used by the stacked layouts.
    pub fn contact_rows(&self) -> String {
        let s = &self.style;
        let abbr = self.abbr();
        let label = |text: &str, extra: &str| {
            format!(
                r#"<td style="padding-bottom: 4px; padding-right: 10px;{}"><strong style="color: {}">{}</strong></td>"#,
                extra,
                s.theme_color,
                escape_html(text)
            )
        };
        let mut rows = String::new();
        if !self.email.is_empty() {
            rows.push_str(&format!(
                r#"
      <tr>{}<td><a href="mailto:{}" style="color: {}; text-decoration: none;">{}</a></td></tr>"#,
                label(&abbr.e, ""),
                self.email,
                s.text_color,
                self.email
            ));
        }
        if !self.phone.is_empty() {
            rows.push_str(&format!(
                "\n      <tr>{}<td>{}</td></tr>",
                label(&abbr.p, ""),
                self.phone
            ));
        }
        if !self.mobile.is_empty() {
            rows.push_str(&format!(
                "\n      <tr>{}<td>{}</td></tr>",
                label(&abbr.m, ""),
                self.mobile
            ));
        }
        if !self.website.is_empty() {
            rows.push_str(&format!(
                r#"
      <tr>{}<td><a href="{}" style="color: {}; text-decoration: none;">{}</a></td></tr>"#,
                label(&abbr.w, ""),
                self.website_href,
                s.text_color,
                self.website_label()
            ));
        }
        if !self.address.is_empty() {
            rows.push_str(&format!(
                "\n      <tr>{}<td>{}</td></tr>",
                label(&abbr.a, " vertical-align: top;"),
                self.address
            ));
        }
        format!(
            r#"
    <table cellpadding="0" cellspacing="0" border="0" style="font-size: {}; color: {}; margin-top: 8px;">{}
    </table>"#,
            s.body_size, s.text_color, rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    fn strings() -> LocalizedStrings {
        LocalizedStrings::for_language(Language::En)
    }

    #[test]
    fn test_context_escapes_every_field() {
        let mut profile = Profile::default();
        profile.full_name = "<b>Ada</b>".to_string();
        profile.socials = vec![SocialLink::new("x\"", "https://x.com/a?b=<c>")];
        profile.style.theme_color = "red\" onmouseover=\"x".to_string();
        let strings = strings();
        let ctx = SignatureContext::new(&profile, &strings);
        assert_eq!(ctx.full_name, "&lt;b&gt;Ada&lt;/b&gt;");
        assert_eq!(ctx.full_name_upper, "&lt;B&gt;ADA&lt;/B&gt;");
        assert_eq!(ctx.socials[0].platform, "x&quot;");
        assert_eq!(ctx.socials[0].url, "https://x.com/a?b=&lt;c&gt;");
        assert!(!ctx.style.theme_color.contains('"'));
    }

    #[test]
    fn test_website_label_strips_scheme() {
        let mut profile = Profile::default();
        let strings = strings();
        profile.website = "https://koreagency.it".to_string();
        assert_eq!(SignatureContext::new(&profile, &strings).website_label(), "koreagency.it");
        profile.website = "http://a.b".to_string();
        assert_eq!(SignatureContext::new(&profile, &strings).website_label(), "a.b");
        profile.website = "www.a.b".to_string();
        assert_eq!(SignatureContext::new(&profile, &strings).website_label(), "www.a.b");
    }

    #[test]
    fn test_utm_applied_to_links() {
        let mut profile = Profile::default();
        profile.website = "https://a.com".to_string();
        profile.logo_link = "https://a.com/home".to_string();
        profile.addons.cta_url = "https://a.com/demo".to_string();
        profile.marketing.utm_source = "sig".to_string();
        let strings = strings();
        let ctx = SignatureContext::new(&profile, &strings);
        assert_eq!(ctx.website_href, "https://a.com?utm_source=sig");
        assert_eq!(ctx.logo_href, "https://a.com/home?utm_source=sig");
        assert_eq!(ctx.cta_href, "https://a.com/demo?utm_source=sig");
        assert_eq!(ctx.website, "https://a.com");
    }

    #[test]
    fn test_vcard_layout() {
        let mut profile = Profile::default();
        profile.full_name = "Ada Lovelace".to_string();
        profile.company = "Engines".to_string();
        profile.address = "London".to_string();
        let strings = strings();
        let vcard = SignatureContext::new(&profile, &strings).vcard();
        let lines: Vec<&str> = vcard.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "BEGIN:VCARD");
        assert_eq!(lines[1], "VERSION:3.0");
        assert_eq!(lines[2], "N:Ada Lovelace;;;");
        assert_eq!(lines[4], "ORG:Engines");
        assert_eq!(lines[10], "ADR;TYPE=WORK:;;London;;;");
        assert_eq!(lines[11], "END:VCARD");
    }

    #[test]
    fn test_qr_only_when_enabled() {
        let mut profile = Profile::default();
        let strings = strings();
        assert_eq!(SignatureContext::new(&profile, &strings).qr_code(Align::Left), "");
        profile.addons.include_qr = true;
        profile.full_name = "Ada".to_string();
        let html = SignatureContext::new(&profile, &strings).qr_code(Align::Center);
        assert!(html.contains("size=300x300&data=BEGIN%3AVCARD%0AVERSION%3A3.0"));
        assert!(html.contains(r#"width="120" height="120""#));
        assert!(html.contains("margin: 15px auto 0;"));
    }

    #[test]
    fn test_cta_requires_text_and_url() {
        let mut profile = Profile::default();
        let strings = strings();
        profile.addons.cta_text = "Book a demo".to_string();
        assert_eq!(SignatureContext::new(&profile, &strings).cta(Align::Left), "");
        profile.addons.cta_text.clear();
        profile.addons.cta_url = "https://a.com".to_string();
        assert_eq!(SignatureContext::new(&profile, &strings).cta(Align::Left), "");
    }

    #[test]
    fn test_cta_color_falls_back_to_theme() {
        let mut profile = Profile::default();
        profile.addons.cta_text = "Go".to_string();
        profile.addons.cta_url = "https://a.com".to_string();
        profile.style.theme_color = "#123456".to_string();
        let strings = strings();
        let html = SignatureContext::new(&profile, &strings).cta(Align::Center);
        assert!(html.contains("background-color: #123456;"));
        assert!(html.contains("text-align: center;"));

        profile.addons.cta_color = "#abcdef".to_string();
        let html = SignatureContext::new(&profile, &strings).cta(Align::Left);
        assert!(html.contains("background-color: #abcdef;"));
    }

    #[test]
    fn test_socials_icon_size() {
        let mut profile = Profile::default();
        profile.socials = vec![SocialLink::new("github", "https://github.com/ada")];
        let strings = strings();
        let ctx = SignatureContext::new(&profile, &strings);
        assert!(ctx.socials(true, Align::Left).contains(r#"width="16" height="16""#));
        assert!(ctx.socials(false, Align::Left).contains(r#"width="24" height="24""#));
        assert!(ctx.socials(false, Align::Center).contains("text-align: center;"));
        assert!(ctx.socials(false, Align::Left).contains("733/733553.png"));
    }

    #[test]
    fn test_logo_link_and_alignment() {
        let mut profile = Profile::default();
        let strings = strings();
        let placement = LogoPlacement::aligned(Align::Right, "80px");
        assert_eq!(SignatureContext::new(&profile, &strings).company_logo(placement), "");

        profile.logo_url = "https://a.com/logo.png".to_string();
        let html = SignatureContext::new(&profile, &strings).company_logo(placement);
        assert!(html.contains(r#"alt="Company Logo""#));
        assert!(html.contains("max-height: 80px; border: 0; margin-left: auto;"));
        assert!(!html.contains("<a "));

        profile.logo_link = "https://a.com".to_string();
        profile.company = "Acme".to_string();
        let html = SignatureContext::new(&profile, &strings).company_logo(LogoPlacement::inline("8px", "4px"));
        assert!(html.starts_with(r#"<div style="margin-top: 8px; margin-bottom: 4px;"><a href="https://a.com""#));
        assert!(html.contains(r#"alt="Acme""#));
    }

    #[test]
    fn test_footer_order() {
        let mut profile = Profile::default();
        let strings = strings();
        assert_eq!(SignatureContext::new(&profile, &strings).footer(), "");
        profile.addons.green_message = true;
        profile.addons.disclaimer = "Legal & stuff".to_string();
        let html = SignatureContext::new(&profile, &strings).footer();
        let eco = html.find(&strings.eco).unwrap();
        let legal = html.find("Legal &amp; stuff").unwrap();
        assert!(eco < legal);
    }

    #[test]
    fn test_contact_rows_skip_empty_fields() {
        let mut profile = Profile::default();
        profile.email = "a@b.c".to_string();
        let strings = strings();
        let html = SignatureContext::new(&profile, &strings).contact_rows();
        assert!(html.contains("mailto:a@b.c"));
        assert!(html.contains(">E:</strong>"));
        assert!(!html.contains(">P:</strong>"));
        assert!(!html.contains(">A:</strong>"));
    }
}
