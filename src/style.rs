//! Presentation values derived from a [`StyleConfig`].

use crate::profile::{FontSize, ImageShape, StyleConfig, MAX_CARD_RADIUS};

/// Which text role a font size is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Name,
    Body,
    Small,
}

/// Text and border colors for content painted directly on the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contrast {
    pub text: &'static str,
    pub border: &'static str,
}

const LIGHT_ON_DARK: Contrast = Contrast {
    text: "#ffffff",
    border: "rgba(255,255,255,0.3)",
};

const DARK_ON_LIGHT: Contrast = Contrast {
    text: "#222222",
    border: "rgba(0,0,0,0.15)",
};

fn base_size(size: FontSize) -> u32 {
    match size {
        FontSize::Small => 12,
        FontSize::Medium => 14,
        FontSize::Large => 16,
    }
}

/// CSS font size for a tier and role, e.g. `medium` + `Name` -> `18px`.
pub fn font_size(size: FontSize, role: TextRole) -> String {
    let base = base_size(size);
    let px = match role {
        TextRole::Name => base + 4,
        TextRole::Body => base,
        TextRole::Small => base - 2,
    };
    format!("{}px", px)
}

pub fn image_radius(shape: ImageShape) -> &'static str {
    match shape {
        ImageShape::Circle => "50%",
        ImageShape::Rounded => "8px",
        ImageShape::Square => "0px",
    }
}

/// Parse a 3- or 6-digit hex color (leading `#` optional).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let doubled: Vec<String> = hex.chars().map(|c| format!("{}{}", c, c)).collect();
            Some((channel(&doubled[0])?, channel(&doubled[1])?, channel(&doubled[2])?))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Pick readable text for content over `hex` using YIQ brightness.
/// Anything that does not parse gets white text.
pub fn contrast_for(hex: &str) -> Contrast {
    let Some((r, g, b)) = parse_hex(hex) else {
        return LIGHT_ON_DARK;
    };
    let yiq = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
    if yiq >= 128 {
        DARK_ON_LIGHT
    } else {
        LIGHT_ON_DARK
    }
}

/// Resolved style values shared by every layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_family: String,
    pub name_size: String,
    pub body_size: String,
    pub small_size: String,
    pub image_radius: &'static str,
    pub theme_color: String,
    pub text_color: String,
    pub card_background: String,
    pub card_radius: u32,
}

impl ResolvedStyle {
    pub fn resolve(style: &StyleConfig) -> Self {
        let or_default = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            font_family: style.font_family.clone(),
            name_size: font_size(style.font_size, TextRole::Name),
            body_size: font_size(style.font_size, TextRole::Body),
            small_size: font_size(style.font_size, TextRole::Small),
            image_radius: image_radius(style.image_shape),
            theme_color: style.theme_color.clone(),
            text_color: or_default(&style.text_color, "#333333"),
            card_background: or_default(&style.card_background_color, "#ffffff"),
            card_radius: style.card_border_radius.min(MAX_CARD_RADIUS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_sizes() {
        assert_eq!(font_size(FontSize::Small, TextRole::Name), "16px");
        assert_eq!(font_size(FontSize::Medium, TextRole::Body), "14px");
        assert_eq!(font_size(FontSize::Large, TextRole::Small), "14px");
        assert_eq!(font_size(FontSize::Small, TextRole::Small), "10px");
    }

    #[test]
    fn test_image_radius() {
        assert_eq!(image_radius(ImageShape::Circle), "50%");
        assert_eq!(image_radius(ImageShape::Rounded), "8px");
        assert_eq!(image_radius(ImageShape::Square), "0px");
    }

    #[test]
    fn test_contrast_white_background() {
        assert_eq!(contrast_for("#FFFFFF").text, "#222222");
        assert_eq!(contrast_for("#FFFFFF").border, "rgba(0,0,0,0.15)");
    }

    #[test]
    fn test_contrast_black_background() {
        assert_eq!(contrast_for("#000000").text, "#ffffff");
        assert_eq!(contrast_for("#000").border, "rgba(255,255,255,0.3)");
    }

    #[test]
    fn test_contrast_short_hex_expands() {
        assert_eq!(parse_hex("#fa0"), Some((0xff, 0xaa, 0x00)));
        assert_eq!(contrast_for("#ff0").text, "#222222");
    }

    #[test]
    fn test_contrast_malformed_falls_back_to_white() {
        assert_eq!(contrast_for("bad"), contrast_for("#000000"));
        assert_eq!(contrast_for("#12345").text, "#ffffff");
        assert_eq!(contrast_for("#gggggg").text, "#ffffff");
        assert_eq!(contrast_for("").text, "#ffffff");
    }

    #[test]
    fn test_resolve_backfills_colors_and_clamps_radius() {
        let mut style = StyleConfig::default();
        style.text_color.clear();
        style.card_background_color.clear();
        style.card_border_radius = 99;
        let resolved = ResolvedStyle::resolve(&style);
        assert_eq!(resolved.text_color, "#333333");
        assert_eq!(resolved.card_background, "#ffffff");
        assert_eq!(resolved.card_radius, 30);
        assert_eq!(resolved.name_size, "18px");
    }
}
