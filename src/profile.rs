use serde::{Deserialize, Serialize};

use crate::error::SignatureResult;

/// Font stacks offered for signatures. Every entry is web-safe so mail clients
/// without web fonts still render something close.
pub const SUPPORTED_FONTS: &[&str] = &[
    "Arial, sans-serif",
    "Verdana, sans-serif",
    "Georgia, serif",
    "Times New Roman, serif",
    "Trebuchet MS, sans-serif",
    "Courier New, monospace",
    "Helvetica, sans-serif",
    "Tahoma, sans-serif",
    "Geneva, sans-serif",
    "Palatino Linotype, serif",
    "Garamond, serif",
    "Lucida Console, monospace",
];

/// Social platforms with a dedicated icon.
pub const SOCIAL_PLATFORMS: &[&str] = &[
    "linkedin",
    "twitter",
    "x",
    "facebook",
    "instagram",
    "youtube",
    "github",
    "tiktok",
    "discord",
    "website",
];

pub const MAX_CARD_RADIUS: u32 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageShape {
    #[default]
    Circle,
    Square,
    Rounded,
}

/// Icon rendering style. Carried through for the form layer; the hosted icon
/// set currently has a single colored variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Original,
    Colored,
    Black,
    White,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub font_family: String,
    pub font_size: FontSize,
    pub image_shape: ImageShape,
    pub theme_color: String,
    pub text_color: String,
    pub icon_style: IconStyle,
    pub card_background_color: String,
    pub card_border_radius: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: SUPPORTED_FONTS[0].to_string(),
            font_size: FontSize::Medium,
            image_shape: ImageShape::Circle,
            theme_color: "#EC4899".to_string(),
            text_color: "#333333".to_string(),
            icon_style: IconStyle::Original,
            card_background_color: "#ffffff".to_string(),
            card_border_radius: 0,
        }
    }
}

impl StyleConfig {
    /// Whether the configured font family is one of [`SUPPORTED_FONTS`].
    pub fn has_supported_font(&self) -> bool {
        SUPPORTED_FONTS.contains(&self.font_family.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureAddons {
    pub cta_text: String,
    pub cta_url: String,
    pub cta_color: String,
    pub banner_url: String,
    pub disclaimer: String,
    /// Eco-friendly "think before printing" line.
    pub green_message: bool,
    pub include_qr: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketingConfig {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
}

impl MarketingConfig {
    pub fn is_empty(&self) -> bool {
        self.utm_source.is_empty() && self.utm_medium.is_empty() && self.utm_campaign.is_empty()
    }
}

/// Everything a user enters to describe their signature.
///
/// Field names serialize in camelCase so snapshots and share links stay
/// compatible with the web form that produces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
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
    pub style: StyleConfig,
    pub addons: SignatureAddons,
    pub marketing: MarketingConfig,
}

impl Profile {
    /// Parse a profile from YAML. JSON is valid YAML, so exported snapshots load too.
    pub fn from_yaml(source: &str) -> SignatureResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> SignatureResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_yaml(&self) -> SignatureResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> SignatureResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
