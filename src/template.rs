use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SignatureError, SignatureResult};

/// The eight signature layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateKind {
    Classic,
    #[default]
    Modern,
    Minimal,
    Sidebar,
    Horizontal,
    Corporate,
    Elegant,
    Creative,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 8] = [
        TemplateKind::Classic,
        TemplateKind::Modern,
        TemplateKind::Minimal,
        TemplateKind::Sidebar,
        TemplateKind::Horizontal,
        TemplateKind::Corporate,
        TemplateKind::Elegant,
        TemplateKind::Creative,
    ];

    /// Layout used for identifiers that match nothing.
    pub const FALLBACK: TemplateKind = TemplateKind::Horizontal;

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Classic => "CLASSIC",
            TemplateKind::Modern => "MODERN",
            TemplateKind::Minimal => "MINIMAL",
            TemplateKind::Sidebar => "SIDEBAR",
            TemplateKind::Horizontal => "HORIZONTAL",
            TemplateKind::Corporate => "CORPORATE",
            TemplateKind::Elegant => "ELEGANT",
            TemplateKind::Creative => "CREATIVE",
        }
    }

    /// Case-insensitive lookup that never fails: unknown names select
    /// [`TemplateKind::FALLBACK`].
    pub fn from_name(name: &str) -> Self {
        Self::parse_strict(name).unwrap_or_else(|_| {
            tracing::debug!(template = name, "unknown template, using fallback layout");
            Self::FALLBACK
        })
    }

    pub fn parse_strict(name: &str) -> SignatureResult<Self> {
        let upper = name.trim().to_uppercase();
        TemplateKind::ALL
            .iter()
            .copied()
            .find(|t| t.name() == upper)
            .ok_or_else(|| SignatureError::UnknownTemplate {
                name: name.to_string(),
                expected: TemplateKind::ALL.map(|t| t.name()).join(", "),
            })
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
