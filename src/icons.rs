const ICON_CDN: &str = "https://cdn-icons-png.flaticon.com/128";

const FALLBACK_ICON: &str = "14627/14627197.png";

/// Hosted 128px PNG icon for a social platform. Unknown platforms get the
/// generic website globe.
pub fn icon_url(platform: &str) -> String {
    let path = match platform.to_lowercase().as_str() {
        "linkedin" => "174/174857.png",
        "twitter" => "733/733579.png",
        "x" => "5969/5969020.png",
        "facebook" => "733/733547.png",
        "instagram" => "174/174855.png",
        "youtube" => "1384/1384060.png",
        "github" => "733/733553.png",
        "tiktok" => "3046/3046121.png",
        "discord" => "5968/5968756.png",
        _ => FALLBACK_ICON,
    };
    format!("{}/{}", ICON_CDN, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SOCIAL_PLATFORMS;

    #[test]
    fn test_known_platform() {
        assert_eq!(
            icon_url("linkedin"),
            "https://cdn-icons-png.flaticon.com/128/174/174857.png"
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(icon_url("GitHub"), icon_url("github"));
    }

    #[test]
    fn test_unknown_falls_back_to_website() {
        assert_eq!(icon_url("myspace"), icon_url("website"));
        assert!(icon_url("").ends_with(FALLBACK_ICON));
    }

    #[test]
    fn test_every_listed_platform_has_distinct_icon() {
        let mut urls: Vec<String> = SOCIAL_PLATFORMS.iter().map(|p| icon_url(p)).collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), SOCIAL_PLATFORMS.len());
    }
}
