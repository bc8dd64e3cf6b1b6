use crate::profile::MarketingConfig;

/// Append the configured UTM parameters to an outbound link.
///
/// Only `http`/`https` links are touched; `mailto:` and relative values come
/// back unchanged, as does everything when no UTM field is set.
pub fn augment_url(url: &str, marketing: &MarketingConfig) -> String {
    if url.is_empty() {
        return String::new();
    }
    if marketing.is_empty() || !url.starts_with("http") {
        return url.to_string();
    }

    let params: Vec<String> = [
        ("utm_source", &marketing.utm_source),
        ("utm_medium", &marketing.utm_medium),
        ("utm_campaign", &marketing.utm_campaign),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
    .collect();

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, params.join("&"))
}
