//! Share links: a profile packed into a `config` query parameter.
//!
//! The token is the standard padded base64 of the UTF-8 JSON encoding, so
//! links produced by the web form decode here and the other way round.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use crate::error::{SignatureError, SignatureResult};
use crate::profile::Profile;

const CONFIG_PARAM: &str = "config";

pub fn encode_share_token(profile: &Profile) -> SignatureResult<String> {
    let json = serde_json::to_string(profile)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Decode a share token. Payloads without a `fullName` are rejected; the web
/// form ignores them as well.
pub fn decode_share_token(token: &str) -> SignatureResult<Profile> {
    let bytes = STANDARD.decode(token.trim()).map_err(|e| invalid(format!("base64: {}", e)))?;
    let json = String::from_utf8(bytes).map_err(|e| invalid(format!("utf-8: {}", e)))?;
    let profile: Profile =
        serde_json::from_str(&json).map_err(|e| invalid(format!("payload: {}", e)))?;
    if profile.full_name.trim().is_empty() {
        tracing::warn!("share token carries no fullName, ignoring");
        return Err(invalid("payload has no fullName".to_string()));
    }
    Ok(profile)
}

/// Append the encoded profile to `base` as the `config` parameter.
pub fn share_url(base: &str, profile: &Profile) -> SignatureResult<String> {
    let token = encode_share_token(profile)?;
    let separator = if base.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{}{}{}={}",
        base,
        separator,
        CONFIG_PARAM,
        urlencoding::encode(&token)
    ))
}

/// Extract the `config` parameter of a share URL. Query decoding follows
/// form rules: `+` is a space and keys are percent-decoded too.
pub fn token_from_url(url: &str) -> SignatureResult<String> {
    let parsed = Url::parse(url).map_err(|e| invalid(format!("URL: {}", e)))?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == CONFIG_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| invalid(format!("URL has no '{}' parameter", CONFIG_PARAM)))
}

fn invalid(reason: String) -> SignatureError {
    SignatureError::InvalidShareToken { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Profile {
        Profile {
            full_name: name.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_token_decodes_back() {
        let mut profile = named("Zoë Müller");
        profile.company = "Café & Co".to_string();
        profile.style.card_border_radius = 8;
        let token = encode_share_token(&profile).unwrap();
        assert_eq!(decode_share_token(&token).unwrap(), profile);
    }

    #[test]
    fn test_rejects_missing_full_name() {
        let token = STANDARD.encode(r#"{"company":"Acme"}"#);
        let err = decode_share_token(&token).unwrap_err();
        assert!(matches!(err, SignatureError::InvalidShareToken { .. }));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(decode_share_token("not base64!!").is_err());
        let token = STANDARD.encode("[1, 2");
        assert!(decode_share_token(&token).is_err());
    }

    #[test]
    fn test_share_url_separator() {
        let profile = named("Ada");
        let url = share_url("https://example.com/", &profile).unwrap();
        assert!(url.starts_with("https://example.com/?config="));

        let url = share_url("https://example.com/?ref=mail", &profile).unwrap();
        assert!(url.starts_with("https://example.com/?ref=mail&config="));
    }

    #[test]
    fn test_token_survives_url() {
        let profile = named("Ada ++ //");
        let url = share_url("https://example.com/", &profile).unwrap();
        let token = token_from_url(&url).unwrap();
        assert_eq!(decode_share_token(&token).unwrap(), profile);
    }

    #[test]
    fn test_token_from_url_ignores_other_params() {
        let token = token_from_url("https://x.test/?a=1&config=abc%3D&b=2#top").unwrap();
        assert_eq!(token, "abc=");
        assert!(token_from_url("https://x.test/?a=1").is_err());
        assert!(token_from_url("https://x.test/").is_err());
        assert!(token_from_url("not a url?config=abc").is_err());
    }

    #[test]
    fn test_token_from_url_uses_form_decoding() {
        assert_eq!(token_from_url("https://x.test/?config=a+b").unwrap(), "a b");
        assert_eq!(token_from_url("https://x.test/?conf%69g=abc").unwrap(), "abc");
        assert_eq!(token_from_url("https://x.test/?config=a%2Bb").unwrap(), "a+b");
    }
}
