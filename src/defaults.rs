use crate::locale::{is_default_disclaimer, Language, LocalizedStrings};
use crate::profile::{Profile, SignatureAddons, SocialLink, StyleConfig};

const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/300?img=5";
const AGENCY_LOGO: &str = "https://koreagency.it/wp-content/uploads/2025/10/korered-2.png";

/// Starting profile shown to a new user in `lang`.
pub fn profile_defaults(lang: Language) -> Profile {
    let t = LocalizedStrings::for_language(lang);
    Profile {
        company: "Kore Agency".to_string(),
        email: "hello@koreagency.it".to_string(),
        website: "https://koreagency.it".to_string(),
        logo_url: AGENCY_LOGO.to_string(),
        avatar_url: DEFAULT_AVATAR.to_string(),
        socials: vec![
            SocialLink::new("linkedin", ""),
            SocialLink::new("instagram", ""),
        ],
        job_title: t.placeholders.job_title,
        phone: t.placeholders.phone,
        mobile: t.placeholders.mobile,
        address: t.placeholders.address,
        style: StyleConfig::default(),
        addons: SignatureAddons {
            cta_color: "#EC4899".to_string(),
            green_message: true,
            ..SignatureAddons::default()
        },
        ..Profile::default()
    }
}

/// Swap an untouched disclaimer for the one of `lang`. Custom text is kept.
pub fn localize_disclaimer(profile: &mut Profile, lang: Language) {
    if is_default_disclaimer(&profile.addons.disclaimer) {
        profile.addons.disclaimer = LocalizedStrings::for_language(lang).disclaimer;
    }
}
