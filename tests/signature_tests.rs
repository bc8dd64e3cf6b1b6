use kore_signature::{
    augment_url, contrast_for, escape_html, generate, generate_named, render_with_preview,
    sanitize, Language, LocalizedStrings, MarketingConfig, Profile, SocialLink, TemplateKind,
};
use pretty_assertions::assert_eq;

fn english() -> LocalizedStrings {
    LocalizedStrings::for_language(Language::En)
}

fn full_profile() -> Profile {
    let mut profile = Profile::default();
    profile.full_name = "Ada Lovelace".to_string();
    profile.job_title = "Analyst".to_string();
    profile.company = "Engines & Co".to_string();
    profile.logo_url = "https://cdn.test/logo.png".to_string();
    profile.logo_link = "https://engines.test".to_string();
    profile.email = "ada@engines.test".to_string();
    profile.phone = "+44 20 1234".to_string();
    profile.mobile = "+44 77 5678".to_string();
    profile.website = "https://engines.test".to_string();
    profile.address = "12 St James's Sq, London".to_string();
    profile.avatar_url = "https://cdn.test/ada.png".to_string();
    profile.socials = vec![
        SocialLink::new("linkedin", "https://linkedin.com/in/ada"),
        SocialLink::new("github", "https://github.com/ada"),
    ];
    profile.addons.cta_text = "Book a call".to_string();
    profile.addons.cta_url = "https://engines.test/book".to_string();
    profile.addons.banner_url = "https://cdn.test/banner.png".to_string();
    profile.addons.disclaimer = "Confidential.".to_string();
    profile.addons.green_message = true;
    profile.addons.include_qr = true;
    profile
}

// Empty input

#[test]
fn test_empty_profile_renders_bare_card() {
    let profile = Profile::default();
    let strings = english();
    for kind in TemplateKind::ALL {
        let html = generate(&profile, kind, &strings);
        assert!(!html.trim().is_empty(), "{} produced nothing", kind);
        assert!(html.contains("border-radius: 0px;"), "{} lost the card wrapper", kind);
        assert!(!html.contains("mailto:"), "{} has a contact row", kind);
        assert!(!html.contains("Scan Contact"), "{} has a QR code", kind);
        assert!(!html.contains(r#"alt="Banner""#), "{} has a banner", kind);
        assert!(!html.contains("padding: 8px 16px"), "{} has a CTA", kind);
        assert!(!html.contains("#2e7d32"), "{} has the eco line", kind);
        assert!(!html.contains("text-align: justify"), "{} has a disclaimer", kind);
        assert!(!html.contains("Company Logo"), "{} has a logo", kind);
    }
}

#[test]
fn test_full_profile_renders_every_fragment() {
    let profile = full_profile();
    let strings = english();
    for kind in TemplateKind::ALL {
        let html = generate(&profile, kind, &strings);
        assert!(html.contains("Scan Contact"), "{} is missing the QR code", kind);
        assert!(html.contains(r#"alt="Banner""#), "{} is missing the banner", kind);
        assert!(html.contains("Book a call"), "{} is missing the CTA", kind);
        assert!(html.contains("Confidential."), "{} is missing the disclaimer", kind);
        assert!(html.contains(&escape_html(&strings.eco)), "{} is missing the eco line", kind);
        assert!(html.contains("ada@engines.test"), "{} is missing the email", kind);
    }
}

// Escaping

#[test]
fn test_markup_in_name_is_never_live() {
    let mut profile = full_profile();
    profile.full_name = "<img src=x onerror=alert(1)>".to_string();
    let strings = english();
    for kind in TemplateKind::ALL {
        let html = generate(&profile, kind, &strings);
        assert!(!html.contains("<img src=x"), "{} leaked a live tag", kind);
        assert!(!html.to_lowercase().contains("<img src=x"), "{} leaked a live tag", kind);
        assert!(html.contains("&lt;"), "{} dropped the name", kind);
    }
}

#[test]
fn test_attribute_breakout_is_escaped() {
    let mut profile = Profile::default();
    profile.website = r#"https://x.test/" onclick="steal()"#.to_string();
    profile.style.theme_color = r#"red;" onmouseover="x()"#.to_string();
    let html = generate(&profile, TemplateKind::Classic, &english());
    assert!(!html.contains(r#"" onclick=""#));
    assert!(!html.contains(r#"" onmouseover=""#));
    assert!(html.contains("&quot; onclick=&quot;"));
}

#[test]
fn test_escape_does_not_double_escape() {
    assert_eq!(escape_html("<b>"), "&lt;b&gt;");
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
    assert_eq!(escape_html("it's \"ok\""), "it&#039;s &quot;ok&quot;");
}

// Dispatch

#[test]
fn test_unknown_template_renders_horizontal() {
    let profile = full_profile();
    let strings = english();
    let horizontal = generate(&profile, TemplateKind::Horizontal, &strings);
    assert_eq!(generate_named(&profile, "RETRO", &strings), horizontal);
    assert_eq!(generate_named(&profile, "", &strings), horizontal);
    assert_eq!(
        generate_named(&profile, "elegant", &strings),
        generate(&profile, TemplateKind::Elegant, &strings)
    );
}

#[test]
fn test_generate_is_repeatable() {
    let profile = full_profile();
    let strings = english();
    for kind in TemplateKind::ALL {
        assert_eq!(generate(&profile, kind, &strings), generate(&profile, kind, &strings));
    }
}

#[test]
fn test_templates_differ() {
    let profile = full_profile();
    let strings = english();
    let classic = generate(&profile, TemplateKind::Classic, &strings);
    let modern = generate(&profile, TemplateKind::Modern, &strings);
    assert_ne!(classic, modern);
}

#[test]
fn test_elegant_uppercases_name() {
    let profile = full_profile();
    let html = generate(&profile, TemplateKind::Elegant, &english());
    assert!(html.contains("ADA LOVELACE"));
}

// Locale

#[test]
fn test_labels_follow_locale() {
    let profile = full_profile();
    let en = generate(&profile, TemplateKind::Modern, &english());
    let italian = generate(
        &profile,
        TemplateKind::Modern,
        &LocalizedStrings::for_language(Language::It),
    );
    assert_ne!(en, italian);
    assert!(italian.contains(&escape_html(&LocalizedStrings::for_language(Language::It).eco)));
}

// Marketing

#[test]
fn test_utm_tags_links() {
    let mut profile = full_profile();
    profile.marketing = MarketingConfig {
        utm_source: "email".to_string(),
        utm_medium: "signature".to_string(),
        utm_campaign: String::new(),
    };
    let html = generate(&profile, TemplateKind::Classic, &english());
    assert!(html.contains("https://engines.test/book?utm_source=email&utm_medium=signature"));
    assert!(html.contains("mailto:ada@engines.test\""));
}

#[test]
fn test_augment_url_examples() {
    let utm = MarketingConfig {
        utm_source: "a".to_string(),
        ..MarketingConfig::default()
    };
    assert_eq!(augment_url("https://x.com", &utm), "https://x.com?utm_source=a");
    assert_eq!(augment_url("mailto:x@y.com", &utm), "mailto:x@y.com");
}

#[test]
fn test_contrast_examples() {
    assert_eq!(contrast_for("#FFFFFF").text, "#222222");
    assert_eq!(contrast_for("#000000").text, "#ffffff");
    assert_eq!(contrast_for("bad").text, "#ffffff");
}

#[test]
fn test_sidebar_panel_text_follows_theme_contrast() {
    let strings = english();
    let mut profile = full_profile();
    let panel = |text: &str| format!("color: {}; text-align: center;", text);

    profile.style.theme_color = "#FFFF00".to_string();
    let html = generate(&profile, TemplateKind::Sidebar, &strings);
    assert!(html.contains(&panel("#222222")));
    assert!(html.contains("border: 2px solid rgba(0,0,0,0.15);"));

    profile.style.theme_color = "#1a237e".to_string();
    let html = generate(&profile, TemplateKind::Sidebar, &strings);
    assert!(html.contains(&panel("#ffffff")));
    assert!(html.contains("border: 2px solid rgba(255,255,255,0.3);"));

    profile.style.theme_color = "navy-ish".to_string();
    let html = generate(&profile, TemplateKind::Sidebar, &strings);
    assert!(html.contains(&panel("#ffffff")));
    assert!(html.contains("border: 2px solid rgba(255,255,255,0.3);"));
}

// Preview

#[test]
fn test_sanitize_examples() {
    assert_eq!(sanitize("<script>alert(1)</script>"), "");
    assert_eq!(
        sanitize(r#"<img src="data:image/gif;base64,R0lG" width="1">"#),
        r#"<img src="data-blocked:image/gif;base64,R0lG" width="1">"#
    );
}

#[test]
fn test_preview_pair() {
    let profile = full_profile();
    let strings = english();
    let (copy, preview) = render_with_preview(&profile, TemplateKind::Sidebar, &strings);
    assert_eq!(copy, generate(&profile, TemplateKind::Sidebar, &strings));
    assert_eq!(preview, sanitize(&copy));
    assert!(!preview.contains("<script"));
}
