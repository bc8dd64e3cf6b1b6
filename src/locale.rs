//! Localized text injected into signature generation.
//!
//! Bundles are plain values: callers pick one per render instead of mutating a
//! process-wide table, so renders in different languages never interfere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SignatureError, SignatureResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    It,
    Es,
    Fr,
    De,
    Pt,
    Zh,
    Ja,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::It,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::Pt,
        Language::Zh,
        Language::Ja,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Pt => "pt",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Pt => "Português",
            Language::Zh => "中文",
            Language::Ja => "日本語",
        }
    }

    /// Strict lookup by two-letter code.
    pub fn from_code(code: &str) -> SignatureResult<Self> {
        let code = code.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code() == code)
            .ok_or_else(|| SignatureError::UnknownLanguage {
                code,
                expected: Language::ALL.map(|l| l.code()).join(", "),
            })
    }

    /// Lenient lookup from a locale tag such as `it-IT` or `pt_BR.UTF-8`.
    /// Anything unsupported resolves to English.
    pub fn detect(tag: &str) -> Self {
        let primary = tag.split(['-', '_', '.']).next().unwrap_or_default();
        Language::from_code(primary).unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

/// Contact-row prefixes (`E:`, `P:`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abbreviations {
    pub e: String,
    pub p: String,
    pub m: String,
    pub w: String,
    pub a: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Placeholders {
    pub job_title: String,
    pub phone: String,
    pub mobile: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallGuides {
    pub gmail: String,
    pub outlook: String,
    pub apple: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizedStrings {
    pub abbreviations: Abbreviations,
    pub disclaimer: String,
    pub eco: String,
    pub placeholders: Placeholders,
    pub install_guides: InstallGuides,
}

impl LocalizedStrings {
    pub fn for_language(lang: Language) -> Self {
        builtin(lang)
    }

    /// Load a custom bundle. Missing keys come back empty; the caller decides
    /// whether to backfill them.
    pub fn from_yaml(source: &str) -> SignatureResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

/// True when `text` is empty or one of the built-in disclaimers, i.e. the user
/// never customised it.
pub fn is_default_disclaimer(text: &str) -> bool {
    text.is_empty() || Language::ALL.iter().any(|&l| builtin(l).disclaimer == text)
}

fn bundle(
    abbr: [&str; 5],
    disclaimer: &str,
    eco: &str,
    placeholders: [&str; 4],
    guides: [&str; 3],
) -> LocalizedStrings {
    let [e, p, m, w, a] = abbr.map(str::to_string);
    let [job_title, phone, mobile, address] = placeholders.map(str::to_string);
    let [gmail, outlook, apple] = guides.map(str::to_string);
    LocalizedStrings {
        abbreviations: Abbreviations { e, p, m, w, a },
        disclaimer: disclaimer.to_string(),
        eco: eco.to_string(),
        placeholders: Placeholders {
            job_title,
            phone,
            mobile,
            address,
        },
        install_guides: InstallGuides {
            gmail,
            outlook,
            apple,
        },
    }
}

fn builtin(lang: Language) -> LocalizedStrings {
    match lang {
        Language::En => bundle(
            ["E:", "P:", "M:", "W:", "A:"],
            "CONFIDENTIALITY NOTICE: The contents of this email message and any attachments are intended solely for the addressee(s) and may contain confidential and/or privileged information and may be legally protected from disclosure.",
            "Please consider the environment before printing this email.",
            ["Product Manager", "+1 555 123 4567", "+1 555 987 6543", "123 Market St, San Francisco"],
            [
                "Go to Settings (Gear icon) > See all settings > General. Scroll down to 'Signature', click + Create new, paste your signature, and save.",
                "Go to Settings (Gear icon) > Mail > Compose and reply. Create a new signature, paste the content, and select it for new messages.",
                "Open Mail > Settings > Signatures. Select your account, click +, uncheck 'Always match my default message font', and paste.",
            ],
        ),
        Language::It => bundle(
            ["E:", "T:", "C:", "W:", "I:"],
            "AVVISO DI RISERVATEZZA: Il contenuto di questo messaggio email e gli eventuali allegati sono destinati esclusivamente ai destinatari indicati e possono contenere informazioni confidenziali e/o privilegiate legalmente protette dalla divulgazione.",
            "Per favore, considera l'ambiente prima di stampare questa email.",
            ["Direttore Marketing", "+39 02 1234 5678", "+39 333 123 4567", "Via Roma 1, Milano"],
            [
                "Vai su Impostazioni (ingranaggio) > Visualizza tutte > Generali. Scorri fino a 'Firma', crea nuova, incolla la firma e salva in fondo alla pagina.",
                "Vai su Impostazioni > Posta > Componi e rispondi. Crea nuova firma, incolla il contenuto e selezionala per i nuovi messaggi.",
                "Apri Mail > Impostazioni > Firme. Seleziona l'account, clicca +, togli la spunta a 'Usa sempre il font di default' e incolla.",
            ],
        ),
        Language::Es => bundle(
            ["E:", "T:", "M:", "W:", "D:"],
            "AVISO DE CONFIDENCIALIDAD: El contenido de este mensaje de correo electrónico y cualquier archivo adjunto están destinados únicamente a los destinatarios especificados y pueden contener información confidencial.",
            "Por favor, considere el medio ambiente antes de imprimir este correo.",
            ["Director Comercial", "+34 91 123 45 67", "+34 600 123 456", "Gran Vía 1, Madrid"],
            [
                "Configuración > Ver todos los ajustes > General. Baja hasta 'Firma', crea una nueva, pega y guarda.",
                "Configuración > Correo > Redactar y responder. Crea nueva firma, pega y selecciona para nuevos mensajes.",
                "Mail > Ajustes > Firmas. Selecciona cuenta, + , desmarca 'Usar siempre mi tipo de letra' y pega.",
            ],
        ),
        Language::Fr => bundle(
            ["E:", "T:", "P:", "W:", "A:"],
            "AVIS DE CONFIDENTIALITÉ : Le contenu de ce message électronique et les éventuelles pièces jointes sont destinés exclusivement aux destinataires indiqués et peuvent contenir des informations confidentielles.",
            "Merci de penser à l'environnement avant d'imprimer cet email.",
            ["Chef de Projet", "+33 1 23 45 67 89", "+33 6 12 34 56 78", "15 Rue de Rivoli, Paris"],
            [
                "Paramètres > Voir tous les paramètres > Général. Descendez à 'Signature', créez-en une, collez et enregistrez.",
                "Paramètres > Courrier > Composer et répondre. Nouvelle signature, collez et sélectionnez pour les nouveaux messages.",
                "Mail > Réglages > Signatures. Sélectionnez le compte, +, décochez 'Toujours utiliser ma police', et collez.",
            ],
        ),
        Language::De => bundle(
            ["E:", "T:", "M:", "W:", "A:"],
            "VERTRAULICHKEITSHINWEIS: Der Inhalt dieser E-Mail und etwaiger Anhänge ist ausschließlich für die genannten Empfänger bestimmt und kann vertrauliche Informationen enthalten.",
            "Bitte denken Sie an die Umwelt, bevor Sie diese E-Mail drucken.",
            ["Projektmanager", "+49 30 12345678", "+49 170 1234567", "Musterstraße 1, Berlin"],
            [
                "Einstellungen > Alle Einstellungen > Allgemein. Scrollen zu 'Signatur', neu erstellen, einfügen und speichern.",
                "Einstellungen > E-Mail > Verfassen und Antworten. Neue Signatur, einfügen und auswählen.",
                "Mail > Einstellungen > Signaturen. Account wählen, +, 'Standard-Schriftart' abwählen, einfügen.",
            ],
        ),
        Language::Pt => bundle(
            ["E:", "T:", "C:", "W:", "E:"],
            "AVISO DE CONFIDENCIALIDADE: O conteúdo desta mensagem de e-mail e quaisquer anexos destinam-se exclusivamente aos destinatários especificados e podem conter informações confidenciais.",
            "Por favor, considere o meio ambiente antes de imprimir este e-mail.",
            ["Gerente de Marketing", "+351 21 123 4567", "+351 91 234 5678", "Av. da Liberdade 1, Lisboa"],
            [
                "Configurações > Ver todas > Geral. Vá até 'Assinatura', crie nova, cole e salve no final.",
                "Configurações > Email > Redigir e responder. Nova assinatura, cole e selecione para novos emails.",
                "Mail > Ajustes > Assinaturas. Selecione conta, +, desmarque 'Usar sempre fonte padrão', e cole.",
            ],
        ),
        Language::Zh => bundle(
            ["邮:", "电:", "手:", "网:", "地:"],
            "保密声明：本电子邮件及附件内容仅供指定收件人查阅，可能包含保密信息。",
            "打印此邮件前请考虑环保。",
            ["市场总监", "+86 21 1234 5678", "+86 138 0000 0000", "南京路 88 号, 上海"],
            [
                "设置 > 查看所有设置 > 常规。向下滚动到“签名”，新建，粘贴并保存。",
                "设置 > 邮件 > 撰写和回复。新建签名，粘贴并选择用于新邮件。",
                "邮件 > 设置 > 签名。选择帐户，+，取消选中“始终匹配我的默认字体”，然后粘贴。",
            ],
        ),
        Language::Ja => bundle(
            ["E:", "T:", "M:", "W:", "A:"],
            "機密保持に関する通知：この電子メールおよび添付ファイルの内容は、指定された受信者のみを対象としており、機密情報が含まれている場合があります。",
            "このメールを印刷する前に、環境への配慮をお願いします。",
            ["営業部長", "+81 3 1234 5678", "+81 90 1234 5678", "東京都渋谷区 1-1-1"],
            [
                "設定 > すべての設定を表示 > 全般。「署名」までスクロールし、新規作成、貼り付けて保存。",
                "設定 > メール > 作成と返信。新しい署名を作成し、貼り付けて新しいメッセージ用に選択。",
                "メール > 設定 > 署名。アカウントを選択、+、「常にデフォルトのフォントを使用」のチェックを外し、貼り付け。",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("IT").unwrap(), Language::It);
        assert!(matches!(
            Language::from_code("xx"),
            Err(SignatureError::UnknownLanguage { .. })
        ));
    }

    #[test]
    fn test_detect_locale_tags() {
        assert_eq!(Language::detect("it-IT"), Language::It);
        assert_eq!(Language::detect("pt_BR.UTF-8"), Language::Pt);
        assert_eq!(Language::detect("ko-KR"), Language::En);
        assert_eq!(Language::detect(""), Language::En);
    }

    #[test]
    fn test_every_bundle_is_complete() {
        for lang in Language::ALL {
            let t = LocalizedStrings::for_language(lang);
            assert!(!t.disclaimer.is_empty(), "{} disclaimer", lang);
            assert!(!t.eco.is_empty(), "{} eco", lang);
            assert!(!t.abbreviations.e.is_empty(), "{} abbreviations", lang);
            assert!(!t.placeholders.job_title.is_empty(), "{} placeholders", lang);
            assert!(!t.install_guides.gmail.is_empty(), "{} guides", lang);
        }
    }

    #[test]
    fn test_italian_abbreviations() {
        let t = LocalizedStrings::for_language(Language::It);
        assert_eq!(t.abbreviations.p, "T:");
        assert_eq!(t.abbreviations.m, "C:");
        assert_eq!(t.abbreviations.a, "I:");
    }

    #[test]
    fn test_default_disclaimer_detection() {
        assert!(is_default_disclaimer(""));
        assert!(is_default_disclaimer(
            &LocalizedStrings::for_language(Language::De).disclaimer
        ));
        assert!(!is_default_disclaimer("Sent from my phone"));
    }

    #[test]
    fn test_partial_yaml_bundle() {
        let t = LocalizedStrings::from_yaml("eco: Go green\nabbreviations:\n  e: 'Mail:'\n").unwrap();
        assert_eq!(t.eco, "Go green");
        assert_eq!(t.abbreviations.e, "Mail:");
        assert!(t.disclaimer.is_empty());
    }
}
