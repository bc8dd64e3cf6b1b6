//! kore-signature - render and manage HTML email signatures.
//!
//! Usage:
//! ```bash
//! # Print the starting profile for Italian users
//! kore-signature init --lang it > me.yaml
//!
//! # Render a signature and write a downloadable page
//! kore-signature render me.yaml --template ELEGANT --document --output signature.html
//!
//! # Build a share link, then read one back
//! kore-signature share encode me.yaml
//! kore-signature share decode "https://signature.koreagency.it/?config=..."
//!
//! # Keep named snapshots
//! kore-signature profiles save "Sales" me.yaml
//! kore-signature profiles list
//! ```

use clap::{Parser, Subcommand};
use kore_signature::document::{html_document, preview_document};
use kore_signature::profile::{SOCIAL_PLATFORMS, SUPPORTED_FONTS};
use kore_signature::{
    decode_share_token, generate, localize_disclaimer, profile_defaults, share_url,
    token_from_url, CliConfig, Language, LocalizedStrings, Profile, ProfileStore, SignatureError,
    SignatureResult, TemplateKind,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kore-signature",
    about = "HTML email signature generator",
    long_about = "Render table-based HTML email signatures from a YAML or JSON profile, build share links and keep named profile snapshots."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render a profile to HTML
    Render {
        /// Profile file (YAML or JSON)
        profile: PathBuf,

        /// Layout name (CLASSIC, MODERN, MINIMAL, SIDEBAR, HORIZONTAL, CORPORATE, ELEGANT, CREATIVE)
        #[arg(long, short = 't')]
        template: Option<String>,

        /// Language code for labels and default texts
        #[arg(long, short = 'l')]
        lang: Option<String>,

        /// Custom locale bundle (YAML) replacing the built-in strings
        #[arg(long)]
        strings: Option<PathBuf>,

        /// Emit a sanitized preview page instead of the copyable markup
        #[arg(long, conflicts_with = "document")]
        preview: bool,

        /// Paint the preview canvas dark
        #[arg(long, requires = "preview")]
        dark: bool,

        /// Wrap the signature in a standalone HTML page
        #[arg(long)]
        document: bool,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Share link commands
    Share {
        #[command(subcommand)]
        action: ShareCommand,
    },

    /// Saved profile snapshots
    Profiles {
        #[command(subcommand)]
        action: ProfilesCommand,
    },

    /// List the available layouts
    Templates,

    /// List the supported font stacks
    Fonts,

    /// List the social platforms with a dedicated icon
    Platforms,

    /// Show install instructions for Gmail, Outlook and Apple Mail
    Guide {
        /// Language code
        #[arg(long, short = 'l')]
        lang: Option<String>,
    },

    /// Print the default profile as YAML
    Init {
        /// Language code
        #[arg(long, short = 'l')]
        lang: Option<String>,
    },
}

#[derive(Subcommand)]
enum ShareCommand {
    /// Print a share URL for a profile
    Encode {
        /// Profile file (YAML or JSON)
        profile: PathBuf,
    },

    /// Decode a share URL or bare token
    Decode {
        /// Share URL or token
        input: String,

        /// Print YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

#[derive(Subcommand)]
enum ProfilesCommand {
    /// List saved snapshots
    List,

    /// Save a profile file under a name
    Save {
        /// Snapshot name
        name: String,

        /// Profile file (YAML or JSON)
        profile: PathBuf,
    },

    /// Print a snapshot as YAML
    Show {
        /// Snapshot id or name
        key: String,
    },

    /// Delete a snapshot
    Delete {
        /// Snapshot id
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> SignatureResult<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            profile,
            template,
            lang,
            strings,
            preview,
            dark,
            document,
            output,
        } => {
            let language = resolve_language(lang.as_deref(), &config)?;
            let template = match template {
                Some(name) => TemplateKind::parse_strict(&name)?,
                None => config.template,
            };
            let strings = match strings {
                Some(path) => LocalizedStrings::from_yaml(&read_file(&path)?)?,
                None => LocalizedStrings::for_language(language),
            };

            let mut profile = load_profile(&profile)?;
            if !profile.style.has_supported_font() {
                tracing::warn!(
                    font = %profile.style.font_family,
                    "font is not web-safe; mail clients may substitute it"
                );
            }
            if !profile.addons.disclaimer.is_empty() {
                localize_disclaimer(&mut profile, language);
            }

            let html = generate(&profile, template, &strings);
            let html = if preview {
                preview_document(&html, dark)
            } else if document {
                let title = if profile.full_name.is_empty() {
                    "Email signature".to_string()
                } else {
                    profile.full_name.clone()
                };
                html_document(&html, &title)
            } else {
                html
            };
            emit(&html, output.as_deref())
        }
        Command::Share { action } => match action {
            ShareCommand::Encode { profile } => {
                let profile = load_profile(&profile)?;
                println!("{}", share_url(&config.share_base_url, &profile)?);
                Ok(())
            }
            ShareCommand::Decode { input, yaml } => {
                let token = if input.contains('?') {
                    token_from_url(&input)?
                } else {
                    input
                };
                let profile = decode_share_token(&token)?;
                if yaml {
                    print!("{}", profile.to_yaml()?);
                } else {
                    println!("{}", serde_json::to_string_pretty(&profile)?);
                }
                Ok(())
            }
        },
        Command::Profiles { action } => {
            let mut store = ProfileStore::open(config.resolved_store_path()?)?;
            match action {
                ProfilesCommand::List => {
                    if store.list().is_empty() {
                        println!("No saved profiles in {}", store.path().display());
                    }
                    for entry in store.list() {
                        let when = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(entry.updated_at)
                            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default();
                        println!("{}  {}  {}", entry.id, when, entry.name);
                    }
                }
                ProfilesCommand::Save { name, profile } => {
                    let profile = load_profile(&profile)?;
                    let saved = store.save(&name, &profile)?;
                    println!("✓ saved '{}' as {}", saved.name, saved.id);
                }
                ProfilesCommand::Show { key } => {
                    print!("{}", store.get(&key)?.data.to_yaml()?);
                }
                ProfilesCommand::Delete { id } => {
                    if !store.delete(&id)? {
                        return Err(SignatureError::ProfileNotFound { key: id });
                    }
                    println!("✓ deleted {}", id);
                }
            }
            Ok(())
        }
        Command::Templates => {
            for kind in TemplateKind::ALL {
                let marker = if kind == TemplateKind::FALLBACK {
                    "  (fallback)"
                } else {
                    ""
                };
                println!("{}{}", kind, marker);
            }
            Ok(())
        }
        Command::Fonts => {
            SUPPORTED_FONTS.iter().for_each(|font| println!("{}", font));
            Ok(())
        }
        Command::Platforms => {
            SOCIAL_PLATFORMS.iter().for_each(|p| println!("{}", p));
            Ok(())
        }
        Command::Guide { lang } => {
            let language = resolve_language(lang.as_deref(), &config)?;
            let guides = LocalizedStrings::for_language(language).install_guides;
            println!("Gmail\n  {}\n", guides.gmail);
            println!("Outlook\n  {}\n", guides.outlook);
            println!("Apple Mail\n  {}", guides.apple);
            Ok(())
        }
        Command::Init { lang } => {
            let language = resolve_language(lang.as_deref(), &config)?;
            let mut profile = profile_defaults(language);
            localize_disclaimer(&mut profile, language);
            print!("{}", profile.to_yaml()?);
            Ok(())
        }
    }
}

fn resolve_language(flag: Option<&str>, config: &CliConfig) -> SignatureResult<Language> {
    flag.map(Language::from_code)
        .transpose()
        .map(|lang| lang.unwrap_or(config.language))
}

fn read_file(path: &Path) -> SignatureResult<String> {
    fs::read_to_string(path).map_err(|e| SignatureError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn load_profile(path: &Path) -> SignatureResult<Profile> {
    Profile::from_yaml(&read_file(path)?)
}

fn emit(content: &str, output: Option<&Path>) -> SignatureResult<()> {
    match output {
        Some(path) => {
            fs::write(path, content).map_err(|e| SignatureError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            eprintln!("✓ wrote {}", path.display());
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
