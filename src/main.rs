//! rtdocs - highlight code and derive accent palettes from the command line

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use rtdocs::config::{FileStore, MemoryStore, PreferenceStore, Preferences};
use rtdocs::error::Result;
use rtdocs::palette::{named_color, swatch_for, NAMED_COLORS};
use rtdocs::syntax::{language_from_path, Highlighter, DEFAULT_LANGUAGE};

#[derive(Parser, Debug)]
#[command(name = "rtdocs", version, about = "Documentation page helpers")]
struct Cli {
    /// Preference file (defaults to ~/.rtdocs.toml)
    #[arg(long, global = true, value_name = "PATH")]
    prefs_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Highlight a source file ("-" reads stdin)
    Highlight {
        file: PathBuf,
        /// Language tag (detected from the file extension if omitted)
        #[arg(short, long)]
        lang: Option<String>,
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Escape only, without token markup
        #[arg(long)]
        plain: bool,
    },
    /// List the language tags with a dedicated grammar
    Languages,
    /// Print the accent palette as CSS custom properties
    Palette {
        /// Accent as #rrggbb or a swatch name (stored accent if omitted)
        accent: Option<String>,
        /// light, dark or system (stored theme if omitted)
        #[arg(short, long)]
        theme: Option<String>,
        /// Resolve the system theme as dark
        #[arg(long)]
        prefers_dark: bool,
    },
    /// List the named accent swatches, marking the stored accent
    Colors,
    /// Show or change stored preferences
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

#[derive(Subcommand, Debug)]
enum PrefsAction {
    /// Print the stored theme and accent
    Show,
    /// Select a theme: light, dark or system
    Theme { id: String },
    /// Select an accent color (#rrggbb or a swatch name)
    Accent { color: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Ansi,
}

fn main() {
    rtdocs::logging::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut store = match cli.prefs_file.or_else(FileStore::default_path) {
        Some(path) => Some(FileStore::open(path)),
        None => None,
    };

    match cli.command {
        Command::Highlight {
            file,
            lang,
            format,
            plain,
        } => highlight_file(&file, lang, format, plain),
        Command::Languages => {
            for tag in Highlighter::new().list_languages() {
                println!("{}", tag);
            }
            Ok(())
        }
        Command::Palette {
            accent,
            theme,
            prefers_dark,
        } => {
            let mut prefs = load_prefs(store.as_ref());
            if let Some(a) = accent {
                prefs.accent = resolve_accent(&a);
            }
            if let Some(t) = theme {
                prefs.theme = t.parse()?;
            }
            print!("{}", prefs.palette(prefers_dark)?.to_css());
            Ok(())
        }
        Command::Colors => {
            let prefs = load_prefs(store.as_ref());
            let active = swatch_for(&prefs.accent).map(|s| s.name);
            for swatch in NAMED_COLORS {
                let mark = if active == Some(swatch.name) { '*' } else { ' ' };
                println!("{} {:<14} {}", mark, swatch.name, swatch.hex);
            }
            Ok(())
        }
        Command::Prefs { action } => {
            let mut session = MemoryStore::new();
            let target: &mut dyn PreferenceStore = match store.as_mut() {
                Some(file) => file,
                None => &mut session,
            };
            let mut prefs = Preferences::load(&[&*target]);

            match action.unwrap_or(PrefsAction::Show) {
                PrefsAction::Show => {}
                PrefsAction::Theme { id } => prefs.select_theme(target, id.parse()?)?,
                PrefsAction::Accent { color } => {
                    prefs.select_accent(target, &resolve_accent(&color))?
                }
            }

            if let Some(file) = store.as_ref() {
                println!("file   = {}", file.path().display());
            }
            println!("theme  = {}", prefs.theme);
            println!("accent = {}", prefs.accent);
            Ok(())
        }
    }
}

fn load_prefs(store: Option<&FileStore>) -> Preferences {
    match store {
        Some(file) => Preferences::load(&[file]),
        None => Preferences::default(),
    }
}

/// Accept a swatch name wherever a hex color is expected
fn resolve_accent(value: &str) -> String {
    match named_color(value) {
        Some(swatch) => swatch.hex.to_string(),
        None => value.to_string(),
    }
}

fn highlight_file(file: &Path, lang: Option<String>, format: Format, plain: bool) -> Result<()> {
    let source = if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(file)?
    };

    let lang = lang.unwrap_or_else(|| {
        language_from_path(file)
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string()
    });

    let mut highlighter = Highlighter::new();
    highlighter.enabled = !plain;
    let out = match format {
        Format::Html => highlighter.highlight(&source, &lang),
        Format::Ansi => highlighter.highlight_ansi(&source, &lang)?,
    };
    print!("{}", out);
    Ok(())
}
