use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "parla")]
#[command(about = "Translate text through DeepL and optionally read it aloud")]
pub struct Cli {
    /// JSON config file, environment variables are used when omitted
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate one or more texts
    Translate {
        /// Target language code (EN, ES, FR, DE, IT, PT, RU, JA, ZH)
        #[arg(long, short = 't')]
        to: String,

        /// Source language code, detected when omitted
        #[arg(long, short = 'f')]
        from: Option<String>,

        /// Read the translation aloud
        #[arg(long, short = 's')]
        speak: bool,

        /// Refuse texts longer than the configured maximum
        #[arg(long)]
        strict_length: bool,

        /// Texts to translate, several texts are translated concurrently
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// List target languages
    Languages {
        /// Ask the provider instead of printing the built-in list
        #[arg(long)]
        live: bool,
    },

    /// Guess the language of a text locally
    Detect {
        text: String,
    },
}
