use std::path::PathBuf;

use clap::Parser;

/// glyphd — ASCII art rendering service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Adresse d'écoute "host:port", écrase le fichier de config.
    #[arg(long)]
    pub bind: Option<String>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
