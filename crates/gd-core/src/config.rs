use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::params::MAX_WIDTH;
use crate::ramp::DEFAULT_RAMP;

/// Facteur de correction d'aspect : les cellules monospace sont plus
/// hautes que larges, la hauteur de sortie est réduite d'autant.
pub const DEFAULT_HEIGHT_SCALE: f32 = 0.45;

/// Default upload cap: 20 MiB, matching the historical service limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Default cap on output rows. Together with the width cap this bounds
/// the grid, so a tiny upload encoding an extreme aspect ratio cannot
/// demand an arbitrarily large resample buffer.
pub const DEFAULT_MAX_ROWS: u32 = 1024;

/// Configuration du serveur, chargée une fois au démarrage.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use gd_core::config::ServerConfig;
/// let config = ServerConfig::default();
/// assert_eq!(config.bind_addr, "127.0.0.1:3000");
/// assert_eq!(config.max_width, 512);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    // === Serveur ===
    /// Adresse d'écoute, "host:port".
    pub bind_addr: String,
    /// Maximum accepted upload size in bytes, enforced before decode.
    pub max_upload_bytes: usize,

    // === Rendu ===
    /// Glyph ramp, lightest→densest. Length 2..=256.
    pub ramp: String,
    /// Aspect correction applied to the output row count.
    pub height_scale: f32,
    /// Upper bound on the `width` parameter.
    pub max_width: u32,
    /// Upper bound on output rows; oversized results are rejected
    /// before any allocation.
    pub max_rows: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            ramp: DEFAULT_RAMP.to_string(),
            height_scale: DEFAULT_HEIGHT_SCALE,
            max_width: MAX_WIDTH,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl ServerConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.height_scale = self.height_scale.clamp(0.1, 2.0);
        self.max_width = self.max_width.clamp(1, 1024);
        self.max_rows = self.max_rows.clamp(1, 8192);
        self.max_upload_bytes = self.max_upload_bytes.max(1024);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs
/// optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    server: Option<ServerSection>,
    render: Option<RenderSection>,
}

/// Server section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct ServerSection {
    bind_addr: Option<String>,
    max_upload_bytes: Option<usize>,
}

/// Render section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct RenderSection {
    ramp: Option<String>,
    height_scale: Option<f32>,
    max_width: Option<u32>,
    max_rows: Option<u32>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gd_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    Ok(merge(file))
}

/// Apply an all-optional config file over the defaults, then clamp.
fn merge(file: ConfigFile) -> ServerConfig {
    let mut config = ServerConfig::default();

    if let Some(s) = file.server {
        if let Some(v) = s.bind_addr {
            config.bind_addr = v;
        }
        if let Some(v) = s.max_upload_bytes {
            config.max_upload_bytes = v;
        }
    }

    if let Some(r) = file.render {
        if let Some(v) = r.ramp {
            config.ramp = v;
        }
        if let Some(v) = r.height_scale {
            config.height_scale = v;
        }
        if let Some(v) = r.max_width {
            config.max_width = v;
        }
        if let Some(v) = r.max_rows {
            config.max_rows = v;
        }
    }

    config.clamp_all();
    config
}
