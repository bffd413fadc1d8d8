//! Project layout and thresholds.
//!
//! Every value has a built-in default. A `learniq.toml` at the project root may
//! override any subset of them:
//!
//! ```toml
//! [paths]
//! assets_dir = "assets/images"
//!
//! [images]
//! quality = 80
//! ```

use crate::constants::{JPEG_QUALITY, MAX_HEIGHT, MAX_WIDTH, TARGET_SIZE_KB};
use crate::error::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "learniq.toml";

/// Environment variable pointing at the app repository
pub const ROOT_ENV: &str = "LEARNIQ_ROOT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    paths: RawPaths,
    images: RawImages,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawPaths {
    download_dir: Option<PathBuf>,
    assets_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    source_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawImages {
    max_width: Option<u32>,
    max_height: Option<u32>,
    quality: Option<u8>,
    target_size_kb: Option<u64>,
}

/// Resize/recompress thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSettings {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u8,
    pub target_size_kb: u64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
            quality: JPEG_QUALITY,
            target_size_kb: TARGET_SIZE_KB,
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    /// Folder holding one sub-folder per downloaded topic
    pub download_dir: PathBuf,
    /// `assets/images`, one sub-folder per topic
    pub assets_dir: PathBuf,
    /// `assets/data`, holding `cards.json` and `topics.json`
    pub data_dir: PathBuf,
    /// Flutter `lib/` folder
    pub source_dir: PathBuf,
    pub images: ImageSettings,
}

impl Config {
    /// Default layout for an app repository at `root`
    pub fn defaults(root: &Path) -> Self {
        let download_dir = dirs::home_dir()
            .unwrap_or_else(|| root.to_path_buf())
            .join("Downloads")
            .join("Learniq Topics Cards");

        Self {
            root: root.to_path_buf(),
            download_dir,
            assets_dir: root.join("assets").join("images"),
            data_dir: root.join("assets").join("data"),
            source_dir: root.join("lib"),
            images: ImageSettings::default(),
        }
    }

    /// Load the configuration for `root`, applying `learniq.toml` if present
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::defaults(root));
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(root, &content)
    }

    /// Load the configuration for the project root taken from the environment
    pub fn from_env() -> Result<Self> {
        let root = env::var_os(ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::load(&root)
    }

    fn from_toml(root: &Path, content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut config = Self::defaults(root);

        let resolve = |p: PathBuf| if p.is_absolute() { p } else { root.join(p) };

        if let Some(p) = raw.paths.download_dir {
            config.download_dir = resolve(p);
        }
        if let Some(p) = raw.paths.assets_dir {
            config.assets_dir = resolve(p);
        }
        if let Some(p) = raw.paths.data_dir {
            config.data_dir = resolve(p);
        }
        if let Some(p) = raw.paths.source_dir {
            config.source_dir = resolve(p);
        }

        let images = &mut config.images;
        if let Some(v) = raw.images.max_width {
            images.max_width = v;
        }
        if let Some(v) = raw.images.max_height {
            images.max_height = v;
        }
        if let Some(v) = raw.images.quality {
            images.quality = v.clamp(1, 100);
        }
        if let Some(v) = raw.images.target_size_kb {
            images.target_size_kb = v;
        }

        Ok(config)
    }

    pub fn cards_path(&self) -> PathBuf {
        self.data_dir.join("cards.json")
    }

    pub fn topics_path(&self) -> PathBuf {
        self.data_dir.join("topics.json")
    }

    /// Prefix stored in `Card::image_asset`, e.g. `assets/images/`
    pub fn asset_prefix(&self) -> String {
        match self.assets_dir.strip_prefix(&self.root) {
            Ok(rel) => {
                let rel = rel.to_string_lossy().replace('\\', "/");
                format!("{}/", rel.trim_end_matches('/'))
            }
            Err(_) => "assets/images/".to_string(),
        }
    }
}
