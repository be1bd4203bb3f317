//! File-backed configuration, RON or JSON by extension.

use crate::api::*;
use crate::pipeline::FrameRequest;
use crate::sampling::SourceKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub frame: FrameRequest,
    pub source: SourceKind,
    /// Omitted seeds are drawn at random when the source is built.
    pub seed: Option<u32>,
}

impl FieldConfig {
    pub fn from_ron_str(s: &str) -> Result<Self> { Self::checked(ron::from_str(s)?) }
    pub fn from_json_str(s: &str) -> Result<Self> { Self::checked(serde_json::from_str(s)?) }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Self::from_ron_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            other => return Err(FieldError::Format(other.unwrap_or("<none>").to_string())),
        };
        info!("Loaded field config from {}", path.display());
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| FieldError::Format(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.frame.size.validate()?;
        self.frame.params.validate()
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let seed = rand::random();
            info!("No seed configured, using {seed}");
            seed
        })
    }

    pub fn build_source(&self) -> Box<dyn NoiseSource> { self.source.build(self.resolve_seed()) }

    fn checked(config: Self) -> Result<Self> {
        config.validate()?;
        Ok(config)
    }
}
