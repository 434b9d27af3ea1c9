use crate::error::{GlObjectError, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "gl_objects".to_string(),
            vsync: true,
        }
    }
}

/// Requested core profile version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub major: u32,
    pub minor: u32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { major: 4, minor: 6 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpirvConfig {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub context: ContextConfig,
    pub debug_output: bool,
    pub clear_color: [f32; 4],
    /// Precompiled shaders to use instead of the embedded GLSL.
    pub spirv: Option<SpirvConfig>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            context: Default::default(),
            debug_output: true,
            clear_color: [0.1, 0.1, 0.12, 1.0],
            spirv: None,
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| GlObjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
