use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Browsers give each origin roughly 5M UTF-16 code units of local storage
pub const DEFAULT_QUOTA_CHARS: usize = 5 * 1024 * 1024;

pub const DEFAULT_GREETING: &str = "Hello, world!";
pub const DEFAULT_TITLE: &str = "Untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarratorStatus {
    Idle,
    Narrating,
}

impl Default for NarratorStatus {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub speech: SpeechSettings,
    #[serde(default)]
    pub narration: NarrationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the default `local_storage.json` location
    pub path: Option<PathBuf>,
    pub quota_chars: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: None,
            quota_chars: DEFAULT_QUOTA_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechBackend {
    /// External synthesizer program (espeak-ng, say)
    Command,
    /// Platform speech API through the `tts` crate
    System,
    None,
}

impl Default for SpeechBackend {
    fn default() -> Self {
        Self::Command
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechSettings {
    #[serde(default)]
    pub backend: SpeechBackend,
    /// Synthesizer program; platform default when unset
    #[serde(default)]
    pub program: Option<String>,
    /// Words per minute
    #[serde(default)]
    pub rate: Option<u32>,
    /// Preferred voice name; falls back to the first available voice
    #[serde(default)]
    pub voice: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationSettings {
    pub greeting: String,
    pub default_title: String,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}
