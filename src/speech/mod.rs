pub mod command;
#[cfg(feature = "tts")]
pub mod system;

use serde::{Serialize, Deserialize};

use crate::error::SpeechError;
use crate::state::{SpeechBackend, SpeechSettings};

pub use command::{CommandSpeech, SynthProgram};

/// Voice metadata reported by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub name: String,
    pub lang: String,
}

/// Text-to-speech capability. Utterances queue and play in submission order.
pub trait SpeechAdapter {
    fn is_supported(&self) -> bool;

    /// Enqueue an utterance and return without waiting for playback.
    /// `None` uses the synthesizer's default voice.
    fn speak(&self, text: &str, voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError>;

    /// May be empty when the synthesizer has no voices loaded
    fn list_voices(&self) -> Vec<VoiceDescriptor>;
}

/// Adapter for hosts without speech synthesis
#[derive(Debug, Default)]
pub struct MutedSpeech;

impl SpeechAdapter for MutedSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str, _voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn list_voices(&self) -> Vec<VoiceDescriptor> {
        Vec::new()
    }
}

/// Build the speech adapter selected in settings
pub fn create_speech_adapter(settings: &SpeechSettings) -> Box<dyn SpeechAdapter> {
    match settings.backend {
        SpeechBackend::Command => {
            let program = match settings.program.as_deref() {
                Some(name) => SynthProgram::from_name(name),
                None => SynthProgram::platform_default(),
            };
            Box::new(CommandSpeech::new(program, settings.rate))
        }
        SpeechBackend::System => system_adapter(),
        SpeechBackend::None => Box::new(MutedSpeech),
    }
}

#[cfg(feature = "tts")]
fn system_adapter() -> Box<dyn SpeechAdapter> {
    Box::new(system::SystemSpeech::new())
}

#[cfg(not(feature = "tts"))]
fn system_adapter() -> Box<dyn SpeechAdapter> {
    tracing::warn!("System speech backend requested but built without the `tts` feature");
    Box::new(MutedSpeech)
}

/// Pick `preferred` by name when present, else the first voice.
/// `None` when the list is empty.
pub fn choose_voice<'a>(
    voices: &'a [VoiceDescriptor],
    preferred: Option<&str>,
) -> Option<&'a VoiceDescriptor> {
    if let Some(name) = preferred {
        if let Some(voice) = voices.iter().find(|v| v.name == name) {
            return Some(voice);
        }
        tracing::warn!("Preferred voice '{}' not available", name);
    }
    voices.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, lang: &str) -> VoiceDescriptor {
        VoiceDescriptor { name: name.into(), lang: lang.into() }
    }

    #[test]
    fn test_choose_voice_prefers_named() {
        let voices = vec![voice("Alex", "en_US"), voice("Amelie", "fr_CA")];
        assert_eq!(choose_voice(&voices, Some("Amelie")).unwrap().name, "Amelie");
    }

    #[test]
    fn test_choose_voice_falls_back_to_first() {
        let voices = vec![voice("Alex", "en_US"), voice("Amelie", "fr_CA")];
        assert_eq!(choose_voice(&voices, Some("Missing")).unwrap().name, "Alex");
        assert_eq!(choose_voice(&voices, None).unwrap().name, "Alex");
    }

    #[test]
    fn test_choose_voice_empty_list() {
        assert!(choose_voice(&[], None).is_none());
        assert!(choose_voice(&[], Some("Alex")).is_none());
    }

    #[test]
    fn test_muted_speech_is_unsupported() {
        let speech = MutedSpeech;
        assert!(!speech.is_supported());
        assert!(speech.list_voices().is_empty());
        assert!(matches!(speech.speak("hi", None), Err(SpeechError::Unsupported)));
    }
}
