use std::cell::RefCell;
use std::time::Duration;

use super::{SpeechAdapter, VoiceDescriptor};
use crate::error::SpeechError;

/// Platform speech API (Speech Dispatcher, AVFoundation, WinRT) via `tts`
pub struct SystemSpeech {
    tts: Option<RefCell<tts::Tts>>,
}

impl SystemSpeech {
    pub fn new() -> Self {
        let tts = match tts::Tts::default() {
            Ok(tts) => {
                tracing::debug!("Initialized system speech.");
                Some(RefCell::new(tts))
            }
            Err(err) => {
                tracing::warn!("Failed to load system speech: {}", err);
                None
            }
        };
        Self { tts }
    }
}

impl Default for SystemSpeech {
    fn default() -> Self {
        Self::new()
    }
}

/// Utterances play inside this process; block until the queue is empty.
impl Drop for SystemSpeech {
    fn drop(&mut self) {
        let Some(tts) = self.tts.as_ref() else {
            return;
        };
        let tts = tts.borrow();
        if !tts.supported_features().is_speaking {
            return;
        }
        while let Ok(true) = tts.is_speaking() {
            std::thread::sleep(Duration::from_millis(50));
        }
        tracing::debug!("System speech drained");
    }
}

impl SpeechAdapter for SystemSpeech {
    fn is_supported(&self) -> bool {
        self.tts.is_some()
    }

    fn speak(&self, text: &str, voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError> {
        let tts = self.tts.as_ref().ok_or(SpeechError::Unsupported)?;
        let mut tts = tts.borrow_mut();

        if let Some(wanted) = voice {
            if tts.supported_features().voice {
                let voices = tts.voices().map_err(|e| SpeechError::Backend(e.to_string()))?;
                if let Some(found) = voices.iter().find(|v| v.name() == wanted.name) {
                    tts.set_voice(found)
                        .map_err(|e| SpeechError::Backend(e.to_string()))?;
                }
            }
        }

        let interrupt = false;
        tts.speak(text, interrupt)
            .map_err(|e| SpeechError::Backend(e.to_string()))?;
        Ok(())
    }

    fn list_voices(&self) -> Vec<VoiceDescriptor> {
        let Some(tts) = self.tts.as_ref() else {
            return Vec::new();
        };
        match tts.borrow().voices() {
            Ok(voices) => voices
                .iter()
                .map(|v| VoiceDescriptor {
                    name: v.name(),
                    lang: v.language().to_string(),
                })
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to list voices: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_waits_until_queue_is_empty() {
        let speech = SystemSpeech::new();
        if !speech.is_supported() {
            return;
        }
        speech.speak("drain", None).unwrap();
        let tts = speech.tts.as_ref().unwrap().borrow().clone();
        drop(speech);

        if tts.supported_features().is_speaking {
            assert!(!tts.is_speaking().unwrap_or(false));
        }
    }

    #[test]
    fn test_drop_without_engine_returns() {
        drop(SystemSpeech { tts: None });
    }
}
