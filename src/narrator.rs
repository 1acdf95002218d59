use crate::page::{PoemCollector, PoemPage};
use crate::speech::{choose_voice, SpeechAdapter, VoiceDescriptor};
use crate::state::{NarrationSettings, NarratorStatus};
use crate::storage::StorageAdapter;

/// Result of one narration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationOutcome {
    /// Speech synthesis unavailable; nothing was spoken or stored
    Unsupported,
    Completed {
        /// Utterances accepted by the speech queue
        utterances: usize,
        /// Key the poem was stored under; `None` for the greeting
        title: Option<String>,
        stored: bool,
    },
}

/// Speaks poems and greetings, and records spoken poems in local storage
pub struct NarratorController {
    speech: Box<dyn SpeechAdapter>,
    storage: Box<dyn StorageAdapter>,
    collector: PoemCollector,
    settings: NarrationSettings,
    preferred_voice: Option<String>,
    status: NarratorStatus,
}

impl NarratorController {
    pub fn new(
        speech: Box<dyn SpeechAdapter>,
        storage: Box<dyn StorageAdapter>,
        collector: PoemCollector,
        settings: NarrationSettings,
    ) -> Self {
        Self {
            speech,
            storage,
            collector,
            settings,
            preferred_voice: None,
            status: NarratorStatus::Idle,
        }
    }

    pub fn with_preferred_voice(mut self, voice: Option<String>) -> Self {
        self.preferred_voice = voice;
        self
    }

    /// Narration runs to completion inside one call, so callers always
    /// observe `Idle`; transitions are traced at debug level.
    pub fn status(&self) -> NarratorStatus {
        self.status
    }

    fn set_status(&mut self, status: NarratorStatus) {
        tracing::debug!(from = ?self.status, to = ?status, "Narrator status");
        self.status = status;
    }

    pub fn speech(&self) -> &dyn SpeechAdapter {
        self.speech.as_ref()
    }

    pub fn storage(&self) -> &dyn StorageAdapter {
        self.storage.as_ref()
    }

    pub fn storage_mut(&mut self) -> &mut dyn StorageAdapter {
        self.storage.as_mut()
    }

    /// Speak every poem line on `page`, then store the poem under its title.
    pub fn narrate_poem(&mut self, page: &PoemPage) -> NarrationOutcome {
        if !self.speech.is_supported() {
            tracing::warn!("Speech synthesis is not supported.");
            return NarrationOutcome::Unsupported;
        }

        self.set_status(NarratorStatus::Narrating);

        let poem = self.collector.collect_poem(page);
        let voice = self.preferred_voice();
        let mut utterances = 0;
        for line in poem.lines() {
            match self.speech.speak(line.text(), voice.as_ref()) {
                Ok(()) => utterances += 1,
                Err(e) => tracing::warn!("Failed to queue poem line: {}", e),
            }
        }

        let title = self.collector.title(page).unwrap_or_else(|| {
            tracing::warn!(
                "Poem title element not found, storing as '{}'",
                self.settings.default_title
            );
            self.settings.default_title.clone()
        });

        tracing::info!("Storing poem '{}' ({} lines)", title, poem.lines().len());
        let stored = match self.storage.put(&title, &poem.text()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to store poem '{}': {}", title, e);
                false
            }
        };

        self.set_status(NarratorStatus::Idle);
        NarrationOutcome::Completed {
            utterances,
            title: Some(title),
            stored,
        }
    }

    /// Speak the configured greeting. Storage is not touched.
    pub fn narrate_greeting(&mut self) -> NarrationOutcome {
        if !self.speech.is_supported() {
            tracing::warn!("Speech synthesis is not supported.");
            return NarrationOutcome::Unsupported;
        }

        self.set_status(NarratorStatus::Narrating);

        let voices = self.speech.list_voices();
        let voice = choose_voice(&voices, self.preferred_voice.as_deref());
        match voice {
            Some(v) => tracing::info!(name = %v.name, lang = %v.lang, "Greeting voice"),
            None => tracing::info!("No voices available, using the synthesizer default"),
        }

        let utterances = match self.speech.speak(&self.settings.greeting, voice) {
            Ok(()) => 1,
            Err(e) => {
                tracing::warn!("Failed to queue greeting: {}", e);
                0
            }
        };

        self.set_status(NarratorStatus::Idle);
        NarrationOutcome::Completed {
            utterances,
            title: None,
            stored: false,
        }
    }

    /// Configured voice when the synthesizer offers it; poem lines otherwise
    /// use the default voice
    fn preferred_voice(&self) -> Option<VoiceDescriptor> {
        let name = self.preferred_voice.as_deref()?;
        let found = self.speech.list_voices().into_iter().find(|v| v.name == name);
        if found.is_none() {
            tracing::warn!("Preferred voice '{}' not available", name);
        }
        found
    }
}
