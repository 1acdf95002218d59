#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use poem_narrator_lib::error::SpeechError;
use poem_narrator_lib::page::PoemCollector;
use poem_narrator_lib::speech::{SpeechAdapter, VoiceDescriptor};
use poem_narrator_lib::state::NarrationSettings;
use poem_narrator_lib::storage::MemoryStorage;
use poem_narrator_lib::NarratorController;

pub type Spoken = Arc<Mutex<Vec<(String, Option<VoiceDescriptor>)>>>;

/// Records every utterance instead of playing it
pub struct RecordingSpeech {
    pub supported: bool,
    pub voices: Vec<VoiceDescriptor>,
    pub spoken: Spoken,
}

impl RecordingSpeech {
    pub fn new(voices: Vec<VoiceDescriptor>) -> (Self, Spoken) {
        let spoken = Spoken::default();
        let speech = Self {
            supported: true,
            voices,
            spoken: spoken.clone(),
        };
        (speech, spoken)
    }

    pub fn unsupported() -> (Self, Spoken) {
        let (mut speech, spoken) = Self::new(Vec::new());
        speech.supported = false;
        (speech, spoken)
    }
}

impl SpeechAdapter for RecordingSpeech {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn speak(&self, text: &str, voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError> {
        if !self.supported {
            return Err(SpeechError::Unsupported);
        }
        self.spoken.lock().unwrap().push((text.to_string(), voice.cloned()));
        Ok(())
    }

    fn list_voices(&self) -> Vec<VoiceDescriptor> {
        self.voices.clone()
    }
}

pub fn voice(name: &str, lang: &str) -> VoiceDescriptor {
    VoiceDescriptor {
        name: name.to_string(),
        lang: lang.to_string(),
    }
}

pub fn poem_page_html(title: Option<&str>, lines: &[&str]) -> String {
    let mut html = String::from("<html><body>");
    if let Some(title) = title {
        html.push_str(&format!("<h2 id=\"poem-title\">{}</h2>", title));
    }
    for line in lines {
        html.push_str(&format!("<p class=\"generated-poem\">{}</p>", line));
    }
    html.push_str("<div id=\"localStorageData\"></div></body></html>");
    html
}

pub fn narrator(speech: RecordingSpeech, storage: MemoryStorage) -> NarratorController {
    NarratorController::new(
        Box::new(speech),
        Box::new(storage),
        PoemCollector::new().unwrap(),
        NarrationSettings::default(),
    )
}
