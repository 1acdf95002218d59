use anyhow::Result;

use super::Session;
use crate::speech::create_speech_adapter;

pub fn list_voices(session: &Session) -> Result<()> {
    let speech = create_speech_adapter(&session.settings.speech);
    if !speech.is_supported() {
        println!("Speech synthesis is not supported.");
        return Ok(());
    }

    let voices = speech.list_voices();
    if voices.is_empty() {
        println!("No voices available yet.");
    }
    for voice in voices {
        println!("{}\t{}", voice.name, voice.lang);
    }
    Ok(())
}
