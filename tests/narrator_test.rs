//! Tests for poem and greeting narration

mod common;

use common::{narrator, poem_page_html, voice, RecordingSpeech};
use poem_narrator_lib::page::PoemPage;
use poem_narrator_lib::state::NarratorStatus;
use poem_narrator_lib::storage::MemoryStorage;
use poem_narrator_lib::NarrationOutcome;

#[test]
fn test_narrate_poem_stores_lines_without_separator() {
    let (speech, spoken) = RecordingSpeech::new(vec![voice("Alex", "en_US")]);
    let mut narrator = narrator(speech, MemoryStorage::new());
    let page = PoemPage::parse(&poem_page_html(Some("Ocean"), &["Waves crash", "Gulls cry"]));

    let outcome = narrator.narrate_poem(&page);

    assert_eq!(
        outcome,
        NarrationOutcome::Completed {
            utterances: 2,
            title: Some("Ocean".to_string()),
            stored: true,
        }
    );
    assert_eq!(narrator.storage().get("Ocean").as_deref(), Some("Waves crashGulls cry"));

    let spoken = spoken.lock().unwrap();
    let texts: Vec<&str> = spoken.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts, vec!["Waves crash", "Gulls cry"]);
    // Poem lines use the default voice
    assert!(spoken.iter().all(|(_, v)| v.is_none()));
    assert_eq!(narrator.status(), NarratorStatus::Idle);
}

#[test]
fn test_narrate_poem_does_not_speak_greeting() {
    let (speech, spoken) = RecordingSpeech::new(vec![voice("Alex", "en_US")]);
    let mut narrator = narrator(speech, MemoryStorage::new());
    let page = PoemPage::parse(&poem_page_html(Some("Ocean"), &["Waves crash"]));

    narrator.narrate_poem(&page);

    let spoken = spoken.lock().unwrap();
    assert!(spoken.iter().all(|(t, _)| t != "Hello, world!"));
}

#[test]
fn test_narrate_poem_with_no_lines_stores_empty_string() {
    let (speech, spoken) = RecordingSpeech::new(Vec::new());
    let mut narrator = narrator(speech, MemoryStorage::new());
    let page = PoemPage::parse(&poem_page_html(Some("Silence"), &[]));

    let outcome = narrator.narrate_poem(&page);

    assert_eq!(
        outcome,
        NarrationOutcome::Completed {
            utterances: 0,
            title: Some("Silence".to_string()),
            stored: true,
        }
    );
    assert_eq!(narrator.storage().get("Silence").as_deref(), Some(""));
    assert!(spoken.lock().unwrap().is_empty());
}

#[test]
fn test_narrate_poem_unsupported_speech_skips_storage() {
    let (speech, spoken) = RecordingSpeech::unsupported();
    let mut narrator = narrator(speech, MemoryStorage::new());
    let page = PoemPage::parse(&poem_page_html(Some("Ocean"), &["Waves crash"]));

    let outcome = narrator.narrate_poem(&page);

    assert_eq!(outcome, NarrationOutcome::Unsupported);
    assert!(narrator.storage().list_keys().is_empty());
    assert!(spoken.lock().unwrap().is_empty());
    assert_eq!(narrator.status(), NarratorStatus::Idle);
}

#[test]
fn test_narrate_poem_missing_title_uses_default() {
    let (speech, _spoken) = RecordingSpeech::new(Vec::new());
    let mut narrator = narrator(speech, MemoryStorage::new());
    let page = PoemPage::parse(&poem_page_html(None, &["A lone line"]));

    let outcome = narrator.narrate_poem(&page);

    assert!(matches!(
        outcome,
        NarrationOutcome::Completed { title: Some(ref t), stored: true, .. } if t == "Untitled"
    ));
    assert_eq!(narrator.storage().get("Untitled").as_deref(), Some("A lone line"));
}

#[test]
fn test_narrate_poem_storage_failure_is_not_fatal() {
    let (speech, spoken) = RecordingSpeech::new(Vec::new());
    let mut narrator = narrator(speech, MemoryStorage::with_quota(8));
    let page = PoemPage::parse(&poem_page_html(Some("Ocean"), &["Waves crash", "Gulls cry"]));

    let outcome = narrator.narrate_poem(&page);

    assert_eq!(
        outcome,
        NarrationOutcome::Completed {
            utterances: 2,
            title: Some("Ocean".to_string()),
            stored: false,
        }
    );
    assert!(narrator.storage().get("Ocean").is_none());
    assert_eq!(spoken.lock().unwrap().len(), 2);
}

#[test]
fn test_narrate_poem_twice_overwrites_entry() {
    let (speech, _spoken) = RecordingSpeech::new(Vec::new());
    let mut narrator = narrator(speech, MemoryStorage::new());

    narrator.narrate_poem(&PoemPage::parse(&poem_page_html(Some("Ocean"), &["first"])));
    narrator.narrate_poem(&PoemPage::parse(&poem_page_html(Some("Ocean"), &["second"])));

    assert_eq!(narrator.storage().list_keys(), vec!["Ocean".to_string()]);
    assert_eq!(narrator.storage().get("Ocean").as_deref(), Some("second"));
}

#[test]
fn test_narrate_poem_uses_preferred_voice_when_available() {
    let (speech, spoken) = RecordingSpeech::new(vec![voice("Alex", "en_US"), voice("Amelie", "fr_CA")]);
    let mut narrator = narrator(speech, MemoryStorage::new())
        .with_preferred_voice(Some("Amelie".to_string()));
    let page = PoemPage::parse(&poem_page_html(Some("Mer"), &["Vagues"]));

    narrator.narrate_poem(&page);

    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken[0].1, Some(voice("Amelie", "fr_CA")));
}

#[test]
fn test_narrate_greeting_uses_first_voice() {
    let (speech, spoken) = RecordingSpeech::new(vec![voice("Alex", "en_US"), voice("Amelie", "fr_CA")]);
    let mut narrator = narrator(speech, MemoryStorage::new());

    let outcome = narrator.narrate_greeting();

    assert_eq!(
        outcome,
        NarrationOutcome::Completed {
            utterances: 1,
            title: None,
            stored: false,
        }
    );
    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0], ("Hello, world!".to_string(), Some(voice("Alex", "en_US"))));
    assert!(narrator.storage().list_keys().is_empty());
    assert_eq!(narrator.status(), NarratorStatus::Idle);
}

#[test]
fn test_narrate_greeting_with_no_voices_skips_voice_assignment() {
    let (speech, spoken) = RecordingSpeech::new(Vec::new());
    let mut narrator = narrator(speech, MemoryStorage::new());

    narrator.narrate_greeting();

    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0], ("Hello, world!".to_string(), None));
}

#[test]
fn test_narrate_greeting_unsupported() {
    let (speech, spoken) = RecordingSpeech::unsupported();
    let mut narrator = narrator(speech, MemoryStorage::new());

    assert_eq!(narrator.narrate_greeting(), NarrationOutcome::Unsupported);
    assert!(spoken.lock().unwrap().is_empty());
}
