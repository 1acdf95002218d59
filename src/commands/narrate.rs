use std::path::Path;
use anyhow::Result;

use super::Session;
use crate::narrator::NarrationOutcome;
use crate::page::PoemPage;

pub fn narrate_poem(session: &Session, page_path: &Path) -> Result<()> {
    let page = PoemPage::load(page_path)?;
    let mut narrator = session.narrator()?;
    report(narrator.narrate_poem(&page));
    Ok(())
}

pub fn narrate_greeting(session: &Session) -> Result<()> {
    let mut narrator = session.narrator()?;
    report(narrator.narrate_greeting());
    Ok(())
}

fn report(outcome: NarrationOutcome) {
    match outcome {
        NarrationOutcome::Unsupported => {
            println!("Speech synthesis is not supported.");
        }
        NarrationOutcome::Completed { utterances, title: Some(title), stored } => {
            let note = if stored { "stored" } else { "not stored" };
            println!("Spoke {} line(s) of '{}' ({})", utterances, title, note);
        }
        NarrationOutcome::Completed { utterances, title: None, .. } => {
            println!("Spoke {} utterance(s)", utterances);
        }
    }
}
