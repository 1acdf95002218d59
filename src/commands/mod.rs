pub mod history;
pub mod narrate;
pub mod settings;
pub mod voices;

use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::narrator::NarratorController;
use crate::page::PoemCollector;
use crate::persistence;
use crate::speech::create_speech_adapter;
use crate::state::Settings;
use crate::storage::{FileStorage, StorageAdapter};

#[derive(Debug, Parser)]
#[command(name = "poem-narrator", version, about = "Read generated poems aloud and keep a history of them")]
pub struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Local storage file (overrides settings)
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Speak every poem line on a generated page and store the poem
    Narrate {
        /// Generated poem page (HTML)
        page: PathBuf,
    },
    /// Speak the greeting
    Greet,
    /// List stored poems
    History {
        /// Write the rendered HTML list to a file instead of printing
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Remove one stored poem
    Forget { title: String },
    /// Remove every stored poem
    ClearHistory,
    /// List voices offered by the synthesizer
    Voices,
    /// Print the effective settings
    Settings {
        /// Write them to the settings file
        #[arg(long)]
        save: bool,
    },
}

/// Settings and paths resolved for one invocation
pub struct Session {
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub storage_path: PathBuf,
}

impl Session {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let settings_path = match &cli.config {
            Some(path) => path.clone(),
            None => persistence::settings_path()?,
        };
        let settings = persistence::load_settings(&settings_path);
        let storage_path = match (&cli.storage, &settings.storage.path) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => path.clone(),
            (None, None) => persistence::storage_path()?,
        };
        Ok(Self {
            settings,
            settings_path,
            storage_path,
        })
    }

    pub fn open_storage(&self) -> Box<dyn StorageAdapter> {
        Box::new(FileStorage::open(&self.storage_path, self.settings.storage.quota_chars))
    }

    pub fn narrator(&self) -> Result<NarratorController> {
        let speech = create_speech_adapter(&self.settings.speech);
        let controller = NarratorController::new(
            speech,
            self.open_storage(),
            PoemCollector::new()?,
            self.settings.narration.clone(),
        )
        .with_preferred_voice(self.settings.speech.voice.clone());
        Ok(controller)
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    let session = Session::resolve(&cli)?;
    match cli.command {
        Command::Narrate { page } => narrate::narrate_poem(&session, &page),
        Command::Greet => narrate::narrate_greeting(&session),
        Command::History { out } => history::show_history(&session, out.as_deref()),
        Command::Forget { title } => history::forget(&session, &title),
        Command::ClearHistory => history::clear_history(&session),
        Command::Voices => voices::list_voices(&session),
        Command::Settings { save } => settings::show_settings(&session, save),
    }
}
