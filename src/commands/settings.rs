use anyhow::Result;

use super::Session;
use crate::persistence;

pub fn show_settings(session: &Session, save: bool) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&session.settings)?);
    println!("storage: {}", session.storage_path.display());

    if save {
        persistence::save_settings(&session.settings_path, &session.settings)?;
        tracing::info!("Settings saved to {}", session.settings_path.display());
    }
    Ok(())
}
