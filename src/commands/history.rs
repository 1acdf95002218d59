use std::path::Path;
use anyhow::Result;

use super::Session;
use crate::page::{HistoryContainer, HistoryView};

pub fn show_history(session: &Session, out: Option<&Path>) -> Result<()> {
    let storage = session.open_storage();
    let mut container = HistoryContainer::new();
    HistoryView::render(storage.as_ref(), &mut container);

    match out {
        Some(path) => {
            std::fs::write(path, container.to_html())?;
            tracing::info!("History written to {}", path.display());
        }
        None => {
            for item in container.items() {
                println!("{}", item);
            }
        }
    }
    Ok(())
}

pub fn forget(session: &Session, title: &str) -> Result<()> {
    let mut storage = session.open_storage();
    if storage.get(title).is_none() {
        tracing::warn!("No stored poem titled '{}'", title);
        return Ok(());
    }
    storage.remove(title)?;
    tracing::info!("Removed '{}'", title);
    Ok(())
}

pub fn clear_history(session: &Session) -> Result<()> {
    let mut storage = session.open_storage();
    storage.clear()?;
    tracing::info!("Local storage cleared");
    Ok(())
}
