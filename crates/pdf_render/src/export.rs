//! Sheet export
//!
//! Renders a ship's character sheet and saves it as a PDF file. The
//! document is assembled fully in memory, so a failed export never
//! leaves a truncated file behind.

use std::path::Path;
use std::process::Command;

use ship_model::Ship;

use crate::document::DocumentInfo;
use crate::error::{PdfError, Result};
use crate::page::PageSurface;
use crate::writer::document_to_bytes;

/// Render `ship`'s sheet and write it to `path`. With `open_after`
/// set, the saved file is handed to the platform's default viewer.
pub fn save_sheet(ship: &Ship, path: &Path, open_after: bool) -> Result<()> {
    let mut surface = PageSurface::a4();
    sheet_layout::render_sheet(&mut surface, ship)?;

    let mut info = DocumentInfo::new();
    info.title = Some(match ship.identifier.as_deref() {
        Some(id) if !id.is_empty() => format!("{}: {}", id, ship.name),
        _ => ship.name.clone(),
    });
    info.creation_date = Some(format!(
        "D:{}",
        chrono::Local::now().format("%Y%m%d%H%M%S")
    ));

    let bytes = document_to_bytes(&surface, &info)?;
    std::fs::write(path, bytes).map_err(|source| PdfError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Saved ship sheet");

    if open_after {
        open_in_viewer(path);
    }
    Ok(())
}

/// Hand the file to the platform's default viewer. Failure to launch
/// one is logged and otherwise ignored.
fn open_in_viewer(path: &Path) {
    let result = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()
    } else {
        Command::new("xdg-open").arg(path).spawn()
    };

    if let Err(error) = result {
        tracing::warn!(%error, "Could not open the sheet in a viewer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ship_model::{Ship, ShipClass, ShipStat};

    fn test_ship() -> Ship {
        let mut ship = Ship::new("Emblem".to_string(), ShipClass::Frigate);
        ship.identifier = Some("ORN-101".to_string());
        ship.stats.insert(ShipStat::Hp, 6);
        ship
    }

    #[test]
    fn test_saved_sheet_is_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emblem.pdf");

        save_sheet(&test_ship(), &path, false).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_metadata_carries_the_ship_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emblem.pdf");

        save_sheet(&test_ship(), &path, false).unwrap();

        let text = String::from_utf8_lossy(&std::fs::read(&path).unwrap()).into_owned();
        assert!(text.contains("(ORN-101: Emblem)"));
    }

    #[test]
    fn test_save_failure_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("emblem.pdf");

        let error = save_sheet(&test_ship(), &path, false).unwrap_err();
        assert!(matches!(error, PdfError::Save { .. }));
        assert!(error.to_string().contains("emblem.pdf"));
    }
}
