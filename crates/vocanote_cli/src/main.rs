//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `vocanote_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use std::path::PathBuf;
use vocanote_core::{FileSlot, LogNotifier, NoteBoard};

fn data_dir() -> PathBuf {
    std::env::var_os("VOCANOTE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("vocanote"))
}

fn main() {
    let dir = data_dir();
    let log_dir = dir.join("logs");
    if let Err(err) = vocanote_core::init_logging(
        vocanote_core::default_log_level(),
        &log_dir.display().to_string(),
    ) {
        eprintln!("vocanote_cli: logging disabled: {err}");
    }

    let slot = FileSlot::new(dir.join("notes.json"));
    match NoteBoard::open(slot, LogNotifier) {
        Ok(board) => {
            println!("vocanote_core version={}", vocanote_core::core_version());
            println!("vocanote_core notes={}", board.notes().len());
        }
        Err(err) => {
            eprintln!("vocanote_cli: failed to open note board: {err}");
            std::process::exit(1);
        }
    }
}
