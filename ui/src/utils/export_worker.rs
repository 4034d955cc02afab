//! Background export of the composition to a PNG file.
//!
//! The export runs as one unit of work off the UI thread on native (inline
//! on wasm, which has no threads) and reports its outcome over a `flume`
//! channel that the app polls each frame. Callers must not assume
//! synchronous completion; an in-flight export cannot be cancelled, its
//! outcome is simply awaited.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use glimmer_business::{Composition, render_composition};

/// Outcome of one export attempt, delivered over the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { path: PathBuf },
    Failed { reason: String },
}

pub type ExportResultSender = flume::Sender<ExportOutcome>;
pub type ExportResultReceiver = flume::Receiver<ExportOutcome>;

/// Create the channel the export worker reports through.
pub fn create_export_channel() -> (ExportResultSender, ExportResultReceiver) {
    flume::unbounded()
}

/// Render `composition` to PNG bytes and write them to `path`, reporting
/// the outcome through `sender`.
///
/// The composition is captured by value so the UI stays free to mutate its
/// own copy while the export runs.
pub fn spawn_export(composition: Composition, path: PathBuf, sender: ExportResultSender) {
    #[cfg(not(target_arch = "wasm32"))]
    std::thread::spawn(move || {
        let outcome = run_export(&composition, &path);
        // The receiver may be gone if the app is shutting down.
        let _ = sender.send(outcome);
    });

    #[cfg(target_arch = "wasm32")]
    {
        let outcome = run_export(&composition, &path);
        let _ = sender.send(outcome);
    }
}

fn run_export(composition: &Composition, path: &Path) -> ExportOutcome {
    match try_export(composition, path) {
        Ok(()) => ExportOutcome::Saved {
            path: path.to_owned(),
        },
        Err(err) => ExportOutcome::Failed {
            reason: format!("{err:#}"),
        },
    }
}

fn try_export(composition: &Composition, path: &Path) -> anyhow::Result<()> {
    let bytes = render_composition(composition)?;
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_export_writes_png_and_reports_saved() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("qr-code.png");

        let (tx, rx) = create_export_channel();
        spawn_export(Composition::default(), path.clone(), tx);

        let outcome = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("export worker should report an outcome");
        assert_eq!(outcome, ExportOutcome::Saved { path: path.clone() });

        let bytes = std::fs::read(&path).expect("exported file should exist");
        let img = image::load_from_memory(&bytes).expect("exported file should be a PNG");
        assert!(img.width() > 0);
    }

    #[test]
    fn test_export_failure_reports_reason_and_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("qr-code.png");

        let mut composition = Composition::default();
        composition.url = "a".repeat(5000);

        let (tx, rx) = create_export_channel();
        spawn_export(composition, path.clone(), tx);

        let outcome = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("export worker should report an outcome");
        match outcome {
            ExportOutcome::Failed { reason } => assert!(!reason.is_empty()),
            ExportOutcome::Saved { .. } => panic!("oversized payload must not export"),
        }
        assert!(!path.exists(), "no partial file may be written on failure");
    }

    #[test]
    fn test_export_failure_on_unwritable_path() {
        let (tx, rx) = create_export_channel();
        spawn_export(
            Composition::default(),
            PathBuf::from("/nonexistent-dir/qr-code.png"),
            tx,
        );

        let outcome = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("export worker should report an outcome");
        match outcome {
            ExportOutcome::Failed { reason } => {
                assert!(reason.contains("writing"), "reason should name the write step: {reason}");
            }
            ExportOutcome::Saved { .. } => panic!("write to a missing directory must fail"),
        }
    }
}
