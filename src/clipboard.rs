use anyhow::{Context, Result};

/// A sink for clipboard text.
///
/// Writes may block (X11 and Wayland backends round-trip to the display
/// server), so callers on an async runtime run them on the blocking pool.
pub trait Clipboard: Send + Sync + 'static {
    fn set_text(&self, text: &str) -> Result<()>;

    /// Whether writes should be moved off the async executor.
    fn needs_blocking_pool(&self) -> bool {
        true
    }
}

/// The system clipboard, backed by `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copy text to the system clipboard.
///
/// Returns Ok(()) on success, or an error if clipboard is unavailable.
/// On Linux, clipboard contents persist while the application is running.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;
    Ok(())
}

#[cfg(test)]
pub mod testing {
    use super::Clipboard;
    use anyhow::{Result, bail};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, mpsc};

    /// In-memory clipboard that records every write.
    #[derive(Debug, Default)]
    pub struct MemoryClipboard {
        writes: Mutex<Vec<String>>,
        fail: AtomicBool,
    }

    impl MemoryClipboard {
        pub fn failing() -> Self {
            let clipboard = Self::default();
            clipboard.set_failing(true);
            clipboard
        }

        pub fn set_failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }

        pub fn contents(&self) -> Option<String> {
            self.writes.lock().unwrap().last().cloned()
        }
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&self, text: &str) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                bail!("clipboard access denied");
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn needs_blocking_pool(&self) -> bool {
            false
        }
    }

    /// Blocking clipboard whose writes wait until the test releases them.
    #[derive(Debug)]
    pub struct GatedClipboard {
        gate: Mutex<mpsc::Receiver<()>>,
        opener: mpsc::Sender<()>,
        writes: Mutex<Vec<String>>,
    }

    impl GatedClipboard {
        pub fn new() -> Self {
            let (opener, gate) = mpsc::channel();
            Self {
                gate: Mutex::new(gate),
                opener,
                writes: Mutex::new(Vec::new()),
            }
        }

        /// Let `count` writes through, now or whenever they arrive.
        pub fn release(&self, count: usize) {
            for _ in 0..count {
                let _ = self.opener.send(());
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl Default for GatedClipboard {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clipboard for GatedClipboard {
        fn set_text(&self, text: &str) -> Result<()> {
            self.gate.lock().unwrap().recv()?;
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// Backend that panics inside the write, like a crashed platform call.
    #[derive(Debug, Default)]
    pub struct PanickingClipboard;

    impl Clipboard for PanickingClipboard {
        fn set_text(&self, _text: &str) -> Result<()> {
            panic!("clipboard backend crashed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryClipboard;
    use super::*;

    #[test]
    fn test_memory_clipboard_replaces_contents() {
        let clipboard = MemoryClipboard::default();
        clipboard.set_text("first").unwrap();
        clipboard.set_text("second").unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("second"));
        assert_eq!(clipboard.writes(), vec!["first", "second"]);
    }

    #[test]
    fn test_backends_pick_blocking_pool() {
        assert!(!MemoryClipboard::default().needs_blocking_pool());
        assert!(testing::GatedClipboard::new().needs_blocking_pool());
        assert!(testing::PanickingClipboard.needs_blocking_pool());
    }

    #[test]
    fn test_gated_clipboard_waits_for_release() {
        let clipboard = testing::GatedClipboard::new();
        clipboard.release(1);
        clipboard.set_text("released").unwrap();
        assert_eq!(clipboard.writes(), vec!["released"]);
    }

    #[test]
    fn test_failing_clipboard_records_nothing() {
        let clipboard = MemoryClipboard::failing();
        assert!(clipboard.set_text("text").is_err());
        assert!(clipboard.contents().is_none());
    }
}
