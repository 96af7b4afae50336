use super::focus::{Focus, FocusAction};
use crate::clipboard::Clipboard;
use crate::content::{CopyTarget, LinkTarget, Page};
use crate::copy::{CopyControl, CopyFailure};
use crate::links::open_in_browser;
use crate::ui::theme::Theme;
use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::warn;

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);
const SCROLL_STEP: u16 = 5;

pub type LinkOpener = Box<dyn Fn(&str) -> Result<()> + Send>;

pub struct AppState {
    pub page: Page,
    pub theme: Theme,
    pub focus: Focus,
    pub scroll: u16,
    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: Option<(String, Instant)>,
    pub install_copy: CopyControl,
    pub code_copy: CopyControl,
    copy_failures: mpsc::UnboundedReceiver<CopyFailure>,
    open_link: LinkOpener,
}

impl AppState {
    /// Mount the page. Must be called inside a tokio runtime.
    pub fn new(
        page: Page,
        theme: Theme,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<Self> {
        let (failures_tx, copy_failures) = mpsc::unbounded_channel();

        let install_copy = CopyControl::new(
            CopyTarget::Install.label(),
            page.install_command,
            Arc::clone(&clipboard),
        )?
        .with_failure_reporter(failures_tx.clone());

        let code_copy = CopyControl::new(CopyTarget::Code.label(), page.quick_start, clipboard)?
            .with_failure_reporter(failures_tx);

        Ok(Self {
            page,
            theme,
            focus: Focus::default(),
            scroll: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
            install_copy,
            code_copy,
            copy_failures,
            open_link: Box::new(open_in_browser),
        })
    }

    pub fn with_link_opener(mut self, open_link: LinkOpener) -> Self {
        self.open_link = open_link;
        self
    }

    pub fn control(&self, target: CopyTarget) -> &CopyControl {
        match target {
            CopyTarget::Install => &self.install_copy,
            CopyTarget::Code => &self.code_copy,
        }
    }

    pub fn copy(&mut self, target: CopyTarget) {
        let control = match target {
            CopyTarget::Install => &mut self.install_copy,
            CopyTarget::Code => &mut self.code_copy,
        };
        // Fire and forget: the control tracks its own outcome.
        drop(control.activate());
    }

    pub fn open(&mut self, target: LinkTarget) {
        let link = self.page.link(target);
        if let Err(err) = (self.open_link)(link.url.as_str()) {
            warn!(url = %link.url, error = %format!("{err:#}"), "failed to open link");
            let message = format!("Could not open {}: {err}", link.label);
            self.set_status_message(message);
        } else {
            let message = format!("Opened {}", link.label);
            self.set_status_message(message);
        }
    }

    pub fn activate_focused(&mut self) {
        match self.focus.action() {
            FocusAction::Copy(target) => self.copy(target),
            FocusAction::Open(target) => self.open(target),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(SCROLL_STEP);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, shown_at)) = &self.status_message {
            if shown_at.elapsed() >= STATUS_MESSAGE_TTL {
                self.status_message = None;
            }
        }
    }

    /// Turn clipboard failures reported by the copy controls into status messages.
    pub fn drain_copy_failures(&mut self) {
        while let Ok(failure) = self.copy_failures.try_recv() {
            let message = format!("{} failed: {}", failure.control, failure.message);
            self.set_status_message(message);
        }
    }
}
