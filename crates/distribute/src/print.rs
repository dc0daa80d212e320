//! Print flow for the HTML export: open a window, write the document, then
//! trigger printing after a short delay so the new context can finish layout.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_PRINT_DELAY_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Delay between writing the document and opening the print dialog.
    pub delay_ms: u64,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_PRINT_DELAY_MS,
        }
    }
}

impl PrintSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// A freshly opened browsing context.
pub trait PrintWindow {
    fn write_document(&mut self, html: &str) -> io::Result<()>;
    fn schedule_print(&mut self, delay: Duration) -> io::Result<()>;
}

/// Opens print windows. `None` means the window was blocked.
pub trait PrintHost {
    type Window: PrintWindow;

    fn open_window(&self) -> Option<Self::Window>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    Scheduled { delay: Duration },
    /// No window could be opened or written; nothing happened.
    Blocked,
}

/// Writes `html` into a new window and schedules printing.
///
/// Never fails: a blocked or broken window is logged and reported as
/// [`PrintOutcome::Blocked`].
pub fn print_document<H: PrintHost>(host: &H, html: &str, delay: Duration) -> PrintOutcome {
    let Some(mut window) = host.open_window() else {
        log::warn!("Print window could not be opened; skipping print");
        return PrintOutcome::Blocked;
    };
    let result = window
        .write_document(html)
        .and_then(|_| window.schedule_print(delay));
    match result {
        Ok(()) => {
            log::debug!("Print scheduled after {:?}", delay);
            PrintOutcome::Scheduled { delay }
        }
        Err(e) => {
            log::warn!("Print window failed: {}", e);
            PrintOutcome::Blocked
        }
    }
}

/// Print host that "opens" a window by creating an HTML file. Printing is
/// scheduled by an inline script, so the dialog appears when a browser opens
/// the file.
#[derive(Debug, Clone)]
pub struct FilePrintHost {
    path: PathBuf,
}

impl FilePrintHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintHost for FilePrintHost {
    type Window = FilePrintWindow;

    fn open_window(&self) -> Option<FilePrintWindow> {
        match File::create(&self.path) {
            Ok(file) => Some(FilePrintWindow {
                file,
                html: String::new(),
            }),
            Err(e) => {
                log::warn!("Cannot open {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

pub struct FilePrintWindow {
    file: File,
    html: String,
}

impl PrintWindow for FilePrintWindow {
    fn write_document(&mut self, html: &str) -> io::Result<()> {
        self.html.push_str(html);
        Ok(())
    }

    fn schedule_print(&mut self, delay: Duration) -> io::Result<()> {
        let script = format!(
            "<script>window.addEventListener('load', function () {{ setTimeout(function () {{ window.print(); }}, {}); }});</script>\n",
            delay.as_millis()
        );
        match self.html.rfind("</body>") {
            Some(at) => self.html.insert_str(at, &script),
            None => self.html.push_str(&script),
        }
        self.file.write_all(self.html.as_bytes())?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        html: String,
        delay: Option<Duration>,
    }

    struct MemoryWindow(Rc<RefCell<Recorded>>);

    impl PrintWindow for MemoryWindow {
        fn write_document(&mut self, html: &str) -> io::Result<()> {
            self.0.borrow_mut().html.push_str(html);
            Ok(())
        }

        fn schedule_print(&mut self, delay: Duration) -> io::Result<()> {
            self.0.borrow_mut().delay = Some(delay);
            Ok(())
        }
    }

    struct MemoryHost {
        blocked: bool,
        log: Rc<RefCell<Recorded>>,
    }

    impl PrintHost for MemoryHost {
        type Window = MemoryWindow;

        fn open_window(&self) -> Option<MemoryWindow> {
            (!self.blocked).then(|| MemoryWindow(self.log.clone()))
        }
    }

    #[test]
    fn writes_then_schedules_print() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let host = MemoryHost { blocked: false, log: log.clone() };
        let outcome = print_document(&host, "<html></html>", Duration::from_millis(250));
        assert_eq!(outcome, PrintOutcome::Scheduled { delay: Duration::from_millis(250) });
        assert_eq!(log.borrow().html, "<html></html>");
        assert_eq!(log.borrow().delay, Some(Duration::from_millis(250)));
    }

    #[test]
    fn blocked_window_is_a_silent_no_op() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let host = MemoryHost { blocked: true, log: log.clone() };
        assert_eq!(print_document(&host, "<html></html>", Duration::ZERO), PrintOutcome::Blocked);
        assert!(log.borrow().html.is_empty());
    }

    #[test]
    fn file_host_embeds_delayed_print_trigger() {
        let dir = tempfile::tempdir().unwrap();
        let host = FilePrintHost::new(dir.path().join("print.html"));
        let outcome = print_document(&host, "<html><body><p>x</p></body></html>", Duration::from_millis(300));
        assert!(matches!(outcome, PrintOutcome::Scheduled { .. }));

        let written = std::fs::read_to_string(host.path()).unwrap();
        let script = written.find("setTimeout(function () { window.print(); }, 300)").unwrap();
        assert!(script < written.find("</body>").unwrap());
    }

    #[test]
    fn unwritable_location_counts_as_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let host = FilePrintHost::new(dir.path().join("missing").join("print.html"));
        assert_eq!(print_document(&host, "<html></html>", Duration::ZERO), PrintOutcome::Blocked);
    }

    #[test]
    fn default_delay_is_short() {
        assert_eq!(PrintSettings::default().delay(), Duration::from_millis(250));
    }
}
