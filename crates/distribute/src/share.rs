//! Share flow: native share sheet first, message deep link as fallback.

use async_trait::async_trait;
use loandoc_render_core::RenderedArtifact;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Native sharing is not available")]
    Unavailable,

    #[error("Share was cancelled")]
    Cancelled,

    #[error("Share was rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareSettings {
    /// Deep link the summary text is appended to, percent-encoded.
    pub deep_link_base: String,
    /// Title of the share sheet and first line of the summary.
    pub title: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            deep_link_base: "https://wa.me/?text=".to_string(),
            title: "Loan Details".to_string(),
        }
    }
}

/// What a native share receives.
#[derive(Debug, Clone, Copy)]
pub struct SharePayload<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub filename: &'a str,
    pub artifact: &'a RenderedArtifact,
}

/// A native share sheet.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, payload: SharePayload<'_>) -> Result<(), ShareError>;
}

/// Opens URLs (a browser, an OS handler, or just a log line).
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// A share target for environments without a share sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNativeShare;

#[async_trait]
impl ShareTarget for NoNativeShare {
    async fn share(&self, _payload: SharePayload<'_>) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }
}

/// "Opens" links by printing them to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutLinkOpener;

impl LinkOpener for StdoutLinkOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        use std::io::Write;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share accepted the payload.
    Shared,
    /// Native share failed; the deep link was opened instead.
    LinkOpened { url: String, reason: ShareError },
    /// Neither path worked. Nothing was sent.
    Failed { url: String },
}

/// Shares the artifact, falling back to a text-only deep link.
///
/// The native share is awaited once with no retry. The binary is only ever
/// handed to the share target; the fallback URL carries the text alone.
pub async fn share_document(
    target: &dyn ShareTarget,
    opener: &dyn LinkOpener,
    settings: &ShareSettings,
    payload: SharePayload<'_>,
) -> ShareOutcome {
    let reason = match target.share(payload).await {
        Ok(()) => {
            log::info!("Shared {} through the native share sheet", payload.filename);
            return ShareOutcome::Shared;
        }
        Err(e) => e,
    };

    log::warn!("Native share failed ({}); falling back to deep link", reason);
    let url = deep_link(&settings.deep_link_base, payload.text);
    match opener.open(&url) {
        Ok(()) => ShareOutcome::LinkOpened { url, reason },
        Err(e) => {
            log::warn!("Could not open share link: {}", e);
            ShareOutcome::Failed { url }
        }
    }
}

/// `base` followed by the percent-encoded `text`.
pub fn deep_link(base: &str, text: &str) -> String {
    format!("{}{}", base, percent_encode(text))
}

/// Percent-encodes UTF-8 bytes, leaving only the characters JavaScript's
/// `encodeURIComponent` leaves alone.
pub fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use loandoc_render_core::OutputFormat;
    use std::sync::Mutex;

    struct FixedShare(Result<(), ShareError>);

    #[async_trait]
    impl ShareTarget for FixedShare {
        async fn share(&self, _payload: SharePayload<'_>) -> Result<(), ShareError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        urls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::other("no handler"));
            }
            self.urls.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn artifact() -> RenderedArtifact {
        RenderedArtifact::new(OutputFormat::Pdf, b"%PDF-1.7".to_vec())
    }

    fn payload<'a>(artifact: &'a RenderedArtifact, text: &'a str) -> SharePayload<'a> {
        SharePayload {
            title: "Loan Details",
            text,
            filename: "Loan-1-A.pdf",
            artifact,
        }
    }

    #[test]
    fn percent_encoding_matches_uri_component_rules() {
        assert_eq!(percent_encode("Arjun Mehta"), "Arjun%20Mehta");
        assert_eq!(percent_encode("₹11,00,000"), "%E2%82%B911%2C00%2C000");
        assert_eq!(percent_encode("a\nb"), "a%0Ab");
        assert_eq!(percent_encode("(x)*!~'._-"), "(x)*!~'._-");
        assert_eq!(percent_encode("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
    }

    #[test]
    fn deep_link_appends_encoded_text() {
        assert_eq!(deep_link("https://wa.me/?text=", "hi there"), "https://wa.me/?text=hi%20there");
    }

    #[tokio::test]
    async fn native_share_success_skips_fallback() {
        let opener = RecordingOpener::default();
        let artifact = artifact();
        let outcome = share_document(
            &FixedShare(Ok(())),
            &opener,
            &ShareSettings::default(),
            payload(&artifact, "text"),
        )
        .await;
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(opener.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancelled_share_opens_deep_link() {
        let opener = RecordingOpener::default();
        let artifact = artifact();
        let outcome = share_document(
            &FixedShare(Err(ShareError::Cancelled)),
            &opener,
            &ShareSettings::default(),
            payload(&artifact, "Applicant: Arjun Mehta"),
        )
        .await;
        let expected = "https://wa.me/?text=Applicant%3A%20Arjun%20Mehta".to_string();
        assert_eq!(
            outcome,
            ShareOutcome::LinkOpened {
                url: expected.clone(),
                reason: ShareError::Cancelled
            }
        );
        assert_eq!(*opener.urls.lock().unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn opener_failure_is_reported_not_raised() {
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        let artifact = artifact();
        let outcome = share_document(&NoNativeShare, &opener, &ShareSettings::default(), payload(&artifact, "x")).await;
        assert!(matches!(outcome, ShareOutcome::Failed { .. }));
    }
}
