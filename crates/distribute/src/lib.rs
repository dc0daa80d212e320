//! Delivery of already-rendered loan documents.
//!
//! Adapters never format anything themselves: they take a `RenderedArtifact`
//! and the `Document` it came from and hand the bytes to a download target, a
//! print host or a share target. Environment failures (blocked print window,
//! missing share sheet) are reported as outcomes, not errors.

mod download;
mod filename;
mod print;
mod share;
mod summary;

pub use download::{DownloadTarget, FsDownloadTarget};
pub use filename::download_filename;
pub use print::{print_document, FilePrintHost, FilePrintWindow, PrintHost, PrintOutcome, PrintSettings, PrintWindow};
pub use share::{
    deep_link, percent_encode, share_document, LinkOpener, NoNativeShare, ShareError, ShareOutcome, SharePayload,
    ShareSettings, ShareTarget, StdoutLinkOpener,
};
pub use summary::share_text;
