//! Per-locale page copy.
//!
//! `pages/<locale>/*.{html,json}` land in `<out>/<locale>/`, and the
//! locale's landing pair `pages/<locale>.{html,json}` becomes
//! `<out>/<locale>/index.{html,json}`.

use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    assemble::Result,
    copy::{copy_file, copy_matching},
    layout::SourceLayout,
};

/// Landing document name inside a locale directory.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Landing payload name inside a locale directory.
pub const INDEX_PAYLOAD: &str = "index.json";

/// Whether a file in a locale directory is a page artifact.
#[must_use]
pub fn is_page_artifact(name: &OsStr) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == "html" || ext == "json")
}

/// Whether a file is a serialized data payload.
#[must_use]
pub fn is_data_payload(name: &OsStr) -> bool {
    Path::new(name).extension().is_some_and(|ext| ext == "json")
}

/// What was copied for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalePages {
    /// Route documents and payloads, by file name.
    pub routes: Vec<OsString>,
    /// `<locale>.html` was copied to `index.html`.
    pub index_document: bool,
    /// `<locale>.json` was copied to `index.json`.
    pub index_payload: bool,
}

impl LocalePages {
    /// Number of files written for the locale.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.routes.len() + usize::from(self.index_document) + usize::from(self.index_payload)
    }
}

/// Copy one locale's pages into `out_dir/<locale>/`.
///
/// Returns `None` without touching `out_dir` when the locale has no page
/// directory in the generator output.
pub fn copy_locale_pages(
    layout: &SourceLayout,
    locale: &str,
    out_dir: &Path,
) -> Result<Option<LocalePages>> {
    let dir_input = layout.locale_dir_input(locale);
    let Some(locale_dir) = dir_input.resolve()? else {
        return Ok(None);
    };

    let dest = out_dir.join(locale);
    let mut pages = LocalePages {
        routes: copy_matching(locale_dir, &dest, is_page_artifact)?,
        ..LocalePages::default()
    };

    if let Some(document) = layout.root_document_input(locale).resolve()? {
        copy_file(document, &dest.join(INDEX_DOCUMENT))?;
        pages.index_document = true;
    }

    if let Some(payload) = layout.root_payload_input(locale).resolve()? {
        copy_file(payload, &dest.join(INDEX_PAYLOAD))?;
        pages.index_payload = true;
    }

    debug!(locale, routes = ?pages.routes, "locale routes");
    info!(locale, files = pages.file_count(), "copied locale pages");

    Ok(Some(pages))
}
