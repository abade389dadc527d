//! Client-side navigation data.
//!
//! When the framework navigates between pages in the browser it fetches
//! `/_next/data/<build id>/<locale>.json` for a locale's landing page and
//! `/_next/data/<build id>/<locale>/<route>.json` for everything else.

use std::path::{Path, PathBuf};

use sitebundle_core::LocaleSet;
use tracing::info;

use crate::{
    assemble::Result,
    build_id::BuildId,
    copy::{copy_file, copy_matching},
    layout::SourceLayout,
    pages::is_data_payload,
};

/// `<out>/_next/data/<build id>`.
#[must_use]
pub fn data_dir(out_dir: &Path, build_id: &BuildId) -> PathBuf {
    out_dir.join("_next").join("data").join(build_id.as_str())
}

/// Copy navigation payloads for every locale. Returns the number of files written.
pub fn copy_navigation_data(
    layout: &SourceLayout,
    locales: &LocaleSet,
    build_id: &BuildId,
    out_dir: &Path,
) -> Result<usize> {
    let data_dir = data_dir(out_dir, build_id);
    std::fs::create_dir_all(&data_dir)?;

    let mut count = 0;
    for locale in locales.iter() {
        if let Some(payload) = layout.root_payload_input(locale).resolve()? {
            copy_file(payload, &data_dir.join(format!("{locale}.json")))?;
            count += 1;
        }

        let dir_input = layout.locale_dir_input(locale);
        let Some(locale_dir) = dir_input.resolve()? else {
            continue;
        };
        count += copy_matching(locale_dir, &data_dir.join(locale), is_data_payload)?.len();
    }

    info!(build_id = %build_id, files = count, "copied navigation data");
    Ok(count)
}
