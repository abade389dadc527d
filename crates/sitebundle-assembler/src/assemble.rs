//! Assembly orchestration.
//!
//! Runs the steps in a fixed order: prepare output, public assets, static
//! chunks, per-locale pages, navigation data, redirects, publish.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use sitebundle_core::{Config, CoreError, LocaleSet};
use thiserror::Error;
use tracing::info;

use crate::{
    build_id::{BuildId, BuildIdError},
    copy::{CopyError, copy_tree},
    input::InputError,
    layout::SourceLayout,
    nav_data::copy_navigation_data,
    pages::copy_locale_pages,
    redirects::{RedirectRule, write_redirects},
    staging::{BundleTarget, PublishMode},
};

/// Assembly errors.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Copy error.
    #[error("copy error: {0}")]
    Copy(#[from] CopyError),

    /// Missing required input.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Unreadable or unusable build identifier.
    #[error("build id error: {0}")]
    BuildId(#[from] BuildIdError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] CoreError),

    /// The finished bundle could not be moved into place.
    #[error("failed to publish bundle to {}: {source}", .path.display())]
    Publish {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssembleError>;

/// Assembly statistics.
#[derive(Debug, Clone, Default)]
pub struct AssemblyStats {
    /// Locales that had pages in the generator output, in configured order.
    pub locales: Vec<String>,

    /// Number of page files (documents and payloads) written under locale directories.
    pub pages: usize,

    /// Number of navigation payloads written under `_next/data/`.
    pub data_files: usize,

    /// Number of public assets and static chunks copied.
    pub assets: usize,

    /// Build identifier used for navigation data, if one was found.
    pub build_id: Option<String>,

    /// Assembly duration in milliseconds.
    pub duration_ms: u64,
}

/// Static bundle assembler.
#[derive(Debug)]
pub struct Assembler {
    locales: LocaleSet,
    layout: SourceLayout,
    out_dir: PathBuf,
    redirect_status: u16,
    mode: PublishMode,
}

impl Assembler {
    /// Create an assembler from a configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            locales: config.locale_set()?,
            layout: SourceLayout::from_paths(&config.paths),
            out_dir: config.paths.out_dir.clone(),
            redirect_status: config.redirect.status,
            mode: PublishMode::default(),
        })
    }

    /// Resolve relative source and output paths against `root`.
    #[must_use]
    pub fn with_root(mut self, root: &Path) -> Self {
        self.layout = self.layout.rooted_at(root);
        self.out_dir = root.join(&self.out_dir);
        self
    }

    /// Set how the bundle is published.
    #[must_use]
    pub fn with_publish_mode(mut self, mode: PublishMode) -> Self {
        self.mode = mode;
        self
    }

    /// The output directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// The source layout being read.
    #[must_use]
    pub fn layout(&self) -> &SourceLayout {
        &self.layout
    }

    /// Run the full assembly.
    pub fn assemble(&self) -> Result<AssemblyStats> {
        let start = Instant::now();
        let mut stats = AssemblyStats::default();

        info!(
            pages = %self.layout.pages_dir.display(),
            output = %self.out_dir.display(),
            mode = ?self.mode,
            "starting assembly"
        );

        // 1. Prepare output directory
        let target = BundleTarget::prepare(&self.out_dir, self.mode)?;
        let root = target.root();

        // 2. Public assets
        stats.assets += self.copy_public_assets(root)?;

        // 3. Compiled chunks
        stats.assets += self.copy_static_chunks(root)?;

        // 4. Locale pages
        for locale in self.locales.iter() {
            if let Some(pages) = copy_locale_pages(&self.layout, locale, root)? {
                stats.pages += pages.file_count();
                stats.locales.push(locale.to_string());
            }
        }

        // 5. Navigation data
        if let Some(build_id) = self.read_build_id()? {
            stats.data_files = copy_navigation_data(&self.layout, &self.locales, &build_id, root)?;
            stats.build_id = Some(build_id.to_string());
        }

        // 6. Redirects
        let rule = RedirectRule::root_to_locale(self.locales.default_locale(), self.redirect_status);
        write_redirects(root, &[rule])?;

        // 7. Publish
        target
            .publish(&self.out_dir)
            .map_err(|source| AssembleError::Publish {
                path: self.out_dir.clone(),
                source,
            })?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            locales = ?stats.locales,
            pages = stats.pages,
            data_files = stats.data_files,
            assets = stats.assets,
            duration_ms = stats.duration_ms,
            "assembly complete"
        );

        Ok(stats)
    }

    /// Copy public assets into the bundle root.
    fn copy_public_assets(&self, root: &Path) -> Result<usize> {
        let input = self.layout.public_input();
        let Some(public_dir) = input.resolve()? else {
            return Ok(0);
        };
        let count = copy_tree(public_dir, root)?;
        info!(count, "copied public assets");
        Ok(count)
    }

    /// Copy compiled chunks into `_next/static/`.
    fn copy_static_chunks(&self, root: &Path) -> Result<usize> {
        let input = self.layout.static_input();
        let Some(static_dir) = input.resolve()? else {
            return Ok(0);
        };
        let count = copy_tree(static_dir, &root.join("_next").join("static"))?;
        info!(count, "copied static chunks");
        Ok(count)
    }

    /// Read the build identifier if the file exists.
    fn read_build_id(&self) -> Result<Option<BuildId>> {
        let input = self.layout.build_id_input();
        match input.resolve()? {
            Some(path) => Ok(Some(BuildId::read(path)?)),
            None => Ok(None),
        }
    }
}
