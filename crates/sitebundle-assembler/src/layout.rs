//! On-disk shape of the generator output.

use std::path::{Path, PathBuf};

use sitebundle_core::{LocaleSet, config::PathsConfig};

use crate::input::Input;

/// Locations of everything the assembler consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    /// Public assets, copied flat into the bundle root.
    pub public_dir: PathBuf,
    /// Compiled chunks, copied to `_next/static/`.
    pub static_dir: PathBuf,
    /// Pre-rendered pages, one directory per locale plus `<locale>.html`/`.json`.
    pub pages_dir: PathBuf,
    /// Single-line build identifier file.
    pub build_id_file: PathBuf,
}

impl SourceLayout {
    /// Derive the layout from the configured paths.
    #[must_use]
    pub fn from_paths(paths: &PathsConfig) -> Self {
        Self {
            public_dir: paths.public_dir.clone(),
            static_dir: paths.static_dir(),
            pages_dir: paths.pages_dir(),
            build_id_file: paths.build_id_file(),
        }
    }

    /// The locale's route directory (`pages/<locale>/`).
    #[must_use]
    pub fn locale_dir(&self, locale: &str) -> PathBuf {
        self.pages_dir.join(locale)
    }

    /// The locale's landing document (`pages/<locale>.html`).
    #[must_use]
    pub fn root_document(&self, locale: &str) -> PathBuf {
        self.pages_dir.join(format!("{locale}.html"))
    }

    /// The locale's landing data payload (`pages/<locale>.json`).
    #[must_use]
    pub fn root_payload(&self, locale: &str) -> PathBuf {
        self.pages_dir.join(format!("{locale}.json"))
    }

    pub fn public_input(&self) -> Input {
        Input::required("public assets", &self.public_dir)
    }

    pub fn static_input(&self) -> Input {
        Input::required("static chunks", &self.static_dir)
    }

    pub fn build_id_input(&self) -> Input {
        Input::optional("build id", &self.build_id_file)
    }

    pub fn locale_dir_input(&self, locale: &str) -> Input {
        Input::optional(format!("{locale} pages"), self.locale_dir(locale))
    }

    pub fn root_document_input(&self, locale: &str) -> Input {
        Input::optional(format!("{locale} landing document"), self.root_document(locale))
    }

    pub fn root_payload_input(&self, locale: &str) -> Input {
        Input::optional(format!("{locale} landing payload"), self.root_payload(locale))
    }

    /// Every declared input, in the order the assembler reads them.
    #[must_use]
    pub fn declared_inputs(&self, locales: &LocaleSet) -> Vec<Input> {
        let mut inputs = vec![self.public_input(), self.static_input()];
        for locale in locales.iter() {
            inputs.push(self.locale_dir_input(locale));
            inputs.push(self.root_document_input(locale));
            inputs.push(self.root_payload_input(locale));
        }
        inputs.push(self.build_id_input());
        inputs
    }

    /// Rebase every path onto `root`.
    #[must_use]
    pub fn rooted_at(&self, root: &Path) -> Self {
        Self {
            public_dir: root.join(&self.public_dir),
            static_dir: root.join(&self.static_dir),
            pages_dir: root.join(&self.pages_dir),
            build_id_file: root.join(&self.build_id_file),
        }
    }
}
