//! Reference resolution for exported documents.
//!
//! Wiki pages refer to images, equation sources and link targets by
//! relative paths. The exporter does not know where those live; a
//! [`Linker`] resolves them to concrete filesystem paths or URLs.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::error::Result;

/// Resolves document-relative references to concrete targets.
///
/// Implementations decide what a relative path means: a notebook directory
/// on disk, an archive, a test fixture. The exporter only asks questions.
pub trait Linker {
    /// Resolve a path or href to a concrete target string.
    ///
    /// External URLs pass through unchanged; anything else becomes a
    /// filesystem path.
    fn link(&self, href: &str) -> String;

    /// Resolve a relative file reference to an existing file.
    ///
    /// Returns `None` when the file does not exist.
    fn resolve_file(&self, path: &str) -> Option<PathBuf>;

    /// Toggle whether resolution happens relative to the current base
    /// document. Export turns this off so produced paths stand on their
    /// own.
    fn set_usebase(&mut self, usebase: bool);

    /// Probe an image's pixel dimensions as `(width, height)`.
    ///
    /// The default implementation decodes only the image header.
    fn image_size(&self, path: &Path) -> Result<(u32, u32)> {
        Ok(image::image_dimensions(path)?)
    }
}

/// Schemes that pass through [`Linker::link`] untouched.
fn is_external(href: &str) -> bool {
    href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("ftp://")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
}

/// A [`Linker`] rooted in a notebook directory on disk.
///
/// Relative references resolve against the base document's directory while
/// `usebase` is on, and against the notebook root otherwise. File hrefs
/// may be percent-encoded; they are decoded before hitting the
/// filesystem.
#[derive(Debug, Clone)]
pub struct FileLinker {
    root: PathBuf,
    base: Option<PathBuf>,
    usebase: bool,
}

impl FileLinker {
    /// Create a linker resolving against the given notebook root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileLinker {
            root: root.into(),
            base: None,
            usebase: true,
        }
    }

    /// Set the directory of the document currently being processed.
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    fn resolve_dir(&self) -> &Path {
        if self.usebase
            && let Some(base) = &self.base
        {
            return base;
        }
        &self.root
    }

    fn decode(href: &str) -> String {
        percent_decode_str(href).decode_utf8_lossy().into_owned()
    }
}

impl Linker for FileLinker {
    fn link(&self, href: &str) -> String {
        if is_external(href) {
            return href.to_string();
        }
        self.resolve_dir()
            .join(Self::decode(href))
            .display()
            .to_string()
    }

    fn resolve_file(&self, path: &str) -> Option<PathBuf> {
        let candidate = self.resolve_dir().join(Self::decode(path));
        candidate.is_file().then_some(candidate)
    }

    fn set_usebase(&mut self, usebase: bool) {
        self.usebase = usebase;
    }
}
