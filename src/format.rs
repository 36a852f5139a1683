//! Declared format metadata.
//!
//! Describes the produced format for an external format registry (name,
//! MIME type, capabilities). Nothing in this crate consumes it.

/// Static description of a document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Registry name.
    pub name: &'static str,
    /// Human-readable label.
    pub description: &'static str,
    /// MIME type of produced files.
    pub mimetype: &'static str,
    /// File extension, without the dot.
    pub extension: &'static str,
    /// Whether this is the application's native format.
    pub native: bool,
    /// Whether documents can be imported from this format.
    pub import: bool,
    /// Whether documents can be exported to this format.
    pub export: bool,
}

/// The Beamer slide format: export-only LaTeX source.
pub const BEAMER: FormatInfo = FormatInfo {
    name: "beamer",
    description: "Beamer",
    mimetype: "application/x-tex",
    extension: "tex",
    native: false,
    import: false,
    export: true,
};
