//! Beamer LaTeX generation from the document tree.
//!
//! The pieces separate pure text transformation from the tree walk:
//!
//! - [`escape`]: character escaping and verbatim delimiter selection
//! - [`buffer`]: the line-oriented buffer one dump call accumulates into
//! - [`render`]: the recursive tree walk producing the fragment
//!
//! The produced LaTeX is a document fragment, not a standalone document;
//! callers provide the preamble (which must pull in `listings`, `ulem` and
//! the checkbox symbols the markers rely on) and the `document`
//! environment.

mod buffer;
mod escape;
mod render;

pub use buffer::LineBuffer;
pub use escape::{VERBATIM_DELIMITERS, tex_encode, tex_encode_opt, verbatim_delimiter};
pub use render::{DumpOutput, Dumper};
