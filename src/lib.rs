//! # beamo
//!
//! Export wiki document trees as Beamer (LaTeX) slides.
//!
//! beamo takes the parse tree a wiki markup parser produces and flattens
//! it into LaTeX source lines ready to drop into a Beamer document shell.
//! Heading levels drive the slide structure: level 1 is the deck title,
//! levels 2 and 3 become `\section`/`\subsection`, level 4 opens a frame
//! (one slide) and level 5 a block inside it. Frames and blocks left open
//! close automatically, in reverse order of opening.
//!
//! ## Quick Start
//!
//! ```
//! use beamo::{Dumper, Element, FileLinker, Kind};
//!
//! let tree = Element::new(Kind::Div { indent: 0 })
//!     .child(Element::new(Kind::Heading { level: 4 }).with_text("Overview").with_tail("\n"))
//!     .child(Element::new(Kind::Emphasis).with_text("hello").with_tail("\n"));
//!
//! let mut linker = FileLinker::new("/path/to/notebook");
//! let output = Dumper::new(&mut linker).dump(&tree).unwrap();
//!
//! assert!(output.text().contains("\\begin{frame}[t]{Overview}"));
//! assert!(output.text().ends_with("\\end{frame}\n"));
//! ```
//!
//! The output is a fragment: no preamble, no `\begin{document}`. Anything
//! the tree references (images, equation sources, link targets) is
//! resolved through a [`Linker`], so callers control where relative paths
//! land.

pub mod error;
pub mod format;
pub mod latex;
pub mod linker;
pub mod model;

pub use error::{Error, Result, Warning};
pub use format::{BEAMER, FormatInfo};
pub use latex::{DumpOutput, Dumper, LineBuffer, tex_encode};
pub use linker::{FileLinker, Linker};
pub use model::{Bullet, Element, Kind, ListStart};
