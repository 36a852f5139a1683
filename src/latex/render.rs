//! Document tree → Beamer LaTeX rendering.
//!
//! A [`Dumper`] walks the tree depth-first and emits LaTeX fragments into
//! a [`LineBuffer`]. Heading levels drive the slide structure: level 4
//! opens a frame, level 5 a block inside it, and the open environments are
//! tracked on a pending-closer stack so they close in reverse order when a
//! later heading or the end of the document demands it.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result, Warning};
use crate::latex::buffer::LineBuffer;
use crate::latex::escape::{tex_encode, tex_encode_opt, verbatim_delimiter};
use crate::linker::Linker;
use crate::model::{Bullet, Element, Kind};

/// Result of dumping one document tree.
#[derive(Debug, Clone)]
pub struct DumpOutput {
    /// The produced LaTeX fragment, line by line. Every line keeps its
    /// terminating newline, so concatenation reproduces the fragment.
    pub lines: Vec<String>,
    /// Non-fatal conditions encountered during the walk.
    pub warnings: Vec<Warning>,
}

impl DumpOutput {
    /// The full fragment as one string.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// Beamer environments opened by a heading and closed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closer {
    Frame,
    Block,
}

impl Closer {
    fn end_tag(self) -> &'static str {
        match self {
            Closer::Frame => "\\end{frame}",
            Closer::Block => "\\end{block}",
        }
    }
}

/// Exports a document tree as Beamer LaTeX source.
///
/// Heading levels map onto the slide structure: 1 is the deck title
/// (plain text), 2 and 3 become `\section`/`\subsection`, 4 opens a frame
/// and 5 opens a block within the current frame.
///
/// The output is a document fragment: callers wrap it in their own
/// preamble and `document` environment.
pub struct Dumper<'a, L: Linker> {
    linker: &'a mut L,
}

impl<'a, L: Linker> Dumper<'a, L> {
    /// Bind a dumper to the linker that resolves the tree's references.
    pub fn new(linker: &'a mut L) -> Self {
        Dumper { linker }
    }

    /// Format the tree into LaTeX source lines.
    ///
    /// The root element acts purely as a container: its leading text and
    /// children are rendered, its own kind is not. Environments still open
    /// when the tree ends are closed in reverse order of opening.
    pub fn dump(&mut self, tree: &Element) -> Result<DumpOutput> {
        // Exported paths must resolve without a base document.
        self.linker.set_usebase(false);

        let mut ctx = RenderContext {
            linker: &*self.linker,
            pending: Vec::new(),
            warnings: Vec::new(),
        };

        let mut output = LineBuffer::new();
        ctx.dump_children(tree, &mut output, -1)?;
        for closer in ctx.pending.into_iter().rev() {
            output.append(closer.end_tag());
            output.append("\n");
        }

        Ok(DumpOutput {
            lines: output.lines(),
            warnings: ctx.warnings,
        })
    }
}

/// State for one dump call.
///
/// Created fresh per [`Dumper::dump`]; no state crosses calls.
struct RenderContext<'a, L: Linker> {
    linker: &'a L,
    /// Environments opened but not yet closed, in opening order.
    pending: Vec<Closer>,
    warnings: Vec<Warning>,
}

impl<L: Linker> RenderContext<'_, L> {
    /// Render `parent`'s leading text and children into `output`.
    ///
    /// `list_level` is the list nesting depth: -1 outside any list, then
    /// one more per nested list, which becomes the tab indent of items.
    fn dump_children(
        &mut self,
        parent: &Element,
        output: &mut LineBuffer,
        list_level: i32,
    ) -> Result<()> {
        if let Some(text) = parent.text.as_deref() {
            output.append(&tex_encode(text));
        }

        for element in &parent.children {
            let text = tex_encode_opt(element.text.as_deref());

            match &element.kind {
                Kind::Paragraph { indent } | Kind::Div { indent } => {
                    let mut inner = LineBuffer::new();
                    self.dump_children(element, &mut inner, -1)?;
                    if *indent > 0 {
                        inner.prefix_lines(&"\t".repeat(*indent as usize));
                    }
                    output.extend(inner);
                }

                Kind::Heading { level } => {
                    self.heading(*level, &text, output);
                }

                Kind::UnorderedList => {
                    output.append("\\begin{itemize}\n");
                    self.dump_children(element, output, list_level + 1)?;
                    output.append("\\end{itemize}");
                }

                Kind::OrderedList { start } => {
                    output.append(&format!(
                        "\\begin{{enumerate}}[{}]\n",
                        start.numbering_type()
                    ));
                    // An explicit start of N means the counter sits at N-1
                    // before the first \item advances it.
                    if start.ordinal() > 1 {
                        output.append(&format!("\\setcounter{{enumi}}{{{}}}\n", start.ordinal() - 1));
                    }
                    self.dump_children(element, output, list_level + 1)?;
                    output.append("\\end{enumerate}");
                }

                Kind::ListItem { bullet } => {
                    output.append(&"\t".repeat(list_level.max(0) as usize));
                    output.append(bullet_marker(*bullet));
                    self.dump_children(element, output, list_level)?;
                    output.append("\n");
                }

                Kind::Preformatted { indent } => {
                    let mut inner = LineBuffer::new();
                    inner.append(element.text.as_deref().unwrap_or(""));
                    if *indent > 0 {
                        inner.prefix_lines(&" ".repeat(4 * *indent as usize));
                    }
                    output.append("\n\\begin{lstlisting}\n");
                    output.extend(inner);
                    output.append("\n\\end{lstlisting}\n");
                }

                Kind::Subscript => {
                    output.append(&format!("$_{{{}}}$", element.text.as_deref().unwrap_or("")));
                }

                Kind::Superscript => {
                    output.append(&format!("$^{{{}}}$", element.text.as_deref().unwrap_or("")));
                }

                Kind::Image {
                    src,
                    href,
                    equation,
                } => {
                    self.image(src, href.as_deref(), *equation, list_level, output)?;
                }

                Kind::Link { href } => {
                    let target = self.linker.link(href);
                    output.append(&format!("\\href{{{}}}{{{}}}", target, text));
                }

                Kind::Emphasis => output.append(&format!("\\emph{{{}}}", text)),
                Kind::Strong => output.append(&format!("\\textbf{{{}}}", text)),
                Kind::Highlight => output.append(&format!("\\uline{{{}}}", text)),
                Kind::Strikethrough => output.append(&format!("\\sout{{{}}}", text)),

                Kind::Code => {
                    let code = element.text.as_deref().unwrap_or("");
                    let delim = verbatim_delimiter(code)
                        .ok_or_else(|| Error::NoVerbatimDelimiter(code.to_string()))?;
                    output.append(&format!("\\lstinline{}{}{}", delim, code, delim));
                }

                // No LaTeX counterpart; only the text survives.
                Kind::Tag => output.append(&text),
            }

            if let Some(tail) = element.tail.as_deref() {
                output.append(&tex_encode(tail));
            }
        }

        Ok(())
    }

    /// Emit a heading, closing and opening frame/block environments as the
    /// level demands.
    fn heading(&mut self, level: i32, text: &str, output: &mut LineBuffer) {
        let level = level.clamp(1, 5);

        // A block cannot follow a block without closing it first; anything
        // up to a frame closes every open environment. A block after a
        // pending frame closes nothing: blocks nest inside frames.
        if self.pending.last() == Some(&Closer::Block) && level == 5 {
            output.append(Closer::Block.end_tag());
            output.append("\n");
            self.pending.pop();
        }
        if level <= 4 {
            for closer in self.pending.drain(..).rev() {
                output.append(closer.end_tag());
                output.append("\n");
            }
        }

        match level {
            4 => {
                output.append(&format!("%{}\n", "_".repeat(78)));
                self.pending.push(Closer::Frame);
            }
            5 => self.pending.push(Closer::Block),
            _ => {}
        }

        output.append(&sectioning(level, text));
    }

    /// Emit an image, preferring the LaTeX source for equation images.
    fn image(
        &mut self,
        src: &str,
        href: Option<&str>,
        equation: bool,
        list_level: i32,
        output: &mut LineBuffer,
    ) -> Result<()> {
        if list_level == -1 {
            output.append("\\begin{center}\n");
        }

        let mut done = false;
        if equation {
            done = self.equation_source(src, output)?;
        }

        if !done {
            let path = self.linker.link(src);
            let (width, height) = self.linker.image_size(Path::new(&path))?;

            // Wide images are bounded by the text width, tall ones by
            // the text height.
            let options = if width as f64 / height as f64 > 1.0 {
                "width=0.90\\textwidth"
            } else {
                "height=0.80\\textheight"
            };

            let include = format!("\\includegraphics[{}]{{{}}}", options, path);
            match href {
                Some(href) => {
                    let target = self.linker.link(href);
                    output.append(&format!("\\href{{{}}}{{{}}}", target, include));
                }
                None => output.append(&include),
            }
        }

        if list_level == -1 {
            output.append("\n\\end{center}\n");
        }
        Ok(())
    }

    /// Try to inline the `.tex` source belonging to an equation image.
    ///
    /// Returns true when the source was found and emitted. A missing file
    /// records a warning and returns false; an empty file just returns
    /// false. Read failures on an existing file propagate.
    fn equation_source(&mut self, src: &str, output: &mut LineBuffer) -> Result<bool> {
        let tex_src = Path::new(src).with_extension("tex");
        let tex_src = tex_src.to_string_lossy();

        let Some(path) = self.linker.resolve_file(&tex_src) else {
            self.warnings.push(Warning::MissingEquationSource {
                src: tex_src.into_owned(),
            });
            return Ok(false);
        };

        let source = fs::read_to_string(path)?;
        let source = source.trim();
        if source.is_empty() {
            return Ok(false);
        }

        output.append("\\begin{math}\n");
        output.append(source);
        output.append("\n\\end{math}");
        Ok(true)
    }
}

fn bullet_marker(bullet: Option<Bullet>) -> &'static str {
    match bullet {
        None => "\\item ",
        Some(Bullet::Unchecked) => "\\item[\\Square] ",
        Some(Bullet::Crossed) => "\\item[\\XBox] ",
        Some(Bullet::Checked) => "\\item[\\CheckedBox] ",
    }
}

fn sectioning(level: i32, text: &str) -> String {
    match level {
        1 => text.to_string(),
        2 => format!("\\section{{{}}}", text),
        3 => format!("\\subsection{{{}}}", text),
        4 => format!("\\begin{{frame}}[t]{{{}}}", text),
        _ => format!("\\begin{{block}}{{{}}}", text),
    }
}
