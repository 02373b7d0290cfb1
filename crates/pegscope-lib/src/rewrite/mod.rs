//! Extraction of embedded code into lintable JavaScript.
//!
//! Every action and semantic predicate becomes a function whose parameters are the
//! labels it captured:
//!
//! ```text
//! function l$l0 (a,b){ return a + b; }l$l0.t=true;
//! ```
//!
//! The output is padded with line breaks and spaces so that each piece of code starts
//! at the same line and column it has in the grammar. A linter position on the output
//! is therefore a position in the grammar. Only the wrapper text may drift when it does
//! not fit in front of the code. The initializer is copied as-is at its own position.

mod emitter;


use rowan::TextSize;

use crate::analyze::{ScopeAnalysis, Visitor};
use crate::ast::{Expr, Grammar, Initializer, Location, NodeId};
use crate::source::SourceText;

use emitter::Emitter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    #[error("{kind} {node}: location {start}..{end} lies outside the grammar source")]
    SpanOutOfBounds {
        node: NodeId,
        kind: &'static str,
        start: usize,
        end: usize,
    },

    #[error("{kind} {node}: code not found within its source span")]
    CodeNotFound { node: NodeId, kind: &'static str },

    #[error("{kind} {node}: no labels were captured for this node")]
    MissingCapture { node: NodeId, kind: &'static str },
}

/// One code fragment placed in the synthetic source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub node: NodeId,
    pub kind: &'static str,
    /// Wrapper function name; `None` for the initializer.
    pub function: Option<String>,
    /// Byte offset of the code in the grammar source.
    pub offset: TextSize,
    /// One-based line of the code, in the grammar and in the output.
    pub line: usize,
    /// Zero-based UTF-16 column of the code in the grammar.
    pub column: usize,
    /// Zero-based UTF-16 column the code actually landed on in the output.
    pub output_column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticSource {
    text: String,
    fragments: Vec<Fragment>,
}

impl SyntheticSource {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether there is anything worth linting.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Code-bearing node as found in the tree.
struct CodeSite {
    node: NodeId,
    kind: &'static str,
    code: String,
    location: Location,
    is_initializer: bool,
}

/// A site with its code located in the source.
struct PlacedSite {
    site: CodeSite,
    offset: TextSize,
    labels: Vec<String>,
}

#[derive(Default)]
struct CodeCollector {
    sites: Vec<CodeSite>,
}

impl CodeCollector {
    fn push(&mut self, node: &Expr, code: &str) {
        self.sites.push(CodeSite {
            node: node.id(),
            kind: node.kind_name(),
            code: code.to_owned(),
            location: node.location,
            is_initializer: false,
        });
    }
}

impl Visitor for CodeCollector {
    fn visit_initializer(&mut self, initializer: &Initializer, _: ()) {
        self.sites.push(CodeSite {
            node: initializer.id(),
            kind: "initializer",
            code: initializer.code.clone(),
            location: initializer.location,
            is_initializer: true,
        });
    }

    fn visit_action(&mut self, node: &Expr, expression: &Expr, code: &str, _: ()) {
        self.push(node, code);
        self.visit_expr(expression, ());
    }

    fn visit_semantic_and(&mut self, node: &Expr, code: &str, _: ()) {
        self.push(node, code);
    }

    fn visit_semantic_not(&mut self, node: &Expr, code: &str, _: ()) {
        self.push(node, code);
    }
}

/// Build the synthetic source for `grammar`.
///
/// `analysis` must come from the same grammar; it supplies the labels each code node
/// captured.
pub fn synthesize(
    grammar: &Grammar,
    source: &SourceText<'_>,
    analysis: &ScopeAnalysis,
) -> Result<SyntheticSource, RewriteError> {
    let mut collector = CodeCollector::default();
    collector.visit_grammar(grammar, ());

    let mut placed = collector
        .sites
        .into_iter()
        .map(|site| place(site, source, analysis))
        .collect::<Result<Vec<_>, _>>()?;
    placed.sort_by_key(|p| p.offset);

    let mut out = Emitter::new();
    let mut fragments = Vec::with_capacity(placed.len());
    let mut counter = 0usize;

    for PlacedSite {
        site,
        offset,
        labels,
    } in placed
    {
        let (line, column) = source.line_col(offset);

        let function = if site.is_initializer {
            out.advance_to_line(line);
            out.pad_to_column(column);
            None
        } else {
            let name = format!("l$l{counter}");
            let header = format!("function {name} ({}){{", labels.join(","));
            emit_header(&mut out, &header, line, column);
            Some(name)
        };

        fragments.push(Fragment {
            node: site.node,
            kind: site.kind,
            function: function.clone(),
            offset,
            line,
            column,
            output_column: out.column(),
        });

        out.push_str(&site.code);
        match function {
            Some(name) => {
                out.push_str(&format!("}}{name}.t=true;"));
                counter += 1;
            }
            None => out.push_char('\n'),
        }
    }

    tracing::debug!(fragments = fragments.len(), "synthetic source built");
    Ok(SyntheticSource {
        text: out.finish(),
        fragments,
    })
}

/// Put `header` so that the code following it starts at `line`:`column`.
///
/// The header goes right in front of the code when it fits on the code's line;
/// otherwise on the line above, with the code indented on its own line. When the
/// cursor is already on the code's line and the header does not fit, the code drifts
/// right.
fn emit_header(out: &mut Emitter, header: &str, line: usize, column: usize) {
    let width: usize = header.chars().map(char::len_utf16).sum();

    if out.line() < line && width > column {
        out.advance_to_line(line - 1);
        out.push_str(header);
        out.push_char('\n');
        out.pad_to_column(column);
        return;
    }

    out.advance_to_line(line);
    if out.line() == line && out.column() + width <= column {
        out.pad_to_column(column - width);
    }
    out.push_str(header);
}

fn place(
    site: CodeSite,
    source: &SourceText<'_>,
    analysis: &ScopeAnalysis,
) -> Result<PlacedSite, RewriteError> {
    let range = source
        .range(&site.location)
        .ok_or(RewriteError::SpanOutOfBounds {
            node: site.node,
            kind: site.kind,
            start: site.location.start.offset,
            end: site.location.end.offset,
        })?;
    let text = source.slice(range);

    // The code block is the last thing in the node's span.
    let relative = if site.code.is_empty() {
        text.rfind('{').map(|brace| brace + 1)
    } else {
        text.rfind(site.code.as_str())
    };
    let relative = relative.ok_or(RewriteError::CodeNotFound {
        node: site.node,
        kind: site.kind,
    })?;
    let offset = range.start() + TextSize::from(relative as u32);

    let labels = if site.is_initializer {
        Vec::new()
    } else {
        analysis
            .labels_in_scope(site.node)
            .ok_or(RewriteError::MissingCapture {
                node: site.node,
                kind: site.kind,
            })?
            .into_iter()
            .map(str::to_owned)
            .collect()
    };

    Ok(PlacedSite {
        site,
        offset,
        labels,
    })
}
