//! Grammar AST node types.
//!
//! The shapes mirror the JSON the PEG.js grammar parser emits: every node has a
//! `type` tag and a `location`. Nodes are immutable once built; analysis results
//! live in side tables keyed by [`NodeId`].

use serde::{Deserialize, Serialize};

/// Stable identity of a node within one [`Grammar`], assigned in pre-order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A position as reported by the grammar parser.
///
/// `offset` counts UTF-16 code units; `line` and `column` are one-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, thiserror::Error)]
pub enum AstError {
    #[error("invalid grammar AST: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    #[serde(default)]
    pub initializer: Option<Initializer>,
    pub rules: Vec<Rule>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Initializer {
    #[serde(skip)]
    id: NodeId,
    pub code: String,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(skip)]
    id: NodeId,
    pub name: String,
    pub expression: Expr,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    #[serde(skip)]
    id: NodeId,
    #[serde(flatten)]
    pub kind: ExprKind,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExprKind {
    Named {
        name: String,
        expression: Box<Expr>,
    },
    Choice {
        alternatives: Vec<Expr>,
    },
    Action {
        expression: Box<Expr>,
        code: String,
    },
    Sequence {
        elements: Vec<Expr>,
    },
    Labeled {
        label: String,
        expression: Box<Expr>,
    },
    Text {
        expression: Box<Expr>,
    },
    SimpleAnd {
        expression: Box<Expr>,
    },
    SimpleNot {
        expression: Box<Expr>,
    },
    Optional {
        expression: Box<Expr>,
    },
    ZeroOrMore {
        expression: Box<Expr>,
    },
    OneOrMore {
        expression: Box<Expr>,
    },
    SemanticAnd {
        code: String,
    },
    SemanticNot {
        code: String,
    },
    RuleRef {
        name: String,
    },
    Literal {
        value: String,
        #[serde(rename = "ignoreCase", default)]
        ignore_case: bool,
    },
    Class {
        parts: Vec<ClassPart>,
        #[serde(default)]
        inverted: bool,
        #[serde(rename = "ignoreCase", default)]
        ignore_case: bool,
    },
    Any,
}

/// One member of a character class: a single character or an inclusive range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassPart {
    Char(String),
    Range(String, String),
}

impl Grammar {
    pub fn new(initializer: Option<Initializer>, rules: Vec<Rule>, location: Location) -> Self {
        let mut grammar = Self {
            initializer,
            rules,
            location,
        };
        grammar.renumber();
        grammar
    }

    /// Decode the JSON AST produced by the grammar parser.
    pub fn from_json(json: &str) -> Result<Self, AstError> {
        let mut grammar: Grammar = serde_json::from_str(json)?;
        grammar.renumber();
        Ok(grammar)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, AstError> {
        let mut grammar: Grammar = serde_json::from_value(value)?;
        grammar.renumber();
        Ok(grammar)
    }

    /// Reassign node ids in pre-order. Call after mutating the tree by hand.
    pub fn renumber(&mut self) {
        let mut next = 0u32;
        if let Some(init) = &mut self.initializer {
            init.id = NodeId(next);
            next += 1;
        }
        for rule in &mut self.rules {
            rule.id = NodeId(next);
            next += 1;
            next = rule.expression.renumber(next);
        }
    }

    /// Number of ids handed out by the last [`Grammar::renumber`].
    pub fn node_count(&self) -> usize {
        let exprs: usize = self.rules.iter().map(|r| 1 + r.expression.subtree_len()).sum();
        exprs + usize::from(self.initializer.is_some())
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

impl Initializer {
    pub fn new(code: impl Into<String>, location: Location) -> Self {
        Self {
            id: NodeId::default(),
            code: code.into(),
            location,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl Rule {
    pub fn new(name: impl Into<String>, expression: Expr, location: Location) -> Self {
        Self {
            id: NodeId::default(),
            name: name.into(),
            expression,
            location,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl Expr {
    pub fn new(kind: ExprKind, location: Location) -> Self {
        Self {
            id: NodeId::default(),
            kind,
            location,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The `type` tag used by the grammar parser for this node.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Embedded code of actions and semantic predicates.
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Action { code, .. }
            | ExprKind::SemanticAnd { code }
            | ExprKind::SemanticNot { code } => Some(code),
            _ => None,
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> &[Expr] {
        match &self.kind {
            ExprKind::Choice { alternatives } => alternatives,
            ExprKind::Sequence { elements } => elements,
            ExprKind::Named { expression, .. }
            | ExprKind::Action { expression, .. }
            | ExprKind::Labeled { expression, .. }
            | ExprKind::Text { expression }
            | ExprKind::SimpleAnd { expression }
            | ExprKind::SimpleNot { expression }
            | ExprKind::Optional { expression }
            | ExprKind::ZeroOrMore { expression }
            | ExprKind::OneOrMore { expression } => std::slice::from_ref(&**expression),
            ExprKind::SemanticAnd { .. }
            | ExprKind::SemanticNot { .. }
            | ExprKind::RuleRef { .. }
            | ExprKind::Literal { .. }
            | ExprKind::Class { .. }
            | ExprKind::Any => &[],
        }
    }

    fn children_mut(&mut self) -> &mut [Expr] {
        match &mut self.kind {
            ExprKind::Choice { alternatives } => alternatives,
            ExprKind::Sequence { elements } => elements,
            ExprKind::Named { expression, .. }
            | ExprKind::Action { expression, .. }
            | ExprKind::Labeled { expression, .. }
            | ExprKind::Text { expression }
            | ExprKind::SimpleAnd { expression }
            | ExprKind::SimpleNot { expression }
            | ExprKind::Optional { expression }
            | ExprKind::ZeroOrMore { expression }
            | ExprKind::OneOrMore { expression } => std::slice::from_mut(&mut **expression),
            _ => &mut [],
        }
    }

    fn renumber(&mut self, next: u32) -> u32 {
        self.id = NodeId(next);
        let mut next = next + 1;
        for child in self.children_mut() {
            next = child.renumber(next);
        }
        next
    }

    fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Expr::subtree_len).sum::<usize>()
    }
}

impl ExprKind {
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Named { .. } => "named",
            ExprKind::Choice { .. } => "choice",
            ExprKind::Action { .. } => "action",
            ExprKind::Sequence { .. } => "sequence",
            ExprKind::Labeled { .. } => "labeled",
            ExprKind::Text { .. } => "text",
            ExprKind::SimpleAnd { .. } => "simple_and",
            ExprKind::SimpleNot { .. } => "simple_not",
            ExprKind::Optional { .. } => "optional",
            ExprKind::ZeroOrMore { .. } => "zero_or_more",
            ExprKind::OneOrMore { .. } => "one_or_more",
            ExprKind::SemanticAnd { .. } => "semantic_and",
            ExprKind::SemanticNot { .. } => "semantic_not",
            ExprKind::RuleRef { .. } => "rule_ref",
            ExprKind::Literal { .. } => "literal",
            ExprKind::Class { .. } => "class",
            ExprKind::Any => "any",
        }
    }
}
