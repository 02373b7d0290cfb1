//! Label environments.
//!
//! Each environment is a frame holding its own bindings and a link to its parent.
//! Forking creates a child frame; ancestors are never copied. Lookups walk the
//! chain from the innermost frame outwards, so inner bindings shadow outer ones.
//!
//! Label records live in a flat arena next to the frames. Two labels with the same
//! name in different frames are separate records with separate `seen` flags.

use indexmap::IndexMap;

use crate::ast::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The grammar-level environment. Holds no bindings; rules start from fresh roots.
    pub const GRAMMAR: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(u32);

impl LabelId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelRecord {
    pub name: String,
    pub location: Location,
    pub scope: ScopeId,
    seen: bool,
}

impl LabelRecord {
    pub fn is_seen(&self) -> bool {
        self.seen
    }
}

#[derive(Clone, Debug, Default)]
struct Frame {
    parent: Option<ScopeId>,
    bindings: IndexMap<String, LabelId>,
}

#[derive(Clone, Debug)]
pub struct ScopeTree {
    frames: Vec<Frame>,
    labels: Vec<LabelRecord>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
            labels: Vec::new(),
        }
    }

    /// A new environment with no parent.
    pub fn root(&mut self) -> ScopeId {
        self.push_frame(None)
    }

    /// A new child environment of `parent`.
    pub fn fork(&mut self, parent: ScopeId) -> ScopeId {
        self.push_frame(Some(parent))
    }

    fn push_frame(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.frames.len() as u32);
        self.frames.push(Frame {
            parent,
            bindings: IndexMap::new(),
        });
        id
    }

    /// Bind `name` in exactly `scope`.
    ///
    /// Returns the existing label when `scope` already binds `name`; the existing
    /// binding is left untouched. Bindings in ancestors do not conflict.
    pub fn bind(&mut self, scope: ScopeId, name: &str, location: Location) -> Result<LabelId, LabelId> {
        if let Some(&existing) = self.frames[scope.index()].bindings.get(name) {
            return Err(existing);
        }
        let id = LabelId(self.labels.len() as u32);
        self.labels.push(LabelRecord {
            name: name.to_owned(),
            location,
            scope,
            seen: false,
        });
        self.frames[scope.index()]
            .bindings
            .insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.frames[scope.index()].parent
    }

    /// `scope` followed by each of its ancestors, innermost first.
    pub fn chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |&s| self.parent(s))
    }

    /// Resolve `name` from `scope` outwards.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<LabelId> {
        self.chain(scope)
            .find_map(|s| self.frames[s.index()].bindings.get(name).copied())
    }

    /// Every label visible from `scope`, one per name.
    ///
    /// Ordered outermost first, in binding order; a shadowing label takes the place
    /// of the name it shadows.
    pub fn visible(&self, scope: ScopeId) -> Vec<LabelId> {
        let mut frames: Vec<ScopeId> = self.chain(scope).collect();
        frames.reverse();

        let mut visible: IndexMap<&str, LabelId> = IndexMap::new();
        for frame in frames {
            for (name, &label) in &self.frames[frame.index()].bindings {
                visible.insert(name.as_str(), label);
            }
        }
        visible.into_values().collect()
    }

    /// Returns `true` when the label was not seen before.
    pub fn mark_seen(&mut self, label: LabelId) -> bool {
        let record = &mut self.labels[label.index()];
        !std::mem::replace(&mut record.seen, true)
    }

    pub fn label(&self, label: LabelId) -> &LabelRecord {
        &self.labels[label.index()]
    }

    pub fn labels(&self) -> impl Iterator<Item = (LabelId, &LabelRecord)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, record)| (LabelId(i as u32), record))
    }

    /// Labels bound directly in `scope`, in binding order.
    pub fn bindings(&self, scope: ScopeId) -> impl Iterator<Item = LabelId> + '_ {
        self.frames[scope.index()].bindings.values().copied()
    }

    /// Direct children of `scope`, in creation order.
    pub fn children(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter(move |(_, frame)| frame.parent == Some(scope))
            .map(|(i, _)| ScopeId(i as u32))
    }

    pub fn scope_count(&self) -> usize {
        self.frames.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}
