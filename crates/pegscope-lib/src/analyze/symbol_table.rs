//! Rule definitions and rule references.
//!
//! Definitions are collected while the scope builder visits rules; references while it
//! visits `rule_ref` nodes. Once the walk is done, [`check_unreferenced`] reports every
//! rule nothing points at, except the entry rule.

use indexmap::IndexMap;

use crate::ast::Location;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleEntry {
    pub name: String,
    pub location: Location,
}

/// Rules by name, in declaration order. The first declaration of a name wins.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: IndexMap<String, RuleEntry>,
    entry: Option<String>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. Returns the earlier entry if the name is taken.
    ///
    /// The first name ever declared becomes the entry rule, even if it is later redeclared.
    pub fn declare(&mut self, name: &str, location: Location) -> Result<(), &RuleEntry> {
        if self.entry.is_none() {
            self.entry = Some(name.to_owned());
        }
        if self.rules.contains_key(name) {
            return Err(&self.rules[name]);
        }
        let entry = RuleEntry {
            name: name.to_owned(),
            location,
        };
        self.rules.insert(name.to_owned(), entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// The first-declared rule, the grammar's default start rule.
    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleEntry> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Name to location of every registered rule.
    pub fn locations(&self) -> IndexMap<String, Location> {
        self.rules
            .iter()
            .map(|(name, entry)| (name.clone(), entry.location))
            .collect()
    }
}

/// Names used by `rule_ref` nodes, in first-use order.
#[derive(Clone, Debug, Default)]
pub struct RuleReferences {
    referenced: IndexMap<String, usize>,
}

impl RuleReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str) {
        *self.referenced.entry(name.to_owned()).or_default() += 1;
    }

    pub fn is_referenced(&self, name: &str) -> bool {
        self.referenced.contains_key(name)
    }

    /// How many `rule_ref` nodes point at `name`.
    pub fn count(&self, name: &str) -> usize {
        self.referenced.get(name).copied().unwrap_or(0)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.referenced.keys().map(String::as_str)
    }
}

pub fn check_unreferenced(rules: &RuleTable, references: &RuleReferences, diag: &mut Diagnostics) {
    for rule in rules.iter() {
        if references.is_referenced(&rule.name) || rules.entry() == Some(rule.name.as_str()) {
            continue;
        }
        diag.report_at(DiagnosticKind::UnreferencedRule, &rule.location)
            .message(&rule.name)
            .emit();
    }
}
