//! Options handed to the external linter.

use serde::{Deserialize, Serialize};

/// Linter configuration, fixed for the lifetime of an [`Analyzer`](crate::Analyzer).
///
/// Field names follow JSHint's option names so the struct serializes straight into a
/// JSHint options object. Defaults are permissive: extracted action code is a
/// fragment of a larger generated parser, not a standalone script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintOptions {
    pub undef: bool,
    pub esnext: bool,
    pub moz: bool,
    pub devel: bool,
    pub browser: bool,
    pub node: bool,
    pub laxcomma: bool,
    pub laxbreak: bool,
    pub lastsemic: bool,
    pub onevar: bool,
    pub passfail: bool,
    pub maxerr: usize,
    pub expr: bool,
    pub multistr: bool,
    pub globalstrict: bool,
    /// Globals the linter should treat as declared.
    pub predef: Vec<String>,
    /// Width used to wrap grammar parse error messages.
    #[serde(skip_serializing)]
    pub wrap_width: usize,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            undef: true,
            esnext: true,
            moz: true,
            devel: true,
            browser: true,
            node: true,
            laxcomma: true,
            laxbreak: true,
            lastsemic: true,
            onevar: false,
            passfail: false,
            maxerr: 100_000,
            expr: true,
            multistr: true,
            globalstrict: true,
            // Bindings every action sees in a generated PEG.js parser
            predef: ["text", "location", "error", "expected"]
                .into_iter()
                .map(String::from)
                .collect(),
            wrap_width: 75,
        }
    }
}

impl LintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace the predeclared globals.
    pub fn predef<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predef = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add one predeclared global.
    pub fn with_global(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.predef.contains(&name) {
            self.predef.push(name);
        }
        self
    }

    /// Set the maximum number of findings the linter reports.
    pub fn maxerr(mut self, value: usize) -> Self {
        self.maxerr = value;
        self
    }

    /// Set whether undeclared variables are reported.
    pub fn undef(mut self, value: bool) -> Self {
        self.undef = value;
        self
    }

    /// Set the width grammar parse errors are wrapped at.
    pub fn wrap_width(mut self, value: usize) -> Self {
        self.wrap_width = value;
        self
    }
}
