//! Rule records and compiled rule sets.

use crate::error::{Error, Result};
use regex::Regex;
use serde::Serialize;

// ============================================================================
// Built-in configuration
// ============================================================================

/// File rewritten by the binary, relative to the working directory.
pub const DEFAULT_TARGET: &str = "electron/src/main.ts";

/// Moves `./ipc/<name>` modules to `./handlers/<name>.handler` and renames
/// the `<name>Ipc` bindings that import them.
pub const IPC_TO_HANDLERS: &[RuleSpec] = &[
    RuleSpec {
        label: "import-path",
        pattern: r#""\./ipc/([^"]+)""#,
        replacement: r#""./handlers/${1}.handler""#,
    },
    RuleSpec {
        label: "namespace-alias",
        pattern: r"import \* as (\w+)Ipc",
        replacement: "import * as ${1}Handler",
    },
    RuleSpec {
        label: "register-call",
        pattern: r"(\w+)Ipc\.register",
        replacement: "${1}Handler.register",
    },
];

// ============================================================================
// Types
// ============================================================================

/// An uncompiled (pattern, replacement) pair.
///
/// `replacement` uses `regex` expansion syntax; prefer `${1}` over `$1` so a
/// group reference followed by word characters stays unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleSpec {
    pub label: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub label: String,
    pub pattern: Regex,
    pub replacement: String,
}

impl Rule {
    pub fn new(label: &str, pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| Error::invalid_rule(label, e))?;
        Ok(Rule {
            label: label.to_string(),
            pattern: regex,
            replacement: replacement.to_string(),
        })
    }
}

/// Rules applied in order, each to the previous rule's output.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile `specs` in order. Fails on the first invalid pattern.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|s| Rule::new(s.label, s.pattern, s.replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleSet { rules })
    }

    pub fn ipc_to_handlers() -> Result<Self> {
        Self::compile(IPC_TO_HANDLERS)
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
