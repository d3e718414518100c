//! Rewrite engine — fold a rule set over a file's text and write on change.
//!
//! 1. Read the whole file as UTF-8
//! 2. Apply each rule to the output of the previous one
//! 3. Compare against the original and write back only if it differs

use super::rules::RuleSet;
use crate::error::Result;
use crate::utils::io;
use serde::Serialize;
use std::path::Path;

// ============================================================================
// Types
// ============================================================================

/// How many times one rule fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub label: String,
    pub replacements: usize,
}

/// Result of folding a rule set over in-memory text.
#[derive(Debug, Clone)]
pub struct ContentRewrite {
    pub content: String,
    /// One entry per rule, in rule order.
    pub hits: Vec<RuleHit>,
}

impl ContentRewrite {
    pub fn replacements(&self) -> usize {
        self.hits.iter().map(|h| h.replacements).sum()
    }
}

/// Outcome of rewriting one file.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResult {
    /// Path as given by the caller.
    pub file: String,
    /// Whether the content differed and was written back.
    pub changed: bool,
    /// Total replacements across all rules.
    pub replacements: usize,
    pub rule_hits: Vec<RuleHit>,
}

// ============================================================================
// Rewriting
// ============================================================================

/// Apply every rule in order, each to the previous rule's output.
pub fn rewrite_content(content: &str, rules: &RuleSet) -> ContentRewrite {
    let mut current = content.to_string();
    let mut hits = Vec::with_capacity(rules.len());

    for rule in rules.rules() {
        let count = rule.pattern.find_iter(&current).count();
        if count > 0 {
            current = rule
                .pattern
                .replace_all(&current, rule.replacement.as_str())
                .into_owned();
        }
        hits.push(RuleHit {
            label: rule.label.clone(),
            replacements: count,
        });
    }

    ContentRewrite {
        content: current,
        hits,
    }
}

/// Rewrite `path` in place. The file is written only if the final text
/// differs from what was read.
pub fn rewrite_file(path: &Path, rules: &RuleSet) -> Result<RewriteResult> {
    let display = path.display().to_string();

    log_status!("refactor", "Applying {} rules to {}", rules.len(), display);

    let original = io::read_file(path, &format!("read {}", display))?;
    let rewritten = rewrite_content(&original, rules);
    let changed = rewritten.content != original;

    if changed {
        io::write_file(path, &rewritten.content, &format!("write {}", display))?;
    } else {
        log_status!("refactor", "No changes for {}", display);
    }

    Ok(RewriteResult {
        file: display,
        changed,
        replacements: rewritten.replacements(),
        rule_hits: rewritten.hits,
    })
}

// ============================================================================
// Tests
// ============================================================================
