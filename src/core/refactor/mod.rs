//! Textual refactoring — apply an ordered set of regex rules to one file.
//!
//! Reads the file, folds every rule over its content, and writes the result
//! back only when something changed.

mod rewrite;
mod rules;

pub use rewrite::{rewrite_content, rewrite_file, ContentRewrite, RewriteResult, RuleHit};
pub use rules::{Rule, RuleSet, RuleSpec, DEFAULT_TARGET, IPC_TO_HANDLERS};
