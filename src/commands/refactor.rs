use serde::Serialize;
use std::path::Path;

use rewire::refactor::{self, RuleSet, IPC_TO_HANDLERS};

use crate::commands::CmdResult;

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum RefactorOutput {
    #[serde(rename = "refactor.rewrite")]
    Rewrite {
        file: String,
        changed: bool,
        replacements: usize,
        rules: Vec<RuleSummary>,
    },
}

#[derive(Debug, Serialize)]
pub struct RuleSummary {
    pub label: String,
    pub pattern: String,
    pub replacement: String,
    pub replacements: usize,
}

/// Run the built-in IPC-to-handlers rewrite against `target`.
pub fn run(target: &Path) -> CmdResult<RefactorOutput> {
    crate::tty::status("rewire is working...");

    let rules = RuleSet::ipc_to_handlers()?;
    let result = refactor::rewrite_file(target, &rules)?;

    let summaries = IPC_TO_HANDLERS
        .iter()
        .zip(result.rule_hits.iter())
        .map(|(spec, hit)| RuleSummary {
            label: spec.label.to_string(),
            pattern: spec.pattern.to_string(),
            replacement: spec.replacement.to_string(),
            replacements: hit.replacements,
        })
        .collect();

    Ok(RefactorOutput::Rewrite {
        file: result.file,
        changed: result.changed,
        replacements: result.replacements,
        rules: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn run_summarizes_each_rule() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.ts");
        fs::write(
            &path,
            "import * as authIpc from \"./ipc/auth\";\nauthIpc.register(app);\n",
        )
        .unwrap();

        let RefactorOutput::Rewrite {
            changed,
            replacements,
            rules,
            ..
        } = run(&path).unwrap();

        assert!(changed);
        assert_eq!(replacements, 3);
        assert_eq!(rules.len(), 3);
        assert!(rules.iter().all(|r| r.replacements == 1));
        assert_eq!(rules[0].label, "import-path");
    }

    #[test]
    fn run_surfaces_read_failure() {
        let dir = TempDir::new().unwrap();
        let err = run(&dir.path().join("absent.ts")).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
