//! Scripted mock process executor

use std::collections::HashMap;

use async_trait::async_trait;
use gittraining_core::store::{ExecOutput, Executor};

/// [`Executor`] that serves scripted outputs keyed by the full command
/// line (`"git branch --show-current"`).
///
/// An unscripted command reports code 127, like a missing binary.
#[derive(Debug, Default)]
pub struct MockExecutor {
    outputs: HashMap<String, ExecOutput>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: script the output for a command line.
    pub fn with_output(mut self, command_line: &str, output: ExecOutput) -> Self {
        self.outputs.insert(command_line.to_string(), output);
        self
    }
}

#[async_trait]
impl Executor for MockExecutor {
    async fn run(&self, command: &str, args: &[&str]) -> ExecOutput {
        let mut line = command.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.outputs.get(&line).cloned().unwrap_or(ExecOutput {
            stdout: String::new(),
            stderr: format!("{line}: not scripted"),
            code: 127,
        })
    }
}
