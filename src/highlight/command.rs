//! Highlighting through an external command.
//!
//! The command is given as a shell-style template with `{lang}` and `{theme}`
//! placeholders. Source text is written to its stdin and the HTML is read
//! from its stdout.

use std::io::Write;
use std::process::{Command, Stdio};

use shlex::Shlex;

use crate::{ViewerError, ViewerResult};

use super::traits::Highlighter;

pub struct CommandHighlighter {
    command_template: String,
}

impl CommandHighlighter {
    pub fn new(command_template: impl Into<String>) -> Self {
        CommandHighlighter {
            command_template: command_template.into(),
        }
    }

    pub fn command_template(&self) -> &str {
        &self.command_template
    }

    fn build_command(&self, language: &str, theme: &str) -> ViewerResult<Command> {
        let mut parts: Vec<String> = Shlex::new(&self.command_template).collect();
        if parts.is_empty() {
            return Err(ViewerError::Message("empty highlight command template".into()));
        }
        for p in &mut parts {
            *p = p.replace("{lang}", language).replace("{theme}", theme);
        }
        let mut cmd = Command::new(&parts[0]);
        cmd.args(&parts[1..]);
        Ok(cmd)
    }
}

impl Highlighter for CommandHighlighter {
    fn name(&self) -> &str {
        "command"
    }

    fn highlight(&self, text: &str, language: &str, theme: &str) -> ViewerResult<String> {
        let mut cmd = self.build_command(language, theme)?;
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ViewerError::Message(format!("failed to spawn highlighter: {e}")))?;

        // stdin is written while stdout is drained
        let stdin = child.stdin.take();
        let input = text.as_bytes().to_vec();
        let writer = std::thread::spawn(move || -> std::io::Result<()> {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&input)?;
            }
            Ok(())
        });

        let output = child
            .wait_with_output()
            .map_err(|e| ViewerError::Message(format!("failed to run highlighter: {e}")))?;

        if let Ok(Err(e)) = writer.join() {
            // A child that exits without reading stdin yields a broken pipe;
            // its exit status below decides the outcome.
            tracing::debug!(error = %e, "highlighter stdin closed early");
        }

        if !output.status.success() {
            return Err(ViewerError::Message(format!(
                "highlighter failed: status={} stderr={}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| ViewerError::Message(format!("highlighter output is not UTF-8: {e}")))
    }
}
