// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

/// An external command: program name followed by its arguments.
///
/// Built once per action and consumed by the process runner. Tokens are
/// passed to the program verbatim; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Full argument vector including the program name.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CommandLine;

    #[test]
    fn argv_keeps_token_order() {
        let command = CommandLine::new("mount")
            .args(["-t", "ocfs2"])
            .arg("/dev/sdb1")
            .arg("/mnt/my volume");

        assert_eq!(
            command.argv(),
            vec!["mount", "-t", "ocfs2", "/dev/sdb1", "/mnt/my volume"]
        );
        assert_eq!(command.program(), "mount");
        assert_eq!(command.arguments().len(), 4);
    }

    #[test]
    fn renders_for_logs() {
        assert_eq!(CommandLine::new("blkid").to_string(), "blkid");
        assert_eq!(
            CommandLine::new("umount").arg("/mnt/a").to_string(),
            "umount /mnt/a"
        );
    }
}
