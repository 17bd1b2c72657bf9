use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

const BIN_NAME: &str = "courier";

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Zsh => Self::Zsh,
            CompletionShell::Fish => Self::Fish,
        }
    }
}

/// Completion script for `shell` as raw bytes.
pub fn render_completions(shell: CompletionShell) -> Vec<u8> {
    let mut script = Vec::new();
    clap_complete::generate(Shell::from(shell), &mut Cli::command(), BIN_NAME, &mut script);
    script
}

/// Write the script to `output_path` (printing the path) or to stdout.
pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = render_completions(shell);

    match output_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &script)?;
            println!("Wrote {shell:?} completions to {}", path.display());
        }
        None => io::stdout().lock().write_all(&script)?,
    }
    Ok(())
}
