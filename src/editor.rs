use std::io;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// Suspend the TUI, open `$EDITOR` at the case's recorded location, then
/// restore the screen.
pub fn open(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    file: &str,
    line: Option<u32>,
    col: Option<u32>,
) -> Result<()> {
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".into());
    let result = std::process::Command::new(&editor)
        .args(location_args(&editor, file, line, col))
        .status();

    io::stdout().execute(EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    terminal.clear()?;

    result.map_err(|_| anyhow::anyhow!("editor '{}' not found or failed to launch", editor))?;
    Ok(())
}

/// Argument shape per editor family, detected from the binary name.
fn location_args(editor: &str, file: &str, line: Option<u32>, col: Option<u32>) -> Vec<String> {
    let bin = std::path::Path::new(editor)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(editor);

    match bin {
        // code --goto file:line:col
        "code" | "code-insiders" | "codium" => {
            vec!["--goto".to_string(), joined_location(file, line, col)]
        }
        // hx file:line:col  |  zed file:line:col
        "hx" | "helix" | "zed" => vec![joined_location(file, line, col)],
        // vim-family: +line file
        _ => match line {
            Some(l) => vec![format!("+{}", l), file.to_string()],
            None => vec![file.to_string()],
        },
    }
}

fn joined_location(file: &str, line: Option<u32>, col: Option<u32>) -> String {
    match (line, col) {
        (Some(l), Some(c)) => format!("{}:{}:{}", file, l, c),
        (Some(l), None) => format!("{}:{}", file, l),
        _ => file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_family_uses_plus_line() {
        assert_eq!(
            location_args("vim", "a_test.go", Some(17), Some(6)),
            vec!["+17", "a_test.go"]
        );
        assert_eq!(
            location_args("/usr/bin/nvim", "a_test.go", None, None),
            vec!["a_test.go"]
        );
    }

    #[test]
    fn helix_and_zed_join_with_colons() {
        assert_eq!(
            location_args("hx", "a_test.go", Some(17), Some(6)),
            vec!["a_test.go:17:6"]
        );
        assert_eq!(
            location_args("zed", "a_test.go", Some(17), None),
            vec!["a_test.go:17"]
        );
    }

    #[test]
    fn vscode_uses_goto() {
        assert_eq!(
            location_args("code", "a_test.go", Some(17), Some(6)),
            vec!["--goto", "a_test.go:17:6"]
        );
    }
}
