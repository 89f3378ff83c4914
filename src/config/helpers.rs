use std::path::{Path, PathBuf};

use crate::XxmlError;

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_home(path: &Path) -> Result<PathBuf, XxmlError> {
    let raw = path.to_string_lossy();

    match raw.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                XxmlError::file_error(
                    "Could not determine home directory for ~ expansion".into(),
                    raw.to_string(),
                    300,
                )
                .with_hint("Set HOME or use an absolute path")
            })?;
            Ok(home.join(rest))
        }
        None => Ok(path.to_path_buf()),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find the first line declaring the last segment of `path`, as a tag
/// (`<Key = ...>`), an assignment (`Key = ...`) or a namespace (`[<Key>`).
///
/// Returns the 1-based line number and the trimmed line, or `None`.
pub(super) fn find_declaration_line(path: &str, raw_content: &str) -> Option<(usize, String)> {
    let key = path.rsplit('.').next().filter(|k| !k.is_empty())?;

    for (index, line) in raw_content.lines().enumerate() {
        let code = line.split("//").next().unwrap_or("");

        for (start, _) in code.match_indices(key) {
            let before = code[..start].chars().next_back();
            let after = code[start + key.len()..].trim_start().chars().next();

            let standalone = !before.is_some_and(is_ident_char);
            let declares = matches!(after, Some('=') | Some('>'));
            if standalone && declares {
                return Some((index + 1, line.trim().to_string()));
            }
        }
    }

    None
}
