use std::path::Path;

use crate::errors::AppError;

/// Indented directory listing: `name/` for directories, two spaces per level,
/// entries sorted by name.
pub fn render_tree(root: &Path) -> Result<String, AppError> {
    let mut out = String::new();
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    out.push_str(&format!("{name}/\n"));
    walk(root, 1, &mut out)?;
    Ok(out)
}

fn walk(dir: &Path, level: usize, out: &mut String) -> Result<(), AppError> {
    let mut entries = std::fs::read_dir(dir)
        .map_err(|e| AppError::io(dir, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::io(dir, e))?;
    entries.sort_by_key(|e| e.file_name());

    let indent = "  ".repeat(level);
    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            out.push_str(&format!("{indent}{name}/\n"));
            walk(&path, level + 1, out)?;
        } else {
            out.push_str(&format!("{indent}{name}\n"));
        }
    }
    Ok(())
}
