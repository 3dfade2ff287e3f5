use super::layout::ScaffoldLayout;
use crate::error::{Result, ScaffoldError};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// What a generation pass wrote
#[derive(Debug, Clone, Default)]
pub struct GeneratedTree {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Create `root`, every layout directory, and every file (overwriting).
pub fn write_layout(root: &Path, layout: &ScaffoldLayout) -> Result<GeneratedTree> {
    ensure_dir(root)?;

    let mut tree = GeneratedTree {
        root: root.to_path_buf(),
        ..GeneratedTree::default()
    };

    for dir in &layout.directories {
        let path = root.join(dir);
        ensure_dir(&path)?;
        tree.directories.push(path);
    }

    for file in &layout.files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&path, &file.content).map_err(|source| ScaffoldError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {} ({} bytes)", path.display(), file.content.len());
        tree.files.push(path);
    }

    info!(
        "Generated {} directories and {} files under {}",
        tree.directories.len(),
        tree.files.len(),
        root.display()
    );
    Ok(tree)
}

/// Print what `write_layout` would do
pub fn print_plan(root: &Path, layout: &ScaffoldLayout) {
    println!("--- {} (dry run) ---", root.display());
    for dir in &layout.directories {
        println!("  📁 {}/", dir);
    }
    for file in &layout.files {
        println!("  📄 {} ({} bytes)", file.path, file.content.len());
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::layout::TemplateValues;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    /// relative path -> content (None for directories)
    fn snapshot(root: &Path) -> BTreeMap<String, Option<String>> {
        let mut out = BTreeMap::new();
        visit(root, root, &mut out);
        out
    }

    fn visit(root: &Path, dir: &Path, out: &mut BTreeMap<String, Option<String>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let rel = path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if path.is_dir() {
                out.insert(rel, None);
                visit(root, &path, out);
            } else {
                out.insert(rel, Some(fs::read_to_string(&path).unwrap()));
            }
        }
    }

    fn layout() -> ScaffoldLayout {
        ScaffoldLayout::fastapi(&TemplateValues::default()).unwrap()
    }

    #[test]
    fn writes_every_directory_and_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("backend");
        let tree = write_layout(&root, &layout()).unwrap();

        assert_eq!(tree.directories.len(), 8);
        assert_eq!(tree.files.len(), 14);
        assert!(root.join("migrations").is_dir());
        assert!(root.join("app/services/__init__.py").is_file());
        assert_eq!(
            fs::read_to_string(root.join("app/core/__init__.py")).unwrap(),
            ""
        );
        assert!(
            fs::read_to_string(root.join("app/main.py"))
                .unwrap()
                .starts_with("from fastapi import FastAPI\n")
        );
    }

    #[test]
    fn two_runs_produce_identical_trees() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        write_layout(a.path(), &layout()).unwrap();
        write_layout(b.path(), &layout()).unwrap();

        let snap_a = snapshot(a.path());
        let snap_b = snapshot(b.path());
        assert_eq!(snap_a, snap_b);
        assert!(snap_a.contains_key(".env.example"));
    }

    #[test]
    fn rerun_overwrites_edited_files() {
        let dir = tempdir().unwrap();
        write_layout(dir.path(), &layout()).unwrap();
        let before = snapshot(dir.path());

        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();
        write_layout(dir.path(), &layout()).unwrap();

        assert_eq!(snapshot(dir.path()), before);
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_root_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

        // root ignores permission bits
        let probe = locked.join("probe");
        if fs::write(&probe, "").is_ok() {
            return;
        }

        let err = write_layout(&locked.join("backend"), &layout()).unwrap_err();
        assert!(matches!(err, ScaffoldError::WriteFailed { .. }));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();
    }
}
