//! Git hook installation and management.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::HOOKS_DIR;
use crate::error::Result;
use crate::git::GitCli;

/// Marker comment identifying our lines in a hook script.
const MARKER: &str = "# wipguard";

/// Pre-push hook lines. Git runs hooks from the work-tree root, which is
/// where the log path resolves.
const PRE_PUSH_LINES: &str = r#"# wipguard: refuse to push work-in-progress branches (auto-installed)
wipguard pre-push "$@" || exit 1
"#;

/// Location of the pre-push hook git will run for this work tree.
fn pre_push_path(project_root: &Path) -> Result<PathBuf> {
    Ok(GitCli::new(project_root).hooks_dir()?.join("pre-push"))
}

/// Check if the wipguard pre-push hook is installed.
pub fn hook_installed(project_root: &Path) -> Result<bool> {
    let path = pre_push_path(project_root)?;
    Ok(fs::read_to_string(path)
        .map(|content| content.contains(MARKER))
        .unwrap_or(false))
}

/// Install the pre-push hook and create the log directory.
pub fn install(project_root: &Path) -> Result<()> {
    let pre_push_path = pre_push_path(project_root)?;

    let log_dir = project_root.join(HOOKS_DIR);
    fs::create_dir_all(&log_dir)?;
    info!(path = %log_dir.display(), "Ensured hook log directory");

    if hook_installed(project_root)? {
        println!("Pre-push hook already installed.");
        return Ok(());
    }

    if let Some(hooks_dir) = pre_push_path.parent() {
        fs::create_dir_all(hooks_dir)?;
    }

    let final_content = if pre_push_path.exists() {
        splice_into(&fs::read_to_string(&pre_push_path)?)
    } else {
        format!("#!/bin/sh\n\n{}", PRE_PUSH_LINES)
    };

    fs::write(&pre_push_path, final_content)?;
    fs::set_permissions(&pre_push_path, fs::Permissions::from_mode(0o755))?;
    info!(path = %pre_push_path.display(), "Installed pre-push hook");
    println!("Pre-push hook installed.");

    Ok(())
}

/// Add our lines to an existing hook. A trailing `exit` stays last so the
/// check is still reached.
fn splice_into(existing: &str) -> String {
    let lines: Vec<&str> = existing.trim_end().lines().collect();
    let last = lines.iter().rposition(|l| !l.trim().is_empty());

    match last {
        Some(i) if is_exit(lines[i]) => format!(
            "{}\n\n{}\n{}\n",
            lines[..i].join("\n").trim_end(),
            PRE_PUSH_LINES.trim_end(),
            lines[i]
        ),
        _ => format!("{}\n\n{}", existing.trim_end(), PRE_PUSH_LINES),
    }
}

fn is_exit(line: &str) -> bool {
    let line = line.trim();
    line == "exit" || line.starts_with("exit ")
}

/// Remove our lines from the pre-push hook.
pub fn uninstall(project_root: &Path) -> Result<()> {
    let hook_path = pre_push_path(project_root)?;
    if !hook_path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&hook_path)?;
    if !content.contains(MARKER) {
        return Ok(());
    }

    let cleaned = remove_wipguard_section(&content);
    let meaningful = cleaned
        .lines()
        .any(|l| !l.trim().is_empty() && !l.starts_with("#!"));

    if meaningful {
        fs::write(&hook_path, format!("{}\n", cleaned.trim_end()))?;
        info!(path = %hook_path.display(), "Removed wipguard lines from pre-push hook");
    } else {
        fs::remove_file(&hook_path)?;
        info!(path = %hook_path.display(), "Removed pre-push hook");
    }
    println!("Pre-push hook removed.");

    Ok(())
}

fn remove_wipguard_section(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.contains(MARKER) && !line.contains("wipguard pre-push"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::git::tests::{create_test_repo, git};
    use tempfile::TempDir;

    fn hook_path(root: &Path) -> PathBuf {
        pre_push_path(root).unwrap()
    }

    fn write_hook(root: &Path, content: &str) {
        let path = hook_path(root);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_install_creates_hook_and_log_dir() {
        let repo = create_test_repo();

        install(repo.path()).unwrap();

        let content = fs::read_to_string(hook_path(repo.path())).unwrap();
        assert!(content.starts_with("#!/bin/sh"));
        assert!(content.contains("wipguard pre-push \"$@\" || exit 1"));
        assert!(repo.path().join(HOOKS_DIR).is_dir());
        assert!(hook_installed(repo.path()).unwrap());

        let mode = fs::metadata(hook_path(repo.path()))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_install_appends_to_existing_hook() {
        let repo = create_test_repo();
        write_hook(repo.path(), "#!/bin/sh\nrun-lints\n");

        install(repo.path()).unwrap();

        let content = fs::read_to_string(hook_path(repo.path())).unwrap();
        assert!(content.contains("run-lints"));
        assert!(content.contains("wipguard pre-push"));
    }

    #[test]
    fn test_install_keeps_trailing_exit_last() {
        let repo = create_test_repo();
        write_hook(repo.path(), "#!/bin/sh\nrun-lints\nexit 0\n\n");

        install(repo.path()).unwrap();

        let content = fs::read_to_string(hook_path(repo.path())).unwrap();
        let ours = content.find("wipguard pre-push").unwrap();
        let exit = content.find("exit 0").unwrap();
        assert!(ours < exit);
        assert!(content.trim_end().ends_with("exit 0"));
        assert!(content.contains("run-lints"));
    }

    #[test]
    fn test_install_is_idempotent() {
        let repo = create_test_repo();

        install(repo.path()).unwrap();
        let first = fs::read_to_string(hook_path(repo.path())).unwrap();
        install(repo.path()).unwrap();
        let second = fs::read_to_string(hook_path(repo.path())).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_install_from_linked_worktree() {
        let repo = create_test_repo();
        git(repo.path(), &["worktree", "add", "-q", "-b", "side", "wt"]);
        let worktree = repo.path().join("wt");

        install(&worktree).unwrap();

        let shared = repo.path().join(".git").join("hooks").join("pre-push");
        assert!(fs::read_to_string(shared).unwrap().contains(MARKER));
        assert!(worktree.join(HOOKS_DIR).is_dir());
        assert!(hook_installed(repo.path()).unwrap());
    }

    #[test]
    fn test_install_honors_hooks_path() {
        let repo = create_test_repo();
        git(repo.path(), &["config", "core.hooksPath", "custom-hooks"]);

        install(repo.path()).unwrap();

        let content = fs::read_to_string(repo.path().join("custom-hooks").join("pre-push"));
        assert!(content.unwrap().contains(MARKER));
    }

    #[test]
    fn test_install_fails_outside_git() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(install(tmp.path()), Err(Error::NotAGitRepo(_))));
    }

    #[test]
    fn test_uninstall_keeps_foreign_lines() {
        let repo = create_test_repo();
        write_hook(repo.path(), "#!/bin/sh\nrun-lints\n");
        install(repo.path()).unwrap();

        uninstall(repo.path()).unwrap();

        let content = fs::read_to_string(hook_path(repo.path())).unwrap();
        assert!(content.contains("run-lints"));
        assert!(!content.contains("wipguard"));
    }

    #[test]
    fn test_uninstall_deletes_own_hook() {
        let repo = create_test_repo();
        install(repo.path()).unwrap();

        uninstall(repo.path()).unwrap();

        assert!(!hook_path(repo.path()).exists());
        assert!(!hook_installed(repo.path()).unwrap());
    }

    #[test]
    fn test_uninstall_without_hook_is_noop() {
        let repo = create_test_repo();
        uninstall(repo.path()).unwrap();
        assert!(!hook_path(repo.path()).exists());
    }
}
