use std::env;
use std::path::Path;
use std::process::Command;

/// Stamp `TALLY_BUILD_SHA` for `tally --version`.
///
/// Packaged sources have no `.git`, so a value already set in the
/// environment wins; otherwise ask git, marking uncommitted changes.
fn main() {
    println!("cargo:rerun-if-env-changed=TALLY_BUILD_SHA");

    let workspace = Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
        .join("..");
    let git_dir = workspace.join(".git");
    for tracked in ["HEAD", "index"] {
        let p = git_dir.join(tracked);
        if p.exists() {
            println!("cargo:rerun-if-changed={}", p.display());
        }
    }

    let stamp = env::var("TALLY_BUILD_SHA")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| git_describe(&workspace))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=TALLY_BUILD_SHA={stamp}");
}

fn git_describe(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (out.status.success() && !text.is_empty()).then_some(text)
}
