use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates that must stay free of UI, runtime and logging dependencies.
const PURE_CRATES: &[&str] = &["saeweb-domain"];

/// Dependencies a pure crate may not declare.
const FORBIDDEN_DEPS: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "tokio",
    "tokio-util",
    "tracing",
    "web-sys",
    "js-sys",
    "gloo-timers",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = Vec::new();
    for package in metadata
        .packages
        .iter()
        .filter(|p| PURE_CRATES.contains(&p.name.as_str()))
    {
        violations.extend(dependency_violations(package));

        let src = package
            .manifest_path
            .parent()
            .map(|dir| dir.join("src"))
            .context("manifest path has no parent")?;
        violations.extend(source_violations(&package.name, &src)?);
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for v in &violations {
        eprintln!("arch-check: {v}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn dependency_violations(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        // dev-dependencies may pull in test runtimes
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| FORBIDDEN_DEPS.contains(&d.name.as_str()))
        .map(|d| format!("{} depends on {}", package.name, d.name))
        .collect()
}

fn source_violations(package: &str, src: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(r"\b(dioxus|tokio|tracing|web_sys|js_sys)::")
        .context("compiling import pattern")?;

    let mut violations = Vec::new();
    for file in rust_files(src)? {
        let text = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (line_no, line) in text.lines().enumerate() {
            if let Some(m) = pattern.find(line) {
                violations.push(format!(
                    "{package}: {}:{} uses {}",
                    file.display(),
                    line_no + 1,
                    m.as_str().trim_end_matches("::")
                ));
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(deps: &[(&str, Option<&str>)]) -> Package {
        Package {
            name: "saeweb-domain".to_string(),
            manifest_path: PathBuf::from("crates/domain/Cargo.toml"),
            dependencies: deps
                .iter()
                .map(|(name, kind)| Dependency {
                    name: name.to_string(),
                    kind: kind.map(str::to_string),
                })
                .collect(),
        }
    }

    #[test]
    fn runtime_dependency_is_reported() {
        let pkg = package(&[("serde", None), ("tokio", None)]);
        assert_eq!(
            dependency_violations(&pkg),
            vec!["saeweb-domain depends on tokio".to_string()]
        );
    }

    #[test]
    fn dev_dependencies_are_allowed() {
        let pkg = package(&[("tokio", Some("dev"))]);
        assert!(dependency_violations(&pkg).is_empty());
    }

    #[test]
    fn metadata_json_parses() {
        let json = r#"{"packages":[{"name":"saeweb-domain","manifest_path":"/x/Cargo.toml",
            "dependencies":[{"name":"serde","kind":null}]}]}"#;
        let metadata: Metadata = serde_json::from_str(json).expect("valid metadata");
        assert_eq!(metadata.packages[0].dependencies[0].name, "serde");
    }
}
