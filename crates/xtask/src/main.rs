use anyhow::Context;
use serde::Deserialize;

/// `(crate, forbidden dependency)` pairs. The domain stays free of the wire
/// format and the renderer; the wire format stays free of the client.
const LAYERING_RULES: &[(&str, &str)] = &[
    ("mudmap-domain", "mudmap-shared"),
    ("mudmap-domain", "mudmap-player"),
    ("mudmap-domain", "dioxus"),
    ("mudmap-shared", "mudmap-player"),
    ("mudmap-shared", "dioxus"),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
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
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let violations = layering_violations(&metadata);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("  {violation}");
        }
        anyhow::bail!("arch-check failed: {} layering violation(s)", violations.len());
    }

    println!(
        "arch-check passed ({} packages, {} rules)",
        metadata.packages.len(),
        LAYERING_RULES.len()
    );
    Ok(())
}

fn layering_violations(metadata: &Metadata) -> Vec<String> {
    let mut violations = Vec::new();
    for package in &metadata.packages {
        for (krate, forbidden) in LAYERING_RULES {
            if package.name != *krate {
                continue;
            }
            if package.dependencies.iter().any(|dep| dep.name == *forbidden) {
                violations.push(format!("{} must not depend on {}", krate, forbidden));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).expect("valid metadata")
    }

    #[test]
    fn test_clean_layering_passes() {
        let metadata = metadata(
            r#"{"packages":[
                {"name":"mudmap-domain","dependencies":[{"name":"serde"}]},
                {"name":"mudmap-shared","dependencies":[{"name":"mudmap-domain"}]},
                {"name":"mudmap-player","dependencies":[{"name":"mudmap-shared"},{"name":"dioxus"}]}
            ]}"#,
        );
        assert!(layering_violations(&metadata).is_empty());
    }

    #[test]
    fn test_domain_on_renderer_is_flagged() {
        let metadata = metadata(
            r#"{"packages":[
                {"name":"mudmap-domain","dependencies":[{"name":"dioxus"}]}
            ]}"#,
        );
        assert_eq!(
            layering_violations(&metadata),
            vec!["mudmap-domain must not depend on dioxus".to_string()]
        );
    }
}
