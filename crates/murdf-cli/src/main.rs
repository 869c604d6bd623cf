//! murdf CLI - render robot descriptions to URDF
//!
//! Reads a robot description (`.json` or `.toml`) and prints the URDF
//! document to stdout. Diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use murdf::{render, EmitConfig, Robot, ValidationPolicy};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "murdf")]
#[command(about = "Render robot descriptions as URDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URDF document for a robot description
    Render {
        /// Robot description (.json or .toml)
        input: PathBuf,
        /// Emitter settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Fail on the first shape problem
        #[arg(long)]
        strict: bool,
    },
    /// Report shape problems without printing the document
    Check {
        /// Robot description (.json or .toml)
        input: PathBuf,
        /// Emitter settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            config,
            strict,
        } => {
            let mut config = load_config(config.as_deref())?;
            if strict {
                config.policy = ValidationPolicy::Strict;
            }
            let robot = load_robot(&input)?;
            let rendered = render(&robot, &config)?;
            for diagnostic in &rendered.diagnostics {
                eprintln!("warning: {diagnostic}");
            }
            println!("{}", rendered.xml);
        }
        Commands::Check { input, config } => {
            let config = load_config(config.as_deref())?;
            let summary = check_file(&input, config)?;
            println!("{summary}");
        }
    }

    Ok(())
}

/// Emit `input` leniently, print each diagnostic, fail if there were any.
///
/// Returns the one-line summary for a clean description.
fn check_file(input: &Path, mut config: EmitConfig) -> Result<String> {
    config.policy = ValidationPolicy::Lenient;
    let robot = load_robot(input)?;
    let rendered = render(&robot, &config)?;
    for diagnostic in &rendered.diagnostics {
        println!("{}: {diagnostic}", input.display());
    }
    if !rendered.diagnostics.is_empty() {
        anyhow::bail!(
            "{} problem(s) found in {}",
            rendered.diagnostics.len(),
            input.display()
        );
    }
    Ok(format!(
        "{}: {} links, {} joints, no problems",
        input.display(),
        robot.links.len(),
        robot.joints.len()
    ))
}

fn load_config(path: Option<&Path>) -> Result<EmitConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Ok(EmitConfig::from_toml_str(&text)?)
        }
        None => Ok(EmitConfig::default()),
    }
}

fn load_robot(path: &Path) -> Result<Robot> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&text)
            .with_context(|| format!("parsing {} as JSON", path.display())),
        "toml" => {
            toml::from_str(&text).with_context(|| format!("parsing {} as TOML", path.display()))
        }
        _ => anyhow::bail!("Unknown input format: {}", ext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CLEAN_TOML: &str = r#"
name = "bot"

[[link]]
name = "base"

[link.collision.geometry]
kind = "box"
values = [1, 1, 0.5]

[[joint]]
name = "fixed_to_world"
type = "fixed"
parent = "world"
child = "base"
"#;

    const BROKEN_JSON: &str = r#"{
        "name": "bot",
        "link": [
            {"name": "base", "collision": {"geometry": {"kind": "box", "values": [1, 2]}}},
            {"name": "arm", "visual": {"geometry": {"kind": "mesh", "values": []}}}
        ]
    }"#;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn cli_parses_render_flags() {
        let cli = Cli::parse_from(["murdf", "render", "robot.toml", "--strict", "-c", "emit.toml"]);
        match cli.command {
            Commands::Render {
                input,
                config,
                strict,
            } => {
                assert_eq!(input, PathBuf::from("robot.toml"));
                assert_eq!(config, Some(PathBuf::from("emit.toml")));
                assert!(strict);
            }
            Commands::Check { .. } => panic!("expected render"),
        }
    }

    #[test]
    fn toml_robot_description() {
        let dir = tempdir().unwrap();
        let robot = load_robot(&write(dir.path(), "bot.toml", CLEAN_TOML)).unwrap();

        let rendered = render(&robot, &EmitConfig::default()).unwrap();
        assert!(rendered.xml.contains(r#"<box size="1, 1, 0.5"/>"#));
        assert!(rendered.xml.contains(r#"<parent link="world"/>"#));
    }

    #[test]
    fn json_robot_description() {
        let dir = tempdir().unwrap();
        let robot = load_robot(&write(dir.path(), "bot.JSON", BROKEN_JSON)).unwrap();
        assert_eq!(robot.links.len(), 2);
        assert_eq!(robot.links[1].name, "arm");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let err = load_robot(&write(dir.path(), "bot.yaml", "name: bot")).unwrap_err();
        assert!(err.to_string().contains("Unknown input format: yaml"));
    }

    #[test]
    fn check_passes_clean_description() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "bot.toml", CLEAN_TOML);
        let summary = check_file(&path, EmitConfig::default()).unwrap();
        assert!(summary.ends_with("1 links, 1 joints, no problems"));
    }

    #[test]
    fn check_fails_on_shape_problems() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "bot.json", BROKEN_JSON);
        let err = check_file(&path, EmitConfig::strict()).unwrap_err();
        assert!(err.to_string().starts_with("2 problem(s) found in"));
    }

    #[test]
    fn check_fails_on_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "bot.txt", CLEAN_TOML);
        let err = check_file(&path, EmitConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown input format"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "emit.toml", "indent = 0\ndeclaration = false\n");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.indent, 0);
        assert!(!config.declaration);
        assert_eq!(load_config(None).unwrap(), EmitConfig::default());
    }
}
