//! Unit tests for CLI commands

use crate::cli::{dump_modules, load_cache, Cli, Commands};
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

const MANIFEST: &str = r#"
controllers:
  - name: PetController
    handlers:
      - name: list_pets
        urls: ["/pets"]
        methods: [get]
        meta: { title: List pets }
"#;

fn temp_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_serve_command_defaults() {
    let cli = Cli::try_parse_from(["brrtdoc", "serve", "--manifest", "routes.yaml"]).unwrap();
    match cli.command {
        Commands::Serve {
            manifest,
            config,
            addr,
            domain,
        } => {
            assert_eq!(manifest.to_string_lossy(), "routes.yaml");
            assert!(config.is_none());
            assert_eq!(addr, "0.0.0.0:8080");
            assert!(domain.is_none());
        }
        _ => panic!("Expected Serve command"),
    }
}

#[test]
fn test_dump_command_with_flags() {
    let cli = Cli::try_parse_from([
        "brrtdoc",
        "dump",
        "-m",
        "routes.yaml",
        "-c",
        "copyright.yaml",
        "--pretty",
    ])
    .unwrap();
    match cli.command {
        Commands::Dump {
            config, pretty, ..
        } => {
            assert_eq!(config.unwrap().to_string_lossy(), "copyright.yaml");
            assert!(pretty);
        }
        _ => panic!("Expected Dump command"),
    }
}

#[test]
fn test_manifest_is_required() {
    assert!(Cli::try_parse_from(["brrtdoc", "dump"]).is_err());
}

#[test]
fn test_dump_with_config() {
    let manifest = temp_yaml(MANIFEST);
    let config = temp_yaml("title: Pets\n");
    let cache = load_cache(manifest.path(), Some(config.path()), "http://pets.local").unwrap();
    let out = dump_modules(&cache, false).unwrap();
    let modules: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(modules[0]["name"], "Pet-PetController");
    assert_eq!(modules[0]["routes"][0]["title"], "List pets");
    assert!(modules[0]["routes"][0]["exampleUrl"]
        .as_str()
        .unwrap()
        .starts_with("http://pets.local/api/example/"));
}

#[test]
fn test_dump_without_config_is_empty() {
    let manifest = temp_yaml(MANIFEST);
    let cache = load_cache(manifest.path(), None, "http://pets.local").unwrap();
    assert_eq!(dump_modules(&cache, false).unwrap(), "[]");
}

#[test]
fn test_bad_config_path_is_an_error() {
    let manifest = temp_yaml(MANIFEST);
    let missing = std::path::Path::new("/nonexistent/copyright.yaml");
    assert!(load_cache(manifest.path(), Some(missing), "http://x").is_err());
}
