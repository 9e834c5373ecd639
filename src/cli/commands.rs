use crate::config::CopyrightConfig;
use crate::docs::{DocumentModelCache, ExampleUrlBuilder};
use crate::registry::Registry;
use crate::runtime_config::{validate_domain, RuntimeConfig};
use crate::server::DocServer;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Command-line interface for brrtdoc
#[derive(Parser, Debug)]
#[command(name = "brrtdoc")]
#[command(about = "Route documentation server", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the documentation endpoints for a route manifest
    Serve {
        /// Route manifest (YAML)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Copyright/documentation config (YAML); without it docs are disabled
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address and port to bind the server to
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,

        /// Domain for example URLs (overrides BRRTDOC_DOMAIN)
        #[arg(long)]
        domain: Option<String>,
    },
    /// Build the model once and print the module listing as JSON
    Dump {
        /// Route manifest (YAML)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Copyright/documentation config (YAML); without it docs are disabled
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

/// Load the manifest and optional config into a ready-to-query cache.
pub fn load_cache(
    manifest: &Path,
    config: Option<&Path>,
    domain: &str,
) -> Result<Arc<DocumentModelCache>> {
    let registry = Registry::from_manifest_file(manifest)?;
    let config = config
        .map(CopyrightConfig::from_file)
        .transpose()?
        .map(Arc::new);
    info!(
        routes = registry.len(),
        configured = config.is_some(),
        domain,
        "Route manifest loaded"
    );
    Ok(Arc::new(DocumentModelCache::new(
        Arc::new(registry),
        config,
        ExampleUrlBuilder::for_domain(domain),
    )))
}

/// Serialized module listing; `[]` when documentation is disabled.
pub fn dump_modules(cache: &DocumentModelCache, pretty: bool) -> Result<String> {
    let modules = cache
        .modules()
        .context("failed to build documentation model")?;
    let out = if pretty {
        serde_json::to_string_pretty(&modules)?
    } else {
        serde_json::to_string(&modules)?
    };
    Ok(out)
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let runtime = RuntimeConfig::from_env();
    match cli.command {
        Commands::Serve {
            manifest,
            config,
            addr,
            domain,
        } => {
            let domain = domain.map_or(runtime.domain, |d| validate_domain(&d));
            let cache = load_cache(&manifest, config.as_deref(), &domain)?;
            may::config().set_stack_size(runtime.stack_size);
            let handle = DocServer::new(cache)
                .start(addr.as_str())
                .with_context(|| format!("failed to bind {addr}"))?;
            handle
                .join()
                .map_err(|e| io::Error::other(format!("{e:?}")))
                .context("documentation server terminated")?;
            Ok(())
        }
        Commands::Dump {
            manifest,
            config,
            pretty,
        } => {
            let cache = load_cache(&manifest, config.as_deref(), &runtime.domain)?;
            println!("{}", dump_modules(&cache, pretty)?);
            Ok(())
        }
    }
}
