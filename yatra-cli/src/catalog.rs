//! Catalog loading and the `catalog` subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use yatra_core::{Catalog, Site};

use crate::render::{OutputFormat, write_catalog};
use crate::{ARG_CATALOG, ARG_FORMAT, CliError};

/// The Kathmandu valley sites shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/kathmandu_valley.json");

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List every site in the catalog with its fee, opening \
                 hours, tags and location. Without --catalog the built-in \
                 Kathmandu valley catalog is listed.",
    about = "List catalog sites"
)]
#[ortho_config(prefix = "YATRA")]
pub(crate) struct CatalogArgs {
    /// Path to a JSON catalog file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl CatalogArgs {
    fn into_config(self) -> Result<CatalogConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CatalogConfig::from(merged))
    }
}

/// Resolved `catalog` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogConfig {
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) format: OutputFormat,
}

impl From<CatalogArgs> for CatalogConfig {
    fn from(args: CatalogArgs) -> Self {
        Self {
            catalog: args.catalog,
            format: args.format.unwrap_or_default(),
        }
    }
}

pub(crate) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    write_catalog(writer, config.format, &catalog)
}

/// Load the catalog at `path`, or the built-in catalog when no path is set.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let catalog = match path {
        Some(path) => load_catalog_file(path)?,
        None => builtin_catalog()?,
    };
    log::info!("catalog holds {} sites", catalog.len());
    Ok(catalog)
}

fn load_catalog_file(path: &Utf8Path) -> Result<Catalog, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    let sites: Vec<Site> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    Catalog::new(sites).map_err(|source| CliError::InvalidCatalog {
        origin: path.to_string(),
        source,
    })
}

pub(crate) fn builtin_catalog() -> Result<Catalog, CliError> {
    let sites: Vec<Site> =
        serde_json::from_str(BUILTIN_CATALOG).map_err(CliError::ParseBuiltinCatalog)?;
    Catalog::new(sites).map_err(|source| CliError::InvalidCatalog {
        origin: "built-in".to_owned(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CatalogConfig, CliError> {
    let merged = CatalogArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(CatalogConfig::from(merged))
}
