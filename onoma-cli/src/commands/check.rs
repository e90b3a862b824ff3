//! Check command implementation

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;

use onoma_core::{CatalogParser, CatalogSource, Error};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Catalog file to check; includes resolve against its directory
    #[arg(value_name = "FILE")]
    pub catalog: PathBuf,
}

/// Catalogs stored as `<name>.txt` files under one directory
#[derive(Debug)]
struct DirCatalogs {
    dir: PathBuf,
}

impl CatalogSource for DirCatalogs {
    fn read(&self, name: &str) -> onoma_core::Result<String> {
        let path = self.dir.join(format!("{name}.txt"));
        std::fs::read_to_string(&path).map_err(|_| Error::MissingCatalog(name.to_string()))
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        let name = catalog_stem(&self.catalog)?;
        let source = DirCatalogs {
            dir: self
                .catalog
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        let mut parser = CatalogParser::new(&source);
        let rules = parser
            .parse(&name)
            .with_context(|| format!("failed to parse {}", self.catalog.display()))?;
        let diagnostics = parser.take_diagnostics();

        for diagnostic in &diagnostics {
            println!("✗ {diagnostic}");
        }
        if diagnostics.is_empty() {
            println!("✓ {} rules, no problems", rules.len());
            Ok(())
        } else {
            println!("{} rules, {} malformed lines", rules.len(), diagnostics.len());
            Err(anyhow!("catalog has {} malformed lines", diagnostics.len()))
        }
    }
}

fn catalog_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("not a catalog file name: {}", path.display()))
}
