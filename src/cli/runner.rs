//! CLI runner - executes commands

use crate::auth::ServiceAccount;
use crate::cli::commands::{Cli, Commands};
use crate::config::GeneratorConfig;
use crate::engine::Generator;
use crate::error::Result;
use crate::output::TypeWriter;
use crate::store::FirestoreStore;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                collection,
                credentials,
                output,
                limit,
                order,
                ext,
            } => {
                let config = GeneratorConfig::new()
                    .with_limit(*limit)
                    .with_field_order((*order).into())
                    .with_extension(ext.clone());
                self.generate(collection, credentials, output, config).await
            }
            Commands::Check { credentials } => self.check(credentials).await,
        }
    }

    async fn generate(
        &self,
        collection: &str,
        credentials: &Path,
        output: &Path,
        config: GeneratorConfig,
    ) -> Result<()> {
        let account = ServiceAccount::from_file(credentials)?;
        info!("Generating types for project: {}", account.project_id);

        let store = FirestoreStore::new(account)?;
        let writer = TypeWriter::new(output, &config.extension);

        let mut generator = Generator::new(store, writer, config);
        generator.generate(collection).await
    }

    async fn check(&self, credentials: &Path) -> Result<()> {
        let account = ServiceAccount::from_file(credentials)?;
        let project_id = account.project_id.clone();

        let store = FirestoreStore::new(account)?;
        store.verify_access().await?;

        info!("Connection verified for project: {project_id}");
        Ok(())
    }
}
