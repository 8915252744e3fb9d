//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::Response;
use crate::options::ListOptions;
use serde::Serialize;
use serde_json::{json, Value};
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
        let client = Client::new(self.load_config()?)?;
        let user = client.user();
        let opts = self.list_options();

        let output = match &self.cli.command {
            Commands::About { username } => {
                let (profile, response) = user.get(username).await?;
                envelope(&profile, &response)
            }
            Commands::Overview { username } => {
                let (posts, comments, response) = user.overview_of(username, &opts).await?;
                envelope(&json!({ "posts": posts, "comments": comments }), &response)
            }
            Commands::Posts { username } => {
                let (posts, response) = user.posts_of(username, &opts).await?;
                envelope(&posts, &response)
            }
            Commands::Comments { username } => {
                let (comments, response) = user.comments_of(username, &opts).await?;
                envelope(&comments, &response)
            }
            Commands::Trophies { username } => {
                let (trophies, response) = user.trophies_of(username).await?;
                envelope(&trophies, &response)
            }
            Commands::Available { username } => {
                let (available, response) = user.username_available(username).await?;
                envelope(&json!({ "username": username, "available": available }), &response)
            }
        };

        self.emit(&output?);
        Ok(())
    }

    /// Load the client config from `--config` or defaults, then the environment
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => {
                info!("Loading config from {}", path.display());
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        };
        Ok(config.apply_env())
    }

    fn list_options(&self) -> ListOptions {
        let mut opts = ListOptions::new();
        if let Some(limit) = self.cli.limit {
            opts = opts.limit(limit);
        }
        if let Some(after) = &self.cli.after {
            opts = opts.after(after.as_str());
        }
        opts
    }

    fn emit(&self, value: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            }
        }
    }
}

/// Wrap a result with the rate limit state of the call that produced it
fn envelope<T: Serialize>(data: &T, response: &Response) -> Result<Value> {
    Ok(json!({
        "data": serde_json::to_value(data)?,
        "response": serde_json::to_value(response)?,
    }))
}
