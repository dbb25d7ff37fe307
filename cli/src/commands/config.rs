use std::path::PathBuf;

use anyhow::{Context, Result};
use gecko_view::{GeckoView, MemoryHeader, Plugin, SignalNode, ViewConfig};
use serde::Serialize;

// Structure representing the 'config' subcommand
#[derive(clap::Args)]
#[command(about = "Print the viewer's signal list hooks, or the resolved view configuration")]
pub struct ConfigCmd {
    /// TOML view configuration
    #[clap(long, env = "GECKO_VIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the resolved view configuration as TOML instead
    #[clap(long)]
    pub resolved: bool,
}

#[derive(Serialize)]
struct Hooks {
    nalu_config: Vec<SignalNode>,
    user_config: Vec<SignalNode>,
}

impl ConfigCmd {
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => ViewConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ViewConfig::default(),
        };

        if self.resolved {
            print!("{}", config.to_toml_string()?);
            return Ok(());
        }

        let view = GeckoView::new(config).context("Invalid view configuration")?;
        let header = MemoryHeader::new();
        let hooks =
            Hooks { nalu_config: view.nalu_config(&header), user_config: view.user_config(&header) };
        println!("{}", serde_json::to_string_pretty(&hooks)?);

        Ok(())
    }
}
