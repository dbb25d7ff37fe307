use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gecko_view::{
    load_vcd, CharBuffer, GeckoView, MemoryHeader, MemoryWaveform, Plugin, Trace, ViewConfig,
};
use tracing::debug;

// Structure representing the 'render' subcommand
#[derive(clap::Args)]
#[command(about = "Render the register and instruction view of a trace at a cursor")]
pub struct RenderCmd {
    /// Waveform to read: a VCD dump (`.vcd`) or a JSON value-change trace
    #[clap(long)]
    pub trace: PathBuf,

    /// Simulation time to show, the nearest sample at or before it is used
    #[clap(long)]
    pub cursor: u64,

    #[clap(long, default_value_t = 128)]
    pub width: u16,

    #[clap(long, default_value_t = 19)]
    pub height: u16,

    /// TOML view configuration
    #[clap(long, env = "GECKO_VIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// ISA the instruction window is decoded against, overrides the config
    #[clap(long, env = "GECKO_VIEW_ISA")]
    pub isa: Option<String>,
}

impl RenderCmd {
    pub fn run(&self) -> Result<()> {
        let mut config = match &self.config {
            Some(path) => ViewConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ViewConfig::default(),
        };
        if let Some(isa) = &self.isa {
            config.isa = isa.clone();
        }
        let view = GeckoView::new(config).context("Invalid view configuration")?;

        let (header, waveform) = load_waveform(&self.trace)?;
        debug!("Rendering {} at cursor {} for {}", self.trace.display(), self.cursor, view.target());

        let buffer = view
            .interactive(CharBuffer::new(self.width, self.height), &waveform, &header, self.cursor)
            .with_context(|| format!("Failed to render view at cursor {}", self.cursor))?;
        print!("{buffer}");

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformFormat {
    Vcd,
    Json,
}

impl WaveformFormat {
    /// `.vcd` files are dumps, anything else is read as a JSON trace
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("vcd") => WaveformFormat::Vcd,
            _ => WaveformFormat::Json,
        }
    }
}

fn load_waveform(path: &Path) -> Result<(MemoryHeader, MemoryWaveform)> {
    match WaveformFormat::from_path(path) {
        WaveformFormat::Vcd => {
            load_vcd(path).with_context(|| format!("Failed to load VCD {}", path.display()))
        }
        WaveformFormat::Json => Trace::load(path)
            .and_then(Trace::into_waveform)
            .with_context(|| format!("Failed to load trace {}", path.display())),
    }
}
