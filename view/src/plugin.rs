//! Hooks the waveform viewer calls
//!
//! The viewer asks for the signal list to show (`nalu_config` for the
//! generated part, `user_config` for the hand-written overlay) and, on every
//! cursor move, for the interactive panel (`interactive`).
use riscv::Target;
use serde::{Deserialize, Serialize};

use crate::{
    buffer::CharBuffer,
    config::{ConfigError, ViewConfig},
    error::ViewError,
    render::render,
    state::{resolve_timestamp, Assembler},
    waveform::{VcdHeader, Waveform},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignalRadix {
    Binary,
    Octal,
    Decimal,
    #[default]
    Hexadecimal,
}

/// Entry of the viewer's signal list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SignalNode {
    Group { name: String, children: Vec<SignalNode>, expanded: bool },
    Vector { name: String, children: Vec<SignalNode>, radix: SignalRadix, expanded: bool },
    Signal { path: String, radix: SignalRadix, index: Option<usize>, expanded: bool },
    Spacer,
}

impl SignalNode {
    pub fn new_group(name: impl Into<String>, children: Vec<SignalNode>, expanded: bool) -> Self {
        SignalNode::Group { name: name.into(), children, expanded }
    }

    pub fn new_vector(
        name: impl Into<String>,
        children: Vec<SignalNode>,
        radix: SignalRadix,
        expanded: bool,
    ) -> Self {
        SignalNode::Vector { name: name.into(), children, radix, expanded }
    }

    /// `index` selects one bit of a multi-bit signal
    pub fn new_signal(
        path: impl Into<String>,
        radix: SignalRadix,
        expanded: bool,
        index: Option<usize>,
    ) -> Self {
        SignalNode::Signal { path: path.into(), radix, index, expanded }
    }

    pub fn new_spacer() -> Self {
        SignalNode::Spacer
    }
}

pub trait Plugin {
    fn nalu_config(&self, header: &dyn VcdHeader) -> Vec<SignalNode>;

    fn user_config(&self, header: &dyn VcdHeader) -> Vec<SignalNode>;

    /// Render the panel for `cursor` into `buffer`
    fn interactive(
        &self,
        buffer: CharBuffer,
        waveform: &dyn Waveform,
        header: &dyn VcdHeader,
        cursor: u64,
    ) -> Result<CharBuffer, ViewError>;
}

/// GDB-style view of the Gecko core
#[derive(Debug, Clone)]
pub struct GeckoView {
    config: ViewConfig,
    target: Target,
}

impl GeckoView {
    pub fn new(config: ViewConfig) -> Result<Self, ConfigError> {
        let target = config.validate()?;
        Ok(Self { config, target })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl Default for GeckoView {
    fn default() -> Self {
        Self { config: ViewConfig::default(), target: Target::rv32i() }
    }
}

impl Plugin for GeckoView {
    fn nalu_config(&self, _header: &dyn VcdHeader) -> Vec<SignalNode> {
        vec![SignalNode::new_signal("TOP.exit_code[8]", SignalRadix::Hexadecimal, false, None)]
    }

    fn user_config(&self, _header: &dyn VcdHeader) -> Vec<SignalNode> {
        vec![SignalNode::new_signal("TOP.rst", SignalRadix::Hexadecimal, false, None)]
    }

    fn interactive(
        &self,
        buffer: CharBuffer,
        waveform: &dyn Waveform,
        header: &dyn VcdHeader,
        cursor: u64,
    ) -> Result<CharBuffer, ViewError> {
        let timestamp_index = resolve_timestamp(waveform, cursor)?;
        let snapshot = Assembler::new(waveform, header, &self.config.signals, &self.target)
            .with_window_radius(self.config.window_radius)
            .assemble(timestamp_index)?;
        Ok(render(buffer, &snapshot, cursor))
    }
}

pub fn nalu_config(header: &dyn VcdHeader) -> Vec<SignalNode> {
    GeckoView::default().nalu_config(header)
}

pub fn user_config(header: &dyn VcdHeader) -> Vec<SignalNode> {
    GeckoView::default().user_config(header)
}

pub fn interactive(
    buffer: CharBuffer,
    waveform: &dyn Waveform,
    header: &dyn VcdHeader,
    cursor: u64,
) -> Result<CharBuffer, ViewError> {
    GeckoView::default().interactive(buffer, waveform, header, cursor)
}
