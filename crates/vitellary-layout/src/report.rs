use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::game::GameMode;
use crate::layout::GameLayout;

/// Mode constants and game object layout, as printed for external tools
///
/// Rendered as three lines:
/// ```text
/// <mode> <mode> <mode> <mode> <mode>
/// <size>
/// <roomx> <roomy> <state> <gamestate> <frames>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutReport {
    pub modes: [u32; 5],
    pub layout: GameLayout,
}

impl LayoutReport {
    pub fn new(modes: [u32; 5], layout: GameLayout) -> Self {
        Self { modes, layout }
    }

    /// Report for the values compiled into this binary
    pub fn compiled() -> Self {
        let report = Self::new(GameMode::reported_values(), GameLayout::COMPILED);
        debug!(
            "Compiled report: modes {:?}, size {}, offsets {:?}",
            report.modes,
            report.layout.size,
            report.layout.offsets()
        );
        report
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", join(&self.modes))?;
        writeln!(f, "{}", self.layout.size)?;
        writeln!(f, "{}", join(&self.layout.offsets()))
    }
}
