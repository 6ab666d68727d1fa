//! CLI command implementations

pub mod analyze;
pub mod evaluate;
pub mod lookup;
pub mod render;

use venture_analytics::Horizon;

/// Projection horizon flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HorizonArg {
    /// 12 months
    Yearly,
    /// 24 months
    Extended,
}

impl From<HorizonArg> for Horizon {
    fn from(arg: HorizonArg) -> Self {
        match arg {
            HorizonArg::Yearly => Horizon::Yearly,
            HorizonArg::Extended => Horizon::Extended,
        }
    }
}
