mod position_acquirer;
mod position_fix;
mod position_provider;

pub use position_acquirer::PositionAcquirer;
pub use position_fix::{PositionFix, SourceTier};
pub use position_provider::{
    NoPositionProvider, PositionOptions, PositionProvider, RawPosition, RawPositionError,
};
