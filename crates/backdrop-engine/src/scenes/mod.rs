//! Scene composers, one per background variant.

pub mod aurora;
pub mod constellation;

use crate::error::EngineError;

pub(crate) fn ensure(cond: bool, msg: &str) -> Result<(), EngineError> {
    if cond {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(msg.to_string()))
    }
}

pub(crate) fn ensure_range(range: (f32, f32), name: &str) -> Result<(), EngineError> {
    ensure(
        range.0 > 0.0 && range.0 <= range.1 && range.1.is_finite(),
        &format!("{} range must be positive and ordered", name),
    )
}
