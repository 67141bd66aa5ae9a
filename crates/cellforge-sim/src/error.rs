//! Error type for the handful of fallible operations the simulation exposes.
//!
//! Per-cell operations (movement, thermal diffusion, reactions) never fail:
//! out-of-bounds coordinates and unknown material ids degrade to safe defaults
//! (air, ambient temperature) rather than returning `Result`. The only failure
//! mode modeled here is grid allocation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to allocate a {width}x{height} grid")]
    AllocationFailed { width: u32, height: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
