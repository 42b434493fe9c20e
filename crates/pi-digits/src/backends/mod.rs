//! Sampling backends for Monte Carlo estimation
//!
//! Backends are chosen at runtime. The parallel CPU backend sits behind the
//! `cpu` feature; the serial backend is always available.

#[cfg(feature = "cpu")]
pub mod cpu;
pub mod serial;

use std::sync::Arc;

use crate::error::PiError;

#[cfg(feature = "cpu")]
pub use cpu::CpuEngine;
pub use serial::SerialEngine;

/// Sampling backend kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Single thread, one batch after another
    Serial,
    /// Rayon data parallelism across CPU cores
    Cpu,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Serial => write!(f, "Serial"),
            Backend::Cpu => write!(f, "CPU (Rayon)"),
        }
    }
}

/// Device information
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub name: String,
    pub backend: Backend,
    pub compute_units: u32,
}

/// Sampling engine trait - implemented by all backends
pub trait SamplingEngine: Send + Sync {
    /// Get backend type
    fn backend(&self) -> Backend;

    /// Get device info
    fn device_info(&self) -> &DeviceInfo;

    /// Points per batch
    fn batch_size(&self) -> u64;

    /// Draw `samples` points in `[-1, 1)^2` and count those inside the unit circle
    fn count_inside(&self, samples: u64, seed: u64) -> Result<u64, PiError>;
}

/// Pick the best available engine: parallel when more than one core exists
pub fn auto_detect(batch_size: u64) -> Result<Arc<dyn SamplingEngine>, PiError> {
    #[cfg(feature = "cpu")]
    {
        let engine = CpuEngine::new(batch_size);
        if engine.device_info().compute_units > 1 {
            tracing::info!(
                "Using CPU sampling: {} cores (Rayon)",
                engine.device_info().compute_units
            );
            return Ok(Arc::new(engine));
        }
    }

    tracing::info!("Using serial sampling");
    Ok(Arc::new(SerialEngine::new(batch_size)))
}

/// Create a specific backend
pub fn create_engine(
    backend: Backend,
    batch_size: u64,
) -> Result<Arc<dyn SamplingEngine>, PiError> {
    match backend {
        Backend::Serial => Ok(Arc::new(SerialEngine::new(batch_size))),
        Backend::Cpu => {
            #[cfg(feature = "cpu")]
            {
                Ok(Arc::new(CpuEngine::new(batch_size)))
            }
            #[cfg(not(feature = "cpu"))]
            {
                Err(PiError::Backend(
                    "built without the `cpu` feature".to_string(),
                ))
            }
        }
    }
}
