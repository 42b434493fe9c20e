//! CPU sampling backend using Rayon
//!
//! Batches are spread across the global Rayon pool and their counts are
//! summed. Work-stealing order does not affect the result because each batch
//! owns its RNG stream.

use rayon::prelude::*;

use super::{Backend, DeviceInfo, SamplingEngine};
use crate::domain::monte_carlo::{count_batch, plan_batches};
use crate::error::PiError;

/// CPU-based sampling engine using Rayon
pub struct CpuEngine {
    device_info: DeviceInfo,
    batch_size: u64,
}

impl CpuEngine {
    pub fn new(batch_size: u64) -> Self {
        let num_cpus = num_cpus::get() as u32;

        Self {
            device_info: DeviceInfo {
                name: format!("CPU ({} cores)", num_cpus),
                backend: Backend::Cpu,
                compute_units: num_cpus,
            },
            batch_size: batch_size.max(1),
        }
    }
}

impl SamplingEngine for CpuEngine {
    fn backend(&self) -> Backend {
        Backend::Cpu
    }

    fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    fn batch_size(&self) -> u64 {
        self.batch_size
    }

    fn count_inside(&self, samples: u64, seed: u64) -> Result<u64, PiError> {
        let inside = plan_batches(samples, self.batch_size)
            .into_par_iter()
            .map(|batch| count_batch(seed, batch))
            .reduce(|| 0u64, |a, b| a + b);

        Ok(inside)
    }
}
