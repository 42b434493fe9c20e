//! Single-threaded sampling backend

use super::{Backend, DeviceInfo, SamplingEngine};
use crate::domain::monte_carlo::{count_batch, plan_batches};
use crate::error::PiError;

/// Runs batches one after another on the calling thread
pub struct SerialEngine {
    device_info: DeviceInfo,
    batch_size: u64,
}

impl SerialEngine {
    pub fn new(batch_size: u64) -> Self {
        Self {
            device_info: DeviceInfo {
                name: "CPU (1 thread)".to_string(),
                backend: Backend::Serial,
                compute_units: 1,
            },
            batch_size: batch_size.max(1),
        }
    }
}

impl SamplingEngine for SerialEngine {
    fn backend(&self) -> Backend {
        Backend::Serial
    }

    fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    fn batch_size(&self) -> u64 {
        self.batch_size
    }

    fn count_inside(&self, samples: u64, seed: u64) -> Result<u64, PiError> {
        Ok(plan_batches(samples, self.batch_size)
            .into_iter()
            .map(|batch| count_batch(seed, batch))
            .sum())
    }
}
