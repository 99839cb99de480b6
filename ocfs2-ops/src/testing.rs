// SPDX-License-Identifier: GPL-3.0-only

//! Recording fakes for the runner and partition source

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ocfs2_sys::{PartitionSource, ProcessRunner, SysError};
use ocfs2_types::{Partition, ProcessOutcome, ProcessRequest};

use crate::Services;

#[derive(Clone, Default)]
pub struct FakeRunner {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    outcomes: Arc<Mutex<VecDeque<ProcessOutcome>>>,
}

impl FakeRunner {
    /// Queues the outcome of the next run; runs with nothing queued succeed.
    pub fn push_outcome(&self, outcome: ProcessOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn take_calls(&self) -> Vec<Vec<String>> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn run(&self, request: &ProcessRequest) -> ProcessOutcome {
        self.calls.lock().unwrap().push(request.command.argv());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ProcessOutcome::exited(0, ""))
    }
}

#[derive(Clone, Default)]
pub struct FakeSource {
    partitions: Arc<Mutex<Vec<Partition>>>,
    scans: Arc<Mutex<usize>>,
    fail: Arc<Mutex<bool>>,
}

impl FakeSource {
    pub fn set_partitions(&self, partitions: Vec<Partition>) {
        *self.partitions.lock().unwrap() = partitions;
    }

    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn scans(&self) -> usize {
        *self.scans.lock().unwrap()
    }
}

#[async_trait]
impl PartitionSource for FakeSource {
    async fn scan(&self) -> ocfs2_sys::Result<Vec<Partition>> {
        *self.scans.lock().unwrap() += 1;
        if *self.fail.lock().unwrap() {
            return Err(SysError::Parse {
                source_name: "partitions",
                line: "broken".to_string(),
            });
        }
        Ok(self.partitions.lock().unwrap().clone())
    }
}

pub fn services() -> (Services, FakeRunner, FakeSource) {
    let runner = FakeRunner::default();
    let source = FakeSource::default();
    let services = Services::new(Arc::new(runner.clone()), Arc::new(source.clone()));
    (services, runner, source)
}

pub fn ocfs2_partition(device: &str, mountpoint: Option<&str>) -> Partition {
    Partition {
        device: device.to_string(),
        mountpoint: mountpoint.map(str::to_string),
        fs_type: Some("ocfs2".to_string()),
        label: Some("shared".to_string()),
        size: 10 * 1024 * 1024 * 1024,
        ..Default::default()
    }
}
