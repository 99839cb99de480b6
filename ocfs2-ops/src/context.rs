// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use ocfs2_sys::{PartitionSource, ProcessRunner, SysError, SystemPartitionSource, SystemRunner};
use ocfs2_types::{OperationId, Partition, ProcessRequest, Selection};

use crate::PartitionFilter;

/// The collaborators every dispatcher runs against
#[derive(Clone)]
pub struct Services {
    pub runner: Arc<dyn ProcessRunner>,
    pub partitions: Arc<dyn PartitionSource>,
}

impl Services {
    pub fn new(runner: Arc<dyn ProcessRunner>, partitions: Arc<dyn PartitionSource>) -> Self {
        Self { runner, partitions }
    }

    /// Services backed by the running system.
    pub fn system() -> Self {
        let runner: Arc<dyn ProcessRunner> = Arc::new(SystemRunner);
        let partitions = Arc::new(SystemPartitionSource::new(runner.clone()));
        Self { runner, partitions }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// The mutating operation currently running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub id: OperationId,
    pub request: ProcessRequest,
}

/// What the main window shows
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    /// Partitions that passed the filter, sorted by device
    pub partitions: Vec<Partition>,
    /// Device path of the highlighted row
    pub selected: Option<String>,
    pub filter: String,
    pub in_flight: Option<InFlight>,
}

impl ConsoleState {
    pub fn selected_partition(&self) -> Option<&Partition> {
        let device = self.selected.as_deref()?;
        self.partitions.iter().find(|p| p.device == device)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selected_partition().map(Partition::selection)
    }

    /// Highlights `device`; unknown devices clear the selection.
    pub fn select(&mut self, device: &str) {
        self.selected = self
            .partitions
            .iter()
            .any(|p| p.device == device)
            .then(|| device.to_string());
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts tracking a mutating operation and returns its id.
    pub fn begin(&mut self, request: ProcessRequest) -> OperationId {
        let id = OperationId::new();
        self.in_flight = Some(InFlight { id, request });
        id
    }

    /// Clears the in-flight operation if `id` is still the current one.
    pub fn finish(&mut self, id: OperationId) -> Option<InFlight> {
        if self.in_flight.as_ref().is_some_and(|op| op.id == id) {
            return self.in_flight.take();
        }
        None
    }

    /// Replaces the list with a fresh scan, keeping the selection when the
    /// device is still listed.
    pub fn apply_scan(&mut self, partitions: Vec<Partition>) {
        self.partitions = partitions;

        if let Some(device) = self.selected.take() {
            self.select(&device);
        }
    }
}

/// Re-enumerates partitions and applies `filter`.
pub async fn scan(services: Services, filter: String) -> Result<Vec<Partition>, SysError> {
    let filter = PartitionFilter::new(&filter);
    let mut partitions = services.partitions.scan().await?;
    partitions.retain(|p| filter.matches(&p.device));
    Ok(partitions)
}

/// Services plus state, owned by the main window
#[derive(Debug, Clone)]
pub struct ConsoleContext {
    pub services: Services,
    pub state: ConsoleState,
}

impl ConsoleContext {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            state: ConsoleState::default(),
        }
    }

    pub async fn refresh(&mut self) -> Result<(), SysError> {
        let partitions = scan(self.services.clone(), self.state.filter.clone()).await?;
        self.state.apply_scan(partitions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ocfs2_partition, services};

    #[tokio::test]
    async fn refresh_keeps_selection() {
        let (services, _runner, source) = services();
        source.set_partitions(vec![
            ocfs2_partition("/dev/sdb1", None),
            ocfs2_partition("/dev/sdc1", Some("/mnt/data")),
        ]);

        let mut ctx = ConsoleContext::new(services);
        ctx.refresh().await.expect("refresh");
        ctx.state.select("/dev/sdc1");

        ctx.refresh().await.expect("refresh");
        let selection = ctx.state.selection().expect("still selected");
        assert_eq!(selection.device, "/dev/sdc1");
        assert_eq!(selection.mountpoint.as_deref(), Some("/mnt/data"));
        assert_eq!(source.scans(), 2);
    }

    #[tokio::test]
    async fn refresh_is_idempotent() {
        let (services, _runner, source) = services();
        source.set_partitions(vec![ocfs2_partition("/dev/sdb1", None)]);

        let mut ctx = ConsoleContext::new(services);
        ctx.refresh().await.expect("refresh");
        let first = ctx.state.partitions.clone();
        ctx.refresh().await.expect("refresh");

        assert_eq!(ctx.state.partitions, first);
    }

    #[tokio::test]
    async fn selection_dropped_when_device_disappears() {
        let (services, _runner, source) = services();
        source.set_partitions(vec![ocfs2_partition("/dev/sdb1", None)]);

        let mut ctx = ConsoleContext::new(services);
        ctx.refresh().await.expect("refresh");
        ctx.state.select("/dev/sdb1");

        source.set_partitions(vec![ocfs2_partition("/dev/sdc1", None)]);
        ctx.refresh().await.expect("refresh");
        assert!(ctx.state.selection().is_none());
    }

    #[tokio::test]
    async fn filter_applies_on_refresh() {
        let (services, _runner, source) = services();
        source.set_partitions(vec![
            ocfs2_partition("/dev/sdb1", None),
            ocfs2_partition("/dev/sdc1", None),
        ]);

        let mut ctx = ConsoleContext::new(services);
        ctx.state.filter = "sdc".to_string();
        ctx.refresh().await.expect("refresh");

        assert_eq!(ctx.state.partitions.len(), 1);
        assert_eq!(ctx.state.partitions[0].device, "/dev/sdc1");
    }

    #[tokio::test]
    async fn failed_scan_leaves_state_alone() {
        let (services, _runner, source) = services();
        source.set_partitions(vec![ocfs2_partition("/dev/sdb1", None)]);

        let mut ctx = ConsoleContext::new(services);
        ctx.refresh().await.expect("refresh");
        source.set_fail(true);

        assert!(ctx.refresh().await.is_err());
        assert_eq!(ctx.state.partitions.len(), 1);
    }

    #[test]
    fn finish_ignores_stale_ids() {
        let mut state = ConsoleState::default();
        let request = ProcessRequest::new(
            ocfs2_sys::commands::umount("/mnt/ocfs2"),
            "Unmount",
            "Unmounting...",
        );
        let id = state.begin(request);
        assert!(state.is_busy());

        assert!(state.finish(OperationId::new()).is_none());
        assert!(state.is_busy());
        assert!(state.finish(id).is_some());
        assert!(!state.is_busy());
    }
}
