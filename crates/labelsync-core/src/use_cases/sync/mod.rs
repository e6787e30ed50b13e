pub(crate) mod apply_jitter;
pub(crate) mod report_sync_summary;
pub(crate) mod run_label_sync;
pub(crate) mod synchronize_labels;

pub use apply_jitter::{compute_delay, ApplyJitterInterface};
pub use report_sync_summary::ReportSyncSummaryInterface;
pub use run_label_sync::{RunLabelSyncInterface, SyncRequest};
pub use synchronize_labels::SynchronizeLabelsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    apply_jitter::MockApplyJitterInterface, report_sync_summary::MockReportSyncSummaryInterface,
    run_label_sync::MockRunLabelSyncInterface,
    synchronize_labels::MockSynchronizeLabelsInterface,
};
