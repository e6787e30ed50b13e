use std::collections::HashSet;

use async_trait::async_trait;
use labelsync_ghapi_interface::{types::GhLabel, ApiError};
use labelsync_models::{LabelDefinition, RepositoryPath, SyncReport};
use shaku::{Component, Interface};
use tracing::{debug, info, warn};

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SynchronizeLabelsInterface: Interface {
    /// Make the repository labels match `labels`, in order.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        labels: &[LabelDefinition],
        prune: bool,
    ) -> Result<SyncReport>;
}

#[derive(Component)]
#[shaku(interface = SynchronizeLabelsInterface)]
pub(crate) struct SynchronizeLabels;

#[async_trait]
impl SynchronizeLabelsInterface for SynchronizeLabels {
    #[tracing::instrument(
        skip(self, ctx, labels),
        fields(repository_path = %repository_path, labels = labels.len())
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        labels: &[LabelDefinition],
        prune: bool,
    ) -> Result<SyncReport> {
        let (owner, name) = repository_path.components();
        let mut existing = ctx.api_service.labels_list(owner, name).await?;
        let mut report = SyncReport {
            prune,
            ..Default::default()
        };

        debug!(count = existing.len(), "Fetched target labels");

        for label in labels {
            let desired = GhLabel::from(label);
            let position = existing
                .iter()
                .position(|l| same_name(&l.name, &label.name));

            match position {
                None => {
                    ctx.api_service
                        .labels_create(owner, name, &desired)
                        .await
                        .map_err(|e| {
                            sync_error(format!("create label '{}'", label.name), e, report)
                        })?;

                    info!(label = %label.name, "Created label");
                    existing.push(desired);
                    report.created += 1;
                }
                Some(index) if is_up_to_date(&existing[index], label) => {
                    report.unchanged += 1;
                }
                Some(index) => {
                    let current_name = existing[index].name.clone();
                    ctx.api_service
                        .labels_update(owner, name, &current_name, &desired)
                        .await
                        .map_err(|e| {
                            sync_error(format!("update label '{current_name}'"), e, report)
                        })?;

                    info!(label = %label.name, previous_name = %current_name, "Updated label");
                    existing[index] = desired;
                    report.updated += 1;
                }
            }
        }

        if prune {
            let desired_names: HashSet<String> =
                labels.iter().map(|l| fold_name(&l.name)).collect();

            for label in existing
                .iter()
                .filter(|l| !desired_names.contains(&fold_name(&l.name)))
            {
                ctx.api_service
                    .labels_delete(owner, name, &label.name)
                    .await
                    .map_err(|e| {
                        sync_error(format!("delete label '{}'", label.name), e, report)
                    })?;

                warn!(label = %label.name, "Deleted label missing from source");
                report.deleted += 1;
            }
        }

        info!(report = %report, "Synchronized labels");
        Ok(report)
    }
}

/// Label names are compared case-insensitively, Unicode-aware.
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

fn same_name(a: &str, b: &str) -> bool {
    fold_name(a) == fold_name(b)
}

/// Exact name (including case), color and description match.
fn is_up_to_date(current: &GhLabel, label: &LabelDefinition) -> bool {
    current.name == label.name && current.same_content(label)
}

fn sync_error(operation: String, source: ApiError, partial: SyncReport) -> DomainError {
    DomainError::SyncError {
        operation,
        source,
        partial,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use labelsync_ghapi_interface::MockApiService;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{context::tests::CoreContextTest, SyncStage};

    fn gh(name: &str, color: &str) -> GhLabel {
        GhLabel {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    fn def(name: &str) -> LabelDefinition {
        LabelDefinition::new(name, "ededed", "")
    }

    fn repository() -> RepositoryPath {
        RepositoryPath::new_from_components("me", "test")
    }

    /// In-memory target repository shared with the mocked API.
    fn arrange_target(
        api: &mut MockApiService,
        labels: Vec<GhLabel>,
    ) -> Arc<Mutex<Vec<GhLabel>>> {
        let target = Arc::new(Mutex::new(labels));

        let state = target.clone();
        api.expect_labels_list()
            .returning(move |_, _| Ok(state.lock().unwrap().clone()));

        let state = target.clone();
        api.expect_labels_create().returning(move |_, _, label| {
            state.lock().unwrap().push(label.clone());
            Ok(())
        });

        let state = target.clone();
        api.expect_labels_update()
            .returning(move |_, _, current_name, label| {
                let mut labels = state.lock().unwrap();
                let index = labels.iter().position(|l| l.name == current_name).unwrap();
                labels[index] = label.clone();
                Ok(())
            });

        let state = target.clone();
        api.expect_labels_delete()
            .returning(move |_, _, label_name| {
                state.lock().unwrap().retain(|l| l.name != label_name);
                Ok(())
            });

        target
    }

    fn target_names(target: &Arc<Mutex<Vec<GhLabel>>>) -> Vec<String> {
        let mut names: Vec<_> = target
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.name.clone())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn replaces_extra_labels() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        let target = arrange_target(
            &mut ctx.api_service,
            vec![gh("A", "ededed"), gh("B", "ededed"), gh("C", "ededed")],
        );

        let report = SynchronizeLabels
            .run(&ctx.as_context(), &repository(), &[def("B"), def("C"), def("D")], true)
            .await?;

        assert_eq!(target_names(&target), vec!["B", "C", "D"]);
        assert_eq!(
            report,
            SyncReport {
                created: 1,
                updated: 0,
                deleted: 1,
                unchanged: 2,
                prune: true,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn keeps_extra_labels_without_prune() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        let target = arrange_target(
            &mut ctx.api_service,
            vec![gh("A", "ededed"), gh("B", "ededed")],
        );

        let report = SynchronizeLabels
            .run(&ctx.as_context(), &repository(), &[def("B"), def("C")], false)
            .await?;

        assert_eq!(target_names(&target), vec!["A", "B", "C"]);
        assert_eq!(report.deleted, 0);
        assert!(!report.prune);

        Ok(())
    }

    #[tokio::test]
    async fn updates_content_and_case() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        let target = arrange_target(
            &mut ctx.api_service,
            vec![gh("bug", "ededed"), gh("docs", "000000")],
        );

        let report = SynchronizeLabels
            .run(&ctx.as_context(), &repository(), &[def("Bug"), def("docs")], true)
            .await?;

        assert_eq!(target_names(&target), vec!["Bug", "docs"]);
        assert_eq!(report.updated, 2);
        assert_eq!(report.deleted, 0);
        assert_eq!(target.lock().unwrap()[1].color, "ededed");

        Ok(())
    }

    #[tokio::test]
    async fn renames_label_differing_in_non_ascii_case() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        let target = arrange_target(&mut ctx.api_service, vec![gh("Überfällig", "ededed")]);

        let report = SynchronizeLabels
            .run(&ctx.as_context(), &repository(), &[def("überfällig")], true)
            .await?;

        assert_eq!(target_names(&target), vec!["überfällig"]);
        assert_eq!(report.created, 0);
        assert_eq!(report.updated, 1);
        assert_eq!(report.deleted, 0);

        Ok(())
    }

    #[test]
    fn name_comparison_folds_unicode_case() {
        assert!(same_name("Überfällig", "überfällig"));
        assert!(same_name("BUG", "bug"));
        assert!(!same_name("bug", "bugs"));
    }

    #[tokio::test]
    async fn duplicates_last_definition_wins() -> Result<()> {
        let mut ctx = CoreContextTest::new();
        let target = arrange_target(&mut ctx.api_service, vec![]);

        let report = SynchronizeLabels
            .run(
                &ctx.as_context(),
                &repository(),
                &[
                    LabelDefinition::new("bug", "ededed", "first"),
                    LabelDefinition::new("bug", "d73a4a", "second"),
                ],
                true,
            )
            .await?;

        assert_eq!(
            *target.lock().unwrap(),
            vec![GhLabel {
                name: "bug".into(),
                color: "d73a4a".into(),
                description: Some("second".into()),
            }]
        );
        assert_eq!(report.created, 1);
        assert_eq!(report.updated, 1);

        Ok(())
    }

    #[tokio::test]
    async fn write_failure_keeps_partial_report() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_labels_list()
            .once()
            .return_once(|_, _| Ok(vec![]));
        ctx.api_service
            .expect_labels_create()
            .once()
            .withf(|_, _, label| label.name == "A")
            .return_once(|_, _, _| Ok(()));
        ctx.api_service
            .expect_labels_create()
            .once()
            .withf(|_, _, label| label.name == "B")
            .return_once(|_, _, _| {
                Err(ApiError::ImplementationError {
                    source: "boom".into(),
                })
            });

        let error = SynchronizeLabels
            .run(
                &ctx.as_context(),
                &repository(),
                &[def("A"), def("B"), def("C")],
                true,
            )
            .await
            .unwrap_err();

        assert_eq!(error.stage(), SyncStage::Sync);
        match error {
            DomainError::SyncError {
                operation, partial, ..
            } => {
                assert_eq!(operation, "create label 'B'");
                assert_eq!(partial.created, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_failure() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_labels_list()
            .once()
            .withf(|owner, name| owner == "me" && name == "test")
            .return_once(|_, _| {
                Err(ApiError::ImplementationError {
                    source: "unauthorized".into(),
                })
            });

        let error = SynchronizeLabels
            .run(&ctx.as_context(), &repository(), &[def("A")], true)
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::ApiError { .. }));
        assert_eq!(error.stage(), SyncStage::Sync);
    }
}
