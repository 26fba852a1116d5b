//! Dismiss notifications use case

use std::time::Duration;

use thiserror::Error;

use crate::domain::filter::{KeepList, KeepReason, TextFilter};
use crate::domain::notification::ListenerAccess;

use super::ports::{ListenerError, NotificationListener};

/// Errors from the dismiss use case
#[derive(Debug, Error)]
pub enum DismissError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
}

/// Input parameters for the dismiss use case
#[derive(Debug, Clone, Default)]
pub struct DismissInput {
    /// Only notifications whose visible text matches are dismissed
    pub filter: Option<TextFilter>,
    /// Notifications protected from dismissal
    pub keep: KeepList,
    /// Pause between consecutive removals
    pub delay: Duration,
}

/// Per-run tally of what happened to each notification in the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissReport {
    /// Number of notifications in the snapshot
    pub total: usize,
    /// Removed, in snapshot order
    pub dismissed: Vec<u32>,
    /// Matched the filter but protected by the keep list
    pub kept: Vec<(u32, KeepReason)>,
    /// Did not match the filter
    pub skipped: Vec<u32>,
}

/// Result of a dismiss run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissOutcome {
    /// Listener access was not granted; nothing was listed or removed
    AccessDenied(ListenerAccess),
    Completed(DismissReport),
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct DismissCallbacks {
    /// Called before requesting listener access
    pub on_access_requested: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called once the access request resolves
    pub on_access_resolved: Option<Box<dyn Fn(ListenerAccess) + Send + Sync>>,
    /// Called with the snapshot size
    pub on_snapshot: Option<Box<dyn Fn(usize) + Send + Sync>>,
    /// Called right after each successful removal
    pub on_dismissed: Option<Box<dyn Fn(u32) + Send + Sync>>,
    /// Called for each notification protected by the keep list
    pub on_kept: Option<Box<dyn Fn(u32, &KeepReason) + Send + Sync>>,
}

/// One-shot dismissal use case
pub struct DismissNotificationsUseCase<L>
where
    L: NotificationListener,
{
    listener: L,
}

impl<L> DismissNotificationsUseCase<L>
where
    L: NotificationListener,
{
    /// Create a new use case instance
    pub fn new(listener: L) -> Self {
        Self { listener }
    }

    /// Execute the dismiss workflow.
    ///
    /// Stops at the first listing or removal failure; notifications removed
    /// before the failure have already been reported through `on_dismissed`.
    pub async fn execute(
        &self,
        input: DismissInput,
        callbacks: DismissCallbacks,
    ) -> Result<DismissOutcome, DismissError> {
        if let Some(ref cb) = callbacks.on_access_requested {
            cb();
        }

        let access = self.listener.request_access().await?;

        if let Some(ref cb) = callbacks.on_access_resolved {
            cb(access);
        }

        if !access.is_allowed() {
            return Ok(DismissOutcome::AccessDenied(access));
        }

        let notifications = self.listener.toast_notifications().await?;

        if let Some(ref cb) = callbacks.on_snapshot {
            cb(notifications.len());
        }

        let mut report = DismissReport {
            total: notifications.len(),
            ..Default::default()
        };

        for notification in &notifications {
            let id = notification.id();

            if let Some(ref filter) = input.filter {
                if !filter.matches(notification) {
                    report.skipped.push(id);
                    continue;
                }
            }

            if let Some(reason) = input.keep.protects(notification) {
                if let Some(ref cb) = callbacks.on_kept {
                    cb(id, &reason);
                }
                report.kept.push((id, reason));
                continue;
            }

            if !report.dismissed.is_empty() && !input.delay.is_zero() {
                tokio::time::sleep(input.delay).await;
            }

            self.listener.remove(id).await?;

            if let Some(ref cb) = callbacks.on_dismissed {
                cb(id);
            }
            report.dismissed.push(id);
        }

        Ok(DismissOutcome::Completed(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::ToastNotification;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    // Mock implementations for testing
    struct MockListener {
        access: ListenerAccess,
        notifications: Vec<ToastNotification>,
        removed: Arc<Mutex<Vec<u32>>>,
        removed_at: Arc<Mutex<Vec<Instant>>>,
        listed: Arc<Mutex<bool>>,
        fail_on: Option<u32>,
    }

    impl MockListener {
        fn new(access: ListenerAccess, notifications: Vec<ToastNotification>) -> Self {
            Self {
                access,
                notifications,
                removed: Arc::new(Mutex::new(Vec::new())),
                removed_at: Arc::new(Mutex::new(Vec::new())),
                listed: Arc::new(Mutex::new(false)),
                fail_on: None,
            }
        }
    }

    #[async_trait]
    impl NotificationListener for MockListener {
        async fn request_access(&self) -> Result<ListenerAccess, ListenerError> {
            Ok(self.access)
        }

        async fn toast_notifications(&self) -> Result<Vec<ToastNotification>, ListenerError> {
            *self.listed.lock().unwrap() = true;
            Ok(self.notifications.clone())
        }

        async fn remove(&self, id: u32) -> Result<(), ListenerError> {
            if self.fail_on == Some(id) {
                return Err(ListenerError::Removal {
                    id,
                    message: "element not found".to_string(),
                });
            }
            self.removed.lock().unwrap().push(id);
            self.removed_at.lock().unwrap().push(Instant::now());
            Ok(())
        }
    }

    fn snapshot() -> Vec<ToastNotification> {
        vec![
            ToastNotification::from_texts(1, ["Meeting at 3pm"]),
            ToastNotification::from_texts(2, ["Build succeeded"]),
        ]
    }

    fn completed(outcome: DismissOutcome) -> DismissReport {
        match outcome {
            DismissOutcome::Completed(report) => report,
            other => panic!("Expected completed run, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn denied_access_stops_before_listing() {
        for access in [ListenerAccess::Denied, ListenerAccess::Unspecified] {
            let listener = MockListener::new(access, snapshot());
            let removed = Arc::clone(&listener.removed);
            let listed = Arc::clone(&listener.listed);
            let use_case = DismissNotificationsUseCase::new(listener);

            let outcome = use_case
                .execute(DismissInput::default(), DismissCallbacks::default())
                .await
                .unwrap();

            assert_eq!(outcome, DismissOutcome::AccessDenied(access));
            assert!(removed.lock().unwrap().is_empty());
            assert!(!*listed.lock().unwrap());
        }
    }

    #[tokio::test]
    async fn no_filter_dismisses_everything_in_order() {
        let listener = MockListener::new(ListenerAccess::Allowed, snapshot());
        let removed = Arc::clone(&listener.removed);
        let use_case = DismissNotificationsUseCase::new(listener);

        let report = completed(
            use_case
                .execute(DismissInput::default(), DismissCallbacks::default())
                .await
                .unwrap(),
        );

        assert_eq!(report.total, 2);
        assert_eq!(report.dismissed, vec![1, 2]);
        assert_eq!(*removed.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn filter_dismisses_only_matches() {
        let listener = MockListener::new(ListenerAccess::Allowed, snapshot());
        let removed = Arc::clone(&listener.removed);
        let use_case = DismissNotificationsUseCase::new(listener);

        let input = DismissInput {
            filter: Some(TextFilter::new("build")),
            ..Default::default()
        };
        let report = completed(
            use_case
                .execute(input, DismissCallbacks::default())
                .await
                .unwrap(),
        );

        assert_eq!(report.dismissed, vec![2]);
        assert_eq!(report.skipped, vec![1]);
        assert_eq!(*removed.lock().unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn keep_list_protects_matching_notifications() {
        let listener = MockListener::new(ListenerAccess::Allowed, snapshot());
        let removed = Arc::clone(&listener.removed);
        let use_case = DismissNotificationsUseCase::new(listener);

        let input = DismissInput {
            keep: KeepList::new(["MEETING"], Vec::<String>::new()),
            ..Default::default()
        };
        let report = completed(
            use_case
                .execute(input, DismissCallbacks::default())
                .await
                .unwrap(),
        );

        assert_eq!(report.dismissed, vec![2]);
        assert_eq!(
            report.kept,
            vec![(1, KeepReason::Text("meeting".to_string()))]
        );
        assert_eq!(*removed.lock().unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn empty_snapshot_is_not_an_error() {
        let listener = MockListener::new(ListenerAccess::Allowed, Vec::new());
        let use_case = DismissNotificationsUseCase::new(listener);

        let input = DismissInput {
            filter: Some(TextFilter::new("anything")),
            ..Default::default()
        };
        let report = completed(
            use_case
                .execute(input, DismissCallbacks::default())
                .await
                .unwrap(),
        );

        assert_eq!(report, DismissReport::default());
    }

    #[tokio::test]
    async fn removal_failure_stops_the_run() {
        let notifications = vec![
            ToastNotification::from_texts(1, ["a"]),
            ToastNotification::from_texts(2, ["b"]),
            ToastNotification::from_texts(3, ["c"]),
        ];
        let mut listener = MockListener::new(ListenerAccess::Allowed, notifications);
        listener.fail_on = Some(2);
        let removed = Arc::clone(&listener.removed);
        let use_case = DismissNotificationsUseCase::new(listener);

        let reported = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reported);
        let callbacks = DismissCallbacks {
            on_dismissed: Some(Box::new(move |id: u32| sink.lock().unwrap().push(id))),
            ..Default::default()
        };

        let result = use_case.execute(DismissInput::default(), callbacks).await;

        assert!(matches!(
            result,
            Err(DismissError::Listener(ListenerError::Removal { id: 2, .. }))
        ));
        assert_eq!(*removed.lock().unwrap(), vec![1]);
        assert_eq!(*reported.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn callbacks_fire_in_order() {
        let listener = MockListener::new(ListenerAccess::Allowed, snapshot());
        let use_case = DismissNotificationsUseCase::new(listener);

        let events = Arc::new(Mutex::new(Vec::<String>::new()));
        let (e1, e2, e3, e4) = (
            Arc::clone(&events),
            Arc::clone(&events),
            Arc::clone(&events),
            Arc::clone(&events),
        );
        let callbacks = DismissCallbacks {
            on_access_requested: Some(Box::new(move || {
                e1.lock().unwrap().push("request".to_string())
            })),
            on_access_resolved: Some(Box::new(move |access: ListenerAccess| {
                e2.lock().unwrap().push(format!("access:{}", access))
            })),
            on_snapshot: Some(Box::new(move |n: usize| {
                e3.lock().unwrap().push(format!("snapshot:{}", n))
            })),
            on_dismissed: Some(Box::new(move |id: u32| {
                e4.lock().unwrap().push(format!("dismissed:{}", id))
            })),
            on_kept: None,
        };

        use_case
            .execute(DismissInput::default(), callbacks)
            .await
            .unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "request",
                "access:allowed",
                "snapshot:2",
                "dismissed:1",
                "dismissed:2"
            ]
        );
    }

    #[tokio::test]
    async fn filter_and_keep_list_fill_separate_buckets() {
        let notifications = vec![
            ToastNotification::from_texts(1, ["Build OTP 4411"]),
            ToastNotification::from_texts(2, ["Build succeeded"]),
            ToastNotification::from_texts(3, ["Lunch at noon"]),
        ];
        let listener = MockListener::new(ListenerAccess::Allowed, notifications);
        let removed = Arc::clone(&listener.removed);
        let use_case = DismissNotificationsUseCase::new(listener);

        let input = DismissInput {
            filter: Some(TextFilter::new("BUILD")),
            keep: KeepList::new(["otp"], Vec::<String>::new()),
            ..Default::default()
        };
        let report = completed(
            use_case
                .execute(input, DismissCallbacks::default())
                .await
                .unwrap(),
        );

        assert_eq!(report.total, 3);
        assert_eq!(report.dismissed, vec![2]);
        assert_eq!(report.kept, vec![(1, KeepReason::Text("otp".to_string()))]);
        assert_eq!(report.skipped, vec![3]);
        assert_eq!(*removed.lock().unwrap(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_waits_between_removals_only() {
        let notifications = vec![
            ToastNotification::from_texts(1, ["a"]),
            ToastNotification::from_texts(2, ["b"]),
            ToastNotification::from_texts(3, ["c"]),
        ];
        let listener = MockListener::new(ListenerAccess::Allowed, notifications);
        let removed_at = Arc::clone(&listener.removed_at);
        let use_case = DismissNotificationsUseCase::new(listener);

        let delay = Duration::from_millis(250);
        let input = DismissInput {
            delay,
            ..Default::default()
        };

        let start = Instant::now();
        use_case
            .execute(input, DismissCallbacks::default())
            .await
            .unwrap();

        let times = removed_at.lock().unwrap().clone();
        assert_eq!(times.len(), 3);
        assert!(times[0] - start < delay, "no wait before the first removal");
        assert!(times[1] - times[0] >= delay);
        assert!(times[2] - times[1] >= delay);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_never_waits() {
        let listener = MockListener::new(ListenerAccess::Allowed, snapshot());
        let removed_at = Arc::clone(&listener.removed_at);
        let use_case = DismissNotificationsUseCase::new(listener);

        let start = Instant::now();
        use_case
            .execute(DismissInput::default(), DismissCallbacks::default())
            .await
            .unwrap();

        let times = removed_at.lock().unwrap().clone();
        assert!(times.iter().all(|t| *t == start));
    }
}
