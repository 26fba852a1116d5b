//! Main app runner

use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::{ConfigStore, NotificationListener};
use crate::application::{
    DismissCallbacks, DismissInput, DismissNotificationsUseCase, DismissOutcome,
};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::filter::KeepReason;
use crate::domain::notification::ListenerAccess;

use super::args::DismissOptions;
use super::presenter::{dismissed_line, Presenter, ACCESS_DENIED};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Load and merge configuration from file and CLI
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load().await?;

    // Merge: defaults < file < cli
    Ok(AppConfig::defaults().merge(file_config).merge(cli_config))
}

/// Run one dismissal pass against the given listener
pub async fn run_dismiss<L: NotificationListener>(
    listener: L,
    options: DismissOptions,
    presenter: Presenter,
) -> ExitCode {
    let presenter = Arc::new(presenter);
    let use_case = DismissNotificationsUseCase::new(listener);

    let input = DismissInput {
        filter: options.filter,
        keep: options.keep,
        delay: options.delay,
    };

    let callbacks = {
        let (p1, p2, p3, p4, p5) = (
            Arc::clone(&presenter),
            Arc::clone(&presenter),
            Arc::clone(&presenter),
            Arc::clone(&presenter),
            Arc::clone(&presenter),
        );
        DismissCallbacks {
            on_access_requested: Some(Box::new(move || {
                p1.start_spinner("Waiting for notification access...");
            })),
            on_access_resolved: Some(Box::new(move |access: ListenerAccess| {
                p2.stop_spinner();
                p2.detail(&format!("Notification access: {}", access));
            })),
            on_snapshot: Some(Box::new(move |count: usize| {
                p3.detail(&format!("Found {} toast notification(s)", count));
            })),
            on_dismissed: Some(Box::new(move |id: u32| {
                p4.output(&dismissed_line(id));
            })),
            on_kept: Some(Box::new(move |id: u32, reason: &KeepReason| {
                p5.detail(&format!("Kept {} ({})", id, describe_keep(reason)));
            })),
        }
    };

    match use_case.execute(input, callbacks).await {
        Ok(DismissOutcome::AccessDenied(_)) => {
            presenter.output(ACCESS_DENIED);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(DismissOutcome::Completed(report)) => {
            presenter.detail(&presenter.format_summary(
                report.dismissed.len(),
                report.total,
                report.kept.len(),
                report.skipped.len(),
            ));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn describe_keep(reason: &KeepReason) -> String {
    match reason {
        KeepReason::Text(pattern) => format!("text matches \"{}\"", pattern),
        KeepReason::App(app) => format!("app matches \"{}\"", app),
    }
}
