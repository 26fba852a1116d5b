//! dismiss-toasts CLI entry point

use std::process::ExitCode;

use clap::Parser;

use dismiss_toasts::application::ports::ConfigStore;
use dismiss_toasts::cli::{
    app::{load_merged_config, run_dismiss, EXIT_ERROR},
    args::{Cli, DismissOptions},
    presenter::Presenter,
};
use dismiss_toasts::infrastructure::{create_listener, FileConfigStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new(cli.verbose);

    let store = match cli.config.as_ref() {
        Some(path) => {
            let store = FileConfigStore::with_path(path);
            if !store.exists() {
                presenter.warn(&format!(
                    "Config file not found at {}, using defaults",
                    store.path().display()
                ));
            }
            store
        }
        None => FileConfigStore::new(),
    };

    // Merge config
    let config = match load_merged_config(&store, cli.to_config()).await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = DismissOptions::new(cli.filter.as_deref(), &config);

    run_dismiss(create_listener(), options, presenter).await
}
