use crate::events::AppEvent;
use async_channel::Sender;
use std::path::PathBuf;
use std::thread;
use tokio::runtime::Runtime;

/// Spawns the stdin reader, and the config watcher when `watch` is set, on a tokio
/// runtime in its own thread.
pub fn start_background_services(tx: Sender<AppEvent>, watch: Option<PathBuf>) {
    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create Tokio runtime");

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::input::run_stdin_reader(tx).await;
                });
            }

            if let Some(path) = watch {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(path, tx).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}
