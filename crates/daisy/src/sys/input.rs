use crate::events::AppEvent;
use crate::protocol::parse_line;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Forwards protocol commands read from stdin. Unparseable lines are logged and skipped.
pub async fn run_stdin_reader(tx: Sender<AppEvent>) {
    let reader = BufReader::new(tokio::io::stdin());
    let mut lines = reader.lines();
    let mut number = 0usize;

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                number += 1;
                match parse_line(&line) {
                    Ok(Some(command)) => {
                        if tx.send(AppEvent::Command(command)).await.is_err() {
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("stdin:{}: {}", number, e),
                }
            }
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    let _ = tx.send(AppEvent::InputClosed).await;
}
