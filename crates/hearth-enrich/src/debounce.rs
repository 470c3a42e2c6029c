//! Debounced submission of location queries.
//!
//! The upstream form emits a query on every keystroke; forwarding each one
//! would start a run per keystroke against a rate-limited provider. This
//! policy coalesces bursts: a query is forwarded only after `window` of
//! quiet, and only the latest query in a burst survives. A zero window
//! forwards every submission immediately.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

use hearth_core::types::LocationQuery;

/// Forwards debounced queries from `rx` into `run` until the channel closes.
///
/// Each received query restarts the quiet-window timer; when the window
/// elapses without a newer submission, the latest query is forwarded. A
/// query still pending when the channel closes is forwarded before
/// returning.
pub async fn debounce_submissions<F, Fut>(
    mut rx: mpsc::Receiver<LocationQuery>,
    window: Duration,
    mut run: F,
) where
    F: FnMut(LocationQuery) -> Fut,
    Fut: Future<Output = ()>,
{
    while let Some(mut latest) = rx.recv().await {
        if !window.is_zero() {
            loop {
                tokio::select! {
                    next = rx.recv() => match next {
                        Some(query) => latest = query,
                        None => break,
                    },
                    () = tokio::time::sleep(window) => break,
                }
            }
        }
        run(latest).await;
    }
}
