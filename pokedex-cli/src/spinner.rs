//! Spinner shown while provider requests are in flight.

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a ticking spinner with `msg`. Hidden when `quiet` is true.
pub(crate) fn spinner(quiet: bool, msg: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("/-\\|"));
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Await `fut` behind a spinner, clearing the line once it settles.
pub(crate) async fn with_spinner<F: Future>(quiet: bool, msg: String, fut: F) -> F::Output {
    let pb = spinner(quiet, msg);
    let out = fut.await;
    pb.finish_and_clear();
    out
}
