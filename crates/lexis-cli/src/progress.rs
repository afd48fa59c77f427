use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

const TICK: Duration = Duration::from_millis(100);

/// Spinner on stderr while a backend call is in flight. Holds nothing when
/// progress output is disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    fn start(message: &str) -> Self {
        let bar = ui::prefs().progress.then(|| {
            let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            let bar = ProgressBar::new_spinner().with_style(style);
            bar.set_message(message.to_owned());
            bar.enable_steady_tick(TICK);
            bar
        });
        Self { bar }
    }

    fn finish(self, failure: Option<&str>) {
        let Some(bar) = self.bar else { return };
        match failure {
            Some(message) => bar.abandon_with_message(message.to_owned()),
            None => bar.finish_and_clear(),
        }
    }

    /// Await `future` behind a spinner. On error the spinner is replaced by
    /// `failed`; on success it disappears.
    pub async fn wrap<T, E, F>(message: &str, failed: &str, future: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let progress = Self::start(message);
        let result = future.await;
        progress.finish(result.is_err().then_some(failed));
        result
    }
}
