//! Background polling of the system color scheme
//!
//! Some hosts have no appearance-changed callback to feed a
//! [`ManualAppearance`](crate::platform::ManualAppearance). The watcher polls
//! [`detect_system_color_scheme`] on its own thread and sends changes over a
//! channel. It never touches provider state: the host drains it on the UI
//! thread with [`SystemSchemeWatcher::poll`], or uses it directly as the
//! [`AppearanceSource`] of a theme root.

use crate::platform::{detect_system_color_scheme, AppearanceSource};
use crate::theme::ColorScheme;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Watcher configuration
#[derive(Clone, Debug)]
pub struct WatcherConfig {
    /// Delay between two detections
    pub interval: Duration,
    /// Worker thread name
    pub thread_name: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            thread_name: "swatch-scheme-watcher".to_string(),
        }
    }
}

/// Polls the OS appearance on a background thread
#[derive(Debug)]
pub struct SystemSchemeWatcher {
    receiver: Receiver<ColorScheme>,
    scheme: Cell<ColorScheme>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SystemSchemeWatcher {
    /// Start watching with [`detect_system_color_scheme`]
    pub fn spawn(config: WatcherConfig) -> std::io::Result<Self> {
        Self::spawn_with(config, detect_system_color_scheme)
    }

    /// Start watching with a custom detector
    pub fn spawn_with<D>(config: WatcherConfig, mut detect: D) -> std::io::Result<Self>
    where
        D: FnMut() -> ColorScheme + Send + 'static,
    {
        let initial = detect();
        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);
        let interval = config.interval;

        let handle = thread::Builder::new()
            .name(config.thread_name)
            .spawn(move || {
                let mut last = initial;
                loop {
                    thread::park_timeout(interval);
                    if worker_stop.load(Ordering::Acquire) {
                        break;
                    }

                    let scheme = detect();
                    if scheme == last {
                        continue;
                    }
                    tracing::debug!(from = ?last, to = ?scheme, "system color scheme changed");
                    last = scheme;
                    if sender.send(scheme).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self {
            receiver,
            scheme: Cell::new(initial),
            stop,
            handle: Some(handle),
        })
    }

    /// Drain pending changes. Returns the newest scheme if any arrived.
    pub fn poll(&self) -> Option<ColorScheme> {
        let latest = self.receiver.try_iter().last()?;
        self.scheme.set(latest);
        Some(latest)
    }

    /// Scheme as of the last [`poll`](Self::poll)
    pub fn current(&self) -> ColorScheme {
        self.scheme.get()
    }
}

impl AppearanceSource for SystemSchemeWatcher {
    fn color_scheme(&self) -> ColorScheme {
        self.poll();
        self.current()
    }
}

impl Drop for SystemSchemeWatcher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                tracing::warn!("scheme watcher thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Instant;

    fn fast() -> WatcherConfig {
        WatcherConfig {
            interval: Duration::from_millis(5),
            ..WatcherConfig::default()
        }
    }

    #[test]
    fn test_reports_changes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let watcher = SystemSchemeWatcher::spawn_with(fast(), move || {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                ColorScheme::Light
            } else {
                ColorScheme::Dark
            }
        })
        .unwrap();
        assert_eq!(watcher.current(), ColorScheme::Light);

        let deadline = Instant::now() + Duration::from_secs(5);
        while watcher.poll().is_none() {
            assert!(Instant::now() < deadline, "no change reported");
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(watcher.current(), ColorScheme::Dark);
    }

    #[test]
    fn test_drop_stops_thread() {
        let watcher = SystemSchemeWatcher::spawn_with(
            WatcherConfig {
                interval: Duration::from_secs(60),
                ..WatcherConfig::default()
            },
            || ColorScheme::Dark,
        )
        .unwrap();
        assert_eq!(watcher.poll(), None);
        drop(watcher);
    }
}
