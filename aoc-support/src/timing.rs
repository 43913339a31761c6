//! Scoped wall-clock timing reports

use std::io::{self, Stderr, Write};
use std::time::{Duration, Instant};

/// Format an elapsed time the way timing reports print it.
///
/// Durations under 100 ms are shown in whole microseconds, longer ones in
/// whole milliseconds.
///
/// ```
/// use aoc_support::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_micros(1500)), "1500 μs");
/// assert_eq!(format_elapsed(Duration::from_millis(250)), "250 ms");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_millis(100) {
        format!("{} μs", elapsed.as_micros())
    } else {
        format!("{} ms", elapsed.as_millis())
    }
}

/// Guard that reports how long it was alive.
///
/// The report `> <n> <unit>` (followed by ` (<name>)` when named) is written
/// once, when the guard is dropped. That includes early returns and panics
/// unwinding through the scope, and the report never changes what the scope
/// returned or raised.
pub struct Timer<W: Write = Stderr> {
    name: Option<String>,
    start: Instant,
    sink: W,
}

impl Timer<Stderr> {
    /// Start a timer reporting to stderr
    pub fn start(name: Option<&str>) -> Self {
        Self::with_sink(name, io::stderr())
    }
}

impl<W: Write> Timer<W> {
    /// Start a timer reporting to `sink`
    pub fn with_sink(name: Option<&str>, sink: W) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            start: Instant::now(),
            sink,
        }
    }

    /// Time since the guard was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn report_line(&self, elapsed: Duration) -> String {
        match &self.name {
            Some(name) => format!("> {} ({})", format_elapsed(elapsed), name),
            None => format!("> {}", format_elapsed(elapsed)),
        }
    }
}

impl<W: Write> Drop for Timer<W> {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        tracing::debug!(
            name = self.name.as_deref().unwrap_or_default(),
            elapsed_us = elapsed.as_micros() as u64,
            "timed block finished"
        );
        let line = self.report_line(elapsed);
        // Nowhere to report a failed diagnostic write from a destructor.
        let _ = writeln!(self.sink, "{line}");
        let _ = self.sink.flush();
    }
}

/// Run `f` and report its duration on stderr.
///
/// Whatever `f` returns, `Ok` or `Err`, is handed back untouched.
///
/// ```
/// use aoc_support::timing;
///
/// let answer = timing(None, || 6 * 7);
/// assert_eq!(answer, 42);
/// ```
pub fn timing<T>(name: Option<&str>, f: impl FnOnce() -> T) -> T {
    let _timer = Timer::start(name);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory sink so tests can read what a dropped timer wrote
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_elapsed(Duration::ZERO), "0 μs");
        assert_eq!(format_elapsed(Duration::from_micros(99_999)), "99999 μs");
        assert_eq!(format_elapsed(Duration::from_millis(100)), "100 ms");
        assert_eq!(format_elapsed(Duration::from_secs(3)), "3000 ms");
    }

    #[test]
    fn test_reports_once_on_normal_exit() {
        let buf = SharedBuf::default();
        {
            let _t = Timer::with_sink(None, buf.clone());
        }
        let out = buf.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("> "));
        assert!(out.trim_end().ends_with("μs"));
    }

    #[test]
    fn test_name_is_appended() {
        let buf = SharedBuf::default();
        drop(Timer::with_sink(Some("parse"), buf.clone()));
        assert!(buf.contents().trim_end().ends_with("μs (parse)"));
    }

    #[test]
    fn test_error_passes_through_and_still_reports() {
        let buf = SharedBuf::default();
        let run = || -> Result<u32, String> {
            let _t = Timer::with_sink(None, buf.clone());
            let failing: Result<u32, String> = Err("boom".to_string());
            let value = failing?;
            Ok(value + 1)
        };
        assert_eq!(run(), Err("boom".to_string()));
        assert_eq!(buf.contents().lines().count(), 1);
    }

    #[test]
    fn test_panic_passes_through_and_still_reports() {
        let buf = SharedBuf::default();
        let sink = buf.clone();
        let result = std::panic::catch_unwind(move || {
            let _t = Timer::with_sink(None, sink);
            panic!("inside timed block");
        });
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"inside timed block"));
        assert_eq!(buf.contents().lines().count(), 1);
    }

    #[test]
    fn test_timing_returns_value() {
        assert_eq!(timing(Some("sum"), || (1..=4).sum::<i32>()), 10);
    }
}
