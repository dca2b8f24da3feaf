use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::fmt::MakeWriter;

use crate::crawler::CrawlProgress;

const TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Terminal progress bar over the entries of a crawl.
#[derive(Clone)]
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        match ProgressStyle::default_bar().template(TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("#>-")),
            Err(e) => tracing::debug!("Falling back to the default progress style: {}", e),
        }
        Self { bar }
    }

    /// Writer for the tracing subscriber. Both the bar and the logs draw on
    /// stderr, so each log line is written with the bar cleared.
    pub fn log_writer(&self) -> SuspendingWriter {
        SuspendingWriter {
            bar: self.bar.clone(),
        }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlProgress for BarProgress {
    fn start(&self, total: usize, label: &str) {
        self.bar.reset();
        self.bar.set_length(total as u64);
        self.bar.set_message(label.to_string());
    }

    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

/// `MakeWriter` handing out stderr writers that suspend the progress bar.
#[derive(Clone)]
pub struct SuspendingWriter {
    bar: ProgressBar,
}

impl<'a> MakeWriter<'a> for SuspendingWriter {
    type Writer = SuspendedStderr;

    fn make_writer(&'a self) -> Self::Writer {
        SuspendedStderr {
            bar: self.bar.clone(),
        }
    }
}

pub struct SuspendedStderr {
    bar: ProgressBar,
}

impl Write for SuspendedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bar.suspend(|| io::stderr().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        // One suspend per formatted event keeps a log line whole
        self.bar.suspend(|| io::stderr().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.bar.suspend(|| io::stderr().flush())
    }
}
