use notice_gen::prelude::*;

/// Mock ProgressReporter that swallows all output, keeping test logs clean
#[derive(Default)]
pub struct MockProgressReporter;

impl MockProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}
