/// Events emitted while a batch of structures is being estimated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchProgress {
    Started { total: u64 },
    ItemFinished { index: usize, succeeded: bool },
    Finished { succeeded: usize, failed: usize },
}

// Called from worker threads when the `parallel` feature is on.
pub type ProgressCallback<'a> = Box<dyn Fn(BatchProgress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: BatchProgress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

impl std::fmt::Debug for ProgressReporter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
