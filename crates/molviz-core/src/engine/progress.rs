/// Events emitted while an import runs, for hosts that display progress.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    ImportStart { total_molecules: u64 },
    MoleculeBuilt { index: usize, atoms: usize, bonds: usize },
    MoleculeFailed { index: usize, reason: String },
    ImportFinish { built: usize, failed: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    /// A reporter that drops every event.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::ImportFinish { built: 0, failed: 0 });
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let events = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                events.lock().unwrap().push(event);
            }));
            reporter.report(Progress::ImportStart { total_molecules: 2 });
            reporter.report(Progress::MoleculeFailed {
                index: 1,
                reason: "bad bond".to_string(),
            });
        }
        let events = events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                Progress::ImportStart { total_molecules: 2 },
                Progress::MoleculeFailed {
                    index: 1,
                    reason: "bad bond".to_string()
                },
            ]
        );
    }
}
