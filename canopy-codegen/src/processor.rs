//! Batch-driven orchestration of a session and an emitter.

use std::path::PathBuf;

use canopy_tree::{BatchOutcome, ConstantDecl, Diagnostic, TreeSession};
use eyre::Result;

use crate::emitter::{EmitResult, TreeEmitter};

/// When the processor flushes accumulated trees to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitPolicy {
    /// Emit immediately after the first batch.
    ///
    /// Avoids a pending-state diagnostic at the end of the run, at the cost
    /// of missing constants that only arrive in later batches. Safe as long
    /// as no upstream generator produces marked declarations of its own.
    #[default]
    FirstBatch,
    /// Emit only when the driver calls [`Processor::finish`].
    OnCompletion,
}

/// Drives a [`TreeSession`] and a [`TreeEmitter`] across input batches.
///
/// The driver feeds declaration batches through
/// [`Processor::process_batch`] and signals the end of input with
/// [`Processor::finish`]. Depending on the [`EmitPolicy`], emission happens
/// after the first batch or at the completion signal; either way it happens
/// exactly once, and batches arriving after it are rejected with a warning
/// diagnostic.
pub struct Processor<E: TreeEmitter> {
    emitter: E,
    session: TreeSession,
    policy: EmitPolicy,
    out_dir: PathBuf,
    result: Option<EmitResult>,
    diagnostics: Vec<Diagnostic>,
}

impl<E: TreeEmitter> Processor<E> {
    /// Create a processor emitting into `out_dir` with the default policy.
    pub fn new(emitter: E, out_dir: impl Into<PathBuf>) -> Self {
        let session = TreeSession::new(emitter.naming());
        Self {
            emitter,
            session,
            policy: EmitPolicy::default(),
            out_dir: out_dir.into(),
            result: None,
            diagnostics: Vec::new(),
        }
    }

    /// Set the emit policy.
    pub fn with_policy(mut self, policy: EmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Whether the forest has been emitted.
    pub fn has_emitted(&self) -> bool {
        self.result.is_some()
    }

    /// The result of the emission pass, once it has happened.
    pub fn result(&self) -> Option<&EmitResult> {
        self.result.as_ref()
    }

    /// Diagnostics collected by the session and the emission pass.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.session
            .diagnostics()
            .iter()
            .chain(self.diagnostics.iter())
    }

    /// Feed one batch of declarations.
    ///
    /// Under [`EmitPolicy::FirstBatch`] the first accepted batch triggers
    /// emission; later batches come back [`BatchOutcome::Rejected`].
    pub fn process_batch(
        &mut self,
        batch: impl IntoIterator<Item = ConstantDecl>,
    ) -> Result<BatchOutcome> {
        let outcome = self.session.accumulate(batch)?;
        if matches!(outcome, BatchOutcome::Accepted { .. })
            && self.policy == EmitPolicy::FirstBatch
            && self.result.is_none()
        {
            self.emit_now()?;
        }
        Ok(outcome)
    }

    /// Signal that no further batches will arrive.
    ///
    /// Emits the forest unless it was already emitted, in which case this is
    /// a no-op returning `None`.
    pub fn finish(&mut self) -> Result<Option<&EmitResult>> {
        if self.result.is_some() {
            return Ok(None);
        }
        self.emit_now()?;
        Ok(self.result.as_ref())
    }

    fn emit_now(&mut self) -> Result<()> {
        let forest = self.session.finish()?;
        let result = self.emitter.emit(&forest, &self.out_dir)?;
        for (path, err) in &result.failed {
            self.diagnostics.push(Diagnostic::warning(
                "emit",
                format!("failed to write {path}: {err}"),
            ));
        }
        self.diagnostics.push(Diagnostic::info(
            "emit",
            format!(
                "emitted {} of {} root files ({} skipped)",
                result.written.len(),
                forest.len(),
                result.skipped.len()
            ),
        ));
        self.result = Some(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use canopy_core::{NamingConvention, RUST_NAMING};
    use canopy_tree::Forest;
    use tempfile::TempDir;

    use super::*;
    use crate::emitter::{PreviewFile, write_root_files};

    /// Minimal emitter writing one line per root.
    struct StubEmitter;

    impl TreeEmitter for StubEmitter {
        fn language(&self) -> &'static str {
            "stub"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn naming(&self) -> NamingConvention {
            RUST_NAMING
        }

        fn preview(&self, forest: &Forest) -> Vec<PreviewFile> {
            forest
                .roots()
                .map(|root| PreviewFile {
                    path: format!("{}.txt", root.name()),
                    content: format!("{}\n", root.name()),
                })
                .collect()
        }

        fn emit(&self, forest: &Forest, out_dir: &Path) -> Result<EmitResult> {
            Ok(write_root_files(self.preview(forest), out_dir))
        }
    }

    fn decl(name: &str) -> ConstantDecl {
        ConstantDecl::new(name, "SystemConstants", "com.example", "value")
    }

    #[test]
    fn test_first_batch_policy_emits_immediately() {
        let temp = TempDir::new().unwrap();
        let mut processor = Processor::new(StubEmitter, temp.path());

        let outcome = processor.process_batch([decl("java_home")]).unwrap();
        assert_eq!(outcome, BatchOutcome::Accepted { constants: 1 });
        assert!(processor.has_emitted());
        assert!(temp.path().join("SystemConstant.txt").exists());

        // Late batch is rejected with a warning, not accumulated
        let outcome = processor.process_batch([decl("user_home")]).unwrap();
        assert_eq!(outcome, BatchOutcome::Rejected { skipped: 1 });
        assert!(
            processor
                .diagnostics()
                .any(|d| d.severity.is_warning() && d.message.contains("1 constants skipped"))
        );
    }

    #[test]
    fn test_on_completion_policy_emits_at_finish() {
        let temp = TempDir::new().unwrap();
        let mut processor =
            Processor::new(StubEmitter, temp.path()).with_policy(EmitPolicy::OnCompletion);

        processor.process_batch([decl("java_home")]).unwrap();
        processor.process_batch([decl("user_home")]).unwrap();
        assert!(!processor.has_emitted());
        assert!(!temp.path().join("SystemConstant.txt").exists());

        let result = processor.finish().unwrap();
        assert!(result.is_some());
        assert!(temp.path().join("SystemConstant.txt").exists());
    }

    #[test]
    fn test_finish_after_emission_is_a_noop() {
        let temp = TempDir::new().unwrap();
        let mut processor = Processor::new(StubEmitter, temp.path());

        processor.process_batch([decl("java_home")]).unwrap();
        assert!(processor.has_emitted());
        assert!(processor.finish().unwrap().is_none());
        assert!(processor.finish().unwrap().is_none());
    }

    #[test]
    fn test_emission_summary_diagnostic() {
        let temp = TempDir::new().unwrap();
        let mut processor =
            Processor::new(StubEmitter, temp.path()).with_policy(EmitPolicy::OnCompletion);

        processor.process_batch([decl("java_home")]).unwrap();
        processor.finish().unwrap();

        assert!(
            processor
                .diagnostics()
                .any(|d| d.stage == "emit" && d.message.contains("emitted 1 of 1"))
        );
    }

    #[test]
    fn test_empty_run_emits_nothing() {
        let temp = TempDir::new().unwrap();
        let mut processor =
            Processor::new(StubEmitter, temp.path()).with_policy(EmitPolicy::OnCompletion);

        let result = processor.finish().unwrap().unwrap();
        assert!(result.written.is_empty());
        assert!(result.is_clean());
    }
}
