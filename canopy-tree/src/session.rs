//! The accumulate/finish session that builds constant trees.

use canopy_core::NamingConvention;

use crate::decl::ConstantDecl;
use crate::diagnostic::Diagnostic;
use crate::error::{Error, Result};
use crate::node::{Forest, LeafField, Node};
use crate::path::split_segments;

/// Outcome of feeding one batch to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every constant in the batch was folded into the forest.
    Accepted { constants: usize },
    /// The session was already finished; nothing was accumulated.
    Rejected { skipped: usize },
}

enum State {
    Accumulating(Forest),
    Finished,
}

/// Accumulates marked declarations into a forest of constant trees.
///
/// The lifecycle is accumulate-once, finish-once: [`TreeSession::accumulate`]
/// may be called any number of times until [`TreeSession::finish`] hands the
/// forest to an emitter. Batches arriving after that are rejected with a
/// [`BatchOutcome::Rejected`] and a warning diagnostic naming the skipped
/// count; they are never silently dropped.
///
/// # Example
///
/// ```
/// use canopy_core::RUST_NAMING;
/// use canopy_tree::{ConstantDecl, TreeSession};
///
/// let mut session = TreeSession::new(RUST_NAMING);
/// session
///     .accumulate([ConstantDecl::new(
///         "java_io_tmpdir",
///         "SystemConstants",
///         "com.example",
///         "java.io.tmpdir",
///     )])
///     .unwrap();
/// let forest = session.finish().unwrap();
/// assert_eq!(forest.len(), 1);
/// ```
pub struct TreeSession {
    naming: NamingConvention,
    state: State,
    diagnostics: Vec<Diagnostic>,
}

impl TreeSession {
    /// Create a session building trees for the given target-language naming.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            state: State::Accumulating(Forest::default()),
            diagnostics: Vec::new(),
        }
    }

    /// Whether the forest has already been handed out.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Fold one batch of declarations into the forest.
    ///
    /// A declaration that violates an invariant (reassignable source, name
    /// conflict) fails with a typed error; declarations already accumulated
    /// stay intact. After [`TreeSession::finish`] the whole batch is counted
    /// and rejected.
    pub fn accumulate(
        &mut self,
        batch: impl IntoIterator<Item = ConstantDecl>,
    ) -> Result<BatchOutcome> {
        match &mut self.state {
            State::Finished => {
                let skipped = batch.into_iter().count();
                if skipped > 0 {
                    self.diagnostics.push(Diagnostic::warning(
                        "accumulate",
                        format!("{skipped} constants skipped: the forest was already emitted"),
                    ));
                }
                Ok(BatchOutcome::Rejected { skipped })
            }
            State::Accumulating(forest) => {
                let naming = self.naming;
                let mut constants = 0;
                for decl in batch {
                    Self::insert(forest, &naming, decl)?;
                    constants += 1;
                }
                Ok(BatchOutcome::Accepted { constants })
            }
        }
    }

    /// Hand out the accumulated forest, consuming the session state.
    ///
    /// Usable exactly once; a second call is an error.
    pub fn finish(&mut self) -> Result<Forest> {
        match std::mem::replace(&mut self.state, State::Finished) {
            State::Accumulating(forest) => Ok(forest),
            State::Finished => Err(Error::SessionFinished),
        }
    }

    fn insert(forest: &mut Forest, naming: &NamingConvention, decl: ConstantDecl) -> Result<()> {
        if decl.reassignable {
            return Err(Error::ReassignableSource {
                name: decl.name,
                enclosing_type: decl.enclosing_type,
            });
        }
        if decl.name.is_empty() {
            return Err(Error::EmptyConstantName);
        }

        let package = decl.effective_package().to_owned();
        let root_name = decl.effective_root_name();
        let key = format!("{package}.{root_name}");
        let root = forest
            .roots
            .entry(key)
            .or_insert_with(|| Node::root(root_name.clone(), package));

        let segments: Vec<String> = split_segments(&decl.name)
            .iter()
            .map(|segment| naming.sanitize_segment(segment))
            .collect();
        let Some((leaf, groups)) = segments.split_last() else {
            return Err(Error::EmptyConstantName);
        };

        // Walk down from the root, merging into existing groups and creating
        // the missing ones, until the last segment is reached.
        let mut node = root;
        for segment in groups {
            if node.fields.contains_key(segment) {
                return Err(Error::GroupFieldConflict {
                    segment: segment.clone(),
                    root: root_name.clone(),
                });
            }
            node = node
                .children
                .entry(segment.clone())
                .or_insert_with(|| Node::group(segment.clone()));
        }

        if node.children.contains_key(leaf) {
            return Err(Error::GroupFieldConflict {
                segment: leaf.clone(),
                root: root_name,
            });
        }
        if node.fields.contains_key(leaf) {
            return Err(Error::DuplicateConstant {
                segment: leaf.clone(),
                root: root_name,
            });
        }
        node.fields.insert(
            leaf.clone(),
            LeafField {
                name: leaf.clone(),
                value: decl.value,
                doc: decl.doc,
            },
        );
        Ok(())
    }
}
