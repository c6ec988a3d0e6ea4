//! Insertion watcher: rewrites relative anchors in newly inserted subtrees.
//!
//! The host delivers one notification per inserted subtree, the same shape a
//! mutation observer delivers added nodes. Planning (which anchors get which
//! corrected href) is a pure step separate from the apply step, so it can be
//! asserted on without mutating a tree.
//!
//! Two correction paths are installed per anchor: the href
//! attribute is overwritten (so hover/copy-link/middle-click see the corrected
//! target) AND a click interceptor recomputes the correction from the original
//! href at click time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dom::{DomError, DomTree, NodeHandle};
use crate::opener::Opener;
use crate::pages::PageTable;
use crate::rewrite::{correct_url, needs_correction};

/// One anchor rewrite decided by the planning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRewrite {
    pub handle: NodeHandle,
    pub original: String,
    pub corrected: String,
}

/// Outcome of dispatching a click to the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Default navigation was suppressed and the corrected URL handed to the
    /// opener.
    Intercepted,
    /// No interceptor registered for this anchor; the host should perform
    /// default navigation.
    Default,
}

/// Watches subtree insertions under an observed root and corrects relative
/// anchors. Inactive until [`start`](Self::start); `stop` makes teardown
/// explicit instead of relying on page-unload semantics.
pub struct LinkWatcher {
    table: PageTable,
    base_url: String,
    opener: Arc<dyn Opener>,
    observed_root: Option<NodeHandle>,
    /// anchor -> original href, kept so the interceptor can recompute the
    /// correction at click time.
    interceptors: HashMap<NodeHandle, String>,
}

impl LinkWatcher {
    pub fn new(table: PageTable, base_url: impl Into<String>, opener: Arc<dyn Opener>) -> Self {
        LinkWatcher {
            table,
            base_url: base_url.into(),
            opener,
            observed_root: None,
            interceptors: HashMap::new(),
        }
    }

    /// Begins observing insertions under `root`. Insertions delivered before
    /// this call are not processed retroactively.
    pub fn start(&mut self, root: NodeHandle) {
        self.observed_root = Some(root);
        tracing::info!(?root, "link watcher started");
    }

    /// Stops observing. Already-rewritten hrefs stay rewritten; registered
    /// click interceptors stay live, matching an anchor whose handler outlives
    /// the observer.
    pub fn stop(&mut self) {
        self.observed_root = None;
        tracing::info!("link watcher stopped");
    }

    pub fn is_active(&self) -> bool {
        self.observed_root.is_some()
    }

    /// Pure planning step: every anchor strictly within `root` whose href
    /// starts with the relative marker, paired with its corrected URL.
    /// Anchors without an href, or with a non-relative href, are skipped.
    pub fn plan_subtree(
        &self,
        tree: &DomTree,
        root: NodeHandle,
    ) -> Result<Vec<PlannedRewrite>, DomError> {
        let mut planned = Vec::new();
        for handle in tree.anchors_in(root)? {
            let Some(original) = tree.attr(handle, "href")? else {
                continue;
            };
            if !needs_correction(original) {
                continue;
            }
            planned.push(PlannedRewrite {
                handle,
                original: original.to_string(),
                corrected: correct_url(&self.table, &self.base_url, original),
            });
        }
        Ok(planned)
    }

    /// Insertion notification: plan the subtree, then apply each rewrite and
    /// register its click interceptor. Returns the number of anchors
    /// corrected; 0 when stopped or when the subtree is outside the observed
    /// root.
    pub fn on_insertion(
        &mut self,
        tree: &mut DomTree,
        root: NodeHandle,
    ) -> Result<usize, DomError> {
        let Some(observed) = self.observed_root else {
            return Ok(0);
        };
        if !tree.contains(observed, root)? {
            return Ok(0);
        }

        let planned = self.plan_subtree(tree, root)?;
        for rewrite in &planned {
            tree.set_attr(rewrite.handle, "href", rewrite.corrected.clone())?;
            self.interceptors
                .insert(rewrite.handle, rewrite.original.clone());
            tracing::debug!(
                original = %rewrite.original,
                corrected = %rewrite.corrected,
                "rewrote relative anchor"
            );
        }
        Ok(planned.len())
    }

    /// Click dispatch for an anchor. If an interceptor is registered the
    /// default navigation is suppressed and the corrected URL (recomputed from
    /// the original href) is opened in a new viewing context.
    pub fn click(&self, handle: NodeHandle) -> ClickOutcome {
        match self.interceptors.get(&handle) {
            Some(original) => {
                let corrected = correct_url(&self.table, &self.base_url, original);
                self.opener.open_in_new_context(&corrected);
                ClickOutcome::Intercepted
            }
            None => ClickOutcome::Default,
        }
    }
}
