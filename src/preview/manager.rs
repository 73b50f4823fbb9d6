// SPDX-License-Identifier: MPL-2.0
//! Bind/unbind state machine for the preview resource.
//!
//! The manager guarantees at most one live [`PreviewHandle`] at a time. It
//! never touches a store itself: every transition that makes a handle stale
//! hands that handle back to the caller, who must release it. Generation
//! numbers stamp each acquisition so a copy that finishes after its selection
//! was superseded is surrendered for release instead of being shown.

use super::PreviewHandle;
use crate::media::{SelectedFile, SelectionId};
use std::sync::Arc;

/// Observable preview lifecycle state.
#[derive(Debug, Default)]
pub enum PreviewState {
    /// No selection bound.
    #[default]
    Empty,
    /// A copy of the bound selection is being written; nothing playable yet.
    Pending { selection: SelectionId },
    /// The bound selection has a playable copy.
    Ready {
        selection: SelectionId,
        handle: PreviewHandle,
    },
}

/// What the caller must do after a bind request.
#[derive(Debug)]
pub enum BindAction {
    /// The identity-equal selection is already bound; do not churn the
    /// resource.
    AlreadyBound,
    /// Start acquiring a copy stamped with `generation`. `superseded` is the
    /// previous handle, if one was live; it must be released.
    Acquire {
        generation: u64,
        superseded: Option<PreviewHandle>,
    },
}

/// Owns the preview lifecycle for one mounted view.
#[derive(Debug, Default)]
pub struct Manager {
    state: PreviewState,
    generation: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Returns the live handle, if the bound selection is ready.
    #[must_use]
    pub fn ready_handle(&self) -> Option<&PreviewHandle> {
        match &self.state {
            PreviewState::Ready { handle, .. } => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, PreviewState::Pending { .. })
    }

    /// Binds a selection. Rebinding the identity-equal selection is a no-op;
    /// anything else supersedes the current resource and starts a new
    /// acquisition.
    pub fn begin_bind(&mut self, file: &Arc<SelectedFile>) -> BindAction {
        let bound = match &self.state {
            PreviewState::Pending { selection } | PreviewState::Ready { selection, .. } => {
                Some(*selection)
            }
            PreviewState::Empty => None,
        };
        if bound == Some(file.id()) {
            return BindAction::AlreadyBound;
        }

        self.generation += 1;
        let superseded = self.take_handle();
        self.state = PreviewState::Pending {
            selection: file.id(),
        };
        BindAction::Acquire {
            generation: self.generation,
            superseded,
        }
    }

    /// Delivers a finished acquisition. Returns the handle back if it is
    /// stale (superseded or cleared since the acquisition started); the
    /// caller must release a returned handle immediately.
    pub fn bind_ready(&mut self, generation: u64, handle: PreviewHandle) -> Option<PreviewHandle> {
        match &self.state {
            PreviewState::Pending { selection } if generation == self.generation => {
                self.state = PreviewState::Ready {
                    selection: *selection,
                    handle,
                };
                None
            }
            _ => Some(handle),
        }
    }

    /// Records a failed acquisition. A stale failure (superseded since the
    /// acquisition started) leaves the current state alone.
    pub fn bind_failed(&mut self, generation: u64) {
        if generation == self.generation && self.is_pending() {
            self.state = PreviewState::Empty;
        }
    }

    /// Unbinds the current selection (bind of "nothing"). Returns the handle
    /// to release, if one was live.
    pub fn clear(&mut self) -> Option<PreviewHandle> {
        self.generation += 1;
        let handle = self.take_handle();
        self.state = PreviewState::Empty;
        handle
    }

    /// Teardown when the owning view stops being observed. Releases at most
    /// once: a second call finds nothing to surrender.
    pub fn unbind(&mut self) -> Option<PreviewHandle> {
        self.clear()
    }

    /// The stamp of the newest acquisition, for tests that deliver staged
    /// copies by hand.
    #[cfg(test)]
    pub(crate) fn current_generation(&self) -> u64 {
        self.generation
    }

    fn take_handle(&mut self) -> Option<PreviewHandle> {
        match std::mem::take(&mut self.state) {
            PreviewState::Ready { handle, .. } => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn selection(name: &str) -> Arc<SelectedFile> {
        Arc::new(SelectedFile::new(name, vec![0u8; 4]))
    }

    fn handle(id: u64) -> PreviewHandle {
        PreviewHandle::new(id, PathBuf::from(format!("/scratch/{id}.mp4")))
    }

    fn acquire_parts(action: BindAction) -> (u64, Option<PreviewHandle>) {
        match action {
            BindAction::Acquire {
                generation,
                superseded,
            } => (generation, superseded),
            BindAction::AlreadyBound => panic!("expected an acquisition"),
        }
    }

    #[test]
    fn bind_then_ready_exposes_the_handle() {
        let mut manager = Manager::new();
        let (generation, superseded) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        assert!(superseded.is_none());
        assert!(manager.is_pending());

        assert!(manager.bind_ready(generation, handle(1)).is_none());
        assert_eq!(manager.ready_handle().map(PreviewHandle::id), Some(1));
    }

    #[test]
    fn rebinding_same_selection_is_a_noop() {
        let mut manager = Manager::new();
        let file = selection("a.mp4");
        let (generation, _) = acquire_parts(manager.begin_bind(&file));
        assert!(manager.bind_ready(generation, handle(1)).is_none());

        assert!(matches!(
            manager.begin_bind(&file),
            BindAction::AlreadyBound
        ));
        assert_eq!(manager.ready_handle().map(PreviewHandle::id), Some(1));
    }

    #[test]
    fn superseding_a_ready_selection_surrenders_its_handle() {
        let mut manager = Manager::new();
        let (gen_a, _) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        assert!(manager.bind_ready(gen_a, handle(1)).is_none());

        let (gen_b, superseded) = acquire_parts(manager.begin_bind(&selection("b.mp4")));
        assert_eq!(superseded.map(|h| h.id()), Some(1));
        assert!(manager.is_pending());

        assert!(manager.bind_ready(gen_b, handle(2)).is_none());
        assert_eq!(manager.ready_handle().map(PreviewHandle::id), Some(2));
    }

    #[test]
    fn superseded_acquisition_is_never_exposed() {
        // Select A, then B before A's copy is ready: A's handle must come
        // straight back for release and only B's may become ready.
        let mut manager = Manager::new();
        let (gen_a, _) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        let (gen_b, superseded) = acquire_parts(manager.begin_bind(&selection("b.mp4")));
        assert!(superseded.is_none());

        let stale = manager.bind_ready(gen_a, handle(1));
        assert_eq!(stale.map(|h| h.id()), Some(1));
        assert!(manager.is_pending());

        assert!(manager.bind_ready(gen_b, handle(2)).is_none());
        assert_eq!(manager.ready_handle().map(PreviewHandle::id), Some(2));
    }

    #[test]
    fn clear_surrenders_the_live_handle() {
        let mut manager = Manager::new();
        let (generation, _) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        assert!(manager.bind_ready(generation, handle(1)).is_none());

        assert_eq!(manager.clear().map(|h| h.id()), Some(1));
        assert!(matches!(manager.state(), PreviewState::Empty));
    }

    #[test]
    fn ready_after_clear_is_stale() {
        let mut manager = Manager::new();
        let (generation, _) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        assert!(manager.clear().is_none());

        let stale = manager.bind_ready(generation, handle(1));
        assert_eq!(stale.map(|h| h.id()), Some(1));
        assert!(matches!(manager.state(), PreviewState::Empty));
    }

    #[test]
    fn unbind_releases_exactly_once() {
        let mut manager = Manager::new();
        let (generation, _) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        assert!(manager.bind_ready(generation, handle(1)).is_none());

        assert!(manager.unbind().is_some());
        assert!(manager.unbind().is_none());
    }

    #[test]
    fn failed_acquisition_empties_a_pending_bind() {
        let mut manager = Manager::new();
        let (generation, _) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        manager.bind_failed(generation);
        assert!(matches!(manager.state(), PreviewState::Empty));
    }

    #[test]
    fn stale_failure_does_not_disturb_the_new_bind() {
        let mut manager = Manager::new();
        let (gen_a, _) = acquire_parts(manager.begin_bind(&selection("a.mp4")));
        let (gen_b, _) = acquire_parts(manager.begin_bind(&selection("b.mp4")));

        manager.bind_failed(gen_a);
        assert!(manager.is_pending());

        assert!(manager.bind_ready(gen_b, handle(2)).is_none());
        assert_eq!(manager.ready_handle().map(PreviewHandle::id), Some(2));
    }
}
