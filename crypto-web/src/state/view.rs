//! # View Ownership
//!
//! The mount point is owned by exactly one view at a time. Each router
//! dispatch asks the [`ViewClock`] for a new [`ViewHandle`]; issuing a handle
//! invalidates every earlier one, so a response that arrives after the user
//! navigated away is dropped instead of overwriting the newer view.
//!
//! Inside a view, [`ViewHandle::begin_submission`] applies the same rule to
//! repeated form submissions and update clicks: only the latest
//! [`SubmissionTicket`] may render.

use std::cell::Cell;
use std::rc::Rc;

use crate::platform::{Binding, MountPoint};

/// Issues view generations.
#[derive(Clone, Default)]
pub struct ViewClock {
    current: Rc<Cell<u64>>,
}

impl ViewClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next generation. Every previously issued handle becomes
    /// stale.
    pub fn issue(&self, mount: Rc<dyn MountPoint>) -> ViewHandle {
        let generation = self.current.get() + 1;
        self.current.set(generation);
        ViewHandle {
            generation,
            clock: self.clone(),
            mount,
            submissions: Rc::new(Cell::new(0)),
        }
    }

    /// Generation of the view that currently owns the mount point.
    pub fn current(&self) -> u64 {
        self.current.get()
    }
}

/// Exclusive, invalidatable access to the mount point for one view.
#[derive(Clone)]
pub struct ViewHandle {
    generation: u64,
    clock: ViewClock,
    mount: Rc<dyn MountPoint>,
    submissions: Rc<Cell<u64>>,
}

impl ViewHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this view still owns the mount point.
    pub fn is_current(&self) -> bool {
        self.clock.current() == self.generation
    }

    fn guard(&self, what: &str) -> bool {
        if self.is_current() {
            true
        } else {
            log::debug!(
                "Dropping stale {} from view {} (current view is {})",
                what,
                self.generation,
                self.clock.current()
            );
            false
        }
    }

    /// Replace the whole mount point. Returns `false` if the view is stale.
    pub fn render(&self, markup: &str) -> bool {
        let owned = self.guard("render");
        if owned {
            self.mount.replace_root(markup);
        }
        owned
    }

    /// Replace one region of this view's markup.
    pub fn render_region(&self, region_id: &str, markup: &str) -> bool {
        let owned = self.guard("region render");
        if owned {
            self.mount.replace_region(region_id, markup);
        }
        owned
    }

    pub fn set_hidden(&self, region_id: &str, hidden: bool) -> bool {
        let owned = self.guard("visibility change");
        if owned {
            self.mount.set_hidden(region_id, hidden);
        }
        owned
    }

    /// Attach an input handler to this view's markup.
    pub fn bind(&self, binding: Binding) -> bool {
        let owned = self.guard("binding");
        if owned {
            self.mount.bind(binding);
        }
        owned
    }

    /// Start a submission; earlier tickets of this view become stale.
    pub fn begin_submission(&self) -> SubmissionTicket {
        let sequence = self.submissions.get() + 1;
        self.submissions.set(sequence);
        SubmissionTicket {
            view: self.clone(),
            sequence,
        }
    }
}

/// Rendering rights for one in-flight submission.
#[derive(Clone)]
pub struct SubmissionTicket {
    view: ViewHandle,
    sequence: u64,
}

impl SubmissionTicket {
    /// Current while its view is current and no later submission started.
    pub fn is_current(&self) -> bool {
        self.view.is_current() && self.view.submissions.get() == self.sequence
    }

    pub fn render_region(&self, region_id: &str, markup: &str) -> bool {
        if !self.is_current() {
            log::debug!(
                "Dropping superseded submission {} of view {}",
                self.sequence,
                self.view.generation
            );
            return false;
        }
        self.view.render_region(region_id, markup)
    }

    pub fn set_hidden(&self, region_id: &str, hidden: bool) -> bool {
        self.is_current() && self.view.set_hidden(region_id, hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryMount;

    #[test]
    fn test_new_handle_invalidates_previous() {
        let mount = Rc::new(MemoryMount::default());
        let clock = ViewClock::new();

        let first = clock.issue(mount.clone());
        assert!(first.is_current());
        assert!(first.render("<p>first</p>"));

        let second = clock.issue(mount.clone());
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.generation(), first.generation() + 1);

        assert!(!first.render("<p>stale</p>"));
        assert!(!first.render_region("any", "stale"));
        assert_eq!(mount.root(), "<p>first</p>");

        assert!(second.render("<p>second</p>"));
        assert_eq!(mount.root(), "<p>second</p>");
    }

    #[test]
    fn test_later_submission_supersedes_earlier() {
        let mount = Rc::new(MemoryMount::default());
        let clock = ViewClock::new();
        let view = clock.issue(mount.clone());

        let slow = view.begin_submission();
        let fast = view.begin_submission();

        assert!(fast.render_region("result", "fast"));
        assert!(!slow.render_region("result", "slow"));
        assert_eq!(mount.region("result").as_deref(), Some("fast"));
    }

    #[test]
    fn test_ticket_dies_with_its_view() {
        let mount = Rc::new(MemoryMount::default());
        let clock = ViewClock::new();
        let view = clock.issue(mount.clone());
        let ticket = view.begin_submission();

        clock.issue(mount.clone());

        assert!(!ticket.is_current());
        assert!(!ticket.set_hidden("result", false));
    }
}
