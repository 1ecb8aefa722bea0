//! Window swallowing.
//!
//! When a process spawned from a terminal opens its own window, the terminal
//! window is redundant until the child closes again. The tracker walks the
//! new window's process ancestry looking for a window-owning ancestor,
//! minimizes it, and restores it when the child window is destroyed.
//!
//! Relations live in a side table owned by the tracker. Host window objects
//! are never mutated beyond the `set_minimized` call.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How many generations of the process tree to search for a window-owning
/// ancestor before giving up.
pub const MAX_SWALLOW_HOPS: usize = 5;

/// A backend-agnostic identifier for a window managed by the host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// Parent lookups over the operating system's process table.
pub trait ProcessTable {
    /// The parent process id, or `None` if the process has no parent or is
    /// already gone. A vanished process must not be an error.
    fn parent(&self, pid: u32) -> Option<u32>;
}

/// [`ProcessTable`] backed by `/proc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcDir;

impl ProcessTable for ProcDir {
    fn parent(&self, pid: u32) -> Option<u32> {
        let stat = std::fs::read_to_string(format!("/proc/{pid}/stat")).ok()?;
        parse_stat_ppid(&stat)
    }
}

/// Extracts field 4 (ppid) of `/proc/<pid>/stat`. The comm field may itself
/// contain spaces, so the remaining fields start after the last `)`.
fn parse_stat_ppid(stat: &str) -> Option<u32> {
    let (_, after_comm) = stat.rsplit_once(')')?;
    let ppid_str = after_comm.split_ascii_whitespace().nth(1)?;
    let ppid = u32::from_str(ppid_str).ok()?;
    // pid 0 is the kernel, the chain ends here.
    if ppid == 0 {
        None
    } else {
        Some(ppid)
    }
}

/// The host's live window map, as far as swallowing needs it.
pub trait WindowRegistry {
    /// Every managed window together with the process id it reported.
    fn windows(&self) -> Vec<(WindowHandle, Option<u32>)>;

    /// Returns `false` when the window is no longer known to the host.
    fn set_minimized(&mut self, handle: WindowHandle, minimized: bool) -> bool;
}

/// Side table of swallow relations: child window to the minimized parent
/// window it hides.
#[derive(Debug, Default)]
pub struct SwallowTracker {
    swallowed: HashMap<WindowHandle, WindowHandle>,
}

impl SwallowTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The parent a child window is currently hiding, if any.
    #[must_use]
    pub fn swallowed_parent(&self, child: WindowHandle) -> Option<WindowHandle> {
        self.swallowed.get(&child).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swallowed.is_empty()
    }

    /// Host hook for a newly created window.
    ///
    /// Walks up to [`MAX_SWALLOW_HOPS`] generations of the new window's
    /// process ancestry. The first ancestor owning a window is minimized and
    /// recorded as the parent; a chain that ends early or a failed process
    /// lookup ends the walk with no action.
    pub fn window_created<P: ProcessTable, R: WindowRegistry>(
        &mut self,
        procs: &P,
        registry: &mut R,
        handle: WindowHandle,
        pid: Option<u32>,
    ) {
        let Some(pid) = pid else { return };
        // A window is never allowed to swallow itself.
        let window_by_pid: HashMap<u32, WindowHandle> = registry
            .windows()
            .into_iter()
            .filter(|(candidate, _)| *candidate != handle)
            .filter_map(|(candidate, candidate_pid)| candidate_pid.map(|p| (p, candidate)))
            .collect();

        let mut ancestor = procs.parent(pid);
        for _ in 0..MAX_SWALLOW_HOPS {
            let Some(current) = ancestor else { return };
            if let Some(&parent) = window_by_pid.get(&current) {
                if registry.set_minimized(parent, true) {
                    tracing::debug!(
                        "window {handle:?} (pid {pid}) swallowed parent {parent:?} (pid {current})"
                    );
                    self.swallowed.insert(handle, parent);
                }
                return;
            }
            ancestor = procs.parent(current);
        }
    }

    /// Host hook for a destroyed window.
    ///
    /// Restores the recorded parent's visibility, if there is one. Relations
    /// pointing *at* the destroyed window are dropped as well so a stale
    /// handle is never restored later.
    pub fn window_destroyed<R: WindowRegistry>(&mut self, registry: &mut R, handle: WindowHandle) {
        if let Some(parent) = self.swallowed.remove(&handle) {
            tracing::debug!("window {handle:?} destroyed, unswallowing parent {parent:?}");
            registry.set_minimized(parent, false);
        }
        self.swallowed.retain(|_, parent| *parent != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Process table built from (child, parent) pairs.
    struct FakeProcs(HashMap<u32, u32>);

    impl FakeProcs {
        fn chain(pairs: &[(u32, u32)]) -> Self {
            Self(pairs.iter().copied().collect())
        }
    }

    impl ProcessTable for FakeProcs {
        fn parent(&self, pid: u32) -> Option<u32> {
            self.0.get(&pid).copied()
        }
    }

    #[derive(Default)]
    struct FakeRegistry {
        windows: Vec<(WindowHandle, Option<u32>)>,
        minimized: HashMap<WindowHandle, bool>,
    }

    impl FakeRegistry {
        fn with_windows(windows: &[(u64, u32)]) -> Self {
            Self {
                windows: windows
                    .iter()
                    .map(|&(id, pid)| (WindowHandle(id), Some(pid)))
                    .collect(),
                minimized: HashMap::new(),
            }
        }

        fn is_minimized(&self, id: u64) -> bool {
            self.minimized.get(&WindowHandle(id)).copied().unwrap_or(false)
        }
    }

    impl WindowRegistry for FakeRegistry {
        fn windows(&self) -> Vec<(WindowHandle, Option<u32>)> {
            self.windows.clone()
        }

        fn set_minimized(&mut self, handle: WindowHandle, minimized: bool) -> bool {
            if self.windows.iter().any(|(h, _)| *h == handle) {
                self.minimized.insert(handle, minimized);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn stat_ppid_parsing_handles_spaces_in_comm() {
        assert_eq!(parse_stat_ppid("42 (cat) R 7 42 42 0 -1"), Some(7));
        assert_eq!(parse_stat_ppid("43 (tmux: server) S 1 43 43 0 -1"), Some(1));
        assert_eq!(parse_stat_ppid("44 ((sd-pam)) S 512 44 44 0 -1"), Some(512));
        // pid 1 reports ppid 0, the end of the chain.
        assert_eq!(parse_stat_ppid("1 (init) S 0 1 1 0 -1"), None);
        assert_eq!(parse_stat_ppid("garbage"), None);
    }

    #[test]
    fn direct_parent_is_swallowed() {
        // terminal (pid 100, window 1) spawned the new window's process 200.
        let procs = FakeProcs::chain(&[(200, 100)]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100), (2, 200)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(200));

        assert!(registry.is_minimized(1));
        assert_eq!(tracker.swallowed_parent(WindowHandle(2)), Some(WindowHandle(1)));
    }

    #[test]
    fn ancestor_at_fifth_hop_is_swallowed() {
        let procs = FakeProcs::chain(&[(600, 500), (500, 400), (400, 300), (300, 200), (200, 100)]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100), (2, 600)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(600));

        assert!(registry.is_minimized(1));
        assert_eq!(tracker.swallowed_parent(WindowHandle(2)), Some(WindowHandle(1)));
    }

    #[test]
    fn ancestor_beyond_fifth_hop_is_ignored() {
        let procs = FakeProcs::chain(&[
            (700, 600),
            (600, 500),
            (500, 400),
            (400, 300),
            (300, 200),
            (200, 100),
        ]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100), (2, 700)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(700));

        assert!(!registry.is_minimized(1));
        assert!(tracker.is_empty());
    }

    #[test]
    fn nearest_window_owning_ancestor_wins() {
        // Both the shell's terminal (window 1) and a further ancestor
        // (window 3) own windows; only the nearest is swallowed.
        let procs = FakeProcs::chain(&[(300, 200), (200, 100), (100, 50)]);
        let mut registry = FakeRegistry::with_windows(&[(1, 200), (3, 50), (2, 300)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(300));

        assert!(registry.is_minimized(1));
        assert!(!registry.is_minimized(3));
        assert_eq!(tracker.swallowed_parent(WindowHandle(2)), Some(WindowHandle(1)));
    }

    #[test]
    fn short_chain_without_windowed_ancestor_does_nothing() {
        let procs = FakeProcs::chain(&[(200, 150)]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100), (2, 200)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(200));

        assert!(!registry.is_minimized(1));
        assert!(tracker.is_empty());
    }

    #[test]
    fn vanished_process_aborts_the_walk() {
        // parent lookup of the new window's own pid already fails.
        let procs = FakeProcs::chain(&[]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100), (2, 200)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(200));

        assert!(!registry.is_minimized(1));
        assert!(tracker.is_empty());
    }

    #[test]
    fn window_without_pid_is_ignored() {
        let procs = FakeProcs::chain(&[(200, 100)]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), None);

        assert!(!registry.is_minimized(1));
        assert!(tracker.is_empty());
    }

    #[test]
    fn window_does_not_swallow_itself() {
        // The new window's own pid shows up in the registry before the hook
        // runs; an ancestry loop must not select it.
        let procs = FakeProcs::chain(&[(200, 200)]);
        let mut registry = FakeRegistry::with_windows(&[(2, 200)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(200));

        assert!(!registry.is_minimized(2));
        assert!(tracker.is_empty());
    }

    #[test]
    fn destroy_restores_the_recorded_parent() {
        let procs = FakeProcs::chain(&[(200, 100)]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100), (2, 200)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(200));
        assert!(registry.is_minimized(1));

        tracker.window_destroyed(&mut registry, WindowHandle(2));
        assert!(!registry.is_minimized(1));
        assert!(tracker.is_empty());
    }

    #[test]
    fn destroy_without_recorded_parent_is_a_no_op() {
        let mut registry = FakeRegistry::with_windows(&[(1, 100)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_destroyed(&mut registry, WindowHandle(1));

        assert!(!registry.is_minimized(1));
    }

    #[test]
    fn destroying_the_parent_drops_the_relation() {
        let procs = FakeProcs::chain(&[(200, 100)]);
        let mut registry = FakeRegistry::with_windows(&[(1, 100), (2, 200)]);
        let mut tracker = SwallowTracker::new();

        tracker.window_created(&procs, &mut registry, WindowHandle(2), Some(200));
        assert!(registry.is_minimized(1));

        // The host forgets a destroyed window entirely.
        registry.windows.retain(|(handle, _)| *handle != WindowHandle(1));
        tracker.window_destroyed(&mut registry, WindowHandle(1));
        assert!(tracker.is_empty());

        // The child closing later must not reach the dead handle; the stale
        // minimized entry in the fake stays exactly as it was.
        tracker.window_destroyed(&mut registry, WindowHandle(2));
        assert!(registry.is_minimized(1));
    }
}
