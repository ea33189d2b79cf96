//! Shared morph state for tick and update callbacks
//!
//! One writer (the data-update path) replaces the whole [`MorphState`];
//! any number of readers (animation ticks) take an [`Arc`] snapshot and
//! evaluate frames outside the lock. The lock is only held for the pointer
//! swap, so readers never observe a half-built transition.

extern crate alloc;
use alloc::sync::Arc;
use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use super::morph::MorphState;
use super::path::CurvePath;

/// Current transition plus the last progress a frame was evaluated at
#[derive(Debug, Clone)]
struct Slot {
    state: Option<Arc<MorphState>>,
    progress: f32,
}

impl Slot {
    const EMPTY: Self = Self {
        state: None,
        progress: 0.0,
    };
}

/// Atomically swapped [`MorphState`] snapshot
///
/// Every [`SharedMorph::frame`] call also records its progress, so the next
/// data update can continue from the frame that was last on screen no matter
/// which handle drove the ticks.
///
/// `const`-constructible, so it can live in a `static`:
///
/// ```
/// use trendline_core::chart::SharedMorph;
///
/// static MORPH: SharedMorph = SharedMorph::new();
/// assert!(MORPH.snapshot().is_none());
/// ```
pub struct SharedMorph {
    slot: Mutex<CriticalSectionRawMutex, RefCell<Slot>>,
}

impl SharedMorph {
    /// Create an empty slot (no curve yet)
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(Slot::EMPTY)),
        }
    }

    /// Replace the current transition, returning the installed snapshot
    ///
    /// The recorded progress restarts at 0.
    pub fn install(&self, state: MorphState) -> Arc<MorphState> {
        let state = Arc::new(state);
        let installed = state.clone();
        self.slot.lock(|cell| {
            cell.replace(Slot {
                state: Some(installed),
                progress: 0.0,
            })
        });
        state
    }

    /// Take the current transition, if any
    pub fn snapshot(&self) -> Option<Arc<MorphState>> {
        self.slot.lock(|cell| cell.borrow().state.clone())
    }

    /// Last progress passed to [`SharedMorph::frame`] for the current transition
    pub fn progress(&self) -> f32 {
        self.slot.lock(|cell| cell.borrow().progress)
    }

    /// Current transition together with its last evaluated progress, read
    /// under one lock
    pub fn visible(&self) -> Option<(Arc<MorphState>, f32)> {
        self.slot.lock(|cell| {
            let slot = cell.borrow();
            slot.state.clone().map(|state| (state, slot.progress))
        })
    }

    /// Evaluate the current transition at `progress` and record it
    pub fn frame(&self, progress: f32) -> Option<CurvePath> {
        let state = self.slot.lock(|cell| {
            let mut slot = cell.borrow_mut();
            let state = slot.state.clone()?;
            slot.progress = progress;
            Some(state)
        })?;
        Some(state.frame(progress))
    }

    /// Drop the current transition
    pub fn clear(&self) {
        self.slot.lock(|cell| cell.replace(Slot::EMPTY));
    }
}

impl Default for SharedMorph {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SharedMorph {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let slot = self.slot.lock(|cell| cell.borrow().clone());
        f.debug_struct("SharedMorph")
            .field("state", &slot.state)
            .field("progress", &slot.progress)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use alloc::vec::Vec;

    use super::*;
    use crate::chart::path::PathCommand;
    use crate::chart::viewport::Point2D;

    fn flat_path(len: usize, y: f32) -> CurvePath {
        (0..len)
            .map(|i| {
                let point = Point2D::new(i as f32, y);
                if i == 0 {
                    PathCommand::MoveTo(point)
                } else {
                    PathCommand::sample(point)
                }
            })
            .collect()
    }

    #[test]
    fn test_install_and_snapshot() {
        let shared = SharedMorph::new();
        assert!(shared.snapshot().is_none());
        assert!(shared.frame(0.5).is_none());

        shared.install(MorphState::new(flat_path(4, 0.0), flat_path(4, 10.0)));
        let frame = shared.frame(0.5).unwrap();
        assert!(frame.end_points().all(|p| p.y == 5.0));

        shared.clear();
        assert!(shared.snapshot().is_none());
    }

    #[test]
    fn test_frame_records_progress() {
        let shared = SharedMorph::new();
        assert_eq!(shared.progress(), 0.0);

        // No transition yet, nothing to record
        assert!(shared.frame(0.7).is_none());
        assert_eq!(shared.progress(), 0.0);

        shared.install(MorphState::new(flat_path(4, 0.0), flat_path(4, 10.0)));
        shared.frame(0.3);
        shared.frame(0.5);
        assert_eq!(shared.progress(), 0.5);

        let (state, progress) = shared.visible().unwrap();
        assert_eq!(progress, 0.5);
        assert!(state.frame(progress).end_points().all(|p| p.y == 5.0));

        // A new transition starts over
        shared.install(MorphState::settled(flat_path(4, 3.0)));
        assert_eq!(shared.progress(), 0.0);

        shared.frame(1.0);
        shared.clear();
        assert_eq!(shared.progress(), 0.0);
        assert!(shared.visible().is_none());
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let shared = SharedMorph::new();
        shared.install(MorphState::settled(flat_path(3, 1.0)));
        let old = shared.snapshot().unwrap();

        shared.install(MorphState::settled(flat_path(3, 2.0)));

        // Readers holding the old snapshot keep a consistent pair
        assert_eq!(old.to(), &flat_path(3, 1.0));
        assert_eq!(shared.snapshot().unwrap().to(), &flat_path(3, 2.0));
    }

    #[test]
    fn test_readers_never_see_mixed_pairs() {
        static SHARED: SharedMorph = SharedMorph::new();
        SHARED.install(MorphState::settled(flat_path(8, 0.0)));

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for step in 1..=200 {
                    let len = 8 + step % 5;
                    let previous = SHARED.snapshot().unwrap();
                    SHARED.install(previous.rotate(0.5, flat_path(len, step as f32)));
                }
            });

            let readers: Vec<_> = (0..3)
                .map(|_| {
                    scope.spawn(|| {
                        for tick in 0..500 {
                            let state = SHARED.snapshot().unwrap();
                            assert!(state.from().is_compatible_with(state.to()));
                            let frame = state.frame((tick % 11) as f32 / 10.0);
                            assert_eq!(frame.len(), state.to().len());
                        }
                    })
                })
                .collect();

            for reader in readers {
                reader.join().unwrap();
            }
        });
    }
}
