//! Detail overlay lifecycle and focus trap.
//!
//! ```text
//! Closed ──open──▶ Opening ──activate──▶ Open ──request_close──▶ Closing
//!    ▲                                                             │
//!    └──────────── finalize (transition end OR fallback timer) ────┘
//! ```
//!
//! `finalize` is reachable from two triggers and only acts on a `Closing`
//! session whose generation matches, so whichever trigger fires second is a
//! no-op. Re-opening while a session is live force-closes it first.

use crate::error::{GalleryError, GalleryResult};
use crate::types::Collection;

/// Lifecycle phase of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Description of a potentially focusable element inside the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Focusable {
    pub visible: bool,
    pub disabled: bool,
}

impl Focusable {
    pub fn enabled() -> Self {
        Self {
            visible: true,
            disabled: false,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.visible && !self.disabled
    }
}

/// Tab cycler over a snapshot of focusable elements.
///
/// Indices refer to the descriptor list the trap was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTrap {
    eligible: Vec<usize>,
    position: Option<usize>,
}

impl FocusTrap {
    pub fn snapshot(elements: &[Focusable]) -> Self {
        Self {
            eligible: elements
                .iter()
                .enumerate()
                .filter(|(_, e)| e.is_eligible())
                .map(|(i, _)| i)
                .collect(),
            position: None,
        }
    }

    pub fn len(&self) -> usize {
        self.eligible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }

    /// Index of the first element, and make it current
    pub fn first(&mut self) -> Option<usize> {
        let first = *self.eligible.first()?;
        self.position = Some(0);
        Some(first)
    }

    /// Record that focus landed on `index` by other means (click, programmatic)
    pub fn focused(&mut self, index: usize) {
        if let Some(pos) = self.eligible.iter().position(|&i| i == index) {
            self.position = Some(pos);
        }
    }

    /// Advance for Tab (`shift == false`) or Shift+Tab, wrapping at both ends.
    pub fn next(&mut self, shift: bool) -> Option<usize> {
        let len = self.eligible.len();
        if len == 0 {
            return None;
        }
        let pos = match (self.position, shift) {
            (None, false) => 0,
            (None, true) => len - 1,
            (Some(p), false) => (p + 1) % len,
            (Some(p), true) => (p + len - 1) % len,
        };
        self.position = Some(pos);
        Some(self.eligible[pos])
    }
}

/// CSS property whose transition end finishes a close
pub const FADE_PROPERTY: &str = "opacity";

/// State owned by one open overlay
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySession<H> {
    pub character_id: String,
    pub generation: u64,
    pub trap: FocusTrap,
    trigger: Option<H>,
    /// Mounted controls in tab order; `None` until the host reports them
    controls: Vec<Option<H>>,
}

/// Result of a finalized close
#[derive(Debug)]
pub struct Finalized<H> {
    pub character_id: String,
    /// The card that opened the overlay; focus goes back here
    pub trigger: Option<H>,
}

/// Overlay state machine. `H` is the host UI's handle to the triggering card.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<H> {
    phase: OverlayPhase,
    session: Option<OverlaySession<H>>,
    generation: u64,
}

impl<H> Default for Overlay<H> {
    fn default() -> Self {
        Self {
            phase: OverlayPhase::Closed,
            session: None,
            generation: 0,
        }
    }
}

impl<H> Overlay<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&OverlaySession<H>> {
        self.session.as_ref()
    }

    pub fn character_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.character_id.as_str())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Element is laid out (any phase but `Closed`)
    pub fn is_mounted(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    /// Element carries the "active" visual state
    pub fn is_active(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    /// Whether a late result for `generation` may still be written
    pub fn accepts(&self, generation: u64) -> bool {
        matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open)
            && self.session.as_ref().is_some_and(|s| s.generation == generation)
    }

    /// `Closed → Opening` for a known id. Returns the session generation.
    ///
    /// An unknown id fails with `NotFound` and leaves the state untouched.
    pub fn open(&mut self, collection: &Collection, id: &str, trigger: Option<H>) -> GalleryResult<u64> {
        if collection.get(id).is_none() {
            return Err(GalleryError::NotFound(id.to_string()));
        }

        // a live session's controls stay mounted across a re-open
        let controls = match self.session.take() {
            Some(previous) => {
                tracing::debug!(
                    "Overlay re-opened while {:?} for {}; discarding previous session",
                    self.phase,
                    previous.character_id
                );
                previous.controls
            }
            None => Vec::new(),
        };

        self.generation += 1;
        self.session = Some(OverlaySession {
            character_id: id.to_string(),
            generation: self.generation,
            trap: FocusTrap::default(),
            trigger,
            controls,
        });
        self.phase = OverlayPhase::Opening;
        Ok(self.generation)
    }

    /// Record the mounted element for control `slot` of the live session.
    pub fn register_control(&mut self, slot: usize, handle: H) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.controls.len() <= slot {
            session.controls.resize_with(slot + 1, || None);
        }
        session.controls[slot] = Some(handle);
        true
    }

    /// Mounted element for control `slot`, if reported
    pub fn control(&self, slot: usize) -> Option<&H> {
        self.session.as_ref()?.controls.get(slot)?.as_ref()
    }

    /// Descriptors for the registered controls; unreported slots are not visible.
    pub fn control_focusables(&self) -> Vec<Focusable> {
        self.session
            .as_ref()
            .map(|s| {
                s.controls
                    .iter()
                    .map(|c| Focusable {
                        visible: c.is_some(),
                        disabled: false,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether Tab must be kept inside the overlay
    pub fn traps_tab(&self) -> bool {
        self.is_active()
    }

    /// `Opening → Open` after the first paint; snapshots the focus trap.
    pub fn activate(&mut self, focusables: &[Focusable]) -> bool {
        if self.phase != OverlayPhase::Opening {
            return false;
        }
        if let Some(session) = self.session.as_mut() {
            session.trap = FocusTrap::snapshot(focusables);
        }
        self.phase = OverlayPhase::Open;
        true
    }

    /// `Open → Closing` (close button, backdrop, Escape).
    pub fn request_close(&mut self) -> bool {
        match self.phase {
            OverlayPhase::Opening | OverlayPhase::Open => {
                self.phase = OverlayPhase::Closing;
                true
            }
            _ => false,
        }
    }

    /// `Closing → Closed`. Idempotent; a stale generation is ignored.
    pub fn finalize(&mut self, generation: u64) -> Option<Finalized<H>> {
        if self.phase != OverlayPhase::Closing || self.generation != generation {
            return None;
        }
        self.phase = OverlayPhase::Closed;
        self.session.take().map(|s| Finalized {
            character_id: s.character_id,
            trigger: s.trigger,
        })
    }

    /// Transition end on the overlay element. Only the fade finishes a close.
    pub fn transition_ended(&mut self, generation: u64, property: &str) -> Option<Finalized<H>> {
        if property != FADE_PROPERTY {
            return None;
        }
        self.finalize(generation)
    }

    pub fn trap_mut(&mut self) -> Option<&mut FocusTrap> {
        if self.phase != OverlayPhase::Open {
            return None;
        }
        self.session.as_mut().map(|s| &mut s.trap)
    }
}
