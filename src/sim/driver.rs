//! Field lifecycle owner
//!
//! The driver is what the timer talks to. It holds the authoritative field
//! between ticks, spawns it on mount, and drops it on unmount. Once unmounted
//! it stays inert, so a timer callback that was already queued cannot touch
//! the field.

use rand::Rng;

use super::state::FieldState;
use super::tick::tick;
use crate::viewport::Viewport;

/// Lifecycle phase of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// Created, not yet mounted
    Idle,
    /// Field exists and ticks advance it
    Active,
    /// Torn down; terminal
    Unmounted,
}

#[derive(Debug)]
pub struct FieldDriver {
    phase: DriverPhase,
    state: Option<FieldState>,
}

impl Default for FieldDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldDriver {
    pub fn new() -> Self {
        Self {
            phase: DriverPhase::Idle,
            state: None,
        }
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == DriverPhase::Active
    }

    /// Spawn the field from a seed. Returns false if the driver was not idle.
    pub fn mount(&mut self, seed: u64, viewport: Option<Viewport>) -> bool {
        if !self.can_mount() {
            return false;
        }
        self.activate(FieldState::new(seed, viewport));
        log::info!("Field mounted with seed {}", seed);
        true
    }

    /// Spawn the field from an injected random source
    pub fn mount_with<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Option<Viewport>) -> bool {
        if !self.can_mount() {
            return false;
        }
        self.activate(FieldState::spawn(rng, viewport));
        log::info!("Field mounted");
        true
    }

    fn can_mount(&self) -> bool {
        match self.phase {
            DriverPhase::Idle => true,
            DriverPhase::Active => {
                log::warn!("Field already mounted, ignoring mount");
                false
            }
            DriverPhase::Unmounted => {
                log::warn!("Field was unmounted, ignoring mount");
                false
            }
        }
    }

    fn activate(&mut self, state: FieldState) {
        self.state = Some(state);
        self.phase = DriverPhase::Active;
    }

    /// Timer callback: one tick if active. Returns whether a tick ran.
    pub fn on_timer(&mut self, viewport: Viewport) -> bool {
        if self.phase != DriverPhase::Active {
            return false;
        }
        match self.state.as_mut() {
            Some(state) => {
                tick(state, viewport);
                true
            }
            None => false,
        }
    }

    /// Tear down: drop the field, refuse further ticks
    pub fn unmount(&mut self) {
        if self.phase == DriverPhase::Unmounted {
            return;
        }
        let ticks = self.state.as_ref().map_or(0, |s| s.time_ticks);
        self.state = None;
        self.phase = DriverPhase::Unmounted;
        log::info!("Field unmounted after {} ticks", ticks);
    }

    /// Current field for drawing
    pub fn state(&self) -> Option<&FieldState> {
        self.state.as_ref()
    }
}
