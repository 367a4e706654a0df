// Level collaborator: collision delegation and the vent handler slot

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use thiserror::Error;

use crate::engine::body::WorldBounds;
use crate::engine::sprite::Sprite;

/// Errors from the vent handler slot
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("a vent handler is already registered")]
    HandlerAlreadyRegistered,
    #[error("no vent handler is registered")]
    HandlerNotRegistered,
    #[error("vent handler is owned by a different token")]
    NotHandlerOwner,
}

/// Proof of ownership of the vent handler slot.
///
/// Not cloneable: the token is surrendered by value when the registration is
/// cleared, so a released claim cannot be replayed.
#[derive(Debug, PartialEq, Eq)]
pub struct VentToken {
    id: u64,
}

/// A pending trip through connected vents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VentTransit {
    /// Entry vent position
    pub from: Vec2,
    /// Exit vent position
    pub to: Vec2,
}

// Token ids are minted process-wide so tokens from different maps can
// never collide.
static NEXT_TOKEN_ID: AtomicU64 = AtomicU64::new(0);

/// The level the player moves through.
///
/// Owns the world bounds, the collision delegation hooks and the single
/// vent handler slot. At most one claimant can hold the slot at a time;
/// vent transits are queued only while the slot is claimed.
#[derive(Debug)]
pub struct Map {
    /// World region bodies are kept inside of
    bounds: WorldBounds,

    /// Id of the live vent registration, if any
    vent_handler: Option<u64>,

    /// Transits accepted while a handler was registered
    pending_vents: VecDeque<VentTransit>,

    /// Times the platform collision hook ran
    platform_collisions: u64,

    /// Times the duct collision hook ran
    duct_collisions: u64,
}

impl Map {
    /// Create a map with world bounds from (0, 0) to (width, height)
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: WorldBounds::new(width, height),
            vent_handler: None,
            pending_vents: VecDeque::new(),
            platform_collisions: 0,
            duct_collisions: 0,
        }
    }

    /// Get the world bounds for body integration
    pub fn world_bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Resolve the sprite against platform geometry.
    ///
    /// Level tiles live with the host scene; the hook records the call.
    pub fn collide_platforms(&mut self, _sprite: &mut Sprite) {
        self.platform_collisions += 1;
    }

    /// Resolve the sprite against the duct network
    pub fn collide_ducts(&mut self, _sprite: &mut Sprite) {
        self.duct_collisions += 1;
    }

    /// Get how many times the platform hook has run
    pub fn platform_collisions(&self) -> u64 {
        self.platform_collisions
    }

    /// Get how many times the duct hook has run
    pub fn duct_collisions(&self) -> u64 {
        self.duct_collisions
    }

    /// Claim the vent handler slot.
    ///
    /// Fails while another claim is live. The returned token is the only
    /// way to release the slot.
    pub fn register_vent_handler(&mut self) -> Result<VentToken, MapError> {
        if self.vent_handler.is_some() {
            return Err(MapError::HandlerAlreadyRegistered);
        }

        let id = NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed);
        self.vent_handler = Some(id);
        log::debug!("vent handler registered (token {})", id);
        Ok(VentToken { id })
    }

    /// Release the vent handler slot, consuming the claim token.
    ///
    /// The token is spent even when the call fails; a stale token has no
    /// further use.
    pub fn clear_vent_handler(&mut self, token: VentToken) -> Result<(), MapError> {
        match self.vent_handler {
            None => Err(MapError::HandlerNotRegistered),
            Some(id) if id != token.id => Err(MapError::NotHandlerOwner),
            Some(id) => {
                self.vent_handler = None;
                log::debug!("vent handler cleared (token {})", id);
                Ok(())
            }
        }
    }

    /// Check whether the vent handler slot is claimed
    pub fn has_vent_handler(&self) -> bool {
        self.vent_handler.is_some()
    }

    /// Fire a vent transit from an entry vent to an exit vent.
    ///
    /// Queued for the claimant if the slot is held, dropped otherwise.
    /// Returns whether the transit was accepted.
    pub fn trigger_vent(&mut self, from: Vec2, to: Vec2) -> bool {
        if self.vent_handler.is_none() {
            log::debug!("vent transit dropped, no handler registered");
            return false;
        }

        self.pending_vents.push_back(VentTransit { from, to });
        log::debug!("vent transit queued: {:?} -> {:?}", from, to);
        true
    }

    /// Take the oldest accepted vent transit, if any
    pub fn take_pending_vent(&mut self) -> Option<VentTransit> {
        self.pending_vents.pop_front()
    }
}
