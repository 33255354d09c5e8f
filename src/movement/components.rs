//! Movement domain: components, physics layers and contact classification.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, walls and platforms
    Environment,
    /// Player character
    Player,
    /// Enemy bodies and enemy sensors
    Enemy,
    /// Spikes, pits and other static damage
    Hazard,
    /// Health pickups
    Pickup,
    /// Level exit and other non-blocking triggers
    Sensor,
    /// Player shots
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// What a collider is, as far as the player is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactKind {
    Environment,
    Enemy,
    Hazard,
    PickUp,
    #[default]
    Other,
}

/// Tags a collider with its [`ContactKind`]. Untagged colliders are `Other`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceTag(pub ContactKind);

/// Which side an environment wall was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// True when horizontal input pushes into this wall.
    pub fn pressed_by(self, move_x: f32) -> bool {
        match self {
            WallContact::Left => move_x < 0.0,
            WallContact::Right => move_x > 0.0,
            WallContact::None => false,
        }
    }
}

/// Player locomotion state owned by the state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementState {
    /// Horizontal command written to the physics body each tick (y is unused)
    pub target_velocity: Vec2,
    pub grounded: bool,
    pub wall: WallContact,
    /// Pressing into `wall` this tick; only set while normal movement runs
    pub touching_wall: bool,
    pub air_jumps_used: u8,
}

impl MovementState {
    /// Copy this tick's contact flags in. Air jumps are refunded while grounded.
    pub fn sync_contacts(&mut self, grounded: bool, wall: WallContact) {
        self.grounded = grounded;
        self.wall = wall;
        self.touching_wall = false;
        if grounded {
            self.air_jumps_used = 0;
        }
    }
}

/// Window after a wall jump during which input back toward the wall is reversed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallJumpLock {
    pub lock_until: f32,
    /// True when the wall jump pushed the player to the left
    pub reversed_direction_is_left: bool,
}

impl WallJumpLock {
    pub fn is_active(&self, now: f32) -> bool {
        now < self.lock_until
    }
}

/// An enemy or hazard sensor the player currently overlaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchingContact {
    pub entity: Entity,
    pub damage: i32,
}

/// A health pickup touched this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupContact {
    pub entity: Entity,
    pub amount: i32,
}

/// Everything the physics collaborator reported about the player this tick.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ContactReport {
    pub grounded: bool,
    pub wall: WallContact,
    /// Persistent overlaps, damaging every tick until the overlap ends
    pub touching: Vec<TouchingContact>,
    /// Damage from solid hits that started this tick
    pub impacts: Vec<i32>,
    pub pickups: Vec<PickupContact>,
}

impl ContactReport {
    /// Drop the one-shot entries once a tick has consumed them.
    pub fn end_tick(&mut self) {
        self.impacts.clear();
        self.pickups.clear();
    }

    pub fn start_touching(&mut self, entity: Entity, damage: i32) {
        if !self.touching.iter().any(|c| c.entity == entity) {
            self.touching.push(TouchingContact { entity, damage });
        }
    }

    pub fn stop_touching(&mut self, entity: Entity) {
        self.touching.retain(|c| c.entity != entity);
    }

    /// Record a contact that started this tick. A pickup counts once per tick.
    pub fn record(&mut self, entity: Entity, entry: ContactEntry) {
        match entry {
            ContactEntry::Touching { damage } => self.start_touching(entity, damage),
            ContactEntry::Impact { damage } => self.impacts.push(damage),
            ContactEntry::Pickup { amount } => {
                if !self.pickups.iter().any(|p| p.entity == entity) {
                    self.pickups.push(PickupContact { entity, amount });
                }
            }
        }
    }
}

/// How a started contact affects the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEntry {
    /// Sensor enemy or hazard, damaging every tick until the overlap ends
    Touching { damage: i32 },
    /// Solid enemy or hazard, damaging once
    Impact { damage: i32 },
    Pickup { amount: i32 },
}
