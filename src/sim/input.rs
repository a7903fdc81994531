//! Keyboard state and per-player control bindings
//!
//! The host owns an [`InputSnapshot`] and flips keys on key-down/key-up. The
//! simulation only reads it, once per vehicle per tick, through a
//! [`ControlBinding`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::state::Team;

/// Pressed state of every key the host has seen, keyed by `KeyboardEvent.key`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    keys: HashMap<String, bool>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down
    pub fn press(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into(), true);
    }

    /// Record a key-up
    pub fn release(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into(), false);
    }

    pub fn set(&mut self, key: impl Into<String>, pressed: bool) {
        self.keys.insert(key.into(), pressed);
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// The five logical buttons a player drives a vehicle with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Forward,
    Reverse,
    TurnLeft,
    TurnRight,
    Boost,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Forward,
        Button::Reverse,
        Button::TurnLeft,
        Button::TurnRight,
        Button::Boost,
    ];
}

/// Logical buttons resolved from one read of the snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub forward: bool,
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub boost: bool,
}

/// Key identifier for each logical button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBinding {
    pub forward: String,
    pub reverse: String,
    pub turn_left: String,
    pub turn_right: String,
    pub boost: String,
}

impl ControlBinding {
    /// W/S/A/D to drive, Q to boost
    pub fn red_default() -> Self {
        Self {
            forward: "w".to_string(),
            reverse: "s".to_string(),
            turn_left: "a".to_string(),
            turn_right: "d".to_string(),
            boost: "q".to_string(),
        }
    }

    /// Arrow keys to drive, Space to boost
    pub fn blue_default() -> Self {
        Self {
            forward: "ArrowUp".to_string(),
            reverse: "ArrowDown".to_string(),
            turn_left: "ArrowLeft".to_string(),
            turn_right: "ArrowRight".to_string(),
            boost: " ".to_string(),
        }
    }

    pub fn key_for(&self, button: Button) -> &str {
        match button {
            Button::Forward => &self.forward,
            Button::Reverse => &self.reverse,
            Button::TurnLeft => &self.turn_left,
            Button::TurnRight => &self.turn_right,
            Button::Boost => &self.boost,
        }
    }

    pub fn key_for_mut(&mut self, button: Button) -> &mut String {
        match button {
            Button::Forward => &mut self.forward,
            Button::Reverse => &mut self.reverse,
            Button::TurnLeft => &mut self.turn_left,
            Button::TurnRight => &mut self.turn_right,
            Button::Boost => &mut self.boost,
        }
    }

    /// Read all five buttons from the snapshot in one pass
    pub fn resolve(&self, keys: &InputSnapshot) -> ButtonState {
        ButtonState {
            forward: keys.is_pressed(&self.forward),
            reverse: keys.is_pressed(&self.reverse),
            turn_left: keys.is_pressed(&self.turn_left),
            turn_right: keys.is_pressed(&self.turn_right),
            boost: keys.is_pressed(&self.boost),
        }
    }

    /// Whether `key` drives any button of this binding
    pub fn binds(&self, key: &str) -> bool {
        Button::ALL.iter().any(|&b| self.key_for(b) == key)
    }
}

/// Bindings for both players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub red: ControlBinding,
    pub blue: ControlBinding,
}

impl Controls {
    pub fn binding(&self, team: Team) -> &ControlBinding {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    pub fn binding_mut(&mut self, team: Team) -> &mut ControlBinding {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            red: ControlBinding::red_default(),
            blue: ControlBinding::blue_default(),
        }
    }
}
