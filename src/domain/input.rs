//! Keyboard → logical action mapping
//!
//! The host forwards raw `KeyboardEvent.code` strings. Held state is sampled
//! by every tick; releases are edges that the next tick consumes once.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Reverse,
    TurnLeft,
    TurnRight,
    ToggleCamera,
}

impl Action {
    pub fn from_key_code(code: &str) -> Option<Action> {
        match code {
            "KeyW" => Some(Action::Forward),
            "KeyS" => Some(Action::Reverse),
            "KeyA" => Some(Action::TurnLeft),
            "KeyD" => Some(Action::TurnRight),
            "KeyC" => Some(Action::ToggleCamera),
            _ => None,
        }
    }
}

/// Per-tick control snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub forward: bool,
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Forward was released since the last tick
    pub forward_released: bool,
    /// A turn key was released since the last tick
    pub turn_released: bool,
}

impl ControlInput {
    pub fn turning(&self) -> bool {
        self.turn_left || self.turn_right
    }

    /// Drop the one-shot release edges after a tick has seen them
    pub fn clear_edges(&mut self) {
        self.forward_released = false;
        self.turn_released = false;
    }
}

/// Tracks key state between frames and turns it into `ControlInput`
#[derive(Debug, Default)]
pub struct KeyState {
    input: ControlInput,
    camera_toggles: u32,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the action the key maps to, if any
    pub fn key_down(&mut self, code: &str) -> Option<Action> {
        let action = Action::from_key_code(code)?;
        match action {
            Action::Forward => self.input.forward = true,
            Action::Reverse => self.input.reverse = true,
            Action::TurnLeft => self.input.turn_left = true,
            Action::TurnRight => self.input.turn_right = true,
            Action::ToggleCamera => self.camera_toggles += 1,
        }
        Some(action)
    }

    pub fn key_up(&mut self, code: &str) -> Option<Action> {
        let action = Action::from_key_code(code)?;
        match action {
            Action::Forward => {
                self.input.forward = false;
                self.input.forward_released = true;
            }
            Action::Reverse => self.input.reverse = false,
            Action::TurnLeft => {
                self.input.turn_left = false;
                self.input.turn_released = true;
            }
            Action::TurnRight => {
                self.input.turn_right = false;
                self.input.turn_released = true;
            }
            Action::ToggleCamera => {}
        }
        Some(action)
    }

    pub fn snapshot(&self) -> ControlInput {
        self.input
    }

    /// Called after a tick consumed the snapshot
    pub fn end_tick(&mut self) {
        self.input.clear_edges();
    }

    /// Pending camera toggles since the last call
    pub fn take_camera_toggles(&mut self) -> u32 {
        std::mem::take(&mut self.camera_toggles)
    }

    pub fn release_all(&mut self) {
        self.input = ControlInput::default();
        self.camera_toggles = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored() {
        let mut keys = KeyState::new();
        assert_eq!(keys.key_down("KeyQ"), None);
        assert_eq!(keys.snapshot(), ControlInput::default());
    }

    #[test]
    fn forward_release_is_an_edge() {
        let mut keys = KeyState::new();
        keys.key_down("KeyW");
        assert!(keys.snapshot().forward);

        keys.key_up("KeyW");
        let snap = keys.snapshot();
        assert!(!snap.forward);
        assert!(snap.forward_released);

        keys.end_tick();
        assert!(!keys.snapshot().forward_released);
    }

    #[test]
    fn turn_release_marks_edge_for_either_side() {
        let mut keys = KeyState::new();
        keys.key_down("KeyD");
        keys.key_up("KeyD");
        assert!(keys.snapshot().turn_released);
    }

    #[test]
    fn camera_toggle_counts_presses() {
        let mut keys = KeyState::new();
        keys.key_down("KeyC");
        keys.key_down("KeyC");
        assert_eq!(keys.take_camera_toggles(), 2);
        assert_eq!(keys.take_camera_toggles(), 0);
    }
}
