//! Per-frame state of the logical input actions.
//!
//! Physical devices never reach gameplay code: the frame driver polls an
//! [`InputSource`](crate::backend::InputSource) through the
//! [`Controls`](crate::resources::controls::Controls) mapping and writes the
//! result into [`InputState`].
use bevy_ecs::prelude::*;

/// Logical actions, independent of keyboard, gamepad or mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

impl InputAction {
    pub const ALL: [InputAction; 6] = [
        InputAction::Up,
        InputAction::Down,
        InputAction::Left,
        InputAction::Right,
        InputAction::Confirm,
        InputAction::Cancel,
    ];

    /// Name used in the `[controls]` section of the config file.
    pub fn config_key(&self) -> &'static str {
        match self {
            InputAction::Up => "up",
            InputAction::Down => "down",
            InputAction::Left => "left",
            InputAction::Right => "right",
            InputAction::Confirm => "confirm",
            InputAction::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state for the current frame.
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed this frame.
    pub just_pressed: bool,
    /// Whether the action was released this frame.
    pub just_released: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub confirm: BoolState,
    pub cancel: BoolState,
}

impl InputState {
    pub fn get(&self, action: InputAction) -> &BoolState {
        match action {
            InputAction::Up => &self.up,
            InputAction::Down => &self.down,
            InputAction::Left => &self.left,
            InputAction::Right => &self.right,
            InputAction::Confirm => &self.confirm,
            InputAction::Cancel => &self.cancel,
        }
    }

    pub fn get_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Up => &mut self.up,
            InputAction::Down => &mut self.down,
            InputAction::Left => &mut self.left,
            InputAction::Right => &mut self.right,
            InputAction::Confirm => &mut self.confirm,
            InputAction::Cancel => &mut self.cancel,
        }
    }

    pub fn is_active(&self, action: InputAction) -> bool {
        self.get(action).active
    }

    pub fn just_pressed(&self, action: InputAction) -> bool {
        self.get(action).just_pressed
    }

    /// Mark `action` as pressed this frame. Handy for tests and scripted play.
    pub fn press(&mut self, action: InputAction) {
        *self.get_mut(action) = BoolState {
            active: true,
            just_pressed: true,
            just_released: false,
        };
    }

    /// Reset every action to idle.
    pub fn clear(&mut self) {
        *self = InputState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        for action in InputAction::ALL {
            assert!(!input.is_active(action));
            assert!(!input.just_pressed(action));
            assert!(!input.get(action).just_released);
        }
    }

    #[test]
    fn test_press_and_clear() {
        let mut input = InputState::default();
        input.press(InputAction::Confirm);
        assert!(input.is_active(InputAction::Confirm));
        assert!(input.just_pressed(InputAction::Confirm));
        assert!(!input.just_pressed(InputAction::Cancel));
        input.clear();
        assert!(!input.is_active(InputAction::Confirm));
    }
}
