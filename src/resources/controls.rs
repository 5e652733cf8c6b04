//! Control mapping resource.
//!
//! Maps each [`InputAction`] to one or more physical input codes by name
//! (`"Up"`, `"Enter"`, `"GamepadButton0"`, `"MouseLeft"`...). Backends
//! translate those names into device codes. The mapping comes from the
//! `[controls]` section of the config file:
//!
//! ```ini
//! [controls]
//! up = Up, W
//! confirm = Enter, Space, GamepadButton0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};

use crate::resources::input::InputAction;

pub type Bindings = SmallVec<[String; 3]>;

#[derive(Resource, Debug, Clone)]
pub struct Controls {
    bindings: FxHashMap<InputAction, Bindings>,
}

impl Default for Controls {
    fn default() -> Self {
        let mut bindings: FxHashMap<InputAction, Bindings> = FxHashMap::default();
        bindings.insert(InputAction::Up, smallvec!["Up".into(), "W".into()]);
        bindings.insert(InputAction::Down, smallvec!["Down".into(), "S".into()]);
        bindings.insert(InputAction::Left, smallvec!["Left".into(), "A".into()]);
        bindings.insert(InputAction::Right, smallvec!["Right".into(), "D".into()]);
        bindings.insert(
            InputAction::Confirm,
            smallvec!["Enter".into(), "Space".into(), "GamepadButton0".into()],
        );
        bindings.insert(
            InputAction::Cancel,
            smallvec!["Escape".into(), "GamepadButton1".into()],
        );
        Self { bindings }
    }
}

impl Controls {
    /// Physical codes bound to `action`.
    pub fn bindings(&self, action: InputAction) -> &[String] {
        self.bindings
            .get(&action)
            .map(|b| b.as_slice())
            .unwrap_or(&[])
    }

    /// Override defaults with the `[controls]` section, if present.
    pub fn apply_ini(&mut self, config: &Ini) {
        for action in InputAction::ALL {
            if let Some(value) = config.get("controls", action.config_key()) {
                let codes: Bindings = value
                    .split(',')
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .map(String::from)
                    .collect();
                if codes.is_empty() {
                    log::warn!(
                        "controls.{} is empty, keeping defaults",
                        action.config_key()
                    );
                    continue;
                }
                self.bindings.insert(action, codes);
            }
        }
    }
}
