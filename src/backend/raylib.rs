//! Windowed backend on raylib.
//!
//! Input is captured into a [`RaylibInput`] snapshot before drawing starts,
//! since the draw handle borrows the raylib handle for the whole frame. The
//! game renders at its internal resolution through a [`Camera2D`] zoomed to
//! the window size.

use ::raylib::prelude::{
    Camera2D, Color as RlColor, GamepadButton, KeyboardKey, MouseButton, RaylibDraw,
    RaylibHandle, RaylibThread, Rectangle, Texture2D, Vector2 as RlVector2,
};
use log::{info, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use super::{InputSource, RenderSurface};
use crate::error::EngineError;
use crate::game::Game;
use crate::math::{Color, Vector2};
use crate::resources::controls::Controls;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputAction;
use crate::resources::spritesheets::{SpriteRect, SpriteSheetStore};
use crate::states::FrameStatus;

enum Code {
    Key(KeyboardKey),
    Gamepad(GamepadButton),
    Mouse(MouseButton),
}

fn code_from_name(name: &str) -> Option<Code> {
    let code = match name {
        "Up" => Code::Key(KeyboardKey::KEY_UP),
        "Down" => Code::Key(KeyboardKey::KEY_DOWN),
        "Left" => Code::Key(KeyboardKey::KEY_LEFT),
        "Right" => Code::Key(KeyboardKey::KEY_RIGHT),
        "Enter" => Code::Key(KeyboardKey::KEY_ENTER),
        "Space" => Code::Key(KeyboardKey::KEY_SPACE),
        "Escape" => Code::Key(KeyboardKey::KEY_ESCAPE),
        "Backspace" => Code::Key(KeyboardKey::KEY_BACKSPACE),
        "Tab" => Code::Key(KeyboardKey::KEY_TAB),
        "W" => Code::Key(KeyboardKey::KEY_W),
        "A" => Code::Key(KeyboardKey::KEY_A),
        "S" => Code::Key(KeyboardKey::KEY_S),
        "D" => Code::Key(KeyboardKey::KEY_D),
        "P" => Code::Key(KeyboardKey::KEY_P),
        "Q" => Code::Key(KeyboardKey::KEY_Q),
        "GamepadButton0" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN),
        "GamepadButton1" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_RIGHT),
        "GamepadButton2" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_LEFT),
        "GamepadButton3" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_UP),
        "GamepadUp" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_UP),
        "GamepadDown" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_DOWN),
        "GamepadLeft" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_LEFT),
        "GamepadRight" => Code::Gamepad(GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_RIGHT),
        "MouseLeft" => Code::Mouse(MouseButton::MOUSE_BUTTON_LEFT),
        "MouseRight" => Code::Mouse(MouseButton::MOUSE_BUTTON_RIGHT),
        _ => return None,
    };
    Some(code)
}

/// Warn about every bound code name this backend cannot poll.
///
/// Returns how many were found. Those bindings are skipped by
/// [`RaylibInput::capture`].
pub fn warn_unknown_codes(controls: &Controls) -> usize {
    let mut unknown = 0;
    for action in InputAction::ALL {
        for name in controls.bindings(action) {
            if code_from_name(name).is_none() {
                warn!(
                    "controls.{}: unknown input code {:?}, ignored",
                    action.config_key(),
                    name
                );
                unknown += 1;
            }
        }
    }
    unknown
}

/// Frozen input state of one frame, keyed by code name.
#[derive(Debug, Clone, Default)]
pub struct RaylibInput {
    down: FxHashSet<String>,
    pressed: FxHashSet<String>,
    released: FxHashSet<String>,
}

impl RaylibInput {
    /// Poll every code bound in `controls`.
    pub fn capture(rl: &RaylibHandle, controls: &Controls) -> Self {
        let mut snapshot = Self::default();
        for action in InputAction::ALL {
            for name in controls.bindings(action) {
                let Some(code) = code_from_name(name) else {
                    continue;
                };
                let (down, pressed, released) = match code {
                    Code::Key(k) => (rl.is_key_down(k), rl.is_key_pressed(k), rl.is_key_released(k)),
                    Code::Gamepad(b) => (
                        rl.is_gamepad_button_down(0, b),
                        rl.is_gamepad_button_pressed(0, b),
                        rl.is_gamepad_button_released(0, b),
                    ),
                    Code::Mouse(b) => (
                        rl.is_mouse_button_down(b),
                        rl.is_mouse_button_pressed(b),
                        rl.is_mouse_button_released(b),
                    ),
                };
                if down {
                    snapshot.down.insert(name.clone());
                }
                if pressed {
                    snapshot.pressed.insert(name.clone());
                }
                if released {
                    snapshot.released.insert(name.clone());
                }
            }
        }
        snapshot
    }
}

impl InputSource for RaylibInput {
    fn is_down(&self, code: &str) -> bool {
        self.down.contains(code)
    }

    fn is_pressed(&self, code: &str) -> bool {
        self.pressed.contains(code)
    }

    fn is_released(&self, code: &str) -> bool {
        self.released.contains(code)
    }
}

/// Loaded textures keyed by path.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Load every texture referenced by `sheets`, resolved against the
    /// assets directory.
    pub fn load(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        config: &GameConfig,
        sheets: &SpriteSheetStore,
    ) -> Result<Self, EngineError> {
        let mut store = Self::default();
        for sheet in sheets.sheets.values() {
            if store.map.contains_key(&sheet.texture) {
                continue;
            }
            let path = config.asset_path(&sheet.texture);
            let texture = rl
                .load_texture(th, &path.to_string_lossy())
                .map_err(|e| EngineError::AssetLoad {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            store.map.insert(sheet.texture.clone(), texture);
        }
        Ok(store)
    }
}

fn rl_color(c: Color) -> RlColor {
    RlColor::new(c.r, c.g, c.b, c.a)
}

/// Draws onto any raylib draw handle.
pub struct RaylibSurface<'a, D: RaylibDraw> {
    d: &'a mut D,
    textures: &'a TextureStore,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(d: &'a mut D, textures: &'a TextureStore) -> Self {
        Self { d, textures }
    }
}

impl<D: RaylibDraw> RenderSurface for RaylibSurface<'_, D> {
    fn clear(&mut self, color: Color) {
        self.d.clear_background(rl_color(color));
    }

    fn draw_sprite(&mut self, texture: &str, src: SpriteRect, center: Vector2) {
        let Some(tex) = self.textures.map.get(texture) else {
            return;
        };
        let source = Rectangle {
            x: src.x,
            y: src.y,
            width: src.width,
            height: src.height,
        };
        let dest = Rectangle {
            x: center.x,
            y: center.y,
            width: src.width,
            height: src.height,
        };
        let origin = RlVector2 {
            x: src.width * 0.5,
            y: src.height * 0.5,
        };
        self.d
            .draw_texture_pro(tex, source, dest, origin, 0.0, RlColor::WHITE);
    }

    fn draw_text(&mut self, text: &str, pos: Vector2, font_size: f32, color: Color) {
        self.d.draw_text(
            text,
            pos.x as i32,
            pos.y as i32,
            font_size as i32,
            rl_color(color),
        );
    }
}

/// Open a window and run `game` until it quits or the window closes.
pub fn run_window(mut game: Game) -> Result<(), EngineError> {
    let config = game.world().resource::<GameConfig>().clone();
    let (mut rl, thread) = ::raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Arkanoid")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is a game binding
    rl.set_exit_key(None);
    warn_unknown_codes(game.world().resource::<Controls>());

    let textures = TextureStore::load(
        &mut rl,
        &thread,
        &config,
        game.world().resource::<SpriteSheetStore>(),
    )?;
    info!("Window {}x{} open", config.window_width, config.window_height);

    let camera = Camera2D {
        offset: RlVector2 { x: 0.0, y: 0.0 },
        target: RlVector2 { x: 0.0, y: 0.0 },
        rotation: 0.0,
        zoom: config.window_width as f32 / config.render_width.max(1) as f32,
    };

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let input = RaylibInput::capture(&rl, game.world().resource::<Controls>());

        let mut d = rl.begin_drawing(&thread);
        let mut d2 = d.begin_mode2D(camera);
        let mut surface = RaylibSurface::new(&mut d2, &textures);
        if game.frame(&input, &mut surface, dt)? == FrameStatus::Quit {
            break;
        }
    }
    game.shutdown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use configparser::ini::Ini;

    #[test]
    fn default_controls_are_all_known() {
        assert_eq!(warn_unknown_codes(&Controls::default()), 0);
    }

    #[test]
    fn misspelled_code_is_reported() {
        let mut ini = Ini::new();
        ini.read("[controls]\nconfirm = Entr, Space\n".to_string())
            .unwrap();
        let mut controls = Controls::default();
        controls.apply_ini(&ini);
        assert_eq!(warn_unknown_codes(&controls), 1);
    }
}
