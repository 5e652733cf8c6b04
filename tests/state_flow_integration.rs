//! State flow integration tests: a full session over the shipped assets,
//! driven frame by frame with scripted input.
//!
//! ```sh
//! cargo test --test state_flow_integration
//! ```

use bevy_ecs::prelude::*;

use arkanoid::backend::headless::{RecordingSurface, ScriptedInput};
use arkanoid::components::dynamictext::DynamicText;
use arkanoid::components::group::Group;
use arkanoid::components::hidden::Hidden;
use arkanoid::components::mapposition::MapPosition;
use arkanoid::components::uitransform::UITransform;
use arkanoid::entities::entities_in_group;
use arkanoid::events::life::LifeEvent;
use arkanoid::game::{Game, init_world};
use arkanoid::resources::game::{GameResources, StateEvent};
use arkanoid::resources::gameconfig::GameConfig;
use arkanoid::resources::input::{InputAction, InputState};
use arkanoid::states::gameover::GameOver;
use arkanoid::states::gameplay::Gameplay;
use arkanoid::states::mainmenu::MainMenu;
use arkanoid::states::menu::{Menu, SELECTED_ITEM_COLOR, update_menu};
use arkanoid::states::{FrameStatus, GameState, Transition};

const DT: f32 = 1.0 / 60.0;

fn config() -> GameConfig {
    GameConfig::new().with_assets_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

/// Run one frame per scripted entry, returning the last status.
fn play(game: &mut Game, script: &str) -> FrameStatus {
    let mut input = ScriptedInput::parse(script);
    let mut surface = RecordingSurface::new();
    let mut status = FrameStatus::Running;
    for _ in 0..input.len() {
        status = game.frame(&input, &mut surface, DT).unwrap();
        if status == FrameStatus::Quit {
            break;
        }
        input.advance();
    }
    status
}

fn group_count(game: &mut Game, group: &str) -> usize {
    entities_in_group(game.world_mut(), group).len()
}

type EntitySnapshot = (
    Entity,
    Option<MapPosition>,
    Option<String>,
    Option<UITransform>,
    bool,
);

fn snapshot(world: &mut World, group: &str) -> Vec<EntitySnapshot> {
    let mut query = world.query::<(
        Entity,
        &Group,
        Option<&MapPosition>,
        Option<&DynamicText>,
        Option<&UITransform>,
        Has<Hidden>,
    )>();
    let mut out: Vec<EntitySnapshot> = query
        .iter(world)
        .filter(|(_, g, ..)| g.name() == group)
        .map(|(e, _, pos, text, ui, hidden)| {
            (e, pos.copied(), text.map(|t| t.content.clone()), ui.cloned(), hidden)
        })
        .collect();
    out.sort_by_key(|(e, ..)| *e);
    out
}

fn cursor_visible(world: &mut World, id: &str) -> bool {
    let mut query = world.query::<(&UITransform, Has<Hidden>)>();
    query
        .iter(world)
        .any(|(ui, hidden)| ui.id == id && !hidden)
}

#[test]
fn session_starts_on_main_menu() {
    let mut game = Game::new(config()).unwrap();
    assert_eq!(game.machine().top_name(), Some("MainMenu"));

    let mut surface = RecordingSurface::new();
    let input = ScriptedInput::parse(".");
    game.frame(&input, &mut surface, DT).unwrap();
    assert!(surface.texts().contains(&"NEW GAME"));
    assert!(surface.sprite_count() >= 1);
}

#[test]
fn up_from_first_item_wraps_to_last() {
    let mut world = init_world(config()).unwrap();
    let mut menu = MainMenu::new();
    menu.on_start(&mut world).unwrap();

    world.resource_mut::<InputState>().press(InputAction::Up);
    let transition = update_menu(&mut menu, &mut world).unwrap();

    assert!(transition.is_none());
    assert_eq!(menu.selection(), menu.menu_ids().len() - 1);
    assert!(cursor_visible(&mut world, "cursor_exit"));
    assert!(!cursor_visible(&mut world, "cursor_new_game"));

    // the selected item is highlighted
    let mut texts = world.query::<(&UITransform, &DynamicText)>();
    let exit = texts
        .iter(&world)
        .find(|(ui, _)| ui.id == "exit")
        .map(|(_, t)| t.color)
        .unwrap();
    assert_eq!(exit, SELECTED_ITEM_COLOR);
}

#[test]
fn selection_stays_in_range_under_any_input() {
    let mut world = init_world(config()).unwrap();
    let mut menu = GameOver::new();
    menu.on_start(&mut world).unwrap();
    let len = menu.menu_ids().len();

    for i in 0..40 {
        let mut input = world.resource_mut::<InputState>();
        input.clear();
        if i % 3 == 0 {
            input.press(InputAction::Up);
        } else {
            input.press(InputAction::Down);
        }
        update_menu(&mut menu, &mut world).unwrap();
        assert!(menu.selection() < len);
    }
}

#[test]
fn game_over_confirm_mapping() {
    let mut world = init_world(config()).unwrap();
    let mut menu = GameOver::new();
    menu.on_start(&mut world).unwrap();

    let restart = menu.confirm_selection().unwrap();
    assert!(matches!(restart, Transition::Switch(_)));
    assert_eq!(restart.state_names(), ["Gameplay"]);

    menu.set_selection(2);
    assert!(matches!(menu.confirm_selection(), Ok(Transition::Quit)));
}

#[test]
fn switch_leaves_no_entities_of_the_old_state() {
    let mut game = Game::new(config()).unwrap();
    assert!(group_count(&mut game, "MainMenu") > 0);

    play(&mut game, "Enter");

    assert_eq!(game.machine().top_name(), Some("Gameplay"));
    assert_eq!(game.machine().len(), 1);
    assert_eq!(group_count(&mut game, "MainMenu"), 0);
    assert!(group_count(&mut game, "Gameplay") > 0);
}

#[test]
fn pause_and_resume_leave_gameplay_untouched() {
    let mut game = Game::with_state(config(), Box::new(Gameplay::new())).unwrap();
    play(&mut game, ".");
    let before = snapshot(game.world_mut(), "Gameplay");
    let lives_before = game.world().resource::<GameResources>().lives;

    play(&mut game, "Escape");
    assert_eq!(game.machine().names(), ["Gameplay", "Pause"]);
    assert!(group_count(&mut game, "Pause") > 0);

    // cancel pops the pause menu
    play(&mut game, ".,Escape");
    assert_eq!(game.machine().names(), ["Gameplay"]);
    assert_eq!(group_count(&mut game, "Pause"), 0);

    assert_eq!(snapshot(game.world_mut(), "Gameplay"), before);
    assert_eq!(game.world().resource::<GameResources>().lives, lives_before);
}

#[test]
fn pause_menu_back_to_main_menu_stops_everything() {
    let mut game = Game::with_state(config(), Box::new(Gameplay::new())).unwrap();
    play(&mut game, "Escape,Down,.,Enter");

    assert_eq!(game.machine().names(), ["MainMenu"]);
    assert_eq!(group_count(&mut game, "Gameplay"), 0);
    assert_eq!(group_count(&mut game, "Pause"), 0);
    assert!(group_count(&mut game, "MainMenu") > 0);
}

#[test]
fn losing_last_life_switches_to_game_over() {
    let mut game = Game::with_state(config(), Box::new(Gameplay::new())).unwrap();
    play(&mut game, ".");
    {
        let mut bag = game.world_mut().resource_mut::<GameResources>();
        let lives = bag.lives as usize;
        bag.score = 120;
        bag.events.life_events = vec![LifeEvent {}; lives];
    }

    play(&mut game, ".");

    assert_eq!(game.machine().names(), ["GameOver"]);
    assert_eq!(group_count(&mut game, "Gameplay"), 0);
    let world = game.world_mut();
    let mut texts = world.query::<(&UITransform, &DynamicText)>();
    assert!(
        texts
            .iter(world)
            .any(|(ui, t)| ui.id == "final_score" && t.content == "SCORE: 120")
    );

    // restart gives a fresh round
    play(&mut game, "Enter");
    assert_eq!(game.machine().names(), ["Gameplay"]);
    let bag = game.world().resource::<GameResources>();
    assert_eq!(bag.lives, config().lives);
    assert_eq!(bag.score, 0);
}

#[test]
fn game_over_overrides_pause_requested_in_the_same_frame() {
    let mut game = Game::with_state(config(), Box::new(Gameplay::new())).unwrap();
    play(&mut game, ".");
    game.world_mut().resource_mut::<GameResources>().state_event = StateEvent::GameOver;

    play(&mut game, "Escape");

    assert_eq!(game.machine().names(), ["GameOver"]);
    assert_eq!(group_count(&mut game, "Gameplay"), 0);
    assert_eq!(group_count(&mut game, "Pause"), 0);
    assert_eq!(
        game.world().resource::<GameResources>().state_event,
        StateEvent::None
    );
}

#[test]
fn game_over_exit_quits() {
    let mut game = Game::with_state(config(), Box::new(GameOver::new())).unwrap();
    let status = play(&mut game, "Down,.,Down,.,Enter");
    assert_eq!(status, FrameStatus::Quit);
    assert!(game.machine().is_empty());
    assert_eq!(group_count(&mut game, "GameOver"), 0);
}

#[test]
fn main_menu_exit_quits() {
    let mut game = Game::new(config()).unwrap();
    assert_eq!(play(&mut game, "Up,.,Space"), FrameStatus::Quit);
    assert_eq!(group_count(&mut game, "MainMenu"), 0);
}

#[test]
fn missing_assets_are_fatal() {
    let config = GameConfig::new().with_assets_dir("/nonexistent/assets");
    assert!(Game::new(config).is_err());
}
