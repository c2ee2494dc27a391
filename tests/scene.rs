//! Scene flow integration tests.

use bjtable::{Action, GameSession, GameState, Loader, SceneDirector, SceneKind, SessionOptions};

#[derive(Debug, Default)]
struct FrameLoader {
    assets: usize,
    loaded: usize,
    began: usize,
}

impl FrameLoader {
    fn with_assets(assets: usize) -> Self {
        Self {
            assets,
            ..Self::default()
        }
    }
}

impl Loader for FrameLoader {
    fn begin(&mut self) {
        self.began += 1;
    }

    fn update(&mut self) {
        if self.loaded < self.assets {
            self.loaded += 1;
        }
    }

    fn is_finished(&self) -> bool {
        self.loaded == self.assets
    }
}

fn director(assets: usize) -> SceneDirector<FrameLoader> {
    SceneDirector::new(
        FrameLoader::with_assets(assets),
        GameSession::new(SessionOptions::default(), 11),
    )
}

#[test]
fn init_moves_to_loading_on_first_frame() {
    let mut director = director(2);
    assert_eq!(director.scene(), SceneKind::Init);

    assert_eq!(director.update(None), SceneKind::Loading);
    assert_eq!(director.loader().began, 1);
    assert_eq!(director.loader().loaded, 0);
}

#[test]
fn game_starts_after_loading_finishes() {
    let mut director = director(3);
    director.update(None);

    assert_eq!(director.update(None), SceneKind::Loading);
    assert_eq!(director.update(None), SceneKind::Loading);
    assert_eq!(director.update(None), SceneKind::Game);
    assert_eq!(director.loader().loaded, 3);
    assert_eq!(director.session().state(), GameState::Init);
}

#[test]
fn input_is_ignored_until_game_scene() {
    let mut director = director(1);
    director.update(Some(Action::Hit));
    director.update(Some(Action::Hit));

    assert_eq!(director.scene(), SceneKind::Game);
    assert!(director.session().player_hand().is_empty());

    director.update(Some(Action::Hit));
    assert_eq!(director.session().state(), GameState::PlayerTurn);
    assert_eq!(director.session().player_hand().len(), 2);

    director.update(None);
    assert_eq!(director.session().state(), GameState::PlayerTurn);

    director.update(Some(Action::Stand));
    assert_eq!(director.session().state(), GameState::DealerTurn);

    director.update(Some(Action::NewGame));
    assert_eq!(director.session().state(), GameState::Init);
}

#[test]
fn loading_same_scene_is_a_no_op() {
    let mut director = director(1);
    director.update(None);
    director.load_scene(SceneKind::Loading);
    assert_eq!(director.loader().began, 1);

    director.update(None);
    director.session_mut().take_turn(true);
    director.load_scene(SceneKind::Game);
    assert_eq!(director.session().state(), GameState::PlayerTurn);
}

#[test]
fn entering_game_starts_a_fresh_round() {
    let mut director = director(1);
    director.session_mut().take_turn(true);
    assert_eq!(director.session().player_hand().len(), 2);

    director.update(None);
    director.update(None);
    assert_eq!(director.scene(), SceneKind::Game);
    assert!(director.session().player_hand().is_empty());
    assert_eq!(director.session().deck().remaining(), 52);
}
