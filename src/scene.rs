//! Frame-driven scene flow: init, loading, then the game table.
//!
//! The director does not draw anything. The caller runs it once per frame,
//! renders whatever [`SceneDirector::scene`] says is current, and passes the
//! player's input for that frame.

use crate::game::{Action, GameSession};

/// A scene of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneKind {
    /// Nothing set up yet.
    #[default]
    Init,
    /// Assets are being loaded.
    Loading,
    /// The blackjack table.
    Game,
}

/// Loads the client's assets while the loading scene is shown.
pub trait Loader {
    /// Called once when the loading scene is entered.
    fn begin(&mut self) {}

    /// Advances loading by one frame.
    fn update(&mut self);

    /// Returns whether loading has completed.
    fn is_finished(&self) -> bool;
}

/// Switches between scenes and forwards input to the game session.
#[derive(Debug)]
pub struct SceneDirector<L> {
    scene: SceneKind,
    loader: L,
    session: GameSession,
}

impl<L: Loader> SceneDirector<L> {
    /// Creates a director in [`SceneKind::Init`].
    #[must_use]
    pub const fn new(loader: L, session: GameSession) -> Self {
        Self {
            scene: SceneKind::Init,
            loader,
            session,
        }
    }

    /// Switches to `scene`, running its setup.
    ///
    /// Does nothing if `scene` is already current. Entering
    /// [`SceneKind::Game`] starts a fresh round.
    pub fn load_scene(&mut self, scene: SceneKind) {
        if self.scene == scene {
            return;
        }

        match scene {
            SceneKind::Init => {}
            SceneKind::Loading => self.loader.begin(),
            SceneKind::Game => self.session.reset_round(),
        }

        log::info!("scene {:?} -> {:?}", self.scene, scene);
        self.scene = scene;
    }

    /// Runs one frame and returns the scene that is current afterwards.
    ///
    /// `input` is only consumed by the game scene.
    pub fn update(&mut self, input: Option<Action>) -> SceneKind {
        match self.scene {
            SceneKind::Init => self.load_scene(SceneKind::Loading),
            SceneKind::Loading => {
                self.loader.update();

                if self.loader.is_finished() {
                    self.load_scene(SceneKind::Game);
                }
            }
            SceneKind::Game => {
                if let Some(action) = input {
                    self.session.apply(action);
                }
            }
        }

        self.scene
    }

    /// Returns the current scene.
    #[must_use]
    pub const fn scene(&self) -> SceneKind {
        self.scene
    }

    /// Returns the loader.
    #[must_use]
    pub const fn loader(&self) -> &L {
        &self.loader
    }

    /// Returns the game session.
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the game session mutably.
    pub const fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }
}
