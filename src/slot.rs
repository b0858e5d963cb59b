// Holds the game between host calls. The exports take no arguments, so the
// guest keeps one of these in a thread local and forwards every lifecycle
// call to it along with the host.

use crate::config::Config;
use crate::host::Host;
use crate::Game;

#[derive(Default)]
pub struct GameSlot {
    game: Option<Game>,
}

impl GameSlot {
    pub fn new() -> Self {
        GameSlot { game: None }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Builds and seeds the game on the first call. Later calls go to the
    /// existing game, which ignores them. A config that fails validation is
    /// logged and the host is asked to stop.
    pub fn setup<H: Host + ?Sized>(&mut self, config: Config, host: &mut H) {
        if let Some(game) = self.game.as_mut() {
            game.setup(host);
            return;
        }

        match Game::new(config) {
            Ok(mut game) => {
                game.setup(host);
                self.game = Some(game);
            }
            Err(err) => {
                log::error!("invalid config: {}", err);
                host.exit();
            }
        }
    }

    pub fn update<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(game) = self.game.as_mut() {
            game.update(host);
        }
    }

    pub fn render<H: Host + ?Sized>(&self, host: &mut H) {
        if let Some(game) = self.game.as_ref() {
            game.render(host);
        }
    }

    pub fn frame<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(game) = self.game.as_mut() {
            game.frame(host);
        }
    }

    // Empties the slot, dropping the swarm with the game
    pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
        match self.game.take() {
            Some(game) => game.teardown(host),
            None => log::debug!("teardown without setup"),
        }
    }
}
