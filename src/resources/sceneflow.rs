//! Scene transition requests.
//!
//! The scene never switches itself. Systems and observers write the wanted
//! [`SceneTransition`] into [`NextScene`], and the owner of the scene polls
//! it after each tick through
//! [`Scene::requested_transition`](crate::scene::Scene::requested_transition).

use bevy_ecs::prelude::Resource;
use std::fmt;

/// Where the application should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition {
    /// Level finished or lost; return to the menu.
    Menu,
    /// Player backed out of the scene.
    Back,
    /// Player asked to close the game.
    Quit,
}

impl fmt::Display for SceneTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SceneTransition::Menu => "menu",
            SceneTransition::Back => "back",
            SceneTransition::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// Pending transition. The first request wins; later ones are ignored.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct NextScene {
    pending: Option<SceneTransition>,
}

impl NextScene {
    pub fn request(&mut self, transition: SceneTransition) {
        if self.pending.is_none() {
            log::info!("scene transition requested: {}", transition);
            self.pending = Some(transition);
        }
    }

    pub fn get(&self) -> Option<SceneTransition> {
        self.pending
    }

    pub fn take(&mut self) -> Option<SceneTransition> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_wins() {
        let mut next = NextScene::default();
        next.request(SceneTransition::Menu);
        next.request(SceneTransition::Quit);
        assert_eq!(next.get(), Some(SceneTransition::Menu));
        assert_eq!(next.take(), Some(SceneTransition::Menu));
        assert_eq!(next.get(), None);
    }
}
