//! Flappy Duo - a themeable terminal Flappy clone.
//!
//! One game, two skins: pilot a red mouse over the meadow or an orange
//! fish over animated waves. The skins differ only in data (palette,
//! avatar shape and size, shore style, decorations); every rule of play
//! is shared. This library exposes the game logic and rendering
//! primitives so the integration tests can drive whole sessions
//! headlessly; the terminal front end lives in the binary.

pub mod audio;
pub mod config;
pub mod font;
pub mod game;
pub mod scene;
pub mod surface;
pub mod theme;
