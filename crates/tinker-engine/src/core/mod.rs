//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and game
//! code: the [`Game`] hook trait and the contexts handed to each hook.

mod ctx;
mod game;

pub use ctx::{FrameCtx, GameCtx};
pub use game::Game;
