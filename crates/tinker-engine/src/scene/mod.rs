//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve insertion order (later pushes paint on top)
//!
//! Extending the scene: add a variant to [`DrawCmd`], a push helper on
//! [`DrawList`], and a matching renderer under `render::shapes`.

mod cmd;
mod list;

pub use cmd::{CircleCmd, DrawCmd};
pub use list::DrawList;
