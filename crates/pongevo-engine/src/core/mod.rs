//! Geometric primitives and simulation entities.

pub use self::{ball::*, paddle::*, rect::*};

mod ball;
mod paddle;
mod rect;
