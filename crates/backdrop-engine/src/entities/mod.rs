//! Renderable entity models. Entities hold their own state and read the
//! viewport dimensions passed in by the owning composer; no entity shares
//! state with another.

pub mod glow;
pub mod particle;
pub mod wave;
