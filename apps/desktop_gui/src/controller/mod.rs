//! Controller layer: UI events, session transitions, and command orchestration.

pub mod events;
pub mod orchestration;
