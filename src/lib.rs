//! Seesaw balance simulation.
//!
//! Users drop weighted items onto a plank balanced on a central pivot, drag
//! them along it, and remove them. After every change the torque on each side
//! is recomputed and the plank eases toward the resulting tilt. The engine is
//! headless: a host feeds it normalized gestures and frame ticks and routes
//! the [`engine::Action`]s it returns to render, persistence and sound sinks.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`]: state, interaction state machine, actions |
//! | [`physics`] | Per-side weights and torques, target angle, balance latch |
//! | [`animator`] | Per-frame easing of the displayed angle |
//! | [`geometry`] | Screen to plank-local coordinate mapping |
//! | [`doc`] | Item type and ordered item store |
//! | [`hit`] | Hit-testing presses against items and the plank |
//! | [`input`] | Gesture types and interaction states |
//! | [`render`] | Scene description and the render sink trait |
//! | [`persist`] | Snapshot format and state stores |
//! | [`runtime`] | [`runtime::Host`]: owns the engine and dispatches actions |
//! | [`command`] | Text line protocol for the headless binary |
//! | [`config`] | Tunables with env overrides |
//! | [`consts`] | Default numeric constants |

pub mod animator;
pub mod command;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod persist;
pub mod physics;
pub mod render;
pub mod runtime;
