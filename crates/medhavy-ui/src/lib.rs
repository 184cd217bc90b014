//! Medhavy UI Primitives
//!
//! Dioxus components and hooks that drive the `medhavy-core` state machines
//! with real timers and browser events.
//!
//! ## Lifetimes
//!
//! Every timer runs in a component-scoped task (`use_future` or `spawn`
//! from inside the component), so Dioxus cancels it when the component
//! unmounts. Browser-side observers and listeners are released in
//! `use_drop`.

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
