//! Modal registry and the shared dialog state machine.

mod controller;
mod registry;

pub use controller::{ModalController, ModalState};
pub use registry::{FieldKind, FormField, ModalConfig, ModalKind};
