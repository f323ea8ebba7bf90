//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that the surrounding UI must implement,
//! allowing the map session to drive page chrome without depending on a
//! concrete rendering layer.

pub mod ui_binding_port;

pub use ui_binding_port::UiBindingPort;

#[cfg(any(test, feature = "testing"))]
pub use ui_binding_port::MockUiBindingPort;
