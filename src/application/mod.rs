//! Application layer containing the single-request lifecycle orchestration.
//!
//! This module defines the `RequestOrchestrator` which acts as the primary
//! entry point for submitting a prediction. All user-visible effects are
//! driven through the injected `Presenter` port.

pub mod orchestrator;
