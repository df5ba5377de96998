#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Client-side workflow orchestration for the resilience console: the
//! three-stage state machine and the collaborator clients it drives.

pub mod engine;
pub mod http;
pub mod orchestrator;

pub use engine::{EngineApi, EngineError};
pub use http::HttpEngine;
pub use orchestrator::{BusyFlags, Orchestrator, Step, WorkflowError, WorkflowState};
