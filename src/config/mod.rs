//! # Configuration Module
//!
//! Configuration structures for the header-graph commands. Each command has
//! its own config module with a builder for construction and validation.
//!
//! ## Command Configurations
//!
//! - **CheckCyclesConfig**: Configuration for the `check` command to detect
//!   cyclic includes
//! - **GraphOptions**: Configuration for the `graph` command to emit DOT
//! - **TraceGraphConfig**: Configuration for the `trace` command to graph
//!   trace-related files

pub mod check;
pub mod graph;
pub mod trace;

pub use check::CheckCyclesConfig;
pub use graph::GraphOptions;
pub use trace::TraceGraphConfig;
