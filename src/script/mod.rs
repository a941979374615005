//! Script execution harness
//!
//! Drives an external Bitcoin script engine one opcode at a time so tests can
//! watch a spend being evaluated. The engine itself lives behind
//! [`ScriptEngine`]; this crate never evaluates scripts on its own.

pub mod engine;
pub mod harness;

pub use engine::{ScriptEngine, ScriptFlags, ScriptTx};
pub use harness::{execute_tx, format_stack, trace_tx, ScriptStep, ScriptTrace};
