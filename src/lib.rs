//! DANKMEMES evaluation suite
//!
//! Facade over the evaluator library. The `dankmemes-eval` binary lives in
//! the `dankmemes-cli` workspace member.

pub use dankmemes_eval::*;
