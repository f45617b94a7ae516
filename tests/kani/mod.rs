//! Kani proof harnesses
//!
//! - `operation_proofs.rs`: size accounting and extremal correctness of single operations
//! - `invariant_proofs.rs`: heap invariant over bounded operation sequences

#[cfg(kani)]
#[path = "operation_proofs.rs"]
mod operation_proofs;
#[cfg(kani)]
#[path = "invariant_proofs.rs"]
mod invariant_proofs;
