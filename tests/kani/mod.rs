//! Kani proof harnesses
//!
//! - `arithmetic_proofs.rs`: parent/child index arithmetic
//! - `heap_proofs.rs`: heap operations on small symbolic inputs

#[cfg(kani)]
#[path = "arithmetic_proofs.rs"]
mod arithmetic_proofs;
#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
