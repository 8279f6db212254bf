//! # Object-Oriented Patterns in Rust
//!
//! Classic OOP exercises reworked with traits and composition:
//!
//! ## Hierarchies and Dispatch
//! - [`staff`]: single, multilevel, hierarchical and diamond inheritance as
//!   capability traits over one shared identity
//! - [`roster`]: heterogeneous `Box<dyn Staff>` driver
//! - [`bank`]: savings and current accounts behind one `Account` contract
//! - [`university`]: abstract member with role and duty
//! - [`campervan`]: two unrelated parents in one type
//!
//! ## Lifecycle
//! - [`lifecycle`]: acquire/release ledger, reverse-order release of layers
//!
//! ## Operators, Errors, Threads
//! - [`operators`]: `Add`/`AddAssign` on counters, points and carts
//! - [`arithmetic`]: division returning a catchable error
//! - [`summation`]: partitioned sum over joined worker threads
//! - [`input`]: two integers from stdin
//!
//! Run the programs with: `cargo run --bin <name>`

pub mod arithmetic;
pub mod bank;
pub mod campervan;
pub mod config;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod logging;
pub mod operators;
pub mod profile;
pub mod roster;
pub mod staff;
pub mod summation;
pub mod university;

pub use config::DemoConfig;
pub use profile::{Describe, Profile};
