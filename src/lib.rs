//! Purpose: Small JSON toolkit shared by services, scripts, and tests.
//! Exports: `JsonClient`, `Error`/`ErrorKind`, slice helpers, `pretty`, id helpers.
//! Role: Library crate of standalone, stateless helpers; no binary target.
//! Invariants: Helpers hold no process-wide state; every call stands alone.
//! Invariants: Library paths return typed errors; they never panic or exit.

pub mod error;
pub mod http;
pub mod id;
pub mod json;
pub mod slice;

pub use error::{Error, ErrorKind};
pub use http::{DEFAULT_TIMEOUT, JsonClient};
pub use id::{rand_int, unique_id};
pub use json::pretty;
pub use slice::{chunk, reverse};
