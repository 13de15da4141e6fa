//! `extern "system"` exports consumed by the managed host.
//!
//! Two surfaces share the same marshaling: the flat API (`Init`, `Detect`,
//! ...) drives one process-wide session, the `Session*` API drives sessions
//! whose lifetime the host owns through an opaque pointer.
pub mod handle;
pub mod legacy;
mod marshal;
pub mod runtime;
