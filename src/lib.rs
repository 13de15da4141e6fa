//! Camera capture and cascade face detection for a managed game-engine host.
//!
//! The library is loaded as a native plugin and driven through the
//! `extern "system"` functions in [`ffi`]. Each `Detect` call captures one
//! frame, finds faces with an `OpenCV` cascade classifier, writes them to a
//! host-owned [`interop::Circle`] array and hands back a pointer to the
//! annotated RGB frame without copying it.

/// Frame capture from camera devices.
pub mod camera_manager;
/// Configuration file loading.
pub mod config;
/// Preprocessing, cascade detection and annotation.
pub mod detection;
/// Functions exported to the host.
pub mod ffi;
/// `#[repr(C)]` types crossing the boundary.
pub mod interop;
/// Logging utilities.
pub mod log;
/// The capture/detect session.
pub mod session;
