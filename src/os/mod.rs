//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's cryptographic random number generator.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same function,
//! `sys_random`, allowing the entropy layer above to remain portable.
//!
//! Unlike a seeding helper, every failure is reported to the caller as an
//! [`std::io::Error`]. Nothing here retries with a weaker generator.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(all(unix, not(any(target_os = "linux", target_os = "macos"))))]
pub(crate) mod urandom;

#[cfg(all(unix, not(any(target_os = "linux", target_os = "macos"))))]
pub(crate) use urandom::*;
