//! Shared build-time utilities for the Glimmer QR workspace.

pub mod version_info;
