// ABOUTME: Core types and constants for the pulsefoot waveform analysis workspace
// ABOUTME: Foundation crate with error handling, detection models, and default parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulsefoot Core
//!
//! Foundation crate providing shared types and constants for pulse foot
//! detection. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default detection parameters and environment variable names
//! - **models**: Zones, detection outcomes and confidence markers

/// Unified error handling system with standard error codes
pub mod errors;

/// Detection defaults and configuration keys organized by domain
pub mod constants;

/// Core data models (`Zone`, `FootDetection`, `DetectionConfidence`)
pub mod models;
