// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace enrollment: deciding which namespaces may join a mesh and labeling them.

pub mod manager;
pub mod patch;
pub mod request;

pub use manager::{control_plane_selector, EnrollmentReport, NamespaceEnroller};
pub use patch::MetadataPatch;
pub use request::{ConflictCheckResult, EnrollmentOutcome, EnrollmentRequest, EnrollmentStatus};
