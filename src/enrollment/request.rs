// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Enrollment inputs and per-namespace results

use crate::constants::CONTROLLER_NAME;
use crate::error::{MeshError, Result};
use std::fmt;

/// A batch of namespaces to add to one mesh
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollmentRequest {
    mesh_name: String,
    target_namespaces: Vec<String>,
    injection_enabled: bool,
}

impl EnrollmentRequest {
    pub fn new(
        mesh_name: impl Into<String>,
        target_namespaces: Vec<String>,
        injection_enabled: bool,
    ) -> Result<Self> {
        let mesh_name = mesh_name.into();
        if mesh_name.is_empty() {
            return Err(MeshError::InvalidRequest("mesh name must not be empty".to_string()));
        }
        if target_namespaces.is_empty() {
            return Err(MeshError::InvalidRequest(
                "at least one namespace is required".to_string(),
            ));
        }
        if let Some(blank) = target_namespaces.iter().find(|ns| ns.trim().is_empty()) {
            return Err(MeshError::InvalidRequest(format!(
                "invalid namespace name [{}]",
                blank
            )));
        }

        Ok(Self {
            mesh_name,
            target_namespaces,
            injection_enabled,
        })
    }

    pub fn mesh_name(&self) -> &str {
        &self.mesh_name
    }

    /// Namespaces in processing order
    pub fn target_namespaces(&self) -> &[String] {
        &self.target_namespaces
    }

    pub fn injection_enabled(&self) -> bool {
        self.injection_enabled
    }
}

/// Whether a namespace already runs the mesh control plane
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictCheckResult {
    pub namespace: String,
    pub conflicting_workload_count: usize,
}

impl ConflictCheckResult {
    pub fn has_conflict(&self) -> bool {
        self.conflicting_workload_count > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentStatus {
    /// The namespace hosts the control plane and was left untouched
    SkippedControlPlane,
    Enrolled,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollmentOutcome {
    pub namespace: String,
    pub status: EnrollmentStatus,
}

impl EnrollmentOutcome {
    pub fn new(namespace: impl Into<String>, status: EnrollmentStatus) -> Self {
        Self {
            namespace: namespace.into(),
            status,
        }
    }

    /// Human readable report line for this outcome.
    ///
    /// `cause` is only used for failed outcomes.
    pub fn message<'a>(
        &'a self,
        mesh_name: &'a str,
        cause: Option<&'a MeshError>,
    ) -> OutcomeMessage<'a> {
        OutcomeMessage {
            outcome: self,
            mesh_name,
            cause,
        }
    }
}

/// Display adapter rendering an [`EnrollmentOutcome`] for the report stream
pub struct OutcomeMessage<'a> {
    outcome: &'a EnrollmentOutcome,
    mesh_name: &'a str,
    cause: Option<&'a MeshError>,
}

impl fmt::Display for OutcomeMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = &self.outcome.namespace;
        let mesh = self.mesh_name;

        match (self.outcome.status, self.cause) {
            (EnrollmentStatus::SkippedControlPlane, _) => write!(
                f,
                "Namespace [{}] already has [{}] installed and cannot be added to mesh [{}]",
                ns, CONTROLLER_NAME, mesh
            ),
            (EnrollmentStatus::Enrolled, _) => {
                write!(f, "Namespace [{}] successfully added to mesh [{}]", ns, mesh)
            }
            // Mesh errors already name the namespace and mesh
            (EnrollmentStatus::Failed, Some(cause)) => write!(f, "{}", cause),
            (EnrollmentStatus::Failed, None) => {
                write!(f, "Could not add namespace [{}] to mesh [{}]", ns, mesh)
            }
        }
    }
}
