// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Adds namespaces to a mesh, one at a time, stopping at the first failure.

use crate::constants::{labels, CONTROLLER_NAME, DEFAULT_NAMESPACE_TIMEOUT_SECS};
use crate::enrollment::patch::MetadataPatch;
use crate::enrollment::request::{
    ConflictCheckResult, EnrollmentOutcome, EnrollmentRequest, EnrollmentStatus,
};
use crate::error::{MeshError, Result};
use crate::kubernetes::{DeploymentLister, NamespacePatcher};
use std::io::Write;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

/// Outcomes of one enrollment run, in processing order.
///
/// When `failure` is set the last outcome is the failed namespace and the
/// namespaces after it were never processed.
#[derive(Debug)]
pub struct EnrollmentReport {
    pub outcomes: Vec<EnrollmentOutcome>,
    pub failure: Option<MeshError>,
}

impl EnrollmentReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn into_result(self) -> Result<Vec<EnrollmentOutcome>> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.outcomes),
        }
    }
}

/// Selector matching the mesh control-plane workload
pub fn control_plane_selector() -> String {
    format!("{}={}", labels::APP, CONTROLLER_NAME)
}

pub struct NamespaceEnroller<L, P> {
    lister: L,
    patcher: P,
    namespace_timeout: Duration,
}

impl<L, P> NamespaceEnroller<L, P>
where
    L: DeploymentLister,
    P: NamespacePatcher,
{
    pub fn new(lister: L, patcher: P) -> Self {
        Self {
            lister,
            patcher,
            namespace_timeout: Duration::from_secs(DEFAULT_NAMESPACE_TIMEOUT_SECS),
        }
    }

    /// Bound the cluster calls made for each namespace
    pub fn with_timeout(mut self, namespace_timeout: Duration) -> Self {
        self.namespace_timeout = namespace_timeout;
        self
    }

    /// Enroll every namespace of `request`, writing one line per outcome to `out`.
    #[instrument(skip(self, request, out), fields(mesh = %request.mesh_name()))]
    pub async fn enroll<W: Write>(
        &self,
        request: &EnrollmentRequest,
        out: &mut W,
    ) -> EnrollmentReport {
        let mesh_name = request.mesh_name();
        let mut outcomes = Vec::with_capacity(request.target_namespaces().len());

        info!(
            "Adding {} namespace(s) to mesh",
            request.target_namespaces().len()
        );

        for namespace in request.target_namespaces() {
            let deadline = timeout(
                self.namespace_timeout,
                self.enroll_namespace(namespace, request),
            );
            let result = match deadline.await {
                Ok(result) => result,
                Err(_) => Err(MeshError::Timeout {
                    namespace: namespace.clone(),
                    mesh_name: mesh_name.to_string(),
                    timeout: self.namespace_timeout,
                }),
            };

            let (outcome, failure) = match result {
                Ok(status) => (EnrollmentOutcome::new(namespace.as_str(), status), None),
                Err(e) => {
                    error!("Failed to add namespace {} to mesh: {}", namespace, e);
                    let outcome = EnrollmentOutcome::new(namespace.as_str(), EnrollmentStatus::Failed);
                    (outcome, Some(e))
                }
            };

            let written = writeln!(out, "{}", outcome.message(mesh_name, failure.as_ref()));
            outcomes.push(outcome);

            if let Some(e) = failure {
                return EnrollmentReport {
                    outcomes,
                    failure: Some(e),
                };
            }
            if let Err(e) = written {
                return EnrollmentReport {
                    outcomes,
                    failure: Some(MeshError::Io(e)),
                };
            }
        }

        info!("All namespaces processed");
        EnrollmentReport {
            outcomes,
            failure: None,
        }
    }

    #[instrument(skip(self, request))]
    async fn enroll_namespace(
        &self,
        namespace: &str,
        request: &EnrollmentRequest,
    ) -> Result<EnrollmentStatus> {
        let check = self.check_conflict(namespace, request.mesh_name()).await?;

        // Never label the namespace the mesh control plane itself runs in
        if check.has_conflict() {
            warn!(
                "Namespace {} already runs {} ({} deployment(s)), skipping",
                namespace, CONTROLLER_NAME, check.conflicting_workload_count
            );
            return Ok(EnrollmentStatus::SkippedControlPlane);
        }

        let patch = MetadataPatch::new(request.mesh_name(), request.injection_enabled());
        debug!("Patch to apply: {:?}", patch);

        self.patcher
            .patch_namespace(namespace, &patch)
            .await
            .map_err(|source| MeshError::EnrollmentFailed {
                namespace: namespace.to_string(),
                mesh_name: request.mesh_name().to_string(),
                source,
            })?;

        info!("Namespace {} added to mesh", namespace);
        Ok(EnrollmentStatus::Enrolled)
    }

    async fn check_conflict(
        &self,
        namespace: &str,
        mesh_name: &str,
    ) -> Result<ConflictCheckResult> {
        let deployments = self
            .lister
            .list_deployments(namespace, &control_plane_selector())
            .await
            .map_err(|source| MeshError::ConflictCheckFailed {
                namespace: namespace.to_string(),
                mesh_name: mesh_name.to_string(),
                source,
            })?;

        Ok(ConflictCheckResult {
            namespace: namespace.to_string(),
            conflicting_workload_count: deployments.len(),
        })
    }
}
