// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Failed to resolve cluster credentials: {0}")]
    Kubeconfig(String),

    #[error("Invalid enrollment request: {0}")]
    InvalidRequest(String),

    #[error("Could not check namespace [{namespace}] for the control plane of mesh [{mesh_name}]: {source}")]
    ConflictCheckFailed {
        namespace: String,
        mesh_name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Could not add namespace [{namespace}] to mesh [{mesh_name}]: {source}")]
    EnrollmentFailed {
        namespace: String,
        mesh_name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Could not add namespace [{namespace}] to mesh [{mesh_name}]: timed out after {timeout:?}")]
    Timeout {
        namespace: String,
        mesh_name: String,
        timeout: Duration,
    },

    #[error("Failed to write enrollment report: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// The namespace this error was raised for, if it is tied to one
    pub fn namespace(&self) -> Option<&str> {
        match self {
            MeshError::ConflictCheckFailed { namespace, .. }
            | MeshError::EnrollmentFailed { namespace, .. }
            | MeshError::Timeout { namespace, .. } => Some(namespace),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MeshError>;
