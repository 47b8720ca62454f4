// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace metadata patch marking mesh membership

use crate::constants::{annotations, labels};
use serde::Serialize;
use std::collections::BTreeMap;

/// Strategic merge patch body for a namespace joining a mesh.
///
/// Serializes to `{"metadata":{"labels":{..}}}`, with an `annotations` map only
/// when sidecar injection is requested.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MetadataPatch {
    metadata: PatchMetadata,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
struct PatchMetadata {
    labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotations: Option<BTreeMap<String, String>>,
}

impl MetadataPatch {
    pub fn new(mesh_name: &str, injection_enabled: bool) -> Self {
        let labels = BTreeMap::from([(labels::MONITORED_BY.to_string(), mesh_name.to_string())]);

        let annotations = injection_enabled.then(|| {
            BTreeMap::from([(
                annotations::SIDECAR_INJECTION.to_string(),
                annotations::SIDECAR_INJECTION_ENABLED.to_string(),
            )])
        });

        Self {
            metadata: PatchMetadata {
                labels,
                annotations,
            },
        }
    }

    /// Mesh name carried by the membership label
    pub fn mesh_name(&self) -> &str {
        self.metadata
            .labels
            .get(labels::MONITORED_BY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn enables_sidecar_injection(&self) -> bool {
        self.metadata.annotations.is_some()
    }
}
