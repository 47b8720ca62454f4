// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster resource lookups and mutations used by namespace enrollment

use crate::constants::FIELD_MANAGER;
use crate::enrollment::MetadataPatch;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ListParams, Patch, PatchParams},
    Api, Client,
};
use tracing::{debug, instrument};

#[cfg(test)]
use mockall::automock;

/// Lists workloads in a namespace by label selector
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeploymentLister: Send + Sync {
    /// List the Deployments in `namespace` matching `label_selector`
    async fn list_deployments(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> kube::Result<Vec<Deployment>>;
}

/// Merges metadata onto namespace resources
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NamespacePatcher: Send + Sync {
    /// Apply `patch` to the namespace `name` as a strategic merge patch
    async fn patch_namespace(&self, name: &str, patch: &MetadataPatch)
        -> kube::Result<Namespace>;
}

/// [`DeploymentLister`] and [`NamespacePatcher`] backed by the Kubernetes API
#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeploymentLister for KubeCluster {
    #[instrument(skip(self))]
    async fn list_deployments(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> kube::Result<Vec<Deployment>> {
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let list = deployments
            .list(&ListParams::default().labels(label_selector))
            .await?;

        debug!("Found {} matching deployments", list.items.len());
        Ok(list.items)
    }
}

#[async_trait]
impl NamespacePatcher for KubeCluster {
    #[instrument(skip(self, patch))]
    async fn patch_namespace(
        &self,
        name: &str,
        patch: &MetadataPatch,
    ) -> kube::Result<Namespace> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let pp = PatchParams {
            field_manager: Some(FIELD_MANAGER.to_string()),
            ..Default::default()
        };

        namespaces.patch(name, &pp, &Patch::Strategic(patch)).await
    }
}
