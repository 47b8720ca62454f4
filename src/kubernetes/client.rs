// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{MeshError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config as KConfig,
};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the configured credentials
#[instrument(skip(config), fields(kubeconfig = ?config.kubeconfig, context = ?config.context))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    let client_config = match (&config.kubeconfig, &config.context) {
        (Some(path), _) => {
            let kubeconfig = read_kubeconfig(path).await?;
            return create_client_from_kubeconfig(&kubeconfig, &options).await;
        }
        (None, Some(_)) => KConfig::from_kubeconfig(&options).await.map_err(|e| {
            MeshError::Kubeconfig(format!("Failed to load kubeconfig context: {}", e))
        })?,
        (None, None) => KConfig::infer()
            .await
            .map_err(|e| MeshError::Kubeconfig(format!("Failed to infer config: {}", e)))?,
    };

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| MeshError::Kubeconfig(format!("Failed to create client: {}", e)))
}

async fn read_kubeconfig(path: &Path) -> Result<String> {
    debug!("Reading kubeconfig from {}", path.display());

    tokio::fs::read_to_string(path).await.map_err(|e| {
        MeshError::Kubeconfig(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

/// Create a Kubernetes client from a kubeconfig string
pub async fn create_client_from_kubeconfig(
    kubeconfig: &str,
    options: &KubeConfigOptions,
) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| MeshError::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config = KConfig::from_custom_kubeconfig(kubeconfig_parsed, options)
        .await
        .map_err(|e| MeshError::Kubeconfig(format!("Failed to create config: {}", e)))?;

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| MeshError::Kubeconfig(format!("Failed to create client: {}", e)))
}
