// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_NAMESPACE_TIMEOUT_SECS;
use std::path::PathBuf;
use std::time::Duration;

/// Cluster access settings resolved from the command line and environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit kubeconfig file; when unset the client is inferred (KUBECONFIG, ~/.kube/config, in-cluster)
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one
    pub context: Option<String>,
    /// Bound on the cluster calls made for a single namespace
    pub namespace_timeout: Duration,
}

impl Config {
    pub fn new(kubeconfig: Option<PathBuf>, context: Option<String>, timeout_secs: u64) -> Self {
        Config {
            kubeconfig,
            context,
            namespace_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(None, None, DEFAULT_NAMESPACE_TIMEOUT_SECS)
    }
}
