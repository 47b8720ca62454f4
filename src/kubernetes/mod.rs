// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and the cluster calls made during enrollment.

pub mod client;
pub mod cluster;

pub use client::create_client;
pub use cluster::{DeploymentLister, KubeCluster, NamespacePatcher};
