// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace label keys used by the mesh
pub mod labels {
    /// Marks a namespace as monitored by the named mesh
    pub const MONITORED_BY: &str = "openservicemesh.io/monitored-by";
    /// Label key carrying the component name on control-plane workloads
    pub const APP: &str = "app";
}

/// Namespace annotation keys used by the mesh
pub mod annotations {
    /// Enables automatic sidecar injection for pods in the namespace
    pub const SIDECAR_INJECTION: &str = "openservicemesh.io/sidecar-injection";
    pub const SIDECAR_INJECTION_ENABLED: &str = "enabled";
}

/// Name of the mesh control-plane component
pub const CONTROLLER_NAME: &str = "osm-controller";

/// Mesh name used when none is given
pub const DEFAULT_MESH_NAME: &str = "osm";

/// Field manager recorded on namespace patches
pub const FIELD_MANAGER: &str = "meshctl";

/// Upper bound for the cluster calls made for a single namespace
pub const DEFAULT_NAMESPACE_TIMEOUT_SECS: u64 = 30;
