// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface

use crate::config::Config;
use crate::constants::{DEFAULT_MESH_NAME, DEFAULT_NAMESPACE_TIMEOUT_SECS};
use crate::enrollment::{EnrollmentOutcome, EnrollmentRequest, NamespaceEnroller};
use crate::error::Result;
use crate::kubernetes::{create_client, KubeCluster};
use clap::{Args, Parser, Subcommand};
use kube::Client;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// meshctl - manage service mesh membership of namespaces
#[derive(Parser, Debug)]
#[command(name = "meshctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the kubeconfig file (defaults to KUBECONFIG or ~/.kube/config)
    #[arg(long, env = "MESHCTL_KUBECONFIG", global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, env = "MESHCTL_CONTEXT", global = true)]
    pub context: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage namespaces of a mesh
    Namespace {
        #[command(subcommand)]
        command: NamespaceCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum NamespaceCommands {
    /// Add namespaces to a mesh.
    ///
    /// Optionally enables automatic sidecar injection, so pods created in the
    /// added namespaces get a sidecar proxy. Namespaces running the mesh
    /// control plane are skipped.
    Add(NamespaceAddArgs),
}

#[derive(Args, Debug)]
pub struct NamespaceAddArgs {
    /// Namespaces to add, processed in order
    #[arg(value_name = "NAMESPACE", required = true)]
    pub namespaces: Vec<String>,

    /// Name of the service mesh
    #[arg(long, env = "MESHCTL_MESH_NAME", default_value = DEFAULT_MESH_NAME)]
    pub mesh_name: String,

    /// Enable automatic sidecar injection
    #[arg(long)]
    pub enable_sidecar_injection: bool,

    /// Seconds allowed for the cluster calls of a single namespace
    #[arg(long, default_value_t = DEFAULT_NAMESPACE_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl NamespaceAddArgs {
    pub fn request(&self) -> Result<EnrollmentRequest> {
        EnrollmentRequest::new(
            self.mesh_name.as_str(),
            self.namespaces.clone(),
            self.enable_sidecar_injection,
        )
    }
}

impl Cli {
    /// Run the command, writing user facing output to `out`
    pub async fn run<W: Write>(self, out: &mut W) -> Result<()> {
        match self.command {
            Commands::Namespace {
                command: NamespaceCommands::Add(args),
            } => {
                let config = Config::new(self.kubeconfig, self.context, args.timeout);
                let client = create_client(&config).await?;
                add_namespaces(client, &config, &args, out).await?;
                Ok(())
            }
        }
    }
}

/// Add the namespaces named in `args` to the mesh
pub async fn add_namespaces<W: Write>(
    client: Client,
    config: &Config,
    args: &NamespaceAddArgs,
    out: &mut W,
) -> Result<Vec<EnrollmentOutcome>> {
    let request = args.request()?;
    let cluster = KubeCluster::new(client);
    let enroller =
        NamespaceEnroller::new(cluster.clone(), cluster).with_timeout(config.namespace_timeout);

    let outcomes = enroller.enroll(&request, out).await.into_result()?;
    info!("Processed {} namespace(s)", outcomes.len());
    Ok(outcomes)
}
