//! Extension 1: custom resource operations and service integration.

use anyhow::{bail, Context, Result};
use tracing::instrument;

use azd_core::{Arity, Client, CommandSpec, Extension, Profiles, RootSpec};

const PROFILES: &str = include_str!("../profiles.toml");

#[derive(Debug, Clone)]
pub struct CustomExtension {
    profiles: Profiles,
}

impl CustomExtension {
    pub fn new() -> Result<Self> {
        let profiles =
            Profiles::from_toml_str(PROFILES).context("embedded client profiles are invalid")?;
        Ok(Self { profiles })
    }
}

impl Extension for CustomExtension {
    fn name(&self) -> &str {
        "extension1"
    }

    fn root(&self) -> RootSpec {
        RootSpec::new("azd-ext1", "Azure Dev Extension 1")
            .long_about("Azure Dev Extension 1 - A sample extension for the Azure Developer CLI.")
            .version(env!("CARGO_PKG_VERSION"))
    }

    fn commands(&self) -> Vec<CommandSpec> {
        let profiles = self.profiles.clone();
        vec![
            CommandSpec::new("custom", move |args| {
                let [resource] = args else {
                    bail!("custom expects exactly one resource name");
                };
                run_custom(&profiles, resource).map(drop)
            })
            .arg("resource-name")
            .about("Perform custom extension1 operations")
            .long_about("Perform custom operations specific to extension1 functionality.")
            .arity(Arity::Exact(1)),
            CommandSpec::new("integrate", |args| {
                let [service] = args else {
                    bail!("integrate expects exactly one service");
                };
                integrate(service)
            })
            .arg("service")
            .about("Integrate with external services")
            .long_about("Integrate your application with external services using extension1.")
            .arity(Arity::Exact(1)),
        ]
    }
}

/// Runs the custom operation and hands back the client it configured.
#[instrument(skip(profiles))]
pub fn run_custom(profiles: &Profiles, resource: &str) -> Result<Client> {
    let mut client = Client::new(Some(profiles.get("custom")?));

    println!("Running custom operation on resource: {resource}");
    client.set_config("operation", "custom-ext1");

    println!("Extension1 custom operation completed for {resource}");
    Ok(client)
}

pub fn integrate(service: &str) -> Result<()> {
    println!("Integrating with service: {service}");
    println!("Successfully integrated with {service} using extension1");
    Ok(())
}
