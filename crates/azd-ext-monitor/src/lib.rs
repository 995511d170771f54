//! Extension 2: application monitoring and resource analysis.

use anyhow::{bail, Context, Result};
use chrono::{Local, SecondsFormat};
use tracing::instrument;

use azd_core::{Arity, Client, CommandSpec, Extension, Profiles, RootSpec};

const PROFILES: &str = include_str!("../profiles.toml");

#[derive(Debug, Clone)]
pub struct MonitorExtension {
    profiles: Profiles,
}

impl MonitorExtension {
    pub fn new() -> Result<Self> {
        let profiles =
            Profiles::from_toml_str(PROFILES).context("embedded client profiles are invalid")?;
        Ok(Self { profiles })
    }
}

impl Extension for MonitorExtension {
    fn name(&self) -> &str {
        "extension2"
    }

    fn root(&self) -> RootSpec {
        RootSpec::new("azd-ext2", "Azure Dev Extension 2")
            .long_about(
                "Azure Dev Extension 2 - A monitoring and analytics extension for the Azure Developer CLI.",
            )
            .version(env!("CARGO_PKG_VERSION"))
    }

    fn commands(&self) -> Vec<CommandSpec> {
        let profiles = self.profiles.clone();
        vec![
            CommandSpec::new("monitor", move |args| {
                let [app_name] = args else {
                    bail!("monitor expects exactly one application name");
                };
                monitor(&profiles, app_name).map(drop)
            })
            .arg("app-name")
            .about("Monitor application performance")
            .long_about("Monitor your application's performance and health metrics.")
            .arity(Arity::Exact(1)),
            CommandSpec::new("analyze", |args| {
                let [resource_type] = args else {
                    bail!("analyze expects exactly one resource type");
                };
                analyze(resource_type)
            })
            .arg("resource-type")
            .about("Analyze resource usage and costs")
            .long_about("Analyze your Azure resource usage, performance, and costs.")
            .arity(Arity::Exact(1)),
        ]
    }
}

/// Starts monitoring `app_name` and returns the client carrying the
/// monitoring target and start time.
#[instrument(skip(profiles))]
pub fn monitor(profiles: &Profiles, app_name: &str) -> Result<Client> {
    let mut client = Client::new(Some(profiles.get("monitor")?));

    println!("Starting monitoring for application: {app_name}");
    client.set_config("monitor-target", app_name);
    client.set_config(
        "start-time",
        Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    println!("Monitoring active for {app_name} - collecting metrics...");
    println!("✓ Performance metrics collected");
    println!("✓ Health checks completed");
    println!("✓ Error logs analyzed");
    Ok(client)
}

pub fn analyze(resource_type: &str) -> Result<()> {
    println!("Analyzing {resource_type} resources...");
    println!("📊 Resource utilization: 67%");
    println!("💰 Monthly cost estimate: $245.30");
    println!("⚡ Performance score: 8.5/10");
    println!("🔍 Optimization suggestions available");
    println!("Analysis completed for {resource_type} resources");
    Ok(())
}
