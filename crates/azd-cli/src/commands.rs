use anyhow::{bail, Context, Result};
use tracing::instrument;

use azd_core::{Arity, Client, CommandSpec, Extension, Profiles, RootSpec};

const PROFILES: &str = include_str!("../profiles.toml");

/// Template used by `init` when none is given.
pub const DEFAULT_TEMPLATE: &str = "default";

/// The builtin command set of the `azd` binary.
#[derive(Debug, Clone)]
pub struct CoreCommands {
    profiles: Profiles,
}

impl CoreCommands {
    /// Loads the embedded client profiles.
    pub fn new() -> Result<Self> {
        let profiles =
            Profiles::from_toml_str(PROFILES).context("embedded client profiles are invalid")?;
        Ok(Self::with_profiles(profiles))
    }

    /// Uses `profiles` instead of the embedded client profiles.
    pub fn with_profiles(profiles: Profiles) -> Self {
        Self { profiles }
    }
}

impl Extension for CoreCommands {
    fn name(&self) -> &str {
        "core"
    }

    fn root(&self) -> RootSpec {
        RootSpec::new("azd", "Azure Developer CLI")
            .long_about(
                "Azure Developer CLI - A tool for building and deploying modern applications on Azure.",
            )
            .version(env!("CARGO_PKG_VERSION"))
    }

    fn commands(&self) -> Vec<CommandSpec> {
        let profiles = self.profiles.clone();
        vec![
            CommandSpec::new("deploy", move |args| deploy(&profiles, args))
                .arg("app-name")
                .about("Deploy your application to Azure")
                .long_about("Deploy your application to Azure using the configured settings.")
                .arity(Arity::Exact(1)),
            CommandSpec::new("init", init)
                .arg("template")
                .about("Initialize a new project")
                .long_about("Initialize a new project from a template.")
                .arity(Arity::AtMost(1)),
            CommandSpec::new("provision", provision)
                .about("Provision Azure resources")
                .long_about("Provision the Azure resources required for your application."),
        ]
    }
}

#[instrument(skip(profiles))]
fn deploy(profiles: &Profiles, args: &[String]) -> Result<()> {
    let [app_name] = args else {
        bail!("deploy expects exactly one application name");
    };

    let client = Client::new(Some(profiles.get("deploy")?));

    println!("Deploying application: {app_name}");
    client.deploy(app_name).context("deployment failed")?;

    println!("Successfully deployed {app_name}");
    Ok(())
}

fn init(args: &[String]) -> Result<()> {
    let template = args.first().map_or(DEFAULT_TEMPLATE, String::as_str);

    println!("Initializing project with template: {template}");
    println!("Project initialized successfully!");
    Ok(())
}

fn provision(_args: &[String]) -> Result<()> {
    println!("Provisioning Azure resources...");
    println!("Resources provisioned successfully!");
    Ok(())
}
