use std::process::ExitCode;

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction};
use tracing::{debug, instrument, warn};

use crate::command::{Arity, CommandSpec, RootSpec, UnknownFlagError};
use crate::extension::Extension;
use crate::styles;

const POSITIONALS: &str = "positionals";

/// What a call to [`Dispatcher::execute`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The named command ran to completion.
    Ran(String),
    /// No command matched; the usage banner was printed.
    Banner,
    Help,
    Version,
}

/// Root command of a binary: owns the registered commands and runs the one
/// named by the process arguments.
#[derive(Debug)]
pub struct Dispatcher {
    root: RootSpec,
    commands: Vec<CommandSpec>,
}

impl Dispatcher {
    pub fn new(root: RootSpec) -> Self {
        Self {
            root,
            commands: Vec::new(),
        }
    }

    /// Builds a dispatcher rooted at `extension` with all of its commands registered.
    pub fn from_extension(extension: &dyn Extension) -> Self {
        let mut dispatcher = Self::new(extension.root());
        dispatcher.mount(extension);
        dispatcher
    }

    /// Appends a command. Names are matched exactly, so a second command with
    /// an already registered name is ignored.
    pub fn register(&mut self, command: CommandSpec) -> &mut Self {
        if self.find(command.name()).is_some() {
            warn!(
                "command '{}' is already registered on '{}'; ignoring duplicate",
                command.name(),
                self.root.name
            );
            return self;
        }
        self.commands.push(command);
        self
    }

    /// Registers every command contributed by `extension`.
    pub fn mount(&mut self, extension: &dyn Extension) -> &mut Self {
        debug!("mounting extension '{}' on '{}'", extension.name(), self.root.name);
        for command in extension.commands() {
            self.register(command);
        }
        self
    }

    pub fn root(&self) -> &RootSpec {
        &self.root
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Matches the first argument against the registered commands and invokes
    /// the match with the remaining arguments.
    ///
    /// # Errors
    /// Returns an [`UnknownFlagError`] for a flag the command does not define,
    /// an [`crate::ArityError`] when the argument count is rejected, otherwise
    /// whatever the command's handler returns.
    #[instrument(skip_all, fields(root = %self.root.name))]
    pub fn execute<I, S>(&self, args: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let Some((first, rest)) = args.split_first() else {
            println!("{}", self.root.usage_banner());
            return Ok(Outcome::Banner);
        };

        match first.as_str() {
            "-h" | "--help" => return self.help_for(None),
            "help" => return self.help_for(rest.first().map(String::as_str)),
            "-V" | "--version" => {
                println!("{}", self.version_line());
                return Ok(Outcome::Version);
            }
            _ => {}
        }

        let Some(command) = self.find(first) else {
            debug!("no command named '{}', showing usage banner", first);
            println!("{}", self.root.usage_banner());
            return Ok(Outcome::Banner);
        };

        let Some(positionals) = self.parse_positionals(command, rest)? else {
            return self.help_for(Some(command.name()));
        };

        debug!(command = command.name(), args = positionals.len(), "dispatching");
        command.invoke(&positionals)?;
        Ok(Outcome::Ran(command.name().to_string()))
    }

    /// Separates flags from positional arguments. Returns `None` when help was
    /// requested anywhere in `rest`; any other flag is rejected. Arity is left
    /// to [`CommandSpec::invoke`].
    fn parse_positionals(
        &self,
        command: &CommandSpec,
        rest: &[String],
    ) -> Result<Option<Vec<String>>> {
        let parser = clap::Command::new(command.name().to_string())
            .bin_name(format!("{} {}", self.root.name, command.name()))
            .disable_version_flag(true)
            .arg(
                Arg::new(POSITIONALS)
                    .value_name(command.placeholder().unwrap_or("args").to_string())
                    .num_args(0..)
                    .action(ArgAction::Append),
            );
        let argv = std::iter::once(command.name().to_string()).chain(rest.iter().cloned());

        match parser.try_get_matches_from(argv) {
            Ok(matches) => Ok(Some(
                matches
                    .get_many::<String>(POSITIONALS)
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
            )),
            Err(err) if err.kind() == ErrorKind::DisplayHelp => Ok(None),
            Err(err) => {
                let flag = match err.get(ContextKind::InvalidArg) {
                    Some(ContextValue::String(flag)) => flag.clone(),
                    _ => rest
                        .iter()
                        .find(|arg| arg.starts_with('-'))
                        .cloned()
                        .unwrap_or_else(|| err.kind().to_string()),
                };
                debug!("clap rejected arguments for '{}': {}", command.name(), err.kind());
                Err(UnknownFlagError {
                    command: command.name().to_string(),
                    flag,
                }
                .into())
            }
        }
    }

    /// Entry-point wrapper: executes `args` and maps a failure to exit code 1
    /// after printing it to stderr.
    pub fn run<I, S>(&self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.execute(args) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        }
    }

    /// Full help text for the root command, uncolored.
    pub fn render_help(&self) -> String {
        self.clap_command().render_long_help().to_string()
    }

    /// Help text for a single registered command, uncolored.
    pub fn render_command_help(&self, name: &str) -> Option<String> {
        let mut root = self.clap_command();
        root.build();
        root.find_subcommand_mut(name)
            .map(|sub| sub.render_long_help().to_string())
    }

    pub fn version_line(&self) -> String {
        format!(
            "{} {}",
            self.root.name,
            self.root.version.as_deref().unwrap_or("unknown")
        )
    }

    fn help_for(&self, command: Option<&str>) -> Result<Outcome> {
        let mut root = self.clap_command();
        match command.filter(|name| self.find(name).is_some()) {
            Some(name) => {
                root.build();
                if let Some(sub) = root.find_subcommand_mut(name) {
                    sub.print_long_help()?;
                }
            }
            None => root.print_long_help()?,
        }
        Ok(Outcome::Help)
    }

    fn clap_command(&self) -> clap::Command {
        let mut root = clap::Command::new(self.root.name.clone())
            .about(self.root.about.clone())
            .styles(styles::get_clap_styles())
            .disable_help_subcommand(true);
        if let Some(long_about) = &self.root.long_about {
            root = root.long_about(long_about.clone());
        }
        if let Some(version) = &self.root.version {
            root = root.version(version.clone());
        }

        self.commands
            .iter()
            .fold(root, |root, spec| root.subcommand(clap_subcommand(spec)))
    }
}

fn clap_subcommand(spec: &CommandSpec) -> clap::Command {
    let sub = clap::Command::new(spec.name().to_string())
        .about(spec.summary().to_string())
        .long_about(spec.help().to_string());

    let Some(placeholder) = spec.placeholder() else {
        return sub;
    };
    let arg = Arg::new(placeholder.to_string()).value_name(placeholder.to_string());
    let arg = match spec.expected_arity() {
        Arity::Exact(0) => return sub,
        Arity::Exact(n) => arg.required(true).num_args(n),
        Arity::AtMost(0) => return sub,
        Arity::AtMost(n) => arg.required(false).num_args(1..=n),
        Arity::Any => arg.required(false).action(ArgAction::Append),
    };
    sub.arg(arg)
}
