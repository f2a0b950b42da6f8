//! CLI route: single route table and run context. Dispatches to the shell and
//! presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_checklist, format_routes, format_submit_outcome, format_validation_result,
};
use crate::config::{AppConfig, ConfigLoader};
use crate::error::ShellError;
use crate::profile::{checklist_state, validate, ProfileRecord};
use crate::shell::{App, Event, RenderOptions, ROUTES};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of a command: text for stdout and whether the process should succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

/// Counts from one script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub events: usize,
    pub failed: usize,
}

/// Runtime context for CLI execution: loaded config and presentation switches.
pub struct RunContext {
    config: AppConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        no_color: bool,
    ) -> Result<Self, ShellError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::from_config(config, no_color)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(config: AppConfig, no_color: bool) -> Result<Self, ShellError> {
        config.ensure_valid()?;
        let color = config.shell.color && !no_color;
        Ok(Self { config, color })
    }

    /// Fresh shell built from the configuration
    pub fn new_app(&self) -> Result<App, ShellError> {
        App::new(
            &self.config.shell.start_route,
            self.config.profile.clone(),
            RenderOptions {
                title: self.config.shell.title.clone(),
                color: self.color,
            },
        )
    }

    /// Execute a command. Streaming commands write to stdout directly.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ShellError> {
        match command {
            Commands::Run { script, keep_going } => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                let summary = match script {
                    Some(path) => {
                        let file = std::fs::File::open(path)?;
                        self.run_script(BufReader::new(file), &mut out, *keep_going)?
                    }
                    None => {
                        let stdin = std::io::stdin();
                        self.run_script(stdin.lock(), &mut out, *keep_going)?
                    }
                };
                Ok(CommandOutput::ok(format!(
                    "Processed {} event(s)",
                    summary.events
                )))
            }
            Commands::Interactive => self.run_interactive(),
            Commands::Validate {
                name,
                email,
                password,
                bio,
                format,
            } => {
                let record = ProfileRecord::new(name, email, password, bio);
                let errors = validate(&record);
                Ok(CommandOutput {
                    text: format_validation_result(&errors, format)?,
                    success: errors.is_empty(),
                })
            }
            Commands::Checklist { password, format } => Ok(CommandOutput::ok(format_checklist(
                &checklist_state(password),
                format,
            )?)),
            Commands::Routes { format } => Ok(CommandOutput::ok(format_routes(&ROUTES, format)?)),
        }
    }

    /// Apply every event in `input`, writing a transcript to `out`.
    ///
    /// Without `keep_going` the first failing event aborts the run with its line
    /// number. With it, failures are reported inline and the run fails at the end.
    pub fn run_script<R: BufRead, W: Write>(
        &self,
        input: R,
        out: &mut W,
        keep_going: bool,
    ) -> Result<ScriptSummary, ShellError> {
        let mut app = self.new_app()?;
        let mut summary = ScriptSummary::default();
        writeln!(out, "{}", app.render())?;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let result = Event::parse_line(&line).and_then(|event| match event {
                Some(event) => app.dispatch(event).map(Some),
                None => Ok(None),
            });

            match result {
                Ok(None) => continue,
                Ok(Some(outcome)) => {
                    summary.events += 1;
                    writeln!(out, "\n> {}", line.trim())?;
                    if let Some(outcome) = outcome {
                        writeln!(out, "{}", format_submit_outcome(&outcome))?;
                    }
                    writeln!(out, "{}", app.render())?;
                }
                Err(e) => {
                    summary.events += 1;
                    summary.failed += 1;
                    warn!(line = line_no, error = %e, "Script event failed");
                    if !keep_going {
                        return Err(ShellError::ScriptLine {
                            line: line_no,
                            source: Box::new(e),
                        });
                    }
                    writeln!(out, "\n> {}\nerror: line {}: {}", line.trim(), line_no, e)?;
                }
            }
        }

        info!(events = summary.events, failed = summary.failed, "Script finished");
        if summary.failed > 0 {
            return Err(ShellError::ScriptFailed {
                failed: summary.failed,
                total: summary.events,
            });
        }
        Ok(summary)
    }

    fn run_interactive(&self) -> Result<CommandOutput, ShellError> {
        use dialoguer::Input;

        let mut app = self.new_app()?;
        println!("{}", app.render());
        println!("\nCommands: goto <path>, login, register, logout, edit, set <field> <value>, submit, cancel, show, quit");

        loop {
            let line: String = Input::new()
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ShellError::Input(e.to_string()))?;
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                break;
            }

            let result = Event::parse_line(&line).and_then(|event| match event {
                Some(event) => app.dispatch(event).map(Some),
                None => Ok(None),
            });
            match result {
                Ok(None) => {}
                Ok(Some(outcome)) => {
                    if let Some(outcome) = outcome {
                        println!("{}", format_submit_outcome(&outcome));
                    }
                    println!("{}", app.render());
                }
                Err(e) => eprintln!("{}", crate::cli::map_error(&e)),
            }
        }

        Ok(CommandOutput::ok("Goodbye."))
    }
}
