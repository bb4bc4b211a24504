//! Shell state and command handlers.

use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Input};
use tracing::warn;

use crate::config::ConfigManager;
use crate::core::{
    RecordStore, SystemClock, Transition, ValidationReport, ViewController, ViewMode,
};
use crate::domain::{Candidate, Field};
use crate::errors::ControllerError;
use crate::storage::JsonFileBackend;
use crate::utils::build_info;

use super::output;
use super::ui::views::{entry_view, listing_view, ADD_BUTTON, APP_TITLE};
use super::{CliError, CliMode, CommandError, LoopControl};

type Handler = fn(&mut ShellContext, &[&str]) -> Result<LoopControl, CommandError>;

struct CommandEntry {
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
    handler: Handler,
}

const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "add",
        usage: "add [surname name patronymic birth-date start-year faculty]",
        summary: "Submit the student form (prompts for fields when none are given)",
        handler: cmd_add,
    },
    CommandEntry {
        name: "form",
        usage: "form",
        summary: "Open the student form",
        handler: cmd_form,
    },
    CommandEntry {
        name: "show",
        usage: "show",
        summary: "Redraw the active view",
        handler: cmd_show,
    },
    CommandEntry {
        name: "status",
        usage: "status",
        summary: "Show the active view, record count and storage file",
        handler: cmd_status,
    },
    CommandEntry {
        name: "help",
        usage: "help",
        summary: "List available commands",
        handler: cmd_help,
    },
    CommandEntry {
        name: "version",
        usage: "version",
        summary: "Print build information",
        handler: cmd_version,
    },
    CommandEntry {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
        handler: cmd_exit,
    },
];

pub struct ShellContext {
    pub mode: CliMode,
    pub theme: ColorfulTheme,
    pub controller: ViewController,
    pub storage_path: PathBuf,
    pub last_report: Option<ValidationReport>,
    pub running: bool,
}

impl ShellContext {
    /// Builds the shell from the user's configuration and the system clock.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load_or_init()?;
        if !config.locale_supported() {
            warn!(locale = %config.locale, "unsupported locale; falling back to ru-RU formatting");
        }
        let data_dir = config.resolve_data_dir(config_manager.base_dir());
        let backend = JsonFileBackend::new(data_dir, &config.storage_key)?;
        let storage_path = backend.path().to_path_buf();
        let store = RecordStore::open(Box::new(backend));
        Ok(Self::with_controller(
            mode,
            ViewController::new(store, Box::new(SystemClock)),
            storage_path,
        ))
    }

    pub fn with_controller(
        mode: CliMode,
        controller: ViewController,
        storage_path: PathBuf,
    ) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
            controller,
            storage_path,
            last_report: None,
            running: true,
        }
    }

    pub fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|entry| entry.name).collect()
    }

    pub fn prompt(&self) -> String {
        match self.controller.mode() {
            ViewMode::Entry => "roster[form]> ".into(),
            ViewMode::Listing => "roster[table]> ".into(),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let command = match command {
            "quit" => "exit",
            "list" | "table" => "show",
            other => other,
        };
        match COMMANDS.iter().find(|entry| entry.name == command) {
            Some(entry) => (entry.handler)(self, args),
            None => {
                output::warning(format!("Unknown command `{command}`."));
                output::hint("Use `help` to list commands.");
                Ok(LoopControl::Continue)
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help` for usage details.");
                Ok(())
            }
            CommandError::Io(err) if self.mode == CliMode::Script => Err(err.into()),
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    /// Prints the view matching the controller's mode.
    pub(crate) fn render(&self) {
        output::section(APP_TITLE);
        match self.controller.mode() {
            ViewMode::Entry => {
                println!(
                    "{}",
                    entry_view(self.controller.input(), self.last_report.as_ref())
                );
                output::hint(format!("Use `add` to submit ({ADD_BUTTON})."));
            }
            ViewMode::Listing => {
                println!("{}", listing_view(&self.controller.rows()));
                output::hint(format!("Use `form` to open the form ({ADD_BUTTON})."));
            }
        }
    }

    fn collect_candidate(&self, args: &[&str]) -> Result<Candidate, CommandError> {
        match args.len() {
            6 => Ok(Candidate::new(args[0], args[1], args[2], args[3], args[4], args[5])),
            0 if self.mode == CliMode::Interactive => self.prompt_candidate(),
            _ => Err(CommandError::InvalidArguments(format!(
                "usage: {}",
                COMMANDS[0].usage
            ))),
        }
    }

    fn prompt_candidate(&self) -> Result<Candidate, CommandError> {
        let mut candidate = self.controller.input().clone();
        for field in Field::ALL {
            let value = Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt_label(field))
                .with_initial_text(candidate.value(field).to_string())
                .allow_empty(true)
                .interact_text()?;
            candidate.set(field, value);
        }
        Ok(candidate)
    }
}

fn prompt_label(field: Field) -> String {
    match field {
        Field::BirthDate => format!("{} (ГГГГ-ММ-ДД)", field.label()),
        Field::StartYear => format!("{} (2000 - текущий)", field.label()),
        _ => field.label().to_string(),
    }
}

fn cmd_add(ctx: &mut ShellContext, args: &[&str]) -> Result<LoopControl, CommandError> {
    if ctx.controller.mode() != ViewMode::Entry {
        output::warning("The form is closed.");
        output::hint("Use `form` to open it first.");
        return Ok(LoopControl::Continue);
    }
    let candidate = ctx.collect_candidate(args)?;
    match ctx.controller.submit(candidate) {
        Ok(Transition::Committed(record)) => {
            ctx.last_report = None;
            output::success(format!("Added {}.", record.full_name()));
            ctx.render();
        }
        Ok(_) => {}
        Err(ControllerError::Validation(report)) => {
            output::error(format!("Please correct: {}", report.summary()));
            ctx.last_report = Some(report);
            ctx.render();
        }
        Err(err @ ControllerError::Persistence(_)) => {
            ctx.last_report = None;
            output::error(err);
            output::hint("Nothing was saved; the form still holds your input.");
        }
    }
    Ok(LoopControl::Continue)
}

fn cmd_form(ctx: &mut ShellContext, _args: &[&str]) -> Result<LoopControl, CommandError> {
    if ctx.controller.show_entry_form() == Transition::Unchanged {
        output::info("The form is already open.");
    }
    ctx.render();
    Ok(LoopControl::Continue)
}

fn cmd_show(ctx: &mut ShellContext, _args: &[&str]) -> Result<LoopControl, CommandError> {
    ctx.render();
    Ok(LoopControl::Continue)
}

fn cmd_status(ctx: &mut ShellContext, _args: &[&str]) -> Result<LoopControl, CommandError> {
    let view = match ctx.controller.mode() {
        ViewMode::Entry => "form",
        ViewMode::Listing => "table",
    };
    output::info(format!("View: {view}"));
    output::info(format!("Students: {}", ctx.controller.records().len()));
    output::info(format!("Storage: {}", ctx.storage_path.display()));
    Ok(LoopControl::Continue)
}

fn cmd_help(_ctx: &mut ShellContext, _args: &[&str]) -> Result<LoopControl, CommandError> {
    output::section("Available commands");
    let width = COMMANDS
        .iter()
        .map(|entry| entry.usage.len())
        .max()
        .unwrap_or(0);
    for entry in COMMANDS {
        println!("  {:<width$}  {}", entry.usage, entry.summary);
    }
    Ok(LoopControl::Continue)
}

fn cmd_version(_ctx: &mut ShellContext, _args: &[&str]) -> Result<LoopControl, CommandError> {
    println!("{}", build_info::current().summary());
    Ok(LoopControl::Continue)
}

fn cmd_exit(_ctx: &mut ShellContext, _args: &[&str]) -> Result<LoopControl, CommandError> {
    Ok(LoopControl::Exit)
}
