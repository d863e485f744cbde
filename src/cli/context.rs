//! Shell state: the ledger, catalog, journals, and dispatch plumbing.

use std::env;
use std::future::Future;

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use tokio::runtime::Runtime;

use crate::catalog::vision::MockImageAnalyzer;
use crate::catalog::SampleCatalog;
use crate::cli::commands;
use crate::cli::output;
use crate::cli::registry::CommandRegistry;
use crate::cli::{CliError, CommandError};
use crate::config::{Config, ConfigManager};
use crate::core::notify::{LedgerEvent, Notifier};
use crate::core::{GoalService, NutritionLedger, WorkoutService};
use crate::domain::{GoalBoard, MetricsJournal, UserProfile, WorkoutPlanner};

/// Environment variable that switches the shell into script mode.
pub const SCRIPT_ENV: &str = "FITNESS_CORE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Renders ledger events as console toasts.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, event: &LedgerEvent) {
        output::success(event.message());
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub ledger: NutritionLedger,
    pub catalog: SampleCatalog,
    pub analyzer: MockImageAnalyzer,
    pub profile: UserProfile,
    pub metrics: MetricsJournal,
    pub goals: GoalBoard,
    pub planner: WorkoutPlanner,
    config_manager: ConfigManager,
    registry: CommandRegistry,
    runtime: Runtime,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;

        let catalog = SampleCatalog::new();
        let mut analyzer = MockImageAnalyzer::new(catalog.items().to_vec());
        if mode == CliMode::Script {
            // Scripted runs skip the simulated inference latency.
            analyzer = analyzer.with_delay(std::time::Duration::ZERO);
        }

        let today = Local::now().date_naive();
        Ok(Self {
            mode,
            running: true,
            ledger: NutritionLedger::new(today, Box::new(ConsoleNotifier)),
            catalog,
            analyzer,
            profile: config.profile,
            metrics: MetricsJournal::new(),
            goals: GoalService::sample_board(),
            planner: WorkoutService::sample_planner(),
            config_manager,
            registry: commands::registry(),
            runtime: Runtime::new()?,
        })
    }

    pub fn current_mode() -> CliMode {
        if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }

    pub fn prompt(&self) -> String {
        format!("fitness[{}]> ", self.ledger.date())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Drives an async catalog or analyzer call to completion.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::InvalidArguments(message) | CommandError::Message(message) => {
                output::warning(message)
            }
            other => output::error(other),
        }
        Ok(())
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit the fitness shell?")
            .default(true)
            .interact()?;
        Ok(confirmed)
    }

    /// Persists the current profile back to the config file.
    pub fn save_profile(&self) -> Result<(), CommandError> {
        let config = Config {
            profile: self.profile.clone(),
        };
        self.config_manager.save(&config)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }
}
