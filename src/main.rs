//! doclaunch CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use doclaunch::bridge::ChildExit;
use doclaunch::cli::Cli;
use doclaunch::config::{load_config, resolve_install_root};
use doclaunch::error::FAILURE_EXIT_CODE;
use doclaunch::ui::{LauncherTheme, StderrUI, UserInterface};
use doclaunch::{Launcher, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout belongs to the child.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("doclaunch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doclaunch=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// What the process should exit with after a successful launch.
enum Outcome {
    Checked(bool),
    Finished(ChildExit),
}

fn launch(cli: &Cli, ui: &mut dyn UserInterface) -> Result<Outcome> {
    let root = resolve_install_root(cli.root.as_deref())?;
    let mut config = load_config(&root, cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let mut launcher = Launcher::new(config, &root).with_target_args(cli.target_args.clone());
    if cli.check {
        return Ok(Outcome::Checked(launcher.check(ui)));
    }
    launcher.run(ui).map(Outcome::Finished)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("doclaunch starting with args: {:?}", cli);

    let mut ui = if cli.no_color {
        StderrUI::with_theme(LauncherTheme::plain(), cli.quiet)
    } else {
        StderrUI::new(cli.quiet)
    };

    match launch(&cli, &mut ui) {
        Ok(Outcome::Checked(true)) => ExitCode::SUCCESS,
        Ok(Outcome::Checked(false)) => ExitCode::from(FAILURE_EXIT_CODE),
        Ok(Outcome::Finished(exit)) => {
            if let ChildExit::Signaled(_) = exit {
                ui.warning(&format!("Server {}", exit));
            }
            ExitCode::from(exit.exit_code())
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if let Some(hint) = e.remediation() {
                ui.hint(hint);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
