//! End-to-end launch sequencing.
//!
//! A launch runs in three phases and stops at the first failure:
//!
//! 1. Prerequisites, in order (files first, then tools)
//! 2. Provisioning: the backing service in container mode, the interpreter
//!    in local mode
//! 3. The bridged child, whose exit becomes the launcher's

use crate::bridge::{ChildEnv, ChildExit, ChildSpec, ProcessSpawner, SystemSpawner};
use crate::config::{LaunchMode, LauncherConfig};
use crate::error::{LauncherError, Result};
use crate::provision::{DockerCompose, PollPolicy, ProvisionOutcome, Provisioner, ServiceManager};
use crate::requirements::{
    CheckContext, InterpreterResolver, Prerequisite, PrerequisiteChecker, SystemContext,
};
use crate::ui::{hints, UserInterface};
use std::path::{Path, PathBuf};

/// Launches the target for one install root.
pub struct Launcher {
    config: LauncherConfig,
    root: PathBuf,
    target_args: Vec<String>,
    services: Box<dyn ServiceManager>,
    spawner: Box<dyn ProcessSpawner>,
    context: Box<dyn CheckContext>,
}

impl Launcher {
    /// Create a launcher backed by Docker Compose, the real PATH and real
    /// processes.
    pub fn new(config: LauncherConfig, root: &Path) -> Self {
        let services = DockerCompose::new(&config.service.name, &config.service.compose_file, root)
            .with_forward_env(config.service.forward_env.clone());
        Self {
            target_args: Vec::new(),
            services: Box::new(services),
            spawner: Box::new(SystemSpawner::new()),
            context: Box::new(SystemContext::new().in_dir(root)),
            root: root.to_path_buf(),
            config,
        }
    }

    /// Replace the backing service manager.
    pub fn with_services(mut self, services: Box<dyn ServiceManager>) -> Self {
        self.services = services;
        self
    }

    /// Replace the process spawner.
    pub fn with_spawner(mut self, spawner: Box<dyn ProcessSpawner>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Replace the context prerequisites are checked against.
    pub fn with_check_context(mut self, context: Box<dyn CheckContext>) -> Self {
        self.context = context;
        self
    }

    /// Extra arguments appended to the target's command line.
    pub fn with_target_args(mut self, args: Vec<String>) -> Self {
        self.target_args = args;
        self
    }

    /// The install root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Prerequisites for the configured mode, in evaluation order.
    pub fn prerequisites(&self) -> Vec<Prerequisite> {
        let script = self.root.join(&self.config.target.script);
        let target = Prerequisite::file("target script", script)
            .with_remediation(hints::target_missing(&self.root));

        match self.config.mode {
            LaunchMode::Container => {
                let compose = self.root.join(&self.config.service.compose_file);
                let mut prereqs = vec![
                    Prerequisite::file("compose file", compose)
                        .with_remediation(hints::compose_file_missing(&self.root)),
                    target,
                ];
                prereqs.extend(self.services.prerequisites());
                prereqs
            }
            LaunchMode::Local => vec![target],
        }
    }

    /// Check, provision, then run the target until it exits.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<ChildExit> {
        tracing::debug!(mode = %self.config.mode, root = %self.root.display(), "launching");

        let prereqs = self.prerequisites();
        PrerequisiteChecker::new(self.context.as_ref()).check_all(&prereqs)?;

        let argv = match self.config.mode {
            LaunchMode::Container => self.container_argv(ui)?,
            LaunchMode::Local => self.local_argv()?,
        };
        let spec = self.child_spec(argv)?;
        self.spawner.run(&spec)
    }

    /// Report every prerequisite without provisioning or spawning.
    ///
    /// Returns whether all of them hold.
    pub fn check(&self, ui: &mut dyn UserInterface) -> bool {
        let prereqs = self.prerequisites();
        let checker = PrerequisiteChecker::new(self.context.as_ref());
        let mut all_ok = true;

        for (prereq, (name, passed)) in prereqs.iter().zip(checker.report(&prereqs)) {
            if passed {
                ui.success(&name);
                continue;
            }
            all_ok = false;
            ui.error(&format!("{}: {}", name, prereq.failure));
            if let Some(hint) = &prereq.remediation {
                ui.hint(hint);
            }
        }

        if self.config.mode == LaunchMode::Local {
            let resolver = self.interpreter_resolver();
            match resolver.resolve(self.context.as_ref()) {
                Some(found) => ui.success(&format!("{} ({})", found.name, found.path.display())),
                None => {
                    all_ok = false;
                    ui.error("interpreter: Python is not installed or not found in PATH");
                    ui.hint(&resolver.remediation());
                }
            }
        }

        all_ok
    }

    fn container_argv(&mut self, ui: &mut dyn UserInterface) -> Result<Vec<String>> {
        let policy = PollPolicy {
            interval: self.config.service.poll_interval(),
            max_attempts: self.config.service.max_attempts,
        };
        let outcome = Provisioner::new(self.services.as_mut(), policy).ensure_running(ui)?;
        if let ProvisionOutcome::Started { built, attempts } = outcome {
            tracing::info!(service = %self.services.name(), built, attempts, "service started");
        }

        let mut command = vec![
            self.config.target.container_interpreter.clone(),
            self.config.target.script.to_string_lossy().to_string(),
        ];
        command.extend(self.target_args.iter().cloned());
        Ok(self.services.exec_command(&command))
    }

    fn local_argv(&self) -> Result<Vec<String>> {
        let resolver = self.interpreter_resolver();
        let found = resolver.resolve(self.context.as_ref()).ok_or_else(|| {
            LauncherError::PreconditionMissing {
                name: "interpreter".to_string(),
                message: "Python is not installed or not found in PATH".to_string(),
                remediation: Some(resolver.remediation()),
            }
        })?;
        tracing::debug!(interpreter = %found.path.display(), "using local interpreter");

        let mut argv = vec![
            found.path.to_string_lossy().to_string(),
            self.root
                .join(&self.config.target.script)
                .to_string_lossy()
                .to_string(),
        ];
        argv.extend(self.target_args.iter().cloned());
        Ok(argv)
    }

    fn interpreter_resolver(&self) -> InterpreterResolver {
        InterpreterResolver::new(
            self.config.interpreter.candidates.clone(),
            &self.config.interpreter.min_version,
        )
    }

    fn child_spec(&self, argv: Vec<String>) -> Result<ChildSpec> {
        let mut argv = argv.into_iter();
        let program = argv
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty command line for target"))?;
        Ok(ChildSpec::new(program, self.root.clone())
            .args(argv)
            .with_env(ChildEnv::from_config(&self.config.env, &self.root)))
    }
}
