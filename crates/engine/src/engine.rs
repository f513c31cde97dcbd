//! The command engine
//!
//! Resolves the active command from an [`Invocation`], validates it against
//! the manifest, then materializes the declared directories and files with
//! parameter substitution, firing lifecycle hooks around each phase.
//!
//! The engine is a two-step state machine: `load` moves it from `Unloaded`
//! to `Loaded`, `execute` runs the loaded command to completion. One engine
//! instance processes exactly one command per `load`/`execute` cycle.

use crate::hooks::{HookArgs, HookEvent, HookRegistry};
use crate::invocation::Invocation;
use crate::manifest::{CommandSpec, FileMapping, Manifest};
use crate::render::Substitution;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tesseract_core::{ConsoleLogger, Error, FileSystem, Logger, OsFileSystem, Result};

/// Manifest path used when none is given
pub const DEFAULT_MANIFEST_PATH: &str = "./tesseract.json";

/// Recursion cap for `onError` dispatch triggered by failing hooks
///
/// An `onError` hook that itself fails triggers another `onError` dispatch;
/// beyond this depth the failure is logged and dispatch stops.
const MAX_ERROR_DEPTH: usize = 2;

/// Engine lifecycle state
enum State {
    Unloaded,
    Loaded { manifest: Manifest, command: String },
}

/// The command execution engine
///
/// # Examples
///
/// ```ignore
/// let mut engine = Engine::default();
/// engine.hook(HookEvent::BeforeAll, |_| {
///     println!("starting");
///     Ok(())
/// }, None);
///
/// let invocation = Invocation::new("init", vec!["demo".to_string()]);
/// engine.load(&invocation)?;
/// engine.execute(&invocation)?;
/// ```
pub struct Engine {
    manifest_path: Option<PathBuf>,
    state: State,
    /// Command name resolved so far, for hook scoping; survives load failure
    resolved_command: Option<String>,
    hooks: HookRegistry,
    logger: Box<dyn Logger>,
    fs: Box<dyn FileSystem>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_PATH)
    }
}

impl Engine {
    /// Create an engine for the manifest at `manifest_path`
    ///
    /// Uses the console logger and the real filesystem; swap either with
    /// [`Engine::with_logger`] and [`Engine::with_filesystem`].
    #[must_use]
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: Some(manifest_path.into()),
            state: State::Unloaded,
            resolved_command: None,
            hooks: HookRegistry::default(),
            logger: Box::new(ConsoleLogger::default()),
            fs: Box::new(OsFileSystem),
        }
    }

    /// Replace the logger collaborator
    #[must_use]
    pub fn with_logger(mut self, logger: Box<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the filesystem collaborator
    #[must_use]
    pub fn with_filesystem(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// The logger collaborator
    #[must_use]
    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Mutable access to the logger collaborator
    pub fn logger_mut(&mut self) -> &mut dyn Logger {
        self.logger.as_mut()
    }

    /// Replace the logger collaborator in place
    pub fn set_logger(&mut self, logger: Box<dyn Logger>) {
        self.logger = logger;
    }

    /// The configured manifest path, if any
    #[must_use]
    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }

    /// Set or clear the manifest path
    pub fn set_manifest_path(&mut self, path: Option<PathBuf>) {
        self.manifest_path = path;
    }

    /// Whether a successful `load` has happened
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, State::Loaded { .. })
    }

    /// The resolved command name, once loaded
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match &self.state {
            State::Loaded { command, .. } => Some(command),
            State::Unloaded => None,
        }
    }

    /// The loaded manifest, once loaded
    #[must_use]
    pub fn manifest(&self) -> Option<&Manifest> {
        match &self.state {
            State::Loaded { manifest, .. } => Some(manifest),
            State::Unloaded => None,
        }
    }

    /// Register a hook for a lifecycle event
    ///
    /// With `command = Some(name)` the hook only fires while that command is
    /// the active one; with `None` it fires for every command. Returns the
    /// engine for chaining.
    pub fn hook<F>(&mut self, event: HookEvent, callback: F, command: Option<&str>) -> &mut Self
    where
        F: Fn(&HookArgs<'_>) -> Result<()> + 'static,
    {
        match command {
            Some(name) => self.logger.debug(
                &format!("Added hook for event: {event} on command: {name}"),
                &[],
            ),
            None => self
                .logger
                .debug(&format!("Added hook for event: {event} (global)"), &[]),
        }
        self.hooks
            .register(event, Box::new(callback), command.map(ToString::to_string));
        self
    }

    /// Resolve the command and load the manifest
    ///
    /// Fires `beforeAll` first. Any failure is logged, announced to
    /// `onError` hooks, and re-raised.
    pub fn load(&mut self, invocation: &Invocation) -> Result<()> {
        self.resolved_command = None;
        self.dispatch(HookEvent::BeforeAll, &HookArgs::None);

        match self.try_load(invocation) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.logger
                    .error(&format!("Failed to load manifest: {error}"), &[]);
                self.dispatch(HookEvent::OnError, &HookArgs::Error(&error));
                Err(error)
            }
        }
    }

    fn try_load(&mut self, invocation: &Invocation) -> Result<()> {
        self.logger.info("Loading manifest...", &[]);

        let path = self
            .manifest_path
            .clone()
            .ok_or(Error::ManifestPathUnset)?;
        if !self.fs.exists(&path) {
            return Err(Error::ManifestNotFound { path });
        }

        let command = invocation
            .command()
            .ok_or(Error::MissingCommand)?
            .to_string();
        self.resolved_command = Some(command.clone());
        self.logger.info(&format!("Loading command: {command}"), &[]);

        let text = self.fs.read_to_string(&path)?;
        let manifest = Manifest::parse(&text).map_err(|source| Error::ManifestParse {
            path: path.clone(),
            source,
        })?;

        if manifest.command(&command).is_none() {
            return Err(Error::CommandNotFound { command });
        }

        self.state = State::Loaded { manifest, command };
        self.logger.info("Manifest loaded successfully", &[]);
        Ok(())
    }

    /// Run the loaded command
    ///
    /// Binds parameters, materializes directories, renders files, and fires
    /// `beforeCommand`/`afterCommand`/`afterAll`. Any failure is logged,
    /// announced to `onError` hooks, and re-raised.
    pub fn execute(&self, invocation: &Invocation) -> Result<()> {
        match self.try_execute(invocation) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.logger
                    .error(&format!("Command failed: {error}"), &[]);
                self.dispatch(HookEvent::OnError, &HookArgs::Error(&error));
                Err(error)
            }
        }
    }

    fn try_execute(&self, invocation: &Invocation) -> Result<()> {
        let State::Loaded { manifest, command } = &self.state else {
            return Err(Error::NotLoaded);
        };
        let spec = manifest
            .command(command)
            .ok_or_else(|| Error::CommandNotFound {
                command: command.clone(),
            })?;

        self.logger
            .info(&format!("Executing command: {command}"), &[]);
        if let Ok(value) = serde_json::to_value(spec) {
            self.logger.debug("Command configuration:", &[value]);
        }

        self.dispatch(
            HookEvent::BeforeCommand,
            &HookArgs::Command {
                name: command,
                spec,
            },
        );

        let params = self.bind_params(spec, invocation)?;

        for dir in &spec.dir {
            let path = Path::new(dir);
            if !self.fs.exists(path) {
                self.logger.info(&format!("Creating directory: {dir}"), &[]);
            }
            self.fs.create_dir_all(path)?;
        }

        for mapping in &spec.files {
            self.render_file(mapping, &params)?;
        }

        self.dispatch(
            HookEvent::AfterCommand,
            &HookArgs::Command {
                name: command,
                spec,
            },
        );
        self.logger
            .info(&format!("Command {command} completed successfully"), &[]);
        self.dispatch(HookEvent::AfterAll, &HookArgs::None);
        Ok(())
    }

    /// Bind declared parameter names to positional values, in declaration order
    fn bind_params(
        &self,
        spec: &CommandSpec,
        invocation: &Invocation,
    ) -> Result<IndexMap<String, String>> {
        let mut params = IndexMap::with_capacity(spec.params.len());
        for (i, name) in spec.params.iter().enumerate() {
            let value = invocation
                .param(i)
                .ok_or_else(|| Error::MissingParameter {
                    name: name.clone(),
                    position: i + 1,
                })?;
            self.logger
                .debug(&format!("Parameter {name} = {value}"), &[]);
            params.insert(name.clone(), value.to_string());
        }
        Ok(params)
    }

    /// Render one file mapping: substitute every bound parameter into the
    /// destination path and the template content, then write the result.
    ///
    /// Parent directories are created incrementally as each parameter's
    /// substitution reveals more of the final path.
    fn render_file(&self, mapping: &FileMapping, params: &IndexMap<String, String>) -> Result<()> {
        self.logger.info(
            &format!("Processing file: {} -> {}", mapping.from, mapping.to),
            &[],
        );

        let mut content = self.fs.read_to_string(Path::new(&mapping.from))?;
        let mut to = mapping.to.clone();

        for (key, value) in params {
            let substitution = Substitution::new(key, value)?;
            to = substitution.apply(&to);
            content = substitution.apply(&content);

            if let Some(parent) = Path::new(&to).parent()
                && !parent.as_os_str().is_empty()
                && !self.fs.exists(parent)
            {
                self.logger.info(
                    &format!("Creating directory: {}", parent.display()),
                    &[],
                );
                self.fs.create_dir_all(parent)?;
            }
        }

        self.fs.write(Path::new(&to), &content)?;
        self.logger
            .info(&format!("File written successfully: {to}"), &[]);
        Ok(())
    }

    /// Dispatch an event to all applicable hooks, in registration order
    fn dispatch(&self, event: HookEvent, args: &HookArgs<'_>) {
        self.dispatch_at(event, args, 0);
    }

    fn dispatch_at(&self, event: HookEvent, args: &HookArgs<'_>, depth: usize) {
        let active = self.resolved_command.as_deref();
        let selected: Vec<_> = self.hooks.matching(event, active).collect();
        if selected.is_empty() {
            return;
        }

        match active {
            Some(command) => self.logger.debug(
                &format!(
                    "Executing {} hooks for event: {event} on command: {command}",
                    selected.len()
                ),
                &[],
            ),
            None => self.logger.debug(
                &format!("Executing {} hooks for event: {event} (global)", selected.len()),
                &[],
            ),
        }

        for entry in selected {
            if let Err(cause) = entry.call(args) {
                let error = Error::HookExecution {
                    event: event.name().to_string(),
                    message: cause.to_string(),
                };
                self.logger.error(&error.to_string(), &[]);
                if depth < MAX_ERROR_DEPTH {
                    self.dispatch_at(HookEvent::OnError, &HookArgs::Error(&error), depth + 1);
                } else {
                    self.logger.warning(
                        "onError recursion limit reached; error not re-dispatched",
                        &[],
                    );
                }
            }
        }
    }
}
