//! Lifecycle hooks
//!
//! Stores, per lifecycle event, an ordered list of callbacks with an
//! optional command scope, and resolves which callbacks apply to the
//! currently executing command. Dispatch itself lives on the engine,
//! which owns the logger and the on-error recursion policy.

use crate::manifest::CommandSpec;
use std::fmt;
use tesseract_core::{Error, Result};

/// Lifecycle events a hook can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// Before manifest resolution starts
    BeforeAll,
    /// After the command completed
    AfterAll,
    /// Before the command body runs
    BeforeCommand,
    /// After the command body ran
    AfterCommand,
    /// A fatal error or hook failure occurred
    OnError,
}

impl HookEvent {
    /// The event name as callers know it
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BeforeAll => "beforeAll",
            Self::AfterAll => "afterAll",
            Self::BeforeCommand => "beforeCommand",
            Self::AfterCommand => "afterCommand",
            Self::OnError => "onError",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload passed to hook callbacks
#[derive(Debug)]
pub enum HookArgs<'a> {
    /// No payload (`beforeAll`, `afterAll`)
    None,
    /// The active command and its spec (`beforeCommand`, `afterCommand`)
    Command {
        /// Resolved command name
        name: &'a str,
        /// The command's manifest entry
        spec: &'a CommandSpec,
    },
    /// The error being announced (`onError`)
    Error(&'a Error),
}

/// A registered hook callback
pub type HookCallback = Box<dyn Fn(&HookArgs<'_>) -> Result<()>>;

/// One registered callback with its optional command scope
pub struct HookEntry {
    callback: HookCallback,
    command: Option<String>,
}

impl HookEntry {
    /// Whether this entry applies when `active` is the executing command
    fn applies_to(&self, active: Option<&str>) -> bool {
        match &self.command {
            None => true,
            Some(scope) => active == Some(scope.as_str()),
        }
    }

    /// Invoke the callback
    pub fn call(&self, args: &HookArgs<'_>) -> Result<()> {
        (self.callback)(args)
    }

    /// The command this entry is scoped to, if any
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

/// Per-event ordered lists of scoped hook entries
#[derive(Default)]
pub struct HookRegistry {
    before_all: Vec<HookEntry>,
    after_all: Vec<HookEntry>,
    before_command: Vec<HookEntry>,
    after_command: Vec<HookEntry>,
    on_error: Vec<HookEntry>,
}

impl HookRegistry {
    /// Append an entry to the list for `event`
    pub fn register(&mut self, event: HookEvent, callback: HookCallback, command: Option<String>) {
        self.entries_mut(event).push(HookEntry { callback, command });
    }

    /// Entries registered for `event`, in registration order
    #[must_use]
    pub fn entries(&self, event: HookEvent) -> &[HookEntry] {
        match event {
            HookEvent::BeforeAll => &self.before_all,
            HookEvent::AfterAll => &self.after_all,
            HookEvent::BeforeCommand => &self.before_command,
            HookEvent::AfterCommand => &self.after_command,
            HookEvent::OnError => &self.on_error,
        }
    }

    fn entries_mut(&mut self, event: HookEvent) -> &mut Vec<HookEntry> {
        match event {
            HookEvent::BeforeAll => &mut self.before_all,
            HookEvent::AfterAll => &mut self.after_all,
            HookEvent::BeforeCommand => &mut self.before_command,
            HookEvent::AfterCommand => &mut self.after_command,
            HookEvent::OnError => &mut self.on_error,
        }
    }

    /// Entries for `event` whose scope is unset or matches `active`
    pub fn matching(
        &self,
        event: HookEvent,
        active: Option<&str>,
    ) -> impl Iterator<Item = &HookEntry> {
        self.entries(event)
            .iter()
            .filter(move |entry| entry.applies_to(active))
    }

    /// Total number of registered entries across all events
    #[must_use]
    pub fn total(&self) -> usize {
        self.before_all.len()
            + self.after_all.len()
            + self.before_command.len()
            + self.after_command.len()
            + self.on_error.len()
    }

    /// Whether no hooks are registered at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("beforeAll", &self.before_all.len())
            .field("afterAll", &self.after_all.len())
            .field("beforeCommand", &self.before_command.len())
            .field("afterCommand", &self.after_command.len())
            .field("onError", &self.on_error.len())
            .finish()
    }
}
