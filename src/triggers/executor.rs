//! Effect executors: the scripted-effect boundary.
//!
//! The dispatcher hands an executor a script reference, a function name,
//! the card and an `EffectContext`. How the script is found and run is the
//! executor's business. Two executors ship with the crate:
//!
//! - `NoopExecutor`: every script is missing
//! - `ScriptLibrary`: Rust closures registered per card and function

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, CardId};
use crate::core::EngineError;
use crate::effects::EffectContext;

/// Location of a card's script, derived from its template id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptRef(String);

impl ScriptRef {
    /// Script for a card template: `scripts/<card_id>.lua`.
    #[must_use]
    pub fn for_card(card_id: &CardId) -> Self {
        Self(format!("scripts/{}.lua", card_id.as_str()))
    }

    /// The script path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScriptRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Script execution failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No script exists for the card. Expected for most cards.
    #[error("no script at {0}")]
    Missing(ScriptRef),
    #[error("{script} has no function {function}")]
    UnknownFunction { script: ScriptRef, function: String },
    #[error("{script} -> {function} failed: {message}")]
    Failed {
        script: ScriptRef,
        function: String,
        message: String,
    },
    #[error("script effect could not be applied: {0}")]
    Engine(#[from] EngineError),
}

/// Runs card scripts.
pub trait EffectExecutor {
    /// Run `function` from `script` for `card`.
    fn run(
        &self,
        script: &ScriptRef,
        function: &str,
        card: &Card,
        ctx: &mut EffectContext<'_>,
    ) -> Result<(), ScriptError>;
}

/// An executor with no scripts at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopExecutor;

impl EffectExecutor for NoopExecutor {
    fn run(
        &self,
        script: &ScriptRef,
        _function: &str,
        _card: &Card,
        _ctx: &mut EffectContext<'_>,
    ) -> Result<(), ScriptError> {
        Err(ScriptError::Missing(script.clone()))
    }
}

type ScriptFn = Box<dyn Fn(&Card, &mut EffectContext<'_>) -> Result<(), ScriptError>>;

/// Card scripts written as Rust closures.
///
/// ## Example
///
/// ```
/// use tcg_sim::effects::Effect;
/// use tcg_sim::triggers::{ScriptLibrary, ScriptRef};
/// use tcg_sim::cards::CardId;
///
/// let library = ScriptLibrary::new().with_script("HEALER", "on_fanfare", |card, ctx| {
///     if let Some(owner) = card.owner() {
///         ctx.apply(&Effect::heal(owner, 2))?;
///     }
///     Ok(())
/// });
///
/// assert!(library.has_script(&ScriptRef::for_card(&CardId::new("HEALER"))));
/// ```
#[derive(Default)]
pub struct ScriptLibrary {
    scripts: FxHashMap<ScriptRef, FxHashMap<String, ScriptFn>>,
}

impl ScriptLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a script function for a card template.
    pub fn register(
        &mut self,
        card_id: impl Into<CardId>,
        function: impl Into<String>,
        script: impl Fn(&Card, &mut EffectContext<'_>) -> Result<(), ScriptError> + 'static,
    ) {
        self.scripts
            .entry(ScriptRef::for_card(&card_id.into()))
            .or_default()
            .insert(function.into(), Box::new(script));
    }

    /// Register a script function (builder pattern).
    #[must_use]
    pub fn with_script(
        mut self,
        card_id: impl Into<CardId>,
        function: impl Into<String>,
        script: impl Fn(&Card, &mut EffectContext<'_>) -> Result<(), ScriptError> + 'static,
    ) -> Self {
        self.register(card_id, function, script);
        self
    }

    /// Is there a script at this location?
    #[must_use]
    pub fn has_script(&self, script: &ScriptRef) -> bool {
        self.scripts.contains_key(script)
    }

    /// Number of scripts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl std::fmt::Debug for ScriptLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptLibrary")
            .field("scripts", &self.scripts.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EffectExecutor for ScriptLibrary {
    fn run(
        &self,
        script: &ScriptRef,
        function: &str,
        card: &Card,
        ctx: &mut EffectContext<'_>,
    ) -> Result<(), ScriptError> {
        let functions = self
            .scripts
            .get(script)
            .ok_or_else(|| ScriptError::Missing(script.clone()))?;
        let run = functions
            .get(function)
            .ok_or_else(|| ScriptError::UnknownFunction {
                script: script.clone(),
                function: function.to_string(),
            })?;
        run(card, ctx)
    }
}
