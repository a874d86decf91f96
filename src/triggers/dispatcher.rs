//! Routes engine events to card scripts.
//!
//! The dispatcher knows nothing about rules. For each event it checks the
//! card for the event's keyword marker and, if present, runs the matching
//! script function. Script failures are logged and swallowed so that the
//! enclosing action always completes.

use tracing::{debug, trace, warn};

use super::event::EngineEvent;
use super::executor::{EffectExecutor, NoopExecutor, ScriptError, ScriptRef};
use crate::cards::Card;
use crate::effects::EffectContext;

/// What happened when an event was posted for a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The card does not carry the event's marker.
    Skipped,
    /// The script ran to completion.
    Ran,
    /// The card has no script. Expected for most cards.
    MissingScript,
    /// The script failed; the error was logged.
    Failed(ScriptError),
}

/// Synchronous event router backed by an injected executor.
pub struct TriggerDispatcher {
    executor: Box<dyn EffectExecutor>,
}

impl TriggerDispatcher {
    /// Create a dispatcher around an executor.
    pub fn new(executor: impl EffectExecutor + 'static) -> Self {
        Self {
            executor: Box::new(executor),
        }
    }

    /// A dispatcher for which every script is missing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(NoopExecutor)
    }

    /// Post an event for `card`.
    ///
    /// `card` is a snapshot taken right after the mutation that caused the
    /// event; for a destroyed card it is already in the graveyard.
    pub fn post_event(
        &self,
        event: EngineEvent,
        card: &Card,
        ctx: &mut EffectContext<'_>,
    ) -> DispatchOutcome {
        if !card.has_keyword(event.marker()) {
            return DispatchOutcome::Skipped;
        }

        let script = ScriptRef::for_card(&card.card_id);
        let function = event.script_function();
        debug!(%event, card = %card.name, %script, function, "trigger");

        match self.executor.run(&script, function, card, ctx) {
            Ok(()) => DispatchOutcome::Ran,
            Err(ScriptError::Missing(_)) => {
                trace!(%script, "no script, skipped");
                DispatchOutcome::MissingScript
            }
            Err(err) => {
                warn!(%event, card = %card.name, error = %err, "script failed");
                DispatchOutcome::Failed(err)
            }
        }
    }
}

impl Default for TriggerDispatcher {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for TriggerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerDispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardTemplate, Keyword};
    use crate::core::{GameState, InstanceId, PlayerId, RulesConfig};
    use crate::effects::Effect;
    use crate::triggers::ScriptLibrary;

    fn state() -> (GameState, RulesConfig) {
        let config = RulesConfig::ruleset_one();
        let state = GameState::new(&["A", "B"], config.starting_life, 0).unwrap();
        (state, config)
    }

    fn fanfare_card() -> Card {
        let template = CardTemplate::creature("PINGER", "Pinger", 1, 1, 1)
            .with_effect_text("Fanfare: Deal 1 damage to the enemy leader.");
        let mut card = Card::from_template(&template, InstanceId(1));
        card.set_owner(Some(PlayerId::new(0)));
        card
    }

    fn pinger_library() -> ScriptLibrary {
        ScriptLibrary::new().with_script("PINGER", "on_fanfare", |card, ctx| {
            for opponent in ctx.opponents_of(card) {
                ctx.apply(&Effect::damage(opponent, 1))?;
            }
            Ok(())
        })
    }

    #[test]
    fn test_skips_without_marker() {
        let (mut state, config) = state();
        let dispatcher = TriggerDispatcher::new(pinger_library());
        let vanilla = Card::from_template(
            &CardTemplate::creature("PINGER", "Pinger", 1, 1, 1),
            InstanceId(1),
        );

        let mut ctx = EffectContext::new(&mut state, &config);
        let outcome = dispatcher.post_event(EngineEvent::Play, &vanilla, &mut ctx);

        assert_eq!(outcome, DispatchOutcome::Skipped);
        assert_eq!(state.player(PlayerId::new(1)).life, 10);
    }

    #[test]
    fn test_runs_marked_script() {
        let (mut state, config) = state();
        let dispatcher = TriggerDispatcher::new(pinger_library());

        let mut ctx = EffectContext::new(&mut state, &config);
        let outcome = dispatcher.post_event(EngineEvent::Play, &fanfare_card(), &mut ctx);

        assert_eq!(outcome, DispatchOutcome::Ran);
        assert_eq!(state.player(PlayerId::new(1)).life, 9);
    }

    #[test]
    fn test_wrong_event_skipped() {
        let (mut state, config) = state();
        let dispatcher = TriggerDispatcher::new(pinger_library());

        let mut ctx = EffectContext::new(&mut state, &config);
        let outcome = dispatcher.post_event(EngineEvent::Destroy, &fanfare_card(), &mut ctx);

        assert_eq!(outcome, DispatchOutcome::Skipped);
    }

    #[test]
    fn test_missing_script_is_silent() {
        let (mut state, config) = state();
        let dispatcher = TriggerDispatcher::noop();

        let mut ctx = EffectContext::new(&mut state, &config);
        let outcome = dispatcher.post_event(EngineEvent::Play, &fanfare_card(), &mut ctx);

        assert_eq!(outcome, DispatchOutcome::MissingScript);
    }

    #[test]
    fn test_failure_is_contained() {
        let (mut state, config) = state();
        let library = ScriptLibrary::new().with_script("BROKEN", "on_last_words", |_, _| {
            Err(ScriptError::Failed {
                script: ScriptRef::for_card(&"BROKEN".into()),
                function: "on_last_words".to_string(),
                message: "attempt to index a nil value".to_string(),
            })
        });
        let dispatcher = TriggerDispatcher::new(library);
        let template = CardTemplate::creature("BROKEN", "Broken", 1, 1, 1)
            .with_keyword(Keyword::LastWords);
        let card = Card::from_template(&template, InstanceId(2));

        let mut ctx = EffectContext::new(&mut state, &config);
        let outcome = dispatcher.post_event(EngineEvent::Destroy, &card, &mut ctx);

        assert!(matches!(outcome, DispatchOutcome::Failed(ScriptError::Failed { .. })));
    }
}
