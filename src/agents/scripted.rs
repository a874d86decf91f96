//! Closure-driven agent.

use super::{Agent, AgentDecision};
use crate::core::{Action, ActionType, GameState};

type Policy = Box<dyn FnMut(&GameState, &[Action]) -> AgentDecision>;

/// Agent whose choices come from a closure.
///
/// Useful for tests that need a fixed line of play, and for aborting a run
/// at a chosen point.
pub struct ScriptedAgent {
    name: String,
    policy: Policy,
}

impl ScriptedAgent {
    /// Create an agent from a policy closure.
    pub fn new(
        name: impl Into<String>,
        policy: impl FnMut(&GameState, &[Action]) -> AgentDecision + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            policy: Box::new(policy),
        }
    }

    /// Take the first offered action of the earliest listed type, falling
    /// back to ending the turn.
    ///
    /// ```
    /// use tcg_sim::agents::{Agent, AgentDecision, ScriptedAgent};
    /// use tcg_sim::core::{Action, ActionType, GameState, InstanceId, PlayerId};
    ///
    /// let p = PlayerId::new(0);
    /// let state = GameState::new(&["Alice", "Bob"], 10, 0).unwrap();
    /// let actions = [Action::play_card(p, InstanceId(1)), Action::end_turn(p)];
    ///
    /// let mut agent = ScriptedAgent::prefer("Alice", &[ActionType::Attack, ActionType::PlayCard]);
    /// assert_eq!(agent.choose_action(&state, &actions), AgentDecision::Chose(actions[0]));
    /// ```
    pub fn prefer(name: impl Into<String>, order: &[ActionType]) -> Self {
        let order = order.to_vec();
        Self::new(name, move |_, actions| {
            order
                .iter()
                .find_map(|&kind| actions.iter().find(|a| a.action_type() == kind))
                .or_else(|| actions.iter().find(|a| a.is_end_turn()))
                .or_else(|| actions.first())
                .map_or(AgentDecision::Abort, |&a| AgentDecision::Chose(a))
        })
    }
}

impl Agent for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, state: &GameState, actions: &[Action]) -> AgentDecision {
        (self.policy)(state, actions)
    }
}

impl std::fmt::Debug for ScriptedAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedAgent")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttackTarget, InstanceId, PlayerId};

    #[test]
    fn test_prefer_falls_back_to_end_turn() {
        let p = PlayerId::new(0);
        let state = GameState::new(&["A", "B"], 10, 0).unwrap();
        let actions = [Action::play_card(p, InstanceId(1)), Action::end_turn(p)];

        let mut agent = ScriptedAgent::prefer("A", &[ActionType::Evolve]);
        assert_eq!(
            agent.choose_action(&state, &actions),
            AgentDecision::Chose(Action::end_turn(p))
        );
    }

    #[test]
    fn test_prefer_order() {
        let p = PlayerId::new(0);
        let state = GameState::new(&["A", "B"], 10, 0).unwrap();
        let attack = Action::attack(p, InstanceId(2), AttackTarget::Leader(PlayerId::new(1)));
        let actions = [Action::play_card(p, InstanceId(1)), attack, Action::end_turn(p)];

        let mut agent = ScriptedAgent::prefer("A", &[ActionType::Attack, ActionType::PlayCard]);
        assert_eq!(agent.choose_action(&state, &actions), AgentDecision::Chose(attack));
    }

    #[test]
    fn test_stateful_policy() {
        let state = GameState::new(&["A", "B"], 10, 0).unwrap();
        let actions = [Action::end_turn(PlayerId::new(0))];
        let mut calls = 0;
        let mut agent = ScriptedAgent::new("A", move |_, actions| {
            calls += 1;
            if calls > 2 {
                AgentDecision::Abort
            } else {
                AgentDecision::Chose(actions[0])
            }
        });

        assert!(matches!(agent.choose_action(&state, &actions), AgentDecision::Chose(_)));
        assert!(matches!(agent.choose_action(&state, &actions), AgentDecision::Chose(_)));
        assert_eq!(agent.choose_action(&state, &actions), AgentDecision::Abort);
        assert_eq!(agent.name(), "A");
    }
}
