//! Uniform random agent.

use super::{Agent, AgentDecision};
use crate::core::{Action, GameRng, GameState};

/// Picks uniformly among the legal actions.
///
/// Each agent draws from its own stream, derived from the seed and its
/// name, so two agents with the same seed still play differently and a
/// run is reproducible from the seed alone.
///
/// ```
/// use tcg_sim::agents::{Agent, AgentDecision, SimpleAi};
/// use tcg_sim::core::{Action, GameState, PlayerId};
///
/// let state = GameState::new(&["Alice", "Bob"], 10, 0).unwrap();
/// let actions = [Action::end_turn(PlayerId::new(0))];
/// let mut ai = SimpleAi::new("Alice", 7);
/// assert_eq!(ai.choose_action(&state, &actions), AgentDecision::Chose(actions[0]));
/// ```
#[derive(Clone, Debug)]
pub struct SimpleAi {
    name: String,
    rng: GameRng,
}

impl SimpleAi {
    /// Create an agent.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        let name = name.into();
        let rng = GameRng::new(seed).for_context(&format!("agent:{name}"));
        Self { name, rng }
    }
}

impl Agent for SimpleAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, _state: &GameState, actions: &[Action]) -> AgentDecision {
        match self.rng.choose(actions) {
            Some(action) => AgentDecision::Chose(*action),
            None => AgentDecision::Abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InstanceId, PlayerId};

    fn actions() -> Vec<Action> {
        let p = PlayerId::new(0);
        (1..=6)
            .map(|i| Action::play_card(p, InstanceId(i)))
            .chain(std::iter::once(Action::end_turn(p)))
            .collect()
    }

    #[test]
    fn test_always_picks_offered_action() {
        let state = GameState::new(&["A", "B"], 10, 0).unwrap();
        let actions = actions();
        let mut ai = SimpleAi::new("A", 1);
        for _ in 0..50 {
            match ai.choose_action(&state, &actions) {
                AgentDecision::Chose(a) => assert!(actions.contains(&a)),
                AgentDecision::Abort => panic!("aborted with actions available"),
            }
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let state = GameState::new(&["A", "B"], 10, 0).unwrap();
        let actions = actions();
        let mut a = SimpleAi::new("A", 5);
        let mut b = SimpleAi::new("A", 5);
        for _ in 0..20 {
            assert_eq!(a.choose_action(&state, &actions), b.choose_action(&state, &actions));
        }
    }

    #[test]
    fn test_empty_actions_abort() {
        let state = GameState::new(&["A", "B"], 10, 0).unwrap();
        let mut ai = SimpleAi::new("A", 5);
        assert_eq!(ai.choose_action(&state, &[]), AgentDecision::Abort);
    }
}
