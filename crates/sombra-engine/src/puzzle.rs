//! Puzzle evaluation: Unsolved until the required item is held, then Solved
//! for the rest of the session.

use sombra_world::{ItemId, Puzzle};
use tracing::info;

use crate::state::GameState;

/// What a single puzzle step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleOutcome<'w> {
    /// The puzzle was solved earlier; nothing to show.
    AlreadySolved,
    /// Precondition not met; show the hint.
    Hint(&'w str),
    /// Solved by this step.
    Solved {
        /// Success text.
        success: &'w str,
        /// Item added to the inventory, if the puzzle grants one.
        reward: Option<&'w ItemId>,
    },
}

/// Decide what a step would do, without changing anything.
pub fn evaluate<'w>(puzzle: &'w Puzzle, state: &GameState) -> PuzzleOutcome<'w> {
    if state.solved.is_solved(puzzle.id.as_str()) {
        return PuzzleOutcome::AlreadySolved;
    }
    match &puzzle.required_item {
        Some(item) if state.inventory.contains(item.as_str()) => PuzzleOutcome::Solved {
            success: &puzzle.success,
            reward: puzzle.reward.as_ref(),
        },
        _ => PuzzleOutcome::Hint(&puzzle.hint),
    }
}

/// Evaluate the puzzle and apply the Unsolved to Solved transition.
///
/// The reward is granted only when the solved-set insertion is new, so it can
/// never be added twice no matter how often the puzzle is triggered.
pub fn step<'w>(puzzle: &'w Puzzle, state: &mut GameState) -> PuzzleOutcome<'w> {
    let outcome = evaluate(puzzle, state);
    if let PuzzleOutcome::Solved { reward, .. } = outcome {
        if state.solved.mark_solved(puzzle.id.clone()) {
            if let Some(item) = reward {
                state.inventory.add(item.clone());
            }
            info!(
                puzzle = %puzzle.id,
                room = %puzzle.room,
                reward = ?reward.map(ItemId::as_str),
                "puzzle solved"
            );
        } else {
            return PuzzleOutcome::AlreadySolved;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use sombra_world::{PuzzleId, RoomId};

    fn cofre() -> Puzzle {
        Puzzle {
            id: PuzzleId::from("cofre"),
            required_item: Some(ItemId::from("llave")),
            hint: "Necesitas una llave.".to_string(),
            success: "¡El cofre se abre!".to_string(),
            reward: Some(ItemId::from("daga")),
            room: RoomId::from("entrance"),
        }
    }

    #[test]
    fn hint_without_item() {
        let puzzle = cofre();
        let mut state = GameState::new();
        assert_eq!(step(&puzzle, &mut state), PuzzleOutcome::Hint("Necesitas una llave."));
        assert!(state.solved.is_empty());
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn solve_grants_reward_once() {
        let puzzle = cofre();
        let mut state = GameState::with_inventory([ItemId::from("llave")]);

        let outcome = step(&puzzle, &mut state);
        assert!(matches!(outcome, PuzzleOutcome::Solved { reward: Some(item), .. } if item == "daga"));
        assert!(state.solved.is_solved("cofre"));
        assert_eq!(state.inventory.count("daga"), 1);

        assert_eq!(step(&puzzle, &mut state), PuzzleOutcome::AlreadySolved);
        assert_eq!(step(&puzzle, &mut state), PuzzleOutcome::AlreadySolved);
        assert_eq!(state.inventory.count("daga"), 1);
    }

    #[test]
    fn no_required_item_never_solves() {
        let mut puzzle = cofre();
        puzzle.required_item = None;
        let mut state = GameState::with_inventory([ItemId::from("llave")]);
        for _ in 0..3 {
            assert_eq!(step(&puzzle, &mut state), PuzzleOutcome::Hint("Necesitas una llave."));
        }
        assert!(!state.solved.is_solved("cofre"));
    }

    #[test]
    fn solved_elsewhere_skips_reward() {
        let puzzle = cofre();
        let mut state = GameState::with_inventory([ItemId::from("llave")]);
        state.solved.mark_solved("cofre");
        assert_eq!(step(&puzzle, &mut state), PuzzleOutcome::AlreadySolved);
        assert!(!state.inventory.contains("daga"));
    }

    #[test]
    fn evaluate_is_read_only() {
        let puzzle = cofre();
        let state = GameState::with_inventory([ItemId::from("llave")]);
        let before = state.clone();
        assert!(matches!(evaluate(&puzzle, &state), PuzzleOutcome::Solved { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn solve_without_reward() {
        let mut puzzle = cofre();
        puzzle.reward = None;
        let mut state = GameState::with_inventory([ItemId::from("llave")]);
        let outcome = step(&puzzle, &mut state);
        assert_eq!(
            outcome,
            PuzzleOutcome::Solved {
                success: "¡El cofre se abre!",
                reward: None
            }
        );
        assert_eq!(state.inventory.len(), 1);
    }
}
