//! Greedy, history-aware team assignment.
//!
//! The engine shuffles the roster, then repeatedly takes the person at the
//! front of the queue and pairs them with the first remaining person they
//! have never met. People without a fresh partner are deferred to the back
//! of the queue. The history counts as saturated, and is cleared before
//! pairing starts over, when the first person of a fresh queue has met
//! everyone, or when a whole pass over the remaining queue produces no pair.

use crate::core::shuffle::Shuffler;
use crate::domain::model::{MatchHistory, Person, Team};
use std::collections::VecDeque;

/// `true` if `a` and `b` have been teamed together before, in either order.
pub fn has_been_matched(history: &MatchHistory, a: &str, b: &str) -> bool {
    history.contains(a, b)
}

/// Position of the first person in `available` that `person` has not been
/// matched with yet. First fit, no ranking.
pub fn find_best_match<'a, I>(person: &str, available: I, history: &MatchHistory) -> Option<usize>
where
    I: IntoIterator<Item = &'a Person>,
{
    available
        .into_iter()
        .position(|candidate| !has_been_matched(history, person, candidate))
}

pub struct PairingEngine<S: Shuffler> {
    shuffler: S,
}

impl<S: Shuffler> PairingEngine<S> {
    pub fn new(shuffler: S) -> Self {
        Self { shuffler }
    }

    /// Splits `roster` into teams of two (one team of three for odd sizes)
    /// and records every pair of every team in `history`.
    ///
    /// If the roster cannot be paired without repeating a pair, `history`
    /// is cleared first, so on return it may no longer contain the pairs it
    /// was called with.
    pub fn assign(&mut self, roster: &[Person], history: &mut MatchHistory) -> Vec<Team> {
        // A cleared history always pairs the first two people in the queue,
        // so this restarts at most once.
        let teams = loop {
            match self.try_assign(roster, history) {
                Some(teams) => break teams,
                None => {
                    tracing::warn!(
                        "All possible pairs have been matched ({} known). Resetting history and starting over.",
                        history.len()
                    );
                    history.clear();
                }
            }
        };

        for team in &teams {
            for pair in team.pairs() {
                history.insert(pair);
            }
        }

        teams
    }

    /// One pairing attempt; `None` when the queue stalls.
    fn try_assign(&mut self, roster: &[Person], history: &MatchHistory) -> Option<Vec<Team>> {
        let mut shuffled = roster.to_vec();
        self.shuffler.shuffle(&mut shuffled);

        let mut unmatched: VecDeque<Person> = shuffled.into();
        let mut teams = Vec::with_capacity(roster.len() / 2);
        let mut deferrals = 0;

        while unmatched.len() > 1 {
            let Some(first) = unmatched.pop_front() else {
                break;
            };

            match find_best_match(&first, &unmatched, history).and_then(|idx| unmatched.remove(idx)) {
                Some(second) => {
                    tracing::debug!("Paired {} with {}", first, second);
                    teams.push(Team::pair(first, second));
                    deferrals = 0;
                }
                None => {
                    unmatched.push_back(first);
                    deferrals += 1;
                    // Nobody left in the queue accepts anybody else
                    if deferrals >= unmatched.len() {
                        return None;
                    }
                }
            }

            // The head of the shuffled roster has met everyone
            if unmatched.len() == roster.len() {
                return None;
            }
        }

        if let Some(leftover) = unmatched.pop_front() {
            if teams.is_empty() {
                tracing::warn!("Only {} on the roster, no team can be formed", leftover);
            } else {
                let idx = self.shuffler.choose_index(teams.len());
                tracing::debug!("Adding {} to team {}", leftover, idx + 1);
                teams[idx].absorb(leftover);
            }
        }

        Some(teams)
    }
}
