use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::models::{Preferring, Prioritized};
use crate::ranker;

#[derive(Debug, Error, PartialEq)]
pub enum AllocError {
    #[error("invalid priority key for candidate {0}")]
    InvalidInput(String),
    #[error("duplicate identifier {0}")]
    DuplicateIdentifier(String),
    #[error("no faculty named in any preference list")]
    NoResources,
}

/// One candidate bound to one faculty. `rank_honored` is the declared rank
/// that was satisfied, or None when the candidate was placed by fallback.
#[derive(Debug)]
pub struct Assignment<'a, C> {
    pub candidate: &'a C,
    pub faculty: String,
    pub rank_honored: Option<u32>,
}

/// Which faculty are still unclaimed within a single round. Built fresh at
/// every round boundary and discarded when the round ends; nothing carries
/// over between rounds.
pub struct RoundState {
    free: Vec<bool>,
}

impl RoundState {
    fn new(num_faculty: usize) -> RoundState {
        RoundState {
            free: vec![true; num_faculty],
        }
    }

    fn is_free(&self, index: usize) -> bool {
        self.free[index]
    }

    fn take(&mut self, index: usize) {
        assert!(self.free[index], "faculty {} claimed twice in one round", index);
        self.free[index] = false;
    }

    fn first_free(&self) -> Option<usize> {
        self.free.iter().position(|free| *free)
    }

    pub fn remaining(&self) -> usize {
        self.free.iter().filter(|free| **free).count()
    }
}

pub struct Allocator<'a, C> {
    /// Faculty in the order they first appear across all preference lists.
    /// This order is what fallback assignment and round bookkeeping index by.
    pub faculty: Vec<String>,
    pub assignments: Vec<Assignment<'a, C>>,
    pub preference_counts: BTreeMap<(String, u32), u32>,
    pub warnings: Vec<String>,
}

impl<'a, C> Allocator<'a, C>
where
    C: Prioritized + Preferring,
{
    pub fn new() -> Allocator<'a, C> {
        Allocator {
            faculty: Vec::new(),
            assignments: Vec::new(),
            preference_counts: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.faculty.clear();
        self.assignments.clear();
        self.preference_counts.clear();
        self.warnings.clear();
    }

    /// Ranks the candidates by CGPA descending, partitions them into rounds
    /// of one slot per faculty, and assigns everyone. Structural problems
    /// (bad CGPA, duplicate roll, empty faculty set) abort with no output;
    /// malformed single preference entries are dropped and reported through
    /// `warnings`.
    pub fn run_allocation(&mut self, candidates: &'a mut [C]) -> Result<(), AllocError> {
        self.clear();

        ranker::rank_by_priority(&mut *candidates)?;
        let candidates: &'a [C] = candidates;

        self.survey(candidates)?;

        let num_faculty = self.faculty.len();
        for round in candidates.chunks(num_faculty) {
            let state = self.assign_round(round, RoundState::new(num_faculty));
            assert_eq!(state.remaining(), num_faculty - round.len());
        }

        self.preference_counts = tally_preferences(candidates);
        Ok(())
    }

    /// Rejects duplicate identifiers and derives the faculty set as the
    /// union of all valid preference entries, in first-appearance order.
    fn survey(&mut self, candidates: &[C]) -> Result<(), AllocError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for candidate in candidates {
            if !seen.insert(candidate.id()) {
                return Err(AllocError::DuplicateIdentifier(candidate.id().to_string()));
            }
        }

        for candidate in candidates {
            for (faculty, rank) in candidate.preferences() {
                if *rank == 0 {
                    self.warnings.push(format!(
                        "{}: dropped preference for {} (rank must be a positive integer)",
                        candidate.id(),
                        faculty
                    ));
                    continue;
                }
                if !self.faculty.iter().any(|f| f == faculty) {
                    self.faculty.push(faculty.clone());
                }
            }
        }

        if self.faculty.is_empty() {
            return Err(AllocError::NoResources);
        }
        Ok(())
    }

    fn assign_round(&mut self, round: &'a [C], mut state: RoundState) -> RoundState {
        for candidate in round {
            let (index, rank_honored) = self.place(candidate, &state);
            state.take(index);
            self.assignments.push(Assignment {
                candidate,
                faculty: self.faculty[index].clone(),
                rank_honored,
            });
        }
        state
    }

    /// Picks the still-free faculty with the lowest declared rank; equal
    /// ranks break by declaration order, first declared wins. With no free
    /// preferred faculty the candidate falls back to the first free one in
    /// the fixed faculty order.
    fn place(&self, candidate: &C, state: &RoundState) -> (usize, Option<u32>) {
        let mut best: Option<(u32, usize)> = None;
        for (faculty, rank) in candidate.preferences() {
            if *rank == 0 {
                continue;
            }
            let index = match self.faculty.iter().position(|f| f == faculty) {
                Some(index) => index,
                // names an unknown faculty, treated as absent
                None => continue,
            };
            if !state.is_free(index) {
                continue;
            }
            match best {
                Some((best_rank, _)) if *rank >= best_rank => {}
                _ => best = Some((*rank, index)),
            }
        }
        match best {
            Some((rank, index)) => (index, Some(rank)),
            None => {
                let index = state
                    .first_free()
                    .expect("round larger than the faculty set");
                (index, None)
            }
        }
    }

    pub fn preferred_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.rank_honored.is_some())
            .count()
    }

    pub fn first_choice_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.rank_honored == Some(1))
            .count()
    }

    pub fn fallback_count(&self) -> usize {
        self.assignments.len() - self.preferred_count()
    }

    pub fn num_rounds(&self) -> usize {
        if self.faculty.is_empty() {
            return 0;
        }
        (self.assignments.len() + self.faculty.len() - 1) / self.faculty.len()
    }
}

/// Tallies (faculty, declared rank) over the raw preference lists, skipping
/// the same non-positive ranks allocation skips. Independent of the
/// allocation outcome: the same input always produces the same counts.
pub fn tally_preferences<C>(candidates: &[C]) -> BTreeMap<(String, u32), u32>
where
    C: Preferring,
{
    let mut counts = BTreeMap::new();
    for candidate in candidates {
        for (faculty, rank) in candidate.preferences() {
            if *rank == 0 {
                continue;
            }
            *counts.entry((faculty.clone(), *rank)).or_insert(0) += 1;
        }
    }
    counts
}
