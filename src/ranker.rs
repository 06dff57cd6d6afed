use crate::allocator::AllocError;
use crate::models::{Preferring, Prioritized};

/// Orders candidates by priority key descending, in place. The sort is
/// stable: candidates with equal keys keep their input order. A non-finite
/// key (the in-memory form of a missing or non-numeric CGPA) aborts the run.
pub fn rank_by_priority<C>(candidates: &mut [C]) -> Result<(), AllocError>
where
    C: Prioritized + Preferring,
{
    for candidate in candidates.iter() {
        if !candidate.priority().is_finite() {
            return Err(AllocError::InvalidInput(candidate.id().to_string()));
        }
    }
    candidates.sort_by(|a, b| b.priority().total_cmp(&a.priority()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Candidate;

    fn candidate(roll: &str, cgpa: f32) -> Candidate {
        Candidate {
            roll: roll.to_string(),
            name: String::new(),
            email: String::new(),
            cgpa,
            preferences: Vec::new(),
        }
    }

    #[test]
    fn test_orders_descending() {
        let mut candidates = vec![
            candidate("a", 7.1),
            candidate("b", 9.4),
            candidate("c", 8.2),
        ];
        rank_by_priority(&mut candidates).unwrap();
        let rolls: Vec<&str> = candidates.iter().map(|c| c.roll.as_str()).collect();
        assert_eq!(rolls, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut candidates = vec![
            candidate("first", 8.0),
            candidate("top", 9.0),
            candidate("second", 8.0),
            candidate("third", 8.0),
        ];
        rank_by_priority(&mut candidates).unwrap();
        let rolls: Vec<&str> = candidates.iter().map(|c| c.roll.as_str()).collect();
        assert_eq!(rolls, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_non_finite_key_aborts() {
        let mut candidates = vec![candidate("ok", 8.0), candidate("bad", f32::NAN)];
        let err = rank_by_priority(&mut candidates).unwrap_err();
        assert_eq!(err, AllocError::InvalidInput("bad".to_string()));
    }

    #[test]
    fn test_elements_are_preserved() {
        let mut candidates = vec![candidate("a", 6.5), candidate("b", 9.9)];
        rank_by_priority(&mut candidates).unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().any(|c| c.roll == "a"));
        assert!(candidates.iter().any(|c| c.roll == "b"));
    }
}
