mod generator;

use std::sync::atomic::{AtomicU32, Ordering};
use serde::{Deserialize, Serialize};

static ROLL_COUNTER: AtomicU32 = AtomicU32::new(0);

pub trait Prioritized {
    fn priority(&self) -> f32;
}

pub trait Preferring {
    fn id(&self) -> &str;
    fn preferences(&self) -> &[(String, u32)];
}

/// A student record as delivered by the ingestion layer: identifier,
/// passthrough display fields, CGPA, and a declaration-ordered list of
/// (faculty name, rank) preferences where rank 1 is most preferred.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Candidate {
    pub roll: String,
    pub name: String,
    pub email: String,
    pub cgpa: f32,
    pub preferences: Vec<(String, u32)>,
}

impl Candidate {
    pub fn sample_candidate() -> Candidate {
        let n = ROLL_COUNTER.fetch_add(1, Ordering::SeqCst);
        let name = generator::random_name();
        let email = format!("{}@campus.edu", name.to_lowercase());
        Candidate {
            roll: format!("{}CS{:04}", generator::random_batch(), n),
            name,
            email,
            cgpa: generator::random_cgpa(),
            preferences: Vec::new(),
        }
    }

    pub fn sample_preferences(&mut self, pool: &[String]) {
        self.preferences = generator::random_preferences(pool);
    }
}

impl Prioritized for Candidate {
    fn priority(&self) -> f32 {
        self.cgpa
    }
}

impl Preferring for Candidate {
    fn id(&self) -> &str {
        &self.roll
    }

    fn preferences(&self) -> &[(String, u32)] {
        &self.preferences
    }
}

pub fn sample_faculty_pool(num_faculty: usize) -> Vec<String> {
    let mut pool: Vec<String> = Vec::with_capacity(num_faculty);
    while pool.len() < num_faculty {
        let name = format!("Dr. {}", generator::random_name());
        if !pool.contains(&name) {
            pool.push(name);
        }
    }
    pool
}
