use serde::{Deserialize, Serialize};
use crate::models::Candidate;

#[derive(Clone, Serialize, Deserialize)]
pub struct AllocationInput {
    pub candidates: Vec<Candidate>,
    pub faculty_pool: Vec<String>,
    pub num_candidates: usize,
    pub num_faculty: usize,
}

impl AllocationInput {
    pub fn save(&self, path: &str) -> bincode::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        bincode::serialize_into(writer, self)
    }

    pub fn open(path: &str) -> bincode::Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        bincode::deserialize_from(reader)
    }
}
