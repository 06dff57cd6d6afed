use rand::seq::SliceRandom;
use rand::Rng;

fn random_string(n: usize) -> String {
    let chars: Vec<char> = (0..n)
        .map(|_| rand::rng().random_range(97..123) as u8 as char)
        .collect();
    chars.iter().collect()
}

pub fn random_name() -> String {
    let first = random_string(1).to_uppercase();
    let rest = random_string(6);
    format!("{}{}", first, rest)
}

pub fn random_batch() -> u32 {
    rand::rng().random_range(2019..=2023)
}

pub fn random_cgpa() -> f32 {
    rand::rng().random_range(6.0f32..10.0f32)
}

/// Ranks a random subset of the faculty pool 1..=k in random order.
/// An empty list means the candidate expressed no preferences.
pub fn random_preferences(pool: &[String]) -> Vec<(String, u32)> {
    let mut rng = rand::rng();
    let k = rng.random_range(0..=pool.len());
    let mut shuffled: Vec<&String> = pool.iter().collect();
    shuffled.shuffle(&mut rng);
    shuffled
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(i, faculty)| (faculty.clone(), i as u32 + 1))
        .collect()
}
