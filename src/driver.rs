use crate::allocator::Allocator;
use crate::models::{self, Candidate};
use crate::parameters::AllocationInput;
use std::io::{stdout, Write};
use crossterm::{cursor, terminal, ExecutableCommand, QueueableCommand};
use std::time::Instant;

pub fn generate_allocation_input(num_candidates: usize, num_faculty: usize) -> AllocationInput {
    let start = Instant::now();

    let faculty_pool = models::sample_faculty_pool(num_faculty);
    let mut candidates: Vec<Candidate> = (0..num_candidates)
        .map(|_| Candidate::sample_candidate())
        .collect();

    println!("Created sample cohort in {:.2?}.", start.elapsed());
    let start = Instant::now();

    animated_process(&mut candidates,
                     |i, len|
                         format!("...Collected preferences from {}/{} candidates ({:.0}%)...",
                                 i, len, i as f64 / len as f64 * 100.0),
                     |c| c.sample_preferences(&faculty_pool));

    println!("Collected preferences in {:.2?}.", start.elapsed());

    AllocationInput {
        num_candidates: candidates.len(),
        num_faculty: faculty_pool.len(),
        candidates,
        faculty_pool,
    }
}

pub fn run_allocation(input: AllocationInput) {
    let AllocationInput {
        mut candidates,
        faculty_pool,
        num_candidates,
        num_faculty,
    } = input;

    println!("Faculty allocation for {} candidates, {} faculty ({}).",
             num_candidates, num_faculty,
             chrono::Local::now().format("%Y-%m-%d %H:%M"));

    let start = Instant::now();

    let mut allocator = Allocator::new();
    match allocator.run_allocation(&mut candidates) {
        Err(ref e) => {
            eprintln!("Error while allocating: {}", e);
            return
        },
        Ok(_) => println!("Finished allocation in {:.2?}.", start.elapsed())
    };

    let assigned = allocator.assignments.len();
    let first_choice = allocator.first_choice_count();
    let preferred = allocator.preferred_count();
    let fallback = allocator.fallback_count();

    println!("Assigned {} candidates to {} faculty over {} rounds.",
             assigned, allocator.faculty.len(), allocator.num_rounds()
    );
    if allocator.faculty.len() < faculty_pool.len() {
        println!("{} of {} faculty received no preferences and were never assigned.",
                 faculty_pool.len() - allocator.faculty.len(), faculty_pool.len()
        );
    }
    println!("First choice: {} ({:.1}%), Any preference: {} ({:.1}%), Fallback: {} ({:.1}%)",
             first_choice, first_choice as f32 / assigned as f32 * 100.0,
             preferred, preferred as f32 / assigned as f32 * 100.0,
             fallback, fallback as f32 / assigned as f32 * 100.0,
    );

    println!();
    println!("{:<12} {:<10} {:<22} {:>5}  {:<20} {}",
             "Roll", "Name", "Email", "CGPA", "Faculty", "Choice");
    allocator.assignments.iter().for_each(|a| {
        let choice = match a.rank_honored {
            Some(rank) => format!("#{}", rank),
            None => "fallback".to_string()
        };
        println!("{:<12} {:<10} {:<22} {:>5.2}  {:<20} {}",
                 a.candidate.roll, a.candidate.name, a.candidate.email,
                 a.candidate.cgpa, a.faculty, choice);
    });

    println!();
    println!("Preference distribution:");
    println!("{:<20} {:>4} {:>6}", "Faculty", "Rank", "Count");
    for ((faculty, rank), count) in &allocator.preference_counts {
        println!("{:<20} {:>4} {:>6}", faculty, rank, count);
    }

    if !allocator.warnings.is_empty() {
        println!();
        println!("{} malformed preference entries were dropped:", allocator.warnings.len());
        for warning in &allocator.warnings {
            println!("  {}", warning);
        }
    }
}

pub fn animated_process<T, S, F>(v: &mut Vec<T>, s: S, mut f: F)
where
    S: Fn(usize, usize) -> String,
    F: FnMut(&mut T)
{
    let len = v.len();
    let mut i = 0usize;
    let mut stdout = stdout();
    for t in v {
        f(t);
        i += 1;
        stdout.queue(cursor::SavePosition).unwrap();
        stdout.write_all(s(i, len).as_ref()).unwrap();
        stdout.queue(cursor::RestorePosition).unwrap();
        stdout.flush().unwrap();
        stdout.queue(cursor::RestorePosition).unwrap();
        stdout.queue(terminal::Clear(terminal::ClearType::FromCursorDown)).unwrap();
    }
    stdout.execute(cursor::Show).unwrap();
}
