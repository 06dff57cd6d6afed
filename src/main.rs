use std::time::Instant;
use crate::parameters::AllocationInput;

mod allocator;
mod driver;
mod models;
mod parameters;
mod ranker;

const NUM_CANDIDATES: usize = 96;
const NUM_FACULTY: usize = 8;

fn main() {
    let datafile = "data.bin";

    let input = load_input(datafile);

    driver::run_allocation(input);
}

fn load_input(datafile: &str) -> AllocationInput {
    let start = Instant::now();
    match AllocationInput::open(datafile) {
        Ok(input) => {
            println!("Loaded cohort from {} in {:.2?}.", datafile, start.elapsed());
            input
        }
        Err(_) => {
            let input = driver::generate_allocation_input(NUM_CANDIDATES, NUM_FACULTY);
            if let Err(e) = input.save(datafile) {
                eprintln!("Could not save cohort to {}: {}", datafile, e);
            }
            input
        }
    }
}
