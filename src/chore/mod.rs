pub mod types;

pub use types::{Chore, Difficulty, Frequency, Priority, Season, Status, TimeOfDay};
