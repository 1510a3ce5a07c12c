pub mod generate;
pub mod progress;
pub mod vocab;

pub use generate::{GenerateConfig, GenerateStats, generate, write_lines};
pub use vocab::Vocabulary;
