#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from placegen for tests
pub use placegen::{Color, Generator, GeneratorConfig, Outcome};
