pub mod resolver;

pub use resolver::{is_executable_file, Resolution, Resolver, SearchPath};
