pub mod instance;

pub use instance::{BodyBuffer, BodyInstance};
