pub mod message;

pub use message::{GroundingSource, Message, Sender};
