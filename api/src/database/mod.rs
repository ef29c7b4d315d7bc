mod choice;
mod question;

pub use choice::*;
pub use question::*;
