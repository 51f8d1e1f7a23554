mod user;

pub use user::{InsertOutcome, User, Username};
