mod matchlist;
mod person;
mod team;

pub use matchlist::*;
pub use person::*;
pub use team::*;
