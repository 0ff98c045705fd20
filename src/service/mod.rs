pub mod password;
pub mod roster;
pub mod validator;

pub use roster::RosterService;
