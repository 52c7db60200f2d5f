pub mod articles;
pub mod profiles;
