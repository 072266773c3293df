pub mod authenticated_user;
pub mod access_rule;
