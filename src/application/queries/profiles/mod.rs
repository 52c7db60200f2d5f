mod get_by_username;
mod service;

pub use get_by_username::GetProfileQuery;
pub use service::ProfileQueryService;
