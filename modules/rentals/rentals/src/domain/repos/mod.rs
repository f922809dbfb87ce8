mod profiles_repo;
mod properties_repo;
mod reviews_repo;

pub use profiles_repo::ProfilesRepository;
pub use properties_repo::PropertiesRepository;
pub use reviews_repo::{ReviewJoinRow, ReviewsRepository};
