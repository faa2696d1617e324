mod history;
mod home;
mod not_found;
mod report;

pub use history::History;
pub use home::Home;
pub use not_found::NotFound;
pub use report::Report;
