mod home;
pub use home::Home;

mod analysis;
pub use analysis::Analysis;
