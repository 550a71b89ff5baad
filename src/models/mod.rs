pub mod age_group;
pub mod mascot;
pub mod record;

pub use age_group::AgeGroup;
pub use mascot::MascotState;
pub use record::DailyRecord;
