pub mod brief;
pub mod error_codes;
pub mod keywords;
pub mod lexicon;
pub mod plan;
pub mod profiles;
pub mod scene;
pub mod segment;

pub use brief::{load_brief, Brief};
pub use plan::{generate, Plan};
pub use scene::Scene;
