pub mod ids;
pub mod phone;
pub mod telemetry;
pub mod types;

pub use ids::*;
pub use phone::*;
pub use telemetry::*;
pub use types::*;
