pub mod observation;
pub mod station;
pub mod types;

pub use observation::*;
pub use station::*;
pub use types::*;
