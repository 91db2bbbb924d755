pub mod configuration;
pub mod field;
pub mod perspective;
pub mod region;
pub mod scale;

pub use configuration::*;
pub use field::*;
pub use perspective::*;
pub use region::*;
pub use scale::*;
