pub mod device;
pub mod forecast;
pub mod schedule;

pub use device::*;
pub use forecast::*;
pub use schedule::*;
