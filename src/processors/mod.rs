// manna-artia/src/processors/mod.rs
pub mod advisor;
pub mod corrector;
mod loader;
pub mod resizer;
mod saver;
pub mod stylist;

pub use advisor::{Advisor, LumaStats};
pub use corrector::Corrector;
pub use loader::Loader;
pub use resizer::Resizer;
pub use saver::Saver;
pub use stylist::Stylist;
