mod announcement;
mod hero;
mod id;
mod navigation;
mod position;

pub use announcement::*;
pub use hero::*;
pub use navigation::*;
pub use position::*;
