mod lines;
mod moves;
mod piece;
mod position;
mod rules;


pub use lines::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use rules::*;
