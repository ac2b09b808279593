pub mod game;
pub mod moves;
pub mod player;
pub mod round;
