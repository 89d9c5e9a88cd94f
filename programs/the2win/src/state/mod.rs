pub mod boxes_bet;
pub mod boxes_round;
pub mod config;
pub mod crash_bet;
pub mod crash_round;
pub mod feed;
pub mod house;
pub mod overrides;
pub mod pattern;
pub mod requests;
pub mod timings;
pub mod wallet;
pub mod wingo_bet;
pub mod wingo_round;

pub use boxes_bet::*;
pub use boxes_round::*;
pub use config::*;
pub use crash_bet::*;
pub use crash_round::*;
pub use feed::*;
pub use overrides::*;
pub use pattern::*;
pub use requests::*;
pub use timings::*;
pub use wallet::*;
pub use wingo_bet::*;
pub use wingo_round::*;
