// UI module: the eframe host application around the replay engine

pub mod replay;

pub use replay::{RepaintScheduler, ReplayApp};
