extern crate serde;
extern crate serde_json;

#[macro_use]
extern crate serde_derive;

extern crate rand;
extern crate rayon;

extern crate arrayvec;

pub mod config;
pub mod engine;
pub mod input;
pub mod session;
pub mod simulation;
pub mod sync;
