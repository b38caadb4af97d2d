//! # Chess API
//! This module contains everything Chess related, like the board, its tiles and
//! move generation.

pub mod action;
pub mod board;
pub mod colour;
mod movegen;
pub mod piece;
pub mod player;
pub mod scan;
pub mod square;
pub mod tile;
