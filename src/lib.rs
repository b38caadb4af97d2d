//! # Tilechess
//! A chess board representation and pseudo-legal move generator for
//! rectangular boards of any size.
//!
//! It is usable as both a library to embed into your own projects and a standalone
//! binary to inspect boards and their moves.

pub mod game;
