//! Core types for the NDLife cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by the rest of the workspace: the [`Coord`] alias, the
//! sparse [`CellSet`], the two-valued [`CellState`], [`GenerationId`], and
//! the nested text [`Pattern`] used to seed a world.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod id;
pub mod pattern;

pub use cell::CellState;
pub use id::{CellSet, Coord, GenerationId};
pub use pattern::{Absorbed, Pattern};
