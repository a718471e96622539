//! Generic algorithm toolkit shared by the daily solvers.
//!
//! Three independent modules:
//! - [`graph`] searches implicit graphs described only by a neighbor
//!   closure (breadth-first distances, Dijkstra, elementary cycles)
//! - [`grid`] does coordinate algebra and whole-grid transforms over
//!   [`ndarray::Array2`]
//! - [`math`] holds the integer utilities (gcd/lcm, primality, Manhattan
//!   distance, interval merging)
//!
//! Everything is a pure function over caller-supplied values: no I/O, no
//! logging, no state kept between calls. Every operation allocates its own
//! working structures, so concurrent calls on independent inputs need no
//! coordination.

pub mod graph;
pub mod grid;
pub mod math;
