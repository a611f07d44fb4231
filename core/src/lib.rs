//! Synthetic snowfall and snow-load surface pressure simulation.
//!
//! `snowfall` produces an AR(1) series from a seeded noise stream,
//! `pressure` turns it into a leaky-accumulator pressure series, and
//! `plot` renders either one as an SVG line chart. `scenario` wires the
//! three together the way the runner uses them.

pub mod config;
pub mod error;
pub mod plot;
pub mod pressure;
pub mod rng;
pub mod scenario;
pub mod series;
pub mod snowfall;
pub mod types;
