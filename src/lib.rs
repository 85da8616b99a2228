//! # Room Thermal Simulation Service
//!
//! Estimates the thermal behavior of a single room over a configurable
//! horizon: indoor temperature trajectory, heating energy consumed, and a
//! breakdown of heat loss/gain by mechanism (fabric conduction,
//! infiltration, solar gain through glazing).
//!
//! The [`simulation`] module is the algorithmic core — a pure function from
//! a room description and run parameters to an immutable result. The [`api`]
//! module exposes it to the browser-based geometry editor; the editor and
//! the reporting layer that consumes results both live outside this crate.

pub mod api;
pub mod config;
pub mod domain;
pub mod simulation;
pub mod telemetry;
