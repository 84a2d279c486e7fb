//! Calendar/time support for dasha timeline arithmetic.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `CivilTime`, the calendar date/time representation used at the edges
//!   of the pure period arithmetic (which works in JD days throughout)
//!
//! Leap seconds and dynamical time scales are deliberately out of scope:
//! dasha boundaries are day-scale astrological approximations.

pub mod civil;
pub mod julian;

pub use civil::CivilTime;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
