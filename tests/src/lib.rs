//! Known-answer suites for the shanext crates
//!
//! Vector files live under `src/vectors/kat` as JSON. Each file is one
//! [`suites::kat::TestSuite`] whose groups are routed by algorithm name to a
//! handler in [`suites::kat::algorithms`].
pub mod suites;
