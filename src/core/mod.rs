//! Core building blocks: the runner parameters describing the external tool
//! and how its command line is composed for each file.
pub mod params;
