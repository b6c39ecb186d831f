//! Project scaffolding for CMake-based C and C++ projects.
//!
//! [`config::ConfigStore`] collects and validates every choice for a run;
//! [`scaffold::scaffold`] writes the project trees it describes.

pub mod cli;
pub mod config;
pub mod info;
pub mod scaffold;
mod stock;
