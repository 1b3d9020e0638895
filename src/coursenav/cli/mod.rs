mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
