mod commands;
mod logger;
mod print;
mod setup;

pub use commands::run;
