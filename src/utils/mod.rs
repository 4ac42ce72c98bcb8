pub mod logger;

pub use logger::FileLogger;
