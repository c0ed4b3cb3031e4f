pub mod match_config;

pub use match_config::MatchConfig;
