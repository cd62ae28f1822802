pub mod cli;
pub mod db;
pub mod mcp;
pub mod paths;
pub mod query;
pub mod seed;
