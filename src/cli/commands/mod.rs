pub mod seed;
pub mod serve;
pub mod stats;
pub mod tickets;

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;


#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;
