pub mod delay;
pub mod logger;
pub mod logging;
pub mod retry;

pub use delay::{human_delay, HUMAN_DELAY_MS};
pub use retry::{retry, RetryPolicy};

#[cfg(test)]
pub mod stub_server;
