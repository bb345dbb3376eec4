pub mod fixed_window;

pub use fixed_window::FixedWindowRateLimiter;
