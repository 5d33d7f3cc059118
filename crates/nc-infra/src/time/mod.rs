mod delay;
mod system_clock;

pub use delay::TokioDelay;
pub use system_clock::SystemClock;
