pub mod from_time;
pub mod now;
pub mod to_unix;
pub mod window;
