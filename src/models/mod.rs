pub mod client;
pub mod session;
pub mod task;

pub use client::Client;
pub use session::Session;
pub use task::Task;
