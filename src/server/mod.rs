// Server module entry
// Listener creation, the accept loop, per-connection serving and the worker pool

pub mod connection;
pub mod listener;
pub mod pool;

// `loop` is a keyword and cannot name a module, so the file is mounted as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used types
pub use listener::create_listener;
pub use pool::WorkerPool;
pub use server_loop::serve;
