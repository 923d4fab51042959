mod server;

pub use server::SignalServiceImpl;
