mod handler;
mod signal;

pub use handler::SignalHandler;
pub use signal::MechanicSignal;
