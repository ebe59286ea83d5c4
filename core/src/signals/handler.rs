use super::signal::MechanicSignal;
use crate::party::Party;

/// Trait for components that react to mechanic signals.
/// Implement this for trackers, arena components, etc.
pub trait SignalHandler {
    /// Handle a single signal with the current party roster.
    fn handle_signal(&mut self, signal: &MechanicSignal, party: &Party);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[MechanicSignal], party: &Party) {
        for signal in signals {
            self.handle_signal(signal, party);
        }
    }

    /// Called when the encounter is reset between pulls
    fn on_pull_reset(&mut self) {}
}
