use crate::{AgentMessage, LevelError, LevelSetup, Move, SensorFeed, TickContext};

/// Host-facing lifecycle of a character agent.
///
/// The host calls `setup` once per level, publishes sensor snapshots through
/// the feed returned by `sensors` (possibly from another thread), calls
/// `update` once per decision tick and reads back `action`.
pub trait Agent {
    fn name(&self) -> &str;

    fn setup(&mut self, level: &LevelSetup) -> Result<(), LevelError>;

    /// Handle the host publishes sensor snapshots into.
    fn sensors(&self) -> SensorFeed;

    fn update(&mut self, ctx: &TickContext);

    /// The action for the current tick. `Move::NoAction` until the first decision.
    fn action(&self) -> Move;

    /// Outbound messages queued since the last poll.
    fn take_messages(&mut self) -> Vec<AgentMessage>;

    fn handle_messages(&mut self, messages: &[AgentMessage]);

    fn end_game(&mut self, collected: u32, elapsed_seconds: f32) {
        let _ = (collected, elapsed_seconds);
    }
}
