use ledge_core::{
    validate_reach, Agent, AgentMessage, CharacterKind, LevelError, LevelSetup, Move, Outbox,
    Position, SensorFeed, TickContext,
};
use ledge_nav::{Graph, GraphLayout, NavPath, Navigator};
use ledge_tools::DebugShape;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::{AgentConfig, CatchTracker, Controller, FollowStep, WaypointFollower};

/// Graph-planning agent for either character.
///
/// Plans a route to the first reachable collectible with a depth-first search over the level's
/// visibility graph, follows it waypoint by waypoint, and drops the goal from the graph once
/// it is reached after a catch. With nothing reachable it plays a random legal move.
pub struct PlatformerAgent<R = StdRng> {
    name: String,
    controller: Controller,
    layout: GraphLayout,
    sensors: SensorFeed,
    tracker: CatchTracker,
    graph: Option<Graph>,
    follower: WaypointFollower,
    last_position: Position,
    current: Move,
    outbox: Outbox,
    rng: R,
}

impl PlatformerAgent<StdRng> {
    pub fn new(config: &AgentConfig) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> PlatformerAgent<R> {
    pub fn with_rng(config: &AgentConfig, rng: R) -> Self {
        let kind = config.character;
        Self {
            name: format!("dfs-{kind}"),
            controller: Controller::new(kind, config.profile()),
            layout: config.layout,
            sensors: SensorFeed::new(),
            tracker: CatchTracker::default(),
            graph: None,
            follower: WaypointFollower::new(),
            last_position: Position::ZERO,
            current: Move::NoAction,
            outbox: Outbox::new(),
            rng,
        }
    }

    pub fn kind(&self) -> CharacterKind {
        self.controller.kind()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The persistent graph. `None` before `setup`.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn path(&self) -> Option<&NavPath> {
        self.follower.path()
    }

    pub fn tracker(&self) -> &CatchTracker {
        &self.tracker
    }

    /// Shapes for the host's debug overlay: a clear followed by the graph.
    pub fn debug_shapes(&self) -> Vec<DebugShape> {
        let mut shapes = vec![DebugShape::Clear];
        if let Some(graph) = &self.graph {
            shapes.extend(graph.debug_shapes());
        }
        shapes
    }

    fn random_action(&mut self) {
        let choice = self
            .kind()
            .moves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::NoAction);
        self.current = choice;
        debug!(agent = %self.name, action = %choice, "no reachable goal, moving randomly");
        self.outbox
            .push(AgentMessage::new(format!("Going to :{choice}")));
    }

    /// Latest sensed position, recording catches on the way. Falls back to the last known
    /// position before the host has published anything.
    fn sense(&mut self) -> Position {
        let guard = self.sensors.lock();
        let Some(snapshot) = guard.as_ref() else {
            return self.last_position;
        };
        let newly = self.tracker.record(&snapshot.collectibles);
        if !newly.is_empty() {
            info!(
                agent = %self.name,
                caught = newly.len(),
                remaining = self.tracker.uncaught().len(),
                "collectibles caught"
            );
        }
        snapshot.position_of(self.controller.kind())
    }
}

impl<R: Rng> Agent for PlatformerAgent<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(&mut self, level: &LevelSetup) -> Result<(), LevelError> {
        level.validate()?;
        let profile = self.controller.profile();
        validate_reach(profile.max_vertical_distance)?;

        let kind = self.controller.kind();
        let graph = Graph::with_layout(
            level.platforms_for(kind),
            &level.collectibles,
            profile.max_vertical_distance,
            self.layout,
        );
        info!(
            agent = %self.name,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            goals = graph.goal_count(),
            "level setup"
        );

        self.graph = Some(graph);
        self.tracker = CatchTracker::new(level.collectibles.clone());
        self.follower.clear();
        self.last_position = level.start_for(kind);
        self.current = Move::NoAction;
        Ok(())
    }

    fn sensors(&self) -> SensorFeed {
        self.sensors.clone()
    }

    fn update(&mut self, ctx: &TickContext) {
        let position = self.sense();
        self.last_position = position;

        if !self.follower.has_path() {
            let Some(graph) = self.graph.as_ref() else {
                return;
            };
            match graph.find_path(position) {
                Some(path) => {
                    debug!(
                        agent = %self.name,
                        tick = ctx.tick,
                        waypoints = path.len(),
                        goal = ?path.goal(),
                        "planned path"
                    );
                    self.follower.set_path(path);
                }
                None => {
                    self.random_action();
                    return;
                }
            }
        }

        match self.follower.advance(&self.controller, position) {
            Some(FollowStep::Toward(next)) => {
                self.current = self.controller.next_move(next, position);
                trace!(tick = ctx.tick, ?next, action = %self.current, "following path");
            }
            Some(FollowStep::Completed(goal)) => {
                if self.tracker.any_caught() {
                    if let Some(graph) = self.graph.as_mut() {
                        if graph.remove_goal_at(goal) {
                            info!(agent = %self.name, ?goal, "goal reached, removed from graph");
                        }
                    }
                }
                self.current = Move::NoAction;
            }
            None => {}
        }
    }

    fn action(&self) -> Move {
        self.current
    }

    fn take_messages(&mut self) -> Vec<AgentMessage> {
        self.outbox.drain()
    }

    fn handle_messages(&mut self, messages: &[AgentMessage]) {
        for message in messages {
            info!(
                agent = %self.name,
                text = %message.text,
                attachment = ?message.attachment,
                "message received"
            );
        }
    }

    fn end_game(&mut self, collected: u32, elapsed_seconds: f32) {
        info!(agent = %self.name, collected, elapsed_seconds, "level finished");
    }
}
