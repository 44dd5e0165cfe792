//! # OURPS Node Runtime
//!
//! Wires one game to its host collaborators and keeps rounds moving.
//!
//! ## Startup Sequence
//!
//! 1. Load `GameConfig` and `TelemetryConfig` from the environment
//! 2. Initialize tracing
//! 3. Build the game with the system clock, the in-memory treasury and the
//!    broadcast publisher
//! 4. Spawn the settlement keeper and the `RoundEnded` logger
//! 5. Wait for Ctrl-C, then signal shutdown

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use ourps_core::{
    BroadcastRoundPublisher, GameConfig, GameError, InMemoryTreasury, PaymentCollector,
    RoundEndedPayload, RoundEventPublisher, RoundPhase, RpsGameApi, RpsGameService, SharedGame,
    SystemTimeSource, TimeSource,
};
use ourps_telemetry::log_round_event;

/// Default keeper polling interval.
pub const DEFAULT_KEEPER_TICK_MS: u64 = 1_000;

/// The game as hosted by the node.
pub type NodeGame =
    RpsGameService<SystemTimeSource, Arc<InMemoryTreasury>, Arc<BroadcastRoundPublisher>>;

/// Shared handle to the hosted game.
pub type NodeGameHandle =
    SharedGame<SystemTimeSource, Arc<InMemoryTreasury>, Arc<BroadcastRoundPublisher>>;

/// Node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Game parameters
    pub game: GameConfig,
    /// How often the keeper checks whether the round can be settled
    pub keeper_tick: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            keeper_tick: Duration::from_millis(DEFAULT_KEEPER_TICK_MS),
        }
    }
}

impl NodeConfig {
    /// Load from `OURPS_*` environment variables.
    ///
    /// - `OURPS_KEEPER_TICK_MS` (default: 1000)
    /// - plus everything `GameConfig::from_env` reads
    pub fn from_env() -> Result<Self> {
        let game = GameConfig::from_env().context("Invalid game configuration")?;

        let tick_ms = env::var("OURPS_KEEPER_TICK_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_KEEPER_TICK_MS);

        Ok(Self {
            game,
            keeper_tick: Duration::from_millis(tick_ms),
        })
    }
}

/// Settle the round if its window has elapsed.
///
/// Returns `Ok(None)` while voting is still open.
pub fn settle_if_due<T, P, E>(
    game: &SharedGame<T, P, E>,
) -> Result<Option<RoundEndedPayload>, GameError>
where
    T: TimeSource,
    P: PaymentCollector,
    E: RoundEventPublisher,
{
    let mut game = game.lock();
    if game.phase() != RoundPhase::Settleable {
        return Ok(None);
    }
    game.end_round().map(Some)
}

/// Spawn the settlement keeper. Stops when `shutdown` flips to `true`.
pub fn spawn_keeper<T, P, E>(
    game: SharedGame<T, P, E>,
    tick: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    T: TimeSource + 'static,
    P: PaymentCollector + 'static,
    E: RoundEventPublisher + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match settle_if_due(&game) {
                        Ok(Some(event)) => {
                            log_round_event!(
                                debug,
                                event.round,
                                "Keeper settled round",
                                outcome = %event.outcome
                            );
                        }
                        Ok(None) => {}
                        Err(e) => warn!(error = %e, "Keeper settlement failed"),
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Keeper stopping");
                        break;
                    }
                }
            }
        }
    })
}

/// Spawn a task that logs every `RoundEnded` from the bus.
pub fn spawn_round_logger(
    mut events: broadcast::Receiver<RoundEndedPayload>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                received = events.recv() => match received {
                    Ok(event) => {
                        log_round_event!(
                            info,
                            event.round,
                            "RoundEnded received",
                            outcome = %event.outcome,
                            red_move = %event.red_move,
                            blue_move = %event.blue_move,
                            votes_cast = event.tally.total()
                        );
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Round logger lagged behind");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
    })
}

/// Running node.
pub struct NodeRuntime {
    game: NodeGameHandle,
    treasury: Arc<InMemoryTreasury>,
    publisher: Arc<BroadcastRoundPublisher>,
    config: NodeConfig,
    shutdown_tx: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl NodeRuntime {
    /// Build the game and its collaborators.
    pub fn new(config: NodeConfig) -> Result<Self> {
        let treasury = Arc::new(InMemoryTreasury::new());
        let publisher = Arc::new(BroadcastRoundPublisher::new());

        let game: NodeGame = RpsGameService::new(
            config.game.clone(),
            SystemTimeSource,
            Arc::clone(&treasury),
            Arc::clone(&publisher),
        )
        .context("Failed to create game")?;

        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            game: game.into_shared(),
            treasury,
            publisher,
            config,
            shutdown_tx,
            tasks: Vec::new(),
        })
    }

    /// Handle to the hosted game.
    pub fn game(&self) -> NodeGameHandle {
        Arc::clone(&self.game)
    }

    /// Treasury holding every collected payment.
    pub fn treasury(&self) -> &Arc<InMemoryTreasury> {
        &self.treasury
    }

    /// Spawn the background tasks.
    pub fn start(&mut self) {
        self.tasks.push(spawn_round_logger(
            self.publisher.subscribe(),
            self.shutdown_tx.subscribe(),
        ));
        self.tasks.push(spawn_keeper(
            self.game(),
            self.config.keeper_tick,
            self.shutdown_tx.subscribe(),
        ));

        info!(
            voting_period_secs = self.config.game.voting_period_secs,
            keeper_tick_ms = self.config.keeper_tick.as_millis() as u64,
            "Node started"
        );
    }

    /// Stop background tasks and wait for them.
    pub async fn shutdown(self) {
        info!("Shutting down node");
        let _ = self.shutdown_tx.send(true);
        for task in self.tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "Background task ended abnormally");
            }
        }

        let game = self.game.lock();
        let (red, blue, draws) = game.get_results();
        let metrics = game.metrics().snapshot();
        info!(
            red_wins = red,
            blue_wins = blue,
            draws,
            votes_accepted = metrics.votes_accepted,
            collected = %self.treasury.total_collected(),
            "Final results"
        );
    }
}
