//! Game Service
//!
//! Owns the vote tally, the round clock and the cumulative results, and is
//! the only path by which any of them change.
//!
//! Every mutator validates first and mutates second: a rejected call leaves
//! all state exactly as it was.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::algorithms::{adjudicate, team_move};
use crate::domain::{
    invariant_round_advance, invariant_single_outcome, invariant_tally_reset, Address, GameConfig,
    GameError, Move, Outcome, Results, RoundClock, RoundPhase, RoundSnapshot, Team, Timestamp,
    VoteTally,
};
use crate::events::RoundEndedPayload;
use crate::metrics::GameMetrics;
use crate::ports::{PaymentCollector, RoundEventPublisher, RpsGameApi, TimeSource};

/// A game shared between tasks. The mutex provides the total order of
/// operations.
pub type SharedGame<T, P, E> = Arc<Mutex<RpsGameService<T, P, E>>>;

/// Voting game implementation
///
/// Implements the `RpsGameApi` port using injected collaborators.
pub struct RpsGameService<T, P, E>
where
    T: TimeSource,
    P: PaymentCollector,
    E: RoundEventPublisher,
{
    /// Immutable round configuration
    config: GameConfig,
    /// Host clock (driven port)
    time_source: T,
    /// Payment sink (driven port)
    payments: P,
    /// RoundEnded sink (driven port)
    publisher: E,
    /// Vote ledger
    tally: VoteTally,
    /// Round clock
    clock: RoundClock,
    /// Cumulative results
    results: Results,
    metrics: Arc<GameMetrics>,
}

impl<T, P, E> RpsGameService<T, P, E>
where
    T: TimeSource,
    P: PaymentCollector,
    E: RoundEventPublisher,
{
    /// Create a game whose first round opens now.
    pub fn new(
        config: GameConfig,
        time_source: T,
        payments: P,
        publisher: E,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let now = time_source.now();
        let clock = RoundClock::new(now, config.voting_period_secs);

        info!(
            voting_period_secs = config.voting_period_secs,
            min_payment = %config.min_payment,
            opened_at = now,
            "Game initialized, round 1 open"
        );

        Ok(Self {
            config,
            time_source,
            payments,
            publisher,
            tally: VoteTally::new(),
            clock,
            results: Results::default(),
            metrics: Arc::new(GameMetrics::new()),
        })
    }

    /// Wrap the game for use from several tasks.
    pub fn into_shared(self) -> SharedGame<T, P, E> {
        Arc::new(Mutex::new(self))
    }

    /// Round configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Shared handle to the metrics collector.
    pub fn metrics(&self) -> Arc<GameMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Current round number.
    pub fn current_round(&self) -> u64 {
        self.clock.state().round
    }

    /// First instant at which the current round may be settled.
    pub fn closes_at(&self) -> Timestamp {
        self.clock.closes_at()
    }

    /// True iff a vote would pass the window check right now.
    pub fn can_vote(&self) -> bool {
        self.clock.can_vote(self.time_source.now())
    }

    /// True iff `end_round` would pass the window check right now.
    pub fn can_settle(&self) -> bool {
        self.clock.can_settle(self.time_source.now())
    }

    /// Vote preconditions other than the team, which the type already
    /// guarantees. Checked in order: move, payment, window.
    fn check_vote(&self, mv: Move, payment: u128, now: Timestamp) -> Result<(), GameError> {
        if !mv.is_playable() {
            return Err(GameError::InvalidMove(mv.id()));
        }

        if payment < self.config.min_payment {
            return Err(GameError::InsufficientPayment {
                paid: payment,
                required: self.config.min_payment,
            });
        }

        if !self.clock.can_vote(now) {
            return Err(GameError::VotingClosed {
                closed_at: self.clock.closes_at(),
                now,
            });
        }

        Ok(())
    }
}

impl<T, P, E> RpsGameApi for RpsGameService<T, P, E>
where
    T: TimeSource,
    P: PaymentCollector,
    E: RoundEventPublisher,
{
    fn cast_vote(
        &mut self,
        voter: &Address,
        team: Team,
        mv: Move,
        payment: u128,
    ) -> Result<u64, GameError> {
        let now = self.time_source.now();

        let accepted = self
            .check_vote(mv, payment, now)
            .and_then(|()| self.payments.collect(voter, payment));

        if let Err(err) = accepted {
            self.metrics.record_vote_rejected();
            warn!(
                round = self.clock.state().round,
                team = %team,
                mv = %mv,
                error = %err,
                "Vote rejected"
            );
            return Err(err);
        }

        let count = self.tally.record(team, mv)?;
        self.metrics.record_vote_accepted(payment);

        debug!(
            round = self.clock.state().round,
            team = %team,
            mv = %mv,
            count,
            "Vote accepted"
        );

        Ok(count)
    }

    fn get_votes(&self, team: Team) -> (u64, u64, u64) {
        self.tally.votes(team)
    }

    fn get_move(&self, team: Team) -> Move {
        team_move(&self.tally, team)
    }

    fn get_winner(&self, red: Move, blue: Move) -> Outcome {
        adjudicate(red, blue)
    }

    fn end_round(&mut self) -> Result<RoundEndedPayload, GameError> {
        let now = self.time_source.now();

        if !self.clock.can_settle(now) {
            self.metrics.record_settlement_rejected();
            let err = GameError::VotingStillOpen {
                closes_at: self.clock.closes_at(),
                now,
            };
            warn!(round = self.clock.state().round, error = %err, "Settlement rejected");
            return Err(err);
        }

        let red_move = team_move(&self.tally, Team::Red);
        let blue_move = team_move(&self.tally, Team::Blue);
        let outcome = adjudicate(red_move, blue_move);

        let results_before = self.results;
        let round_before = self.clock.state();
        let event = RoundEndedPayload::new(
            round_before.round,
            outcome,
            red_move,
            blue_move,
            self.tally.clone(),
            now,
        );

        self.results.record(outcome);
        self.tally.reset();
        self.clock.advance(now);

        debug_assert!(invariant_single_outcome(&results_before, &self.results).is_ok());
        debug_assert!(invariant_tally_reset(&self.tally).is_ok());
        debug_assert!(invariant_round_advance(&round_before, &self.clock.state()).is_ok());

        self.metrics.record_round_settled(outcome);

        info!(
            round = round_before.round,
            red_move = %red_move,
            blue_move = %blue_move,
            outcome = %outcome,
            next_round_closes_at = self.clock.closes_at(),
            "RoundEnded"
        );

        self.publisher.publish(event.clone());

        Ok(event)
    }

    fn get_results(&self) -> (u64, u64, u64) {
        self.results.as_tuple()
    }

    fn voting_period(&self) -> u64 {
        self.config.voting_period_secs
    }

    fn phase(&self) -> RoundPhase {
        self.clock.phase(self.time_source.now())
    }

    fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.clock.state(),
            voting_period_secs: self.config.voting_period_secs,
            tally: self.tally.clone(),
            results: self.results,
        }
    }
}
