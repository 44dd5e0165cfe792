//! Boundary handler for raw requests
//!
//! Decodes wire ids into domain types before anything reaches the game:
//! - Team ids other than 0 and 1 are rejected with `InvalidTeam`
//! - Move ids outside ROCK/PAPER/SCISSORS are rejected with `InvalidMove`,
//!   including the FAILED_TO_PICK sentinel
//! - The comparator query accepts the sentinel, since a settled team may
//!   hold it

use tracing::debug;

use crate::domain::{GameError, Move, Outcome, Team};
use crate::events::{
    MoveQueryPayload, ResultsResponse, RoundEndedPayload, VoteRequestPayload, VotesQueryPayload,
    VotesResponse, WinnerQueryPayload,
};
use crate::ports::RpsGameApi;

/// Request handler wrapping a game.
pub struct GameHandler<G: RpsGameApi> {
    game: G,
}

impl<G: RpsGameApi> GameHandler<G> {
    /// Wrap a game.
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Borrow the wrapped game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Unwrap the game.
    pub fn into_inner(self) -> G {
        self.game
    }

    /// Decode and cast a vote. Returns the new count for the voted pair.
    pub fn handle_vote(&mut self, request: VoteRequestPayload) -> Result<u64, GameError> {
        let team = Team::try_from(request.team)?;
        let mv = Move::try_playable(request.move_id)?;

        debug!(team = %team, mv = %mv, payment = %request.payment, "Vote request decoded");
        self.game
            .cast_vote(&request.voter, team, mv, request.payment)
    }

    /// Current tally of one team.
    pub fn handle_votes_query(&self, query: VotesQueryPayload) -> Result<VotesResponse, GameError> {
        let team = Team::try_from(query.team)?;
        Ok(self.game.get_votes(team).into())
    }

    /// Current dominant move of one team.
    pub fn handle_move_query(&self, query: MoveQueryPayload) -> Result<Move, GameError> {
        let team = Team::try_from(query.team)?;
        Ok(self.game.get_move(team))
    }

    /// Pairwise comparator on raw move ids.
    pub fn handle_winner_query(&self, query: WinnerQueryPayload) -> Result<Outcome, GameError> {
        let red = Move::try_from(query.red_move)?;
        let blue = Move::try_from(query.blue_move)?;
        Ok(self.game.get_winner(red, blue))
    }

    /// Settle the current round.
    pub fn handle_end_round(&mut self) -> Result<RoundEndedPayload, GameError> {
        self.game.end_round()
    }

    /// Cumulative results.
    pub fn handle_results(&self) -> ResultsResponse {
        let (red_wins, blue_wins, draws) = self.game.get_results();
        ResultsResponse {
            red_wins,
            blue_wins,
            draws,
        }
    }
}
