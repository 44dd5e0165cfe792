//! # Round Flows
//!
//! Full rounds driven through `GameHandler` with raw wire ids:
//!
//! 1. **Empty round**: both teams FAILED_TO_PICK, settles as a draw
//! 2. **One-sided rounds**: a single vote beats a team that failed to pick
//! 3. **Boundary rejections**: bad ids, late votes, early settlement
//! 4. **Plurality and ties**: strict plurality wins, ties fail to pick
//! 5. **Many rounds**: results only ever grow by one per settlement

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ourps_core::{
        GameConfig, GameError, GameHandler, InMemoryTreasury, ManualTimeSource, Move,
        MoveQueryPayload, Outcome, RecordingPublisher, ResultsResponse, RpsGameApi,
        RpsGameService, VoteRequestPayload, VotesQueryPayload, VotesResponse,
    };
    use rand::Rng;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PERIOD: u64 = 60;
    const RED: u8 = 0;
    const BLUE: u8 = 1;
    const ROCK: u8 = 0;
    const PAPER: u8 = 1;
    const SCISSORS: u8 = 2;

    type Game =
        RpsGameService<Arc<ManualTimeSource>, Arc<InMemoryTreasury>, Arc<RecordingPublisher>>;

    struct Harness {
        handler: GameHandler<Game>,
        clock: Arc<ManualTimeSource>,
        treasury: Arc<InMemoryTreasury>,
        events: Arc<RecordingPublisher>,
    }

    impl Harness {
        fn new() -> Self {
            let clock = Arc::new(ManualTimeSource::new(1_700_000_000));
            let treasury = Arc::new(InMemoryTreasury::new());
            let events = Arc::new(RecordingPublisher::new());
            let config = GameConfig::default().with_voting_period_secs(PERIOD);

            let game = RpsGameService::new(
                config,
                Arc::clone(&clock),
                Arc::clone(&treasury),
                Arc::clone(&events),
            )
            .expect("valid config");

            Self {
                handler: GameHandler::new(game),
                clock,
                treasury,
                events,
            }
        }

        fn vote(&mut self, team: u8, move_id: u8) -> Result<u64, GameError> {
            self.handler.handle_vote(VoteRequestPayload {
                voter: [0x42; 20],
                team,
                move_id,
                payment: 1,
            })
        }

        fn votes(&self, team: u8) -> Result<VotesResponse, GameError> {
            self.handler.handle_votes_query(VotesQueryPayload { team })
        }

        fn results(&self) -> ResultsResponse {
            self.handler.handle_results()
        }

        fn close_window(&self) {
            self.clock.advance(PERIOD);
        }
    }

    fn results(red_wins: u64, blue_wins: u64, draws: u64) -> ResultsResponse {
        ResultsResponse {
            red_wins,
            blue_wins,
            draws,
        }
    }

    // =============================================================================
    // SETTLEMENT SCENARIOS
    // =============================================================================

    #[test]
    fn test_empty_round_is_a_draw() {
        let mut h = Harness::new();
        h.close_window();

        let event = h.handler.handle_end_round().unwrap();
        assert_eq!(event.red_move, Move::FailedToPick);
        assert_eq!(event.blue_move, Move::FailedToPick);
        assert_eq!(event.outcome, Outcome::Draw);
        assert_eq!(h.results(), results(0, 0, 1));
    }

    #[test]
    fn test_single_red_vote_wins() {
        let mut h = Harness::new();
        h.vote(RED, ROCK).unwrap();
        assert_eq!(h.votes(RED).unwrap(), VotesResponse::from((1, 0, 0)));

        h.close_window();
        let event = h.handler.handle_end_round().unwrap();

        assert_eq!(event.outcome, Outcome::Red);
        assert_eq!(h.results(), results(1, 0, 0));
        assert_eq!(h.votes(RED).unwrap(), VotesResponse::from((0, 0, 0)));
        assert_eq!(h.votes(BLUE).unwrap(), VotesResponse::from((0, 0, 0)));
    }

    #[test]
    fn test_single_blue_vote_wins() {
        let mut h = Harness::new();
        h.vote(BLUE, ROCK).unwrap();
        h.close_window();

        assert_eq!(h.handler.handle_end_round().unwrap().outcome, Outcome::Blue);
        assert_eq!(h.results(), results(0, 1, 0));
    }

    #[test]
    fn test_head_to_head() {
        let mut h = Harness::new();
        h.vote(RED, PAPER).unwrap();
        h.vote(BLUE, SCISSORS).unwrap();
        h.close_window();

        let event = h.handler.handle_end_round().unwrap();
        assert_eq!((event.red_move, event.blue_move), (Move::Paper, Move::Scissors));
        assert_eq!(event.outcome, Outcome::Blue);
    }

    #[test]
    fn test_same_move_draws() {
        let mut h = Harness::new();
        h.vote(RED, SCISSORS).unwrap();
        h.vote(BLUE, SCISSORS).unwrap();
        h.close_window();

        assert_eq!(h.handler.handle_end_round().unwrap().outcome, Outcome::Draw);
        assert_eq!(h.results(), results(0, 0, 1));
    }

    // =============================================================================
    // DOMINANT MOVE
    // =============================================================================

    #[test]
    fn test_plurality_picks_move() {
        let mut h = Harness::new();
        h.vote(RED, ROCK).unwrap();
        h.vote(RED, ROCK).unwrap();
        h.vote(RED, SCISSORS).unwrap();

        let mv = h
            .handler
            .handle_move_query(MoveQueryPayload { team: RED })
            .unwrap();
        assert_eq!(mv, Move::Rock);
    }

    #[test]
    fn test_tie_fails_to_pick() {
        let mut h = Harness::new();
        h.vote(RED, SCISSORS).unwrap();
        h.vote(RED, PAPER).unwrap();

        let mv = h
            .handler
            .handle_move_query(MoveQueryPayload { team: RED })
            .unwrap();
        assert_eq!(mv, Move::FailedToPick);

        // a tied team loses to any real move
        h.vote(BLUE, PAPER).unwrap();
        h.close_window();
        assert_eq!(h.handler.handle_end_round().unwrap().outcome, Outcome::Blue);
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[test]
    fn test_unknown_team_rejected() {
        let mut h = Harness::new();
        assert_eq!(h.votes(5), Err(GameError::InvalidTeam(5)));
        assert_eq!(h.vote(5, ROCK), Err(GameError::InvalidTeam(5)));
    }

    #[test]
    fn test_vote_after_window_rejected() {
        let mut h = Harness::new();
        h.close_window();

        assert!(matches!(
            h.vote(BLUE, ROCK),
            Err(GameError::VotingClosed { .. })
        ));
        assert_eq!(h.votes(BLUE).unwrap(), VotesResponse::from((0, 0, 0)));
        assert_eq!(h.treasury.total_collected(), 0);
    }

    #[test]
    fn test_end_round_before_window_rejected() {
        let mut h = Harness::new();
        h.vote(RED, PAPER).unwrap();

        assert!(matches!(
            h.handler.handle_end_round(),
            Err(GameError::VotingStillOpen { .. })
        ));
        assert_eq!(h.results(), results(0, 0, 0));
        assert_eq!(h.votes(RED).unwrap(), VotesResponse::from((0, 1, 0)));
        assert!(h.events.is_empty());
    }

    #[test]
    fn test_unpaid_vote_rejected() {
        let mut h = Harness::new();
        let result = h.handler.handle_vote(VoteRequestPayload {
            voter: [1; 20],
            team: RED,
            move_id: ROCK,
            payment: 0,
        });
        assert!(matches!(
            result,
            Err(GameError::InsufficientPayment { .. })
        ));
        assert_eq!(h.votes(RED).unwrap(), VotesResponse::from((0, 0, 0)));
    }

    // =============================================================================
    // MULTI-ROUND
    // =============================================================================

    #[test]
    fn test_random_rounds_accumulate() {
        let mut h = Harness::new();
        let mut rng = rand::thread_rng();
        let rounds = 20u64;

        for round in 1..=rounds {
            let vote_count = rng.gen_range(0..10);
            for _ in 0..vote_count {
                let team = rng.gen_range(0..2u8);
                let move_id = rng.gen_range(0..3u8);
                h.vote(team, move_id).unwrap();
            }

            let before = h.results();
            h.close_window();
            let event = h.handler.handle_end_round().unwrap();
            let after = h.results();

            assert_eq!(event.round, round);
            assert_eq!(event.tally.total(), vote_count);
            assert_eq!(
                after.red_wins + after.blue_wins + after.draws,
                before.red_wins + before.blue_wins + before.draws + 1
            );
            assert_eq!(h.handler.game().snapshot().tally.total(), 0);
        }

        assert_eq!(h.events.len() as u64, rounds);
        assert_eq!(h.handler.game().metrics().snapshot().rounds_settled, rounds);
    }
}
