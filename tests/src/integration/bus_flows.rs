//! # Bus Flows
//!
//! `RoundEnded` delivery to subscribers of the broadcast publisher, with the
//! game shared between tasks.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use ourps_core::{
        BroadcastRoundPublisher, GameConfig, InMemoryTreasury, ManualTimeSource, Move, Outcome,
        RpsGameApi, RpsGameService, Team,
    };

    #[tokio::test]
    async fn test_subscribers_receive_round_ended() {
        let clock = Arc::new(ManualTimeSource::new(0));
        let publisher = Arc::new(BroadcastRoundPublisher::new());
        let mut first = publisher.subscribe();
        let mut second = publisher.subscribe();

        let game = RpsGameService::new(
            GameConfig::default(),
            Arc::clone(&clock),
            InMemoryTreasury::new(),
            Arc::clone(&publisher),
        )
        .unwrap()
        .into_shared();

        game.lock()
            .cast_vote(&[3; 20], Team::Red, Move::Scissors, 1)
            .unwrap();
        game.lock()
            .cast_vote(&[4; 20], Team::Blue, Move::Paper, 1)
            .unwrap();
        clock.advance(60);
        let settled = game.lock().end_round().unwrap();

        for sub in [&mut first, &mut second] {
            let event = timeout(Duration::from_millis(100), sub.recv())
                .await
                .expect("timeout waiting for RoundEnded")
                .expect("should receive RoundEnded");
            assert_eq!(event, settled);
            assert_eq!(event.outcome, Outcome::Red);
            assert_eq!(event.votes(Team::Blue), (0, 1, 0));
        }
        assert_eq!(publisher.events_published(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_voters_all_counted() {
        let clock = Arc::new(ManualTimeSource::new(0));
        let treasury = Arc::new(InMemoryTreasury::new());
        let game = RpsGameService::new(
            GameConfig::default(),
            Arc::clone(&clock),
            Arc::clone(&treasury),
            BroadcastRoundPublisher::new(),
        )
        .unwrap()
        .into_shared();

        let mut tasks = Vec::new();
        for voter in 0..8u8 {
            let game = Arc::clone(&game);
            tasks.push(tokio::spawn(async move {
                for _ in 0..10 {
                    game.lock()
                        .cast_vote(&[voter; 20], Team::Red, Move::Rock, 2)
                        .unwrap();
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(game.lock().get_votes(Team::Red), (80, 0, 0));
        assert_eq!(treasury.total_collected(), 160);
        assert_eq!(treasury.contributor_count(), 8);
    }
}
