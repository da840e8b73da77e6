//! Integration tests for the shared session under concurrent access.
//!
//! These run on a multi-threaded runtime so that spawned tasks really do
//! race each other for the session lock.

use std::collections::HashSet;

use impostor_session::{
    GameSession, SessionConfig, SessionError, SharedSession, StaticWordSource,
    DEFAULT_WORDS,
};

const SECRET: &str = "master-pw";

// =========================================================================
// Helpers
// =========================================================================

fn shared() -> SharedSession {
    SharedSession::from_session(
        GameSession::with_seed(SessionConfig::with_master_secret(SECRET), 1),
        StaticWordSource::default(),
    )
}

/// Joins a Master and `others` ordinary players. Returns the Master token.
async fn populate(session: &SharedSession, others: usize) -> String {
    let master = session.join("Master", Some(SECRET)).await.unwrap();
    for i in 0..others {
        session.join(&format!("Player {i}"), None).await.unwrap();
    }
    master.token().as_str().to_string()
}

// =========================================================================
// Scenarios
// =========================================================================

#[tokio::test]
async fn test_two_players_cannot_start_round() {
    let session = shared();
    let master = populate(&session, 1).await;

    let result = session.start_round(&master).await;

    assert!(matches!(
        result,
        Err(SessionError::NotEnoughPlayers { required: 3, present: 2 })
    ));
    assert_eq!(session.view_status().await.round.number(), 0);
}

#[tokio::test]
async fn test_three_players_start_round_one() {
    let session = shared();
    let master = populate(&session, 2).await;
    let tokens: HashSet<String> = session
        .view_status()
        .await
        .players
        .iter()
        .map(|p| p.token().as_str().to_string())
        .collect();

    let round = session.start_round(&master).await.unwrap();

    assert_eq!(round.number(), 1);
    let word = round.secret_word().unwrap();
    assert!(DEFAULT_WORDS.iter().any(|w| *w == word));
    assert!(tokens.contains(round.impostor_token().unwrap().as_str()));
}

#[tokio::test]
async fn test_second_master_claim_is_rejected() {
    let session = shared();
    populate(&session, 1).await;

    let result = session.join("Usurper", Some(SECRET)).await;

    assert_eq!(result, Err(SessionError::MasterAlreadyAssigned));
    assert_eq!(session.view_status().await.players.len(), 2);
}

#[tokio::test]
async fn test_non_master_start_round_is_forbidden() {
    let session = shared();
    populate(&session, 2).await;
    let player = session.join("Sneaky", None).await.unwrap();

    let result = session.start_round(player.token().as_str()).await;

    assert_eq!(result, Err(SessionError::Forbidden));
    assert_eq!(session.view_status().await.round.number(), 0);
}

#[tokio::test]
async fn test_reset_then_old_token_is_not_found() {
    let session = shared();
    let master = populate(&session, 2).await;
    session.start_round(&master).await.unwrap();

    session.reset_all(&master).await.unwrap();

    assert!(matches!(
        session.view_as_player(&master).await,
        Err(SessionError::NotFound(_))
    ));
    let status = session.view_status().await;
    assert!(status.players.is_empty());
    assert_eq!(status.round.number(), 0);
    assert!(!session.view_lobby().await.master_exists);
}

// =========================================================================
// Concurrency
// =========================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_all_register() {
    let session = shared();

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let session = session.clone();
            tokio::spawn(async move {
                session.join(&format!("P{i}"), None).await.unwrap()
            })
        })
        .collect();

    let mut tokens = HashSet::new();
    for handle in handles {
        tokens.insert(handle.await.unwrap().token().clone());
    }

    assert_eq!(tokens.len(), 100);
    assert_eq!(session.view_status().await.players.len(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_master_claims_exactly_one_wins() {
    let session = shared();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let session = session.clone();
            tokio::spawn(async move {
                session.join(&format!("M{i}"), Some(SECRET)).await
            })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(player) => {
                assert!(player.is_master());
                winners += 1;
            }
            Err(e) => assert_eq!(e, SessionError::MasterAlreadyAssigned),
        }
    }

    assert_eq!(winners, 1);
    let status = session.view_status().await;
    assert_eq!(status.players.len(), 1);
    assert_eq!(status.players.iter().filter(|p| p.is_master()).count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_rounds_are_numbered_without_gaps() {
    let session = shared();
    let master = populate(&session, 4).await;

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let session = session.clone();
            let master = master.clone();
            tokio::spawn(async move {
                session.start_round(&master).await.unwrap().number()
            })
        })
        .collect();

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.push(handle.await.unwrap());
    }
    numbers.sort_unstable();

    assert_eq!(numbers, (1..=50).collect::<Vec<u64>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_never_see_a_torn_reset() {
    // While rounds and resets race, every snapshot must be internally
    // consistent: a dealt round always names a registered impostor, and
    // round 0 never carries a secret.
    let session = shared();

    let writer = {
        let session = session.clone();
        tokio::spawn(async move {
            for _ in 0..50 {
                let master = populate(&session, 3).await;
                session.start_round(&master).await.unwrap();
                session.reset_all(&master).await.unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let session = session.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let status = session.view_status().await;
                    let round = &status.round;
                    if round.number() == 0 {
                        assert!(round.secret().is_none());
                    } else {
                        let impostor = round.impostor_token().unwrap();
                        assert!(
                            status.players.iter().any(|p| p.token() == impostor),
                            "impostor missing from registry"
                        );
                    }
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }
}
