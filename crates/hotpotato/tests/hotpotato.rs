//! End-to-end tests through the meta crate's builder.

use std::sync::Arc;

use hotpotato::prelude::*;

// =========================================================================
// Helpers
// =========================================================================

fn scripted(values: impl IntoIterator<Item = u32>) -> HotPotato<MemoryStore, MemoryStore> {
    HotPotato::builder()
        .random(Arc::new(ScriptedRandom::new(values)))
        .build()
}

/// Plays tosses around a circle until the potato explodes or `max` turns
/// pass, returning every response.
async fn play_round(
    game: &HotPotato<MemoryStore, MemoryStore>,
    players: &[&str],
    max: usize,
) -> Vec<TossResponse> {
    let mut out = Vec::new();
    for i in 0..max {
        let actor = players[i % players.len()];
        let target = players[(i + 1) % players.len()];
        let rsp = game
            .master()
            .toss(&game.toss_request("guild", "general", actor, target))
            .await
            .unwrap();
        let exploded = rsp.exploded;
        out.push(rsp);
        if exploded {
            break;
        }
    }
    out
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_builder_uses_configured_namespace() {
    let game = HotPotato::builder()
        .config(HotPotatoConfig {
            namespace: "discord".into(),
            ..Default::default()
        })
        .build();

    let req = game.toss_request("guild", "general", "alice", "bob");
    assert_eq!(req.namespace, Namespace::new("discord"));
    assert_eq!(game.namespace().as_str(), "discord");
}

#[tokio::test]
async fn test_full_round_through_builder() {
    let game = scripted([1, 99, 99, 0]);

    let rounds = play_round(&game, &["alice", "bob", "carol"], 10).await;
    assert_eq!(rounds.len(), 3);
    assert!(rounds.iter().all(|r| r.potato == Potato::Baked));
    assert!(rounds[2].exploded);
    assert_eq!(rounds[2].holder, UserId::new("alice"));

    let err = game
        .master()
        .get_holder(&game.holder_request("guild", "general"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NoOngoingGame));

    let board = game
        .master()
        .get_leaderboard(&game.leaderboard_request("guild"))
        .await
        .unwrap();
    assert_eq!(
        board.leaderboard,
        vec![UserDeaths { user: UserId::new("alice"), count: 1 }]
    );
}

#[tokio::test]
async fn test_seeded_games_replay_identically() {
    let config = HotPotatoConfig {
        seed: Some(1234),
        ..Default::default()
    };
    let a = HotPotato::builder().config(config.clone()).build();
    let b = HotPotato::builder().config(config).build();

    let players = ["alice", "bob", "carol", "dave"];
    assert_eq!(
        play_round(&a, &players, 200).await,
        play_round(&b, &players, 200).await
    );
}

#[tokio::test]
async fn test_leaderboard_request_uses_configured_top() {
    let game = HotPotato::builder()
        .config(HotPotatoConfig {
            leaderboard_top: 1,
            ..Default::default()
        })
        .build();
    assert_eq!(game.leaderboard_request("guild").top, 1);
}

#[tokio::test]
async fn test_steal_and_cook_helpers() {
    let game = scripted([0]);
    let master = game.master();

    master
        .toss(&game.toss_request("guild", "general", "alice", "bob"))
        .await
        .unwrap();
    let stolen = master
        .steal(&game.steal_request("guild", "general", "carol", "bob"))
        .await
        .unwrap();
    assert_eq!(stolen.holder, UserId::new("carol"));

    let cooked = master
        .cook(&game.cook_request("guild", "general", "carol"))
        .await
        .unwrap();
    assert_eq!((cooked.turn, cooked.heat_level), (3, 2));
}

#[tokio::test]
async fn test_errors_convert_into_unified_error() {
    let game = scripted([]);
    let result: Result<StealResponse, HotPotatoError> = game
        .master()
        .steal(&game.steal_request("guild", "general", "alice", "bob"))
        .await
        .map_err(Into::into);

    let err = result.unwrap_err();
    assert!(matches!(err, HotPotatoError::Engine(EngineError::NoOngoingGame)));
    assert!(!err.is_internal());
}

#[tokio::test]
async fn test_responses_serialize_for_integrations() {
    let game = scripted([2]);
    let rsp = game
        .master()
        .toss(&game.toss_request("guild", "general", "alice", "bob"))
        .await
        .unwrap();

    let json = serde_json::to_value(&rsp).unwrap();
    assert_eq!(json["potato"], "hot");
    assert_eq!(json["holder"], "bob");
    assert_eq!(json["turn"], 1);
    assert_eq!(json["exploded"], false);
}
