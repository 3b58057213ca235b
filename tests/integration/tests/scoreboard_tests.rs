//! Scoreboard integration tests
//!
//! End-to-end flows through ingest → ledger → store → reload, plus the
//! HTTP read/command surface. Everything runs against in-memory mock
//! collaborators and throwaway snapshot paths.
//!
//! Run with: cargo test -p integration-tests --test scoreboard_tests

use std::sync::Arc;

use integration_tests::{
    reaction_event, redaction_event, text_event, TestEngine, TestServer, MODERATOR,
};
use podium_core::{RoomId, UserId};
use reqwest::StatusCode;
use serde_json::json;

/// Plant a question and its author's profile on the transport
fn plant_question(engine: &TestEngine, event_id: &str, sender: &str, body: &str) {
    engine.transport.add_event(text_event(event_id, sender, body));
}

// ============================================================================
// Voting flow
// ============================================================================

#[tokio::test]
async fn test_votes_build_a_ranked_scoreboard() {
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "What about WASM?");
    plant_question(&engine, "$q2", "@bob:example.org", "Roadmap for 2027?");
    engine
        .transport
        .add_profile(UserId::new("@alice:example.org"), "Alice", None);

    // $q1: one upvote. $q2: two upvotes, one down.
    for (id, target, key) in [
        ("$r1", "$q1", "👍"),
        ("$r2", "$q2", "👍"),
        ("$r3", "$q2", "👍\u{FE0F}"),
        ("$r4", "$q2", "👎"),
    ] {
        engine
            .ingest
            .handle_event(&engine.room, reaction_event(id, "@voter:example.org", target, key))
            .await;
    }

    let board = engine.ledger.scoreboard(&engine.room).unwrap();
    assert_eq!(board.entries.len(), 2);
    // Tie at score 1: $q1 was tracked first and stays first
    assert_eq!(board.entries[0].score, 1);
    assert!(board.entries[0].permalink.contains("$q1"));
    assert_eq!(board.entries[0].sender_name, "Alice");
    // Bob has no profile: falls back to the sender id
    assert_eq!(board.entries[1].sender_name, "@bob:example.org");
    assert!(board.entries[1].permalink.contains("?via=example.org"));
}

#[tokio::test]
async fn test_unrecognized_emoji_and_foreign_rooms_are_dropped() {
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "q");

    engine
        .ingest
        .handle_event(
            &engine.room,
            reaction_event("$r1", "@voter:example.org", "$q1", "🎉"),
        )
        .await;
    engine
        .ingest
        .handle_event(
            &RoomId::new("!hallway:example.org"),
            reaction_event("$r2", "@voter:example.org", "$q1", "👍"),
        )
        .await;

    assert!(engine.ledger.scoreboard(&engine.room).is_none());
}

#[tokio::test]
async fn test_reaction_to_vanished_message_is_dropped() {
    let engine = TestEngine::start().await.unwrap();
    // Never planted: the fetch comes back empty, as after a redaction race
    engine
        .ingest
        .handle_event(
            &engine.room,
            reaction_event("$r1", "@voter:example.org", "$gone", "👍"),
        )
        .await;

    assert!(engine.ledger.scoreboard(&engine.room).is_none());
}

// ============================================================================
// Redaction flow
// ============================================================================

#[tokio::test]
async fn test_redacting_votes_and_messages() {
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "q");

    for id in ["$r1", "$r2"] {
        engine
            .ingest
            .handle_event(
                &engine.room,
                reaction_event(id, "@voter:example.org", "$q1", "👍"),
            )
            .await;
    }

    // Redact a vote: score drops
    engine
        .ingest
        .handle_event(&engine.room, redaction_event("$d1", MODERATOR, "$r2"))
        .await;
    let board = engine.ledger.scoreboard(&engine.room).unwrap();
    assert_eq!(board.entries[0].score, 1);

    // Redacting an id that is neither a vote nor a message changes nothing
    engine
        .ingest
        .handle_event(&engine.room, redaction_event("$d2", MODERATOR, "$nothing"))
        .await;
    assert_eq!(engine.ledger.scoreboard(&engine.room).unwrap().entries.len(), 1);

    // Redact the question: it vanishes from the scoreboard
    engine
        .ingest
        .handle_event(&engine.room, redaction_event("$d3", MODERATOR, "$q1"))
        .await;
    assert!(engine.ledger.scoreboard(&engine.room).unwrap().is_empty());
}

// ============================================================================
// Commands
// ============================================================================

#[tokio::test]
async fn test_moderator_commands_drive_the_engine() {
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "q");
    engine
        .ingest
        .handle_event(
            &engine.room,
            reaction_event("$r1", "@voter:example.org", "$q1", "👍"),
        )
        .await;

    // Countdown, then reset wipes both messages and countdown
    engine
        .ingest
        .handle_event(
            &engine.room,
            text_event("$c1", MODERATOR, "!qa countdown 300"),
        )
        .await;
    let board = engine.ledger.scoreboard(&engine.room).unwrap();
    assert!(board.qa_start_time.is_some());
    assert_eq!(board.entries.len(), 1);

    engine
        .ingest
        .handle_event(&engine.room, text_event("$c2", MODERATOR, "!qa reset"))
        .await;
    let board = engine.ledger.scoreboard(&engine.room).unwrap();
    assert!(board.qa_start_time.is_none());
    assert!(board.is_empty());
}

#[tokio::test]
async fn test_non_admin_commands_are_ignored() {
    let engine = TestEngine::start().await.unwrap();
    engine
        .ingest
        .handle_event(
            &engine.room,
            text_event("$c1", "@rando:example.org", "!qa countdown 300"),
        )
        .await;

    assert!(engine.ledger.scoreboard(&engine.room).is_none());
}

// ============================================================================
// Durability
// ============================================================================

#[tokio::test]
async fn test_state_survives_restart() {
    let snapshot_path = integration_tests::unique_snapshot_path();

    {
        let engine = TestEngine::start_at(snapshot_path.clone()).await.unwrap();
        plant_question(&engine, "$q1", "@alice:example.org", "first");
        plant_question(&engine, "$q2", "@bob:example.org", "second");
        for (id, target) in [("$r1", "$q1"), ("$r2", "$q2"), ("$r3", "$q2")] {
            engine
                .ingest
                .handle_event(
                    &engine.room,
                    reaction_event(id, "@voter:example.org", target, "👍"),
                )
                .await;
        }
    }

    // A fresh process over the same snapshot path
    let engine = TestEngine::start_at(snapshot_path).await.unwrap();
    let board = engine.ledger.scoreboard(&engine.room).unwrap();
    assert_eq!(board.entries.len(), 2);
    assert_eq!(board.entries[0].score, 2);
    assert!(board.entries[0].permalink.contains("$q2"));

    // And redactions still resolve against the reloaded vote sets
    engine
        .ingest
        .handle_event(&engine.room, redaction_event("$d1", MODERATOR, "$r3"))
        .await;
    let board = engine.ledger.scoreboard(&engine.room).unwrap();
    assert_eq!(board.entries[0].score, 1);
    // Tie restored: tracking order decides
    assert!(board.entries[0].permalink.contains("$q1"));
}

#[tokio::test]
async fn test_snapshot_wire_format() {
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "format check");
    engine
        .ingest
        .handle_event(
            &engine.room,
            reaction_event("$r1", "@voter:example.org", "$q1", "👍"),
        )
        .await;

    let raw = tokio::fs::read_to_string(engine.store.path()).await.unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(doc["version"], 1);
    let message = &doc["rooms"]["!aud:example.org"]["messages"][0];
    assert_eq!(message["eventId"], "$q1");
    assert_eq!(message["text"], "format check");
    assert_eq!(message["senderId"], "@alice:example.org");
    assert_eq!(message["activeUpvoteIds"], json!(["$r1"]));
    assert_eq!(message["activeDownvoteIds"], json!([]));
}

// ============================================================================
// HTTP surface
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let engine = TestEngine::start().await.unwrap();
    let server = TestServer::start(Arc::clone(&engine.ledger)).await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_scoreboard_over_http() {
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "over http?");
    engine
        .ingest
        .handle_event(
            &engine.room,
            reaction_event("$r1", "@voter:example.org", "$q1", "👍"),
        )
        .await;

    let server = TestServer::start(Arc::clone(&engine.ledger)).await.unwrap();
    let response = server
        .get("/rooms/!aud:example.org/scoreboard")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["entries"][0]["text"], "over http?");
    assert_eq!(body["entries"][0]["score"], 1);
}

#[tokio::test]
async fn test_unknown_room_yields_empty_scoreboard() {
    let engine = TestEngine::start().await.unwrap();
    let server = TestServer::start(Arc::clone(&engine.ledger)).await.unwrap();

    let response = server
        .get("/rooms/!nowhere:example.org/scoreboard")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["entries"], json!([]));
}

#[tokio::test]
async fn test_reset_and_countdown_over_http() {
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "q");
    engine
        .ingest
        .handle_event(
            &engine.room,
            reaction_event("$r1", "@voter:example.org", "$q1", "👍"),
        )
        .await;

    let server = TestServer::start(Arc::clone(&engine.ledger)).await.unwrap();

    let response = server
        .post_json(
            "/rooms/!aud:example.org/countdown",
            &json!({"startsAt": 1_900_000_000_000i64}),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = server.post("/rooms/!aud:example.org/reset").await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let board = engine.ledger.scoreboard(&engine.room).unwrap();
    assert!(board.is_empty());
    assert!(board.qa_start_time.is_none());

    // Malformed countdown bodies are rejected
    let response = server
        .post_json("/rooms/!aud:example.org/countdown", &json!({}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Determinism
// ============================================================================

#[tokio::test]
async fn test_replaying_a_fixed_sequence_is_deterministic() {
    let mut boards = Vec::new();

    for _ in 0..2 {
        let engine = TestEngine::start().await.unwrap();
        plant_question(&engine, "$q1", "@alice:example.org", "first");
        plant_question(&engine, "$q2", "@bob:example.org", "second");

        for event in [
            reaction_event("$r1", "@v:x", "$q1", "👍"),
            reaction_event("$r2", "$q2", "$q2", "👍"),
            reaction_event("$r3", "@v:x", "$q2", "👎"),
            redaction_event("$d1", MODERATOR, "$r3"),
            reaction_event("$r1", "@v:x", "$q1", "👍"), // replayed duplicate
        ] {
            engine.ingest.handle_event(&engine.room, event).await;
        }
        boards.push(
            engine
                .ledger
                .scoreboard(&engine.room)
                .map(|b| (*b).clone())
                .unwrap(),
        );
    }

    assert_eq!(boards[0], boards[1]);

    // Invariant check on the persisted document: no id in both sets
    let engine = TestEngine::start().await.unwrap();
    plant_question(&engine, "$q1", "@alice:example.org", "q");
    engine
        .ingest
        .handle_event(&engine.room, reaction_event("$r1", "@v:x", "$q1", "👍"))
        .await;
    engine
        .ingest
        .handle_event(&engine.room, reaction_event("$r1", "@v:x", "$q1", "👎"))
        .await;

    let raw = tokio::fs::read_to_string(engine.store.path()).await.unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let message = &doc["rooms"]["!aud:example.org"]["messages"][0];
    assert_eq!(message["activeUpvoteIds"], json!(["$r1"]));
    assert_eq!(message["activeDownvoteIds"], json!([]));
}
