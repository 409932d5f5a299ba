//! Automated play integration tests
//!
//! Exhibition games between two automated seats, game-over detection and
//! pause/resume.

mod common;

use chessboard_client::game::PieceColor;
use chessboard_client::rendering::TextSink;
use chessboard_client::{AutomationStop, ColorPreference, NewGameConfig};
use common::{Call, FakeAuthority, TestClient, client_with};
use std::time::Duration;

async fn exhibition(authority: FakeAuthority) -> TestClient {
    let client = client_with(authority);
    client
        .start_new_game(&NewGameConfig::Exhibition {
            white_bot: "wyatt".to_string(),
            black_bot: "moose".to_string(),
        })
        .await
        .expect("session");
    client
}

#[tokio::test(start_paused = true)]
async fn test_exhibition_plays_until_checkmate() {
    // fool's mate, four plies
    let authority = FakeAuthority::default();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        authority.script_bot(from, to);
    }
    for status in ["active", "active", "active", "Checkmate - Black wins"] {
        authority.script_status(status);
    }
    let client = exhibition(authority).await;
    client.begin_play().await.expect("begin");

    assert_eq!(client.authority().moves_applied.get(), 4);
    assert_eq!(client.authority().automated_count(), 4);
    assert_eq!(
        client.move_history(),
        vec!["1. f2f3 e7e5".to_string(), "2. g2g4 d8h4".to_string()]
    );
    {
        let surface = client.surface();
        assert_eq!(surface.text(TextSink::GameOverTitle), Some("Checkmate!"));
        assert_eq!(surface.text(TextSink::GameOverDetails), Some("Black wins!"));
        assert_eq!(surface.text(TextSink::Status), Some("Checkmate - Black wins"));
    }

    // nothing more is requested once the game is over
    let report = client.run_automated_turns().await;
    assert_eq!(report.moves_applied, 0);
    assert!(matches!(report.stop, AutomationStop::GameOver(_)));
    assert_eq!(client.authority().automated_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_each_request_names_the_seat_on_move() {
    let authority = FakeAuthority::default();
    authority.script_bot("e2", "e4");
    authority.script_bot("e7", "e5");
    let client = exhibition(authority).await;
    client.begin_play().await.expect("begin");

    let requested: Vec<_> = client
        .authority()
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Automated(color) => color,
            _ => None,
        })
        .collect();
    assert_eq!(
        requested,
        vec![
            PieceColor::White,
            PieceColor::Black,
            PieceColor::White,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_pause_and_resume_exhibition() {
    let authority = FakeAuthority::default();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
        authority.script_bot(from, to);
    }
    let client = exhibition(authority).await;

    let pauser = async {
        tokio::time::sleep(Duration::from_millis(700)).await;
        client.pause_exhibition();
    };
    let (started, ()) = tokio::join!(client.begin_play(), pauser);
    started.expect("begin");

    assert!(client.is_exhibition_paused());
    assert_eq!(client.authority().moves_applied.get(), 1);
    assert!(client.pending_move().is_none());

    let report = client.resume_exhibition().await;
    assert_eq!(report.moves_applied, 3);
    assert_eq!(
        report.stop,
        AutomationStop::Rejected("No move available".to_string())
    );
    assert_eq!(client.authority().moves_applied.get(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_stops_automation() {
    let authority = FakeAuthority::default();
    authority.script_bot("e2", "e4");
    let client = exhibition(authority).await;
    client.authority().transport_down.set(true);

    let report = client.run_automated_turns().await;
    assert_eq!(report.stop, AutomationStop::NotStarted);

    client.begin_play().await.expect("begin");
    assert_eq!(client.authority().moves_applied.get(), 0);
    assert_eq!(
        client.surface().text(TextSink::Status),
        Some(chessboard_client::core::GENERIC_FAILURE_STATUS)
    );
}

#[tokio::test(start_paused = true)]
async fn test_turn_change_during_delay_cancels_request() {
    // the turn is checked again after the delay, right before asking
    let authority = FakeAuthority::default();
    authority.script_bot("e7", "e5");
    let client = client_with(authority);
    client
        .start_new_game(&NewGameConfig::VsBot {
            human: ColorPreference::White,
            bot: None,
        })
        .await
        .expect("session");
    client.authority().snapshot.borrow_mut().turn = PieceColor::Black;

    let takeback = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        client.authority().snapshot.borrow_mut().turn = PieceColor::White;
    };
    let (started, ()) = tokio::join!(client.begin_play(), takeback);
    started.expect("begin");

    assert_eq!(client.authority().automated_count(), 0);
    assert_eq!(client.authority().moves_applied.get(), 0);
    assert!(client.move_history().is_empty());

    let report = client.run_automated_turns().await;
    assert_eq!(report.stop, AutomationStop::HumanTurn);
    assert_eq!(client.authority().automated_count(), 0);
}
