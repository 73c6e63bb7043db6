use super::*;
use client_core::Phase;
use crossbeam_channel::{bounded, Receiver};
use serde_json::json;
use shared::domain::Brief;

fn queue() -> (Sender<BackendCommand>, Receiver<BackendCommand>) {
    bounded(8)
}

fn scenario_brief() -> Brief {
    Brief::from_value(json!({
        "title": "Best Running Shoes for Flat Feet",
        "word_count": 1200,
        "h2_headings": ["Intro", "Buying Guide"],
    }))
    .expect("brief")
}

fn finish_brief(session: &mut Session, rx: &Receiver<BackendCommand>, status: &mut String) {
    let cmd = rx.try_recv().expect("queued brief command");
    apply_ui_event(
        session,
        UiEvent::BriefFinished {
            ticket: cmd.ticket(),
            result: Ok(scenario_brief()),
        },
        status,
    );
}

#[test]
fn submit_brief_queues_command_and_marks_pending() {
    let (tx, rx) = queue();
    let mut session = Session::new();

    submit_brief(&mut session, "best running shoes for flat feet", &tx).expect("submit");

    assert_eq!(session.phase(), Phase::BriefLoading);
    match rx.try_recv().expect("queued command") {
        BackendCommand::FetchBrief { ticket, request } => {
            assert_eq!(Some(ticket), session.in_flight());
            assert_eq!(request.keyword, "best running shoes for flat feet");
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn brief_success_event_moves_to_ready() {
    let (tx, rx) = queue();
    let mut session = Session::new();
    let mut status = String::new();

    submit_brief(&mut session, "kw", &tx).expect("submit");
    finish_brief(&mut session, &rx, &mut status);

    assert_eq!(session.phase(), Phase::BriefReady);
    assert!(status.starts_with("Brief ready at "));
}

#[test]
fn brief_remote_failure_shows_body_and_reenables_form() {
    let (tx, rx) = queue();
    let mut session = Session::new();
    let mut status = String::new();

    submit_brief(&mut session, "kw", &tx).expect("submit");
    let cmd = rx.try_recv().expect("queued command");
    apply_ui_event(
        &mut session,
        UiEvent::BriefFinished {
            ticket: cmd.ticket(),
            result: Err(ServiceError::Remote {
                status: 500,
                body: "service unavailable".to_string(),
            }),
        },
        &mut status,
    );

    assert_eq!(session.error(), Some("service unavailable"));
    assert!(session.brief().is_none());
    assert!(session.can_request_brief("kw"));
    assert!(status.starts_with("Brief request failed (Service)"));
}

#[test]
fn article_cycle_and_reset_on_new_brief() {
    let (tx, rx) = queue();
    let mut session = Session::new();
    let mut status = String::new();

    submit_brief(&mut session, "kw", &tx).expect("submit brief");
    finish_brief(&mut session, &rx, &mut status);

    submit_article(&mut session, &tx).expect("submit article");
    assert_eq!(session.phase(), Phase::ArticleLoading);
    let cmd = rx.try_recv().expect("queued article command");
    match &cmd {
        BackendCommand::GenerateArticle { request, .. } => {
            assert_eq!(request.keyword, "kw");
            assert_eq!(request.brief, scenario_brief());
        }
        other => panic!("unexpected command {other:?}"),
    }
    apply_ui_event(
        &mut session,
        UiEvent::ArticleFinished {
            ticket: cmd.ticket(),
            result: Ok("# Title\n\nBody text".to_string()),
        },
        &mut status,
    );
    assert_eq!(session.phase(), Phase::ArticleReady);
    assert!(status.starts_with("Article ready at "));

    submit_brief(&mut session, "another", &tx).expect("submit brief");
    assert!(session.brief().is_none());
    assert!(session.article().is_none());
}

#[test]
fn article_without_brief_is_not_queued() {
    let (tx, rx) = queue();
    let mut session = Session::new();

    assert_eq!(submit_article(&mut session, &tx), Err(SessionError::NoBrief));
    assert!(rx.try_recv().is_err());
}

#[test]
fn double_submit_is_rejected_by_the_session() {
    let (tx, rx) = queue();
    let mut session = Session::new();

    submit_brief(&mut session, "one", &tx).expect("first submit");
    assert!(submit_brief(&mut session, "two", &tx).is_err());
    assert_eq!(rx.len(), 1);
}

#[test]
fn disconnected_backend_resolves_request_with_error() {
    let (tx, rx) = queue();
    drop(rx);
    let mut session = Session::new();

    submit_brief(&mut session, "kw", &tx).expect("submit");

    assert_eq!(session.phase(), Phase::Idle);
    assert!(session
        .error()
        .is_some_and(|error| error.contains("Backend worker is not running")));
}

#[test]
fn full_queue_resolves_request_with_error() {
    let (tx, _rx) = bounded(1);
    let mut other = Session::new();
    let filler = other.begin_brief("filler").expect("filler");
    tx.try_send(BackendCommand::FetchBrief {
        ticket: filler.ticket,
        request: filler.payload,
    })
    .expect("fill queue");

    let mut session = Session::new();
    submit_brief(&mut session, "kw", &tx).expect("submit");

    assert_eq!(session.error(), Some("UI command queue is full; please retry"));
    assert!(session.can_request_brief("kw"));
}

#[test]
fn stale_events_do_not_touch_status() {
    let (tx, rx) = queue();
    let mut session = Session::new();
    let mut status = "unchanged".to_string();

    submit_brief(&mut session, "kw", &tx).expect("submit");
    let cmd = rx.try_recv().expect("queued command");
    let ticket = cmd.ticket();
    apply_ui_event(
        &mut session,
        UiEvent::BriefFinished {
            ticket,
            result: Ok(scenario_brief()),
        },
        &mut status,
    );
    status = "unchanged".to_string();

    apply_ui_event(
        &mut session,
        UiEvent::BriefFinished {
            ticket,
            result: Err(ServiceError::Transport("late".to_string())),
        },
        &mut status,
    );
    assert_eq!(status, "unchanged");
    assert!(session.error().is_none());
}

#[test]
fn info_and_backend_failure_update_status() {
    let mut session = Session::new();
    let mut status = String::new();

    apply_ui_event(&mut session, UiEvent::Info("Ready".to_string()), &mut status);
    assert_eq!(status, "Ready");

    apply_ui_event(
        &mut session,
        UiEvent::BackendFailed("backend worker startup failure".to_string()),
        &mut status,
    );
    assert_eq!(status, "backend worker startup failure");
    assert_eq!(session.phase(), Phase::Idle);
}
