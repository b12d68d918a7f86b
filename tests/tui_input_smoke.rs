use crossterm::event::KeyCode;
use pokerbet::config::GameConfig;
use pokerbet::money::{Amount, Risk};
use pokerbet::tui::app::{AppState, InputAction, RoundPhase, Scene};
use pokerbet::tui::controller::handle_key;

fn setup_table_app() -> AppState {
    let mut app = AppState::new(GameConfig::default(), Some(11));
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn amount_entry_edit_and_cancel() {
    let mut app = setup_table_app();
    let expected = app.bet().to_string();
    assert_eq!(expected, "0.05");

    assert!(app.handle_input(InputAction::AmountOpen));
    assert!(app.amount_entry_active());
    assert_eq!(app.amount_entry_text(), Some(expected.as_str()));

    let _ = app.handle_input(InputAction::AmountDigit(5));
    assert_eq!(app.amount_entry_text(), Some("0.055"));
    // a second decimal point is ignored
    let _ = app.handle_input(InputAction::AmountPoint);
    assert_eq!(app.amount_entry_text(), Some("0.055"));

    let _ = app.handle_input(InputAction::AmountBackspace);
    assert_eq!(app.amount_entry_text(), Some(expected.as_str()));

    let _ = app.handle_input(InputAction::AmountCancel);
    assert!(!app.amount_entry_active());
    assert_eq!(app.bet().to_string(), expected);
}

#[test]
fn amount_entry_steps_and_submits() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::AmountOpen));
    let _ = app.handle_input(InputAction::AmountIncMin);
    let _ = app.handle_input(InputAction::AmountIncMin);
    assert_eq!(app.amount_entry_text(), Some("0.15"));
    let _ = app.handle_input(InputAction::AmountDecMin);
    assert!(app.handle_input(InputAction::AmountSubmit));
    assert_eq!(app.bet(), "0.1".parse::<Amount>().unwrap());
}

#[test]
fn amount_entry_surfaces_limit_errors() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::AmountOpen));
    for _ in 0..4 {
        let _ = app.handle_input(InputAction::AmountBackspace);
    }
    let _ = app.handle_input(InputAction::AmountDigit(0));
    assert!(!app.handle_input(InputAction::AmountSubmit));
    assert_eq!(app.amount_entry_error(), Some("bet 0 is below the minimum bet of 0.05"));

    let _ = app.handle_input(InputAction::AmountBackspace);
    assert!(!app.handle_input(InputAction::AmountSubmit));
    assert_eq!(app.amount_entry_error(), Some("Invalid amount"));

    for d in [5, 0, 0] {
        let _ = app.handle_input(InputAction::AmountDigit(d));
    }
    assert!(!app.handle_input(InputAction::AmountSubmit));
    assert!(app.amount_entry_error().unwrap().contains("exceeds balance"));
    assert!(app.amount_entry_active());
}

#[test]
fn space_submits_and_tick_settles() {
    let mut app = setup_table_app();
    let start = app.balance();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.phase(), RoundPhase::Submitted);
    app.on_tick();
    assert_eq!(app.phase(), RoundPhase::Resolved);

    let rec = app.last_round().unwrap();
    assert_eq!(rec.bet, app.config().limits.min_bet());
    assert_eq!(app.balance(), start.checked_add(rec.outcome.winnings).unwrap());

    // the next round can be submitted straight from Resolved
    assert!(app.handle_input(InputAction::SubmitBet));
    app.on_tick();
    assert_eq!(app.history_len(), 2);
}

#[test]
fn risk_keys_step_by_a_tenth() {
    let mut app = setup_table_app();
    assert_eq!(app.risk(), Risk::ONE);
    handle_key(&mut app, KeyCode::Char('>'));
    assert_eq!(app.risk(), Risk::from_tenths(11));
    handle_key(&mut app, KeyCode::Char('<'));
    handle_key(&mut app, KeyCode::Char('<'));
    assert_eq!(app.risk(), Risk::from_tenths(9));
}

#[test]
fn history_paging_is_bounded() {
    let mut app = setup_table_app();
    for _ in 0..(AppState::HISTORY_PAGE_SIZE + 3) {
        assert!(app.handle_input(InputAction::SubmitBet));
        app.on_tick();
    }
    let _ = app.handle_input(InputAction::ToggleHistory);
    for _ in 0..10 {
        let _ = app.handle_input(InputAction::HistoryUp);
    }
    assert_eq!(app.history_offset(), 3);
    let page = app.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    assert_eq!(page.first().map(|r| r.round), Some(20));
    let _ = app.handle_input(InputAction::HistoryDown);
    assert_eq!(app.history_offset(), 2);
}

#[test]
fn quit_only_from_scenes() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::AmountOpen);
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    handle_key(&mut app, KeyCode::Esc);
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
