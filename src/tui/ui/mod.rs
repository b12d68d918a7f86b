mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => table::draw_table(f, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::tui::app::InputAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn menu_lists_settings() {
        let app = AppState::new(GameConfig::default(), Some(2));
        let screen = render(&app);
        assert!(screen.contains("Payout Table: Standard"));
        assert!(screen.contains("Starting Balance: $100"));
    }

    #[test]
    fn table_shows_settled_round() {
        let mut app = AppState::new(GameConfig::default(), Some(2));
        app.apply_menu();
        assert!(render(&app).contains("Space to deal"));
        app.handle_input(InputAction::SubmitBet);
        app.on_tick();
        let screen = render(&app);
        let outcome = &app.last_round().unwrap().outcome;
        assert!(screen.contains(outcome.result.name()));
        assert!(screen.contains(&format!("Balance: ${}", app.balance())));
    }
}
