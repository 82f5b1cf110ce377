use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interactive::app::Popup;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    NextPanel,
    PrevPanel,

    // Dashboard actions
    NewTeam,
    NewEmployee,
    EditSelected,
    DeleteSelected,
    Refresh,
    Logout,

    // Forms
    NextField,
    PrevField,
    TypeChar(char),
    Backspace,
    CycleChoice(isize),
    Submit,
    Cancel,

    // Auth screens
    SwitchAuthScreen,

    // Confirmation
    Confirm,

    // General
    Help,
    Quit,
    DismissNotification,

    None,
}

pub fn map_key(key: KeyEvent, route: Route, popup: Option<Popup>) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }
    match route {
        Route::Login | Route::Register => map_auth_key(key),
        Route::Dashboard => map_dashboard_key(key),
    }
}

fn map_form_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Left => Action::CycleChoice(-1),
        KeyCode::Right => Action::CycleChoice(1),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::TypeChar(c),
        _ => Action::None,
    }
}

fn map_auth_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::F(2) => Action::SwitchAuthScreen,
        KeyCode::Esc => Action::Quit,
        _ => map_form_key(key),
    }
}

fn map_dashboard_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Tab => Action::NextPanel,
        KeyCode::BackTab => Action::PrevPanel,
        KeyCode::Char('t') => Action::NewTeam,
        KeyCode::Char('a') => Action::NewEmployee,
        KeyCode::Char('e') | KeyCode::Enter => Action::EditSelected,
        KeyCode::Char('d') | KeyCode::Delete => Action::DeleteSelected,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('L') => Action::Logout,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: Popup) -> Action {
    match popup {
        Popup::TeamForm | Popup::EmployeeForm => map_form_key(key),
        Popup::Confirmation(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::app::ConfirmAction;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn dashboard_shortcuts() {
        assert_eq!(map_key(key(KeyCode::Char('t')), Route::Dashboard, None), Action::NewTeam);
        assert_eq!(map_key(key(KeyCode::Char('a')), Route::Dashboard, None), Action::NewEmployee);
        assert_eq!(map_key(key(KeyCode::Char('d')), Route::Dashboard, None), Action::DeleteSelected);
    }

    #[test]
    fn letters_type_into_forms() {
        assert_eq!(
            map_key(key(KeyCode::Char('t')), Route::Dashboard, Some(Popup::TeamForm)),
            Action::TypeChar('t')
        );
        assert_eq!(map_key(key(KeyCode::Char('q')), Route::Login, None), Action::TypeChar('q'));
    }

    #[test]
    fn confirmation_keys() {
        let popup = Some(Popup::Confirmation(ConfirmAction::Logout));
        assert_eq!(map_key(key(KeyCode::Char('y')), Route::Dashboard, popup), Action::Confirm);
        assert_eq!(map_key(key(KeyCode::Esc), Route::Dashboard, popup), Action::Cancel);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Route::Login, None), Action::Quit);
        assert_eq!(map_key(ctrl_c, Route::Dashboard, Some(Popup::EmployeeForm)), Action::Quit);
    }
}
