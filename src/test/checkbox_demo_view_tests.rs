#[cfg(test)]
mod checkbox_demo_view {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use crate::terminal::terminal_manager::init_test;
    use crate::test::utils::test_utils::{buffer_lines, key, left_click, TEST_RESOLUTION};
    use crate::ui::resolution::Resolution;
    use crate::view::checkbox_demo_view::{build_checkbox_demo_view, CheckboxDemoView, PanelSelection, MULTI_OPTION_TITLE, YES_NO_TITLE};
    use crate::view::{InputHandler, View};
    use crate::widget::checkbox_widget::CheckboxSymbols;
    use ratatui::backend::TestBackend;

    fn draw_lines(view: &mut CheckboxDemoView<'_, TestBackend>) -> Vec<String> {
        let frame = view.draw().unwrap();
        buffer_lines(frame.buffer)
    }

    fn assert_selections(view: &CheckboxDemoView<'_, TestBackend>, yes_no: Option<&str>, multi: Option<&str>) {
        let expected = vec![
            PanelSelection { title: YES_NO_TITLE.to_string(), selection: yes_no.map(String::from) },
            PanelSelection { title: MULTI_OPTION_TITLE.to_string(), selection: multi.map(String::from) }
        ];
        assert_eq!(expected, view.get_selections());
    }

    #[test]
    fn test_initial_render() {
        // GIVEN a fresh demo view
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());

        // WHEN we draw it
        let lines = draw_lines(&mut view);

        // THEN we expect the Yes/No panel on top with "YES" checked
        assert!(lines[0].contains(YES_NO_TITLE));
        assert!(lines[1].starts_with("│[x] YES"), "Unexpected line: {}", lines[1]);
        assert!(lines[2].starts_with("│[ ] NO"), "Unexpected line: {}", lines[2]);
        // AND the four option panel below it with nothing checked
        assert!(lines[4].contains(MULTI_OPTION_TITLE));
        for (y, label) in [(5, "option1"), (6, "option2"), (7, "option3"), (8, "option4")] {
            assert!(lines[y].starts_with(format!("│[ ] {}", label).as_str()), "Unexpected line: {}", lines[y]);
        }
        // AND the usage line along the bottom
        assert!(lines[15].starts_with("Up/Down - move, Tab - switch list"), "Unexpected line: {}", lines[15]);
        assert_selections(&view, Some("YES"), None);
    }

    #[test]
    fn test_keyboard_select_no() {
        // GIVEN a fresh demo view, focused on the Yes/No panel
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());
        assert_eq!(0, view.get_focused_panel());

        // WHEN we move down to "NO" and press enter
        let moved = view.handle_input(Some(key(KeyCode::Down))).unwrap();
        assert!(moved.generic_input_result.requires_view_refresh);
        let selected = view.handle_input(Some(key(KeyCode::Enter))).unwrap();

        // THEN we expect a redraw to be asked for
        assert!(!selected.generic_input_result.done);
        assert!(selected.generic_input_result.requires_view_refresh);
        // AND only "NO" to be checked once drawn
        let lines = draw_lines(&mut view);
        assert!(lines[1].starts_with("│[ ] YES"), "Unexpected line: {}", lines[1]);
        assert!(lines[2].starts_with("│[x] NO"), "Unexpected line: {}", lines[2]);
        assert_selections(&view, Some("NO"), None);
    }

    #[test]
    fn test_keyboard_select_option3() {
        // GIVEN a fresh demo view
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());

        // WHEN we tab to the four option panel, move down twice and press space
        view.handle_input(Some(key(KeyCode::Tab))).unwrap();
        assert_eq!(1, view.get_focused_panel());
        view.handle_input(Some(key(KeyCode::Down))).unwrap();
        view.handle_input(Some(key(KeyCode::Down))).unwrap();
        let selected = view.handle_input(Some(key(KeyCode::Char(' ')))).unwrap();

        // THEN we expect only "option3" to be checked
        assert!(selected.generic_input_result.requires_view_refresh);
        let lines = draw_lines(&mut view);
        assert!(lines[5].starts_with("│[ ] option1"), "Unexpected line: {}", lines[5]);
        assert!(lines[6].starts_with("│[ ] option2"), "Unexpected line: {}", lines[6]);
        assert!(lines[7].starts_with("│[x] option3"), "Unexpected line: {}", lines[7]);
        assert!(lines[8].starts_with("│[ ] option4"), "Unexpected line: {}", lines[8]);
        // AND the Yes/No panel to be untouched
        assert_selections(&view, Some("YES"), Some("option3"));
    }

    #[test]
    fn test_click_selects_option() {
        // GIVEN a drawn demo view
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());
        draw_lines(&mut view);

        // WHEN we click on the "option3" label
        let result = view.handle_input(Some(left_click(6, 7))).unwrap();

        // THEN we expect it selected and its panel focused
        assert!(result.generic_input_result.requires_view_refresh);
        assert_eq!(1, view.get_focused_panel());
        assert_selections(&view, Some("YES"), Some("option3"));

        // WHEN we then click on the "NO" indicator
        view.handle_input(Some(left_click(2, 2))).unwrap();

        // THEN we expect focus back on the Yes/No panel with "NO" selected
        assert_eq!(0, view.get_focused_panel());
        assert_selections(&view, Some("NO"), Some("option3"));
    }

    #[test]
    fn test_click_on_border_ignored() {
        // GIVEN a drawn demo view
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());
        draw_lines(&mut view);

        // WHEN we click on the top border of the four option panel
        let result = view.handle_input(Some(left_click(5, 4))).unwrap();

        // THEN we expect nothing to change
        assert!(!result.generic_input_result.requires_view_refresh);
        assert_eq!(0, view.get_focused_panel());
        assert_selections(&view, Some("YES"), None);
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        // GIVEN a fresh demo view with "YES" selected and focused
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());

        // WHEN we press enter on "YES" twice
        let first = view.handle_input(Some(key(KeyCode::Enter))).unwrap();
        let second = view.handle_input(Some(key(KeyCode::Enter))).unwrap();

        // THEN we expect the selection unchanged, though each write still notifies
        assert!(first.generic_input_result.requires_view_refresh);
        assert!(second.generic_input_result.requires_view_refresh);
        assert_selections(&view, Some("YES"), None);
    }

    #[test]
    fn test_back_tab_wraps() {
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());

        view.handle_input(Some(key(KeyCode::BackTab))).unwrap();
        assert_eq!(1, view.get_focused_panel());

        view.handle_input(Some(key(KeyCode::Tab))).unwrap();
        assert_eq!(0, view.get_focused_panel());
    }

    #[test]
    fn test_key_release_ignored() {
        // GIVEN a fresh demo view focused on "YES"
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());
        view.handle_input(Some(key(KeyCode::Down))).unwrap();

        // WHEN we get only the release of an enter key
        let release = Event::Key(KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release));
        let result = view.handle_input(Some(release)).unwrap();

        // THEN we expect nothing to have been selected
        assert!(!result.generic_input_result.requires_view_refresh);
        assert_selections(&view, Some("YES"), None);
    }

    #[test]
    fn test_resize_requests_redraw() {
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());

        let result = view.handle_input(Some(Event::Resize(80, 24))).unwrap();

        assert!(result.generic_input_result.requires_view_refresh);
        assert!(!result.generic_input_result.done);
    }

    #[test]
    fn test_quit_returns_selections() {
        // GIVEN a demo view where "NO" has been selected
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());
        view.handle_input(Some(key(KeyCode::Down))).unwrap();
        view.handle_input(Some(key(KeyCode::Enter))).unwrap();

        // WHEN we press 'q'
        let result = view.handle_input(Some(key(KeyCode::Char('q')))).unwrap();

        // THEN we expect the view to be done and report both panels
        assert!(result.generic_input_result.done);
        let selections = result.view_specific_result.unwrap();
        assert_eq!(2, selections.len());
        assert_eq!(Some(String::from("NO")), selections[0].selection);
        assert_eq!(None, selections[1].selection);
    }

    #[test]
    fn test_escape_finishes() {
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());

        let result = view.handle_input(Some(key(KeyCode::Esc))).unwrap();

        assert!(result.generic_input_result.done);
    }

    #[test]
    fn test_terminal_too_small() {
        // GIVEN a terminal smaller than the minimum resolution
        let mut terminal_manager = init_test(Resolution::new(30, 5)).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());

        // WHEN we draw
        let lines = draw_lines(&mut view);

        // THEN we expect a warning instead of the panels
        assert!(lines[0].starts_with("Terminal too small"), "Unexpected line: {}", lines[0]);
        assert!(!lines.iter().any(|l| l.contains("YES")));
    }

    #[test]
    fn test_click_ignored_after_shrinking_too_small() {
        // GIVEN a demo view drawn at full size
        let mut terminal_manager = init_test(TEST_RESOLUTION).unwrap();
        let mut view = build_checkbox_demo_view(&mut terminal_manager, CheckboxSymbols::default());
        draw_lines(&mut view);

        // AND the terminal then shrinks below the minimum and is redrawn
        view.terminal_manager.terminal.backend_mut().resize(30, 10);
        let lines = draw_lines(&mut view);
        assert!(lines[0].starts_with("Terminal too small"), "Unexpected line: {}", lines[0]);

        // WHEN we click where "option3" used to be
        let result = view.handle_input(Some(left_click(6, 7))).unwrap();

        // THEN we expect nothing to be selected, since no rows are showing
        assert!(!result.generic_input_result.requires_view_refresh);
        assert_eq!(0, view.get_focused_panel());
        assert_selections(&view, Some("YES"), None);
    }
}
