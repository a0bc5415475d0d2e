#[cfg(test)]
mod tests {
    use roster_cli::interaction::{is_affirmative, MenuChoice};

    #[test]
    fn test_menu_dispatch_covers_all_entries() {
        let choices: Vec<Option<MenuChoice>> = (1..=6).map(MenuChoice::from_selection).collect();

        assert_eq!(
            choices,
            vec![
                Some(MenuChoice::AddStudent),
                Some(MenuChoice::ListStudents),
                Some(MenuChoice::DeleteStudent),
                Some(MenuChoice::SearchStudents),
                Some(MenuChoice::ModifyStudent),
                Some(MenuChoice::Exit),
            ]
        );
    }

    #[test]
    fn test_menu_dispatch_rejects_out_of_range() {
        assert!(MenuChoice::from_selection(0).is_none());
        assert!(MenuChoice::from_selection(7).is_none());
        assert!(MenuChoice::from_selection(42).is_none());
    }

    #[test]
    fn test_delete_confirmation_parsing() {
        // Only an exact (case-insensitive) "yes" confirms
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YeS"));

        // Everything else cancels, including empty input
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yes please"));
    }
}
