#[cfg(test)]
mod verify {
    use molar::error::MolarError;
    use molar::molar_mass;
    use molar::rendering::Identity;

    #[test]
    fn unbalanced_points_at_parenthesis() {
        let formula = "C6H12O6)";
        let error = molar_mass(formula).unwrap_err();
        let presented = MolarError::new(formula, &error);

        assert_eq!(presented.offset, Some(7));
        assert_eq!(presented.to_string(), "error: C6H12O6):8 unbalanced parentheses");

        let text = presented.full_details(&Identity);
        assert!(text.contains("| C6H12O6)\n|        ^"));
    }

    #[test]
    fn unknown_element_points_at_symbol() {
        let formula = "NaXx";
        let error = molar_mass(formula).unwrap_err();
        let presented = MolarError::new(formula, &error);

        assert_eq!(presented.problem, "unknown element 'Xx'");
        let text = presented.full_details(&Identity);
        assert!(text.contains("| NaXx\n|   ^"));
    }
}
