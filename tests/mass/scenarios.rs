#[cfg(test)]
mod verify {
    use molar::language::FormulaError;
    use molar::{analyse, molar_mass};

    // Reference values from https://www.lfd.uci.edu/~gohlke/molmass/
    fn relative_error(observed: f64, actual: f64) -> f64 {
        ((observed - actual) / actual).abs()
    }

    const TOLERANCE: f64 = 0.1 / 100.0;

    #[test]
    fn single_uppercase() {
        let mass = molar_mass("H").unwrap();
        assert!(relative_error(mass, 1.008) < TOLERANCE);
    }

    #[test]
    fn single_mixed_case() {
        let mass = molar_mass("He").unwrap();
        assert!(relative_error(mass, 4.0026) < TOLERANCE);
    }

    #[test]
    fn several_without_parentheses() {
        let analysis = analyse("C6H12O6").unwrap();
        assert!(relative_error(analysis.mass, 180.156) < TOLERANCE);
        assert!(relative_error(analysis.mass, 180.1559) < 0.001 / 100.0);
        assert_eq!(analysis.canonical, "C6H12O6");
    }

    #[test]
    fn several_with_parentheses() {
        let mass = molar_mass("((PC5H10O8)2(C5H5N5)(C5H6N2O3))1000").unwrap();
        assert!(relative_error(mass, 735443.2) < TOLERANCE);
        assert!(relative_error(mass, 735443.2) < 0.001 / 100.0);
    }

    #[test]
    fn common_compounds() {
        let cases = [
            ("H2O", 18.015),
            ("NaCl", 58.44),
            ("Ca(OH)2", 74.09),
            ("Al2(SO4)3", 342.15),
            ("CH3COOH", 60.052),
            ("K4(Fe(CN)6)", 368.35),
        ];
        for (formula, expected) in cases {
            let mass = molar_mass(formula).unwrap();
            assert!(
                relative_error(mass, expected) < TOLERANCE,
                "{} came out as {}",
                formula,
                mass
            );
        }
    }

    #[test]
    fn unmatched_parenthesis_fails() {
        assert_eq!(
            molar_mass("C6H12O6)"),
            Err(FormulaError::UnbalancedParentheses(7))
        );
        assert_eq!(
            molar_mass("(C6H12O6"),
            Err(FormulaError::UnbalancedParentheses(0))
        );
    }

    #[test]
    fn unknown_element_fails() {
        match molar_mass("Xx2") {
            Err(FormulaError::UnknownElement(_, symbol)) => assert_eq!(symbol, "Xx"),
            other => panic!("expected unknown element, got {:?}", other),
        }

        match molar_mass("C6H12Oo6") {
            Err(FormulaError::UnknownElement(offset, symbol)) => {
                assert_eq!(symbol, "Oo");
                assert_eq!(offset, Some(5));
            }
            other => panic!("expected unknown element, got {:?}", other),
        }
    }

    #[test]
    fn syntax_error_fails() {
        assert_eq!(
            molar_mass("H2O!"),
            Err(FormulaError::UnexpectedCharacter(3, '!'))
        );
    }
}
