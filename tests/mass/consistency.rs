#[cfg(test)]
mod verify {
    use molar::analyse;
    use molar::mass::{direct_mass, mass_from_canonical, mass_from_counts};
    use molar::parsing::count_elements;
    use molar::rendering::render;

    const FORMULAS: &[&str] = &[
        "H",
        "He",
        "C6H12O6",
        "CH3COOH",
        "Ca(OH)2",
        "Al2(SO4)3",
        "K4(Fe(CN)6)",
        "((PC5H10O8)2(C5H5N5)(C5H6N2O3))1000",
        "(NH4)3PO4",
        "Mg3(Si4O10)(OH)2",
        "UueOgTsLv",
        "((((H)2)3)4)5O",
        "C60",
        "",
    ];

    fn agree(a: f64, b: f64) -> bool {
        let scale = a
            .abs()
            .max(b.abs());
        scale == 0.0 || (a - b).abs() / scale < 1e-9
    }

    #[test]
    fn direct_and_counted_agree() {
        for formula in FORMULAS {
            let direct = direct_mass(formula).unwrap();
            let counts = count_elements(formula).unwrap();
            let counted = mass_from_counts(&counts).unwrap();
            assert!(
                agree(direct, counted),
                "{}: {} vs {}",
                formula,
                direct,
                counted
            );
        }
    }

    #[test]
    fn canonical_round_trip() {
        for formula in FORMULAS {
            let direct = direct_mass(formula).unwrap();
            let canonical = render(count_elements(formula).unwrap());
            let reparsed = mass_from_canonical(&canonical).unwrap();
            assert!(
                agree(direct, reparsed),
                "{} -> {}: {} vs {}",
                formula,
                canonical,
                direct,
                reparsed
            );
        }
    }

    #[test]
    fn canonical_reparses_to_same_counts() {
        for formula in FORMULAS {
            let counts = count_elements(formula).unwrap();
            let canonical = render(counts.clone());
            assert_eq!(count_elements(&canonical).unwrap(), counts);
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        for formula in FORMULAS {
            let counts = count_elements(formula).unwrap();
            let first = render(counts.clone());
            let second = render(counts);
            assert_eq!(first, second);

            let again = render(count_elements(formula).unwrap());
            assert_eq!(first, again);
        }
    }

    #[test]
    fn analysis_applies_every_check() {
        for formula in FORMULAS {
            let analysis = analyse(formula).unwrap();
            assert!(agree(analysis.mass, direct_mass(formula).unwrap()));
        }
    }

    #[test]
    fn deep_nesting_masses() {
        let formula = format!("{}CO2{}", "(".repeat(60), ")2".repeat(60));
        let analysis = analyse(&formula).unwrap();
        assert_eq!(analysis.counts.get("C"), Some(1 << 60));
        assert_eq!(analysis.counts.get("O"), Some(1 << 61));
    }
}
