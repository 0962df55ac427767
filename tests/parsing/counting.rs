#[cfg(test)]
mod verify {
    use molar::language::ElementCounts;
    use molar::parsing::count_elements;

    fn entries(counts: &ElementCounts) -> Vec<(&str, u64)> {
        counts
            .iter()
            .collect()
    }

    #[test]
    fn single_elements() {
        let counts = count_elements("H").unwrap();
        assert_eq!(entries(&counts), vec![("H", 1)]);

        let counts = count_elements("He").unwrap();
        assert_eq!(entries(&counts), vec![("He", 1)]);

        let counts = count_elements("Uue").unwrap();
        assert_eq!(entries(&counts), vec![("Uue", 1)]);
    }

    #[test]
    fn explicit_counts() {
        let counts = count_elements("C6H12O6").unwrap();
        assert_eq!(entries(&counts), vec![("C", 6), ("H", 12), ("O", 6)]);
    }

    #[test]
    fn count_of_zero_is_kept() {
        let counts = count_elements("H0").unwrap();
        assert_eq!(entries(&counts), vec![("H", 0)]);
    }

    #[test]
    fn groups_multiply() {
        let counts = count_elements("Ca(OH)2").unwrap();
        assert_eq!(entries(&counts), vec![("Ca", 1), ("H", 2), ("O", 2)]);

        let counts = count_elements("Al2(SO4)3").unwrap();
        assert_eq!(entries(&counts), vec![("Al", 2), ("O", 12), ("S", 3)]);
    }

    #[test]
    fn group_without_multiplier() {
        let counts = count_elements("(CH3)(CH2)").unwrap();
        assert_eq!(entries(&counts), vec![("C", 2), ("H", 5)]);
    }

    #[test]
    fn empty_inputs() {
        assert!(count_elements("")
            .unwrap()
            .is_empty());
        assert!(count_elements("()")
            .unwrap()
            .is_empty());
        assert!(count_elements("(()3)2")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn nested_groups() {
        let counts = count_elements("((PC5H10O8)2(C5H5N5)(C5H6N2O3))1000").unwrap();
        assert_eq!(
            entries(&counts),
            vec![
                ("C", 20000),
                ("H", 31000),
                ("N", 7000),
                ("O", 19000),
                ("P", 2000)
            ]
        );
    }

    #[test]
    fn same_element_across_levels() {
        let counts = count_elements("H(H(H)2)3").unwrap();
        // 1 + 3 * (1 + 2)
        assert_eq!(counts.get("H"), Some(10));
    }

    #[test]
    fn fifty_levels_deep() {
        let formula = format!("{}H{}", "(".repeat(50), ")2".repeat(50));
        let counts = count_elements(&formula).unwrap();
        assert_eq!(counts.get("H"), Some(1 << 50));
    }

    #[test]
    fn very_deep_nesting() {
        let depth = 100_000;
        let formula = format!("{}H2O{}", "(".repeat(depth), ")".repeat(depth));
        let counts = count_elements(&formula).unwrap();
        assert_eq!(entries(&counts), vec![("H", 2), ("O", 1)]);
    }

    #[test]
    fn unknown_symbols_still_count() {
        // whether a symbol is a real element is the mass table's concern
        let counts = count_elements("Xx2").unwrap();
        assert_eq!(entries(&counts), vec![("Xx", 2)]);
    }
}
