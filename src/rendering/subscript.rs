/// Replace ASCII digits with their Unicode subscript forms, so "C6H12O6"
/// becomes "C₆H₁₂O₆". Anything else is left alone.
pub fn prettify(formula: &str) -> String {
    formula
        .chars()
        .map(|c| match c {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            '9' => '₉',
            _ => c,
        })
        .collect()
}

pub(crate) fn is_subscript(c: char) -> bool {
    ('₀'..='₉').contains(&c)
}
