use crate::language::ElementCounts;

/// Write counts out as a formula in Hill system order: carbon first, then
/// hydrogen, then everything else alphabetically. Every symbol is followed by
/// its count, including a count of 1, so water comes out as "H2O1".
///
/// The counts are consumed; clone them first if you still need them.
pub fn render(mut counts: ElementCounts) -> String {
    let mut result = String::new();

    for symbol in ["C", "H"] {
        if let Some(count) = counts.remove(symbol) {
            result.push_str(symbol);
            result.push_str(&count.to_string());
        }
    }

    while let Some((symbol, count)) = counts.pop_first() {
        result.push_str(&symbol);
        result.push_str(&count.to_string());
    }

    result
}
