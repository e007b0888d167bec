use anyhow::*;
use std::collections::HashMap;

pub fn parse_aa_composition(sequence: &str) -> Result<HashMap<char, u32>> {

    // Count the AA occurrences
    let mut aa_count_by_char: HashMap<char, u32> = HashMap::new();

    for aa in sequence.chars().filter(|c| !c.is_whitespace()) {
        if !aa.is_ascii_alphabetic() {
            bail!("invalid amino acid symbol '{}' in sequence '{}'", aa, sequence)
        }

        *aa_count_by_char.entry(aa.to_ascii_uppercase()).or_insert(0) += 1;
    }

    Ok(aa_count_by_char)
}
