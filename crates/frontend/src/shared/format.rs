//! Small display helpers for the card views.

/// Avatar initials: first letter of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// "15/20" style occupancy text.
pub fn occupancy(enrolled: u32, capacity: u32) -> String {
    format!("{}/{}", enrolled, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Chen"), "AC");
        assert_eq!(initials("Maria Rodriguez"), "MR");
        assert_eq!(initials("sophie"), "S");
        assert_eq!(initials("Jean Claude Van Damme"), "JC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_occupancy() {
        assert_eq!(occupancy(15, 20), "15/20");
    }
}
