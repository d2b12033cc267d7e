//! Daily check-in code.
//!
//! The code is read off a screen and typed by students, so the alphabet
//! skips the 0/O and 1/I lookalikes. Randomness is injected: the caller
//! passes a picker that maps an exclusive upper bound to an index, which
//! keeps the generator deterministic under test.

/// Characters a check-in code may contain.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a check-in code.
pub const CODE_LEN: usize = 6;

/// Builds a fresh code by asking `pick` for one alphabet index per
/// character. `pick(n)` must return a value in `[0, n)`; anything larger
/// is wrapped back into range rather than trusted.
pub fn attendance_code(mut pick: impl FnMut(usize) -> usize) -> String {
    (0..CODE_LEN)
        .map(|_| {
            let idx = pick(CODE_ALPHABET.len()) % CODE_ALPHABET.len();
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_fixed_length_and_alphabet() {
        let mut counter = 0usize;
        let code = attendance_code(|n| {
            counter += 7;
            counter % n
        });
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn deterministic_picker_gives_deterministic_code() {
        let code = attendance_code(|_| 0);
        assert_eq!(code, "AAAAAA");

        let mut i = 0usize;
        let code = attendance_code(|_| {
            let v = i;
            i += 1;
            v
        });
        assert_eq!(code, "ABCDEF");
    }

    #[test]
    fn out_of_range_picks_are_wrapped() {
        let code = attendance_code(|n| n + 1);
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }
}
