//! Toggle-pattern generation for the bulk-write step

/// Default number of output samples streamed by the bulk write.
pub const DEFAULT_PATTERN_LEN: usize = 1_000_000;

/// Build the toggle pattern: 0xFF on even indices, 0x00 on odd, so every
/// pin flips on every pin-clock tick.
pub fn toggle_pattern(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| if i % 2 == 0 { 0xFF } else { 0x00 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_rule() {
        let data = toggle_pattern(1000);
        assert_eq!(data.len(), 1000);
        for (i, &byte) in data.iter().enumerate() {
            let expected = if i % 2 == 0 { 0xFF } else { 0x00 };
            assert_eq!(byte, expected, "wrong sample at index {}", i);
        }
    }

    #[test]
    fn test_default_length() {
        let data = toggle_pattern(DEFAULT_PATTERN_LEN);
        assert_eq!(data.len(), DEFAULT_PATTERN_LEN);
        assert_eq!(data[0], 0xFF);
        assert_eq!(data[1], 0x00);
        assert_eq!(data[DEFAULT_PATTERN_LEN - 2], 0xFF);
        assert_eq!(data[DEFAULT_PATTERN_LEN - 1], 0x00);
    }

    #[test]
    fn test_empty_pattern() {
        assert!(toggle_pattern(0).is_empty());
    }
}
