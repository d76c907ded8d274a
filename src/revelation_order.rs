//! Chronological (revelation) ordering of the 114 chapters.
//!
//! A fixed permutation of `1..=114` following the traditional Egyptian
//! chronology. The first element (96, Al-'Alaq) and the last (110, An-Nasr)
//! define the revelation-order reading boundaries.

/// Chapter ids in revelation order.
pub const REVELATION_ORDER: [u16; 114] = [
    96, 68, 73, 74, 1, 111, 81, 87, 92, 89, 93, 94, 103, 100, 108, 102, 107, 109, 105, 113, 114,
    112, 53, 80, 97, 91, 85, 95, 106, 101, 75, 104, 77, 50, 90, 86, 54, 38, 7, 72, 36, 25, 35, 19,
    20, 56, 26, 27, 28, 17, 10, 11, 12, 15, 6, 37, 31, 34, 39, 40, 41, 42, 43, 44, 45, 46, 51, 88,
    18, 16, 71, 14, 21, 23, 32, 52, 67, 69, 70, 78, 79, 82, 84, 30, 29, 83, 2, 8, 3, 33, 60, 4,
    99, 57, 47, 13, 55, 76, 65, 98, 59, 24, 22, 63, 58, 49, 66, 64, 61, 62, 48, 5, 9, 110,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_permutation_of_chapter_ids() {
        let mut sorted = REVELATION_ORDER;
        sorted.sort_unstable();
        for (i, id) in sorted.iter().enumerate() {
            assert_eq!(*id, (i + 1) as u16);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(REVELATION_ORDER[0], 96);
        assert_eq!(REVELATION_ORDER[113], 110);
    }
}
