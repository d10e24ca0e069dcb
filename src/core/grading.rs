//! # Grading Policy
//!
//! Maps a numeric score to a letter grade band. Total over `i32`: anything
//! outside the A–D bands (including negatives and scores above 100) is an F.
//! Range checking is the caller's business, not ours.

/// Letter for a single score.
///
/// | Band        | Letter |
/// |-------------|--------|
/// | `[90, 100]` | A      |
/// | `[80, 90)`  | B      |
/// | `[70, 80)`  | C      |
/// | `[60, 70)`  | D      |
/// | otherwise   | F      |
pub fn classify(score: i32) -> char {
    match score {
        90..=100 => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}
