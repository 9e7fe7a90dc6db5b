//! Exhaustive nearest-match search over a finite candidate set.
//!
//! The decoder inverts the forward transform by asking it about every
//! candidate and keeping the one whose score is smallest. The search
//! itself knows nothing about ciphers: it walks the candidates in the
//! order given and keeps the first candidate with the strictly smallest
//! score, so ties resolve to the earliest candidate.

/// A candidate together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<C> {
    /// The winning candidate.
    pub candidate: C,
    /// Its score (lower is better).
    pub score: f64,
}

/// Returns the candidate with minimum score, or `None` if `candidates`
/// is empty.
///
/// Scores are compared with `<`, so a later candidate only replaces the
/// current best if it is strictly better. Errors from `score` abort the
/// search and are returned unchanged. A NaN score never replaces an
/// existing best.
///
/// # Examples
///
/// ```
/// use calculus_cipher::search::nearest_match;
///
/// let target = 7.1_f64;
/// let best = nearest_match([1.0, 7.0, 7.4, 9.0], |c: &f64| {
///     Ok::<_, ()>((c - target).abs())
/// })
/// .unwrap()
/// .unwrap();
/// assert_eq!(best.candidate, 7.0);
/// ```
pub fn nearest_match<C, I, S, E>(candidates: I, mut score: S) -> Result<Option<Match<C>>, E>
where
    I: IntoIterator<Item = C>,
    S: FnMut(&C) -> Result<f64, E>,
{
    let mut best: Option<Match<C>> = None;
    for candidate in candidates {
        let s = score(&candidate)?;
        let better = match &best {
            None => true,
            Some(current) => s < current.score,
        };
        if better {
            best = Some(Match {
                candidate,
                score: s,
            });
        }
    }
    Ok(best)
}

/// Absolute-difference scorer against a fixed target.
#[inline]
pub fn absolute_error(target: f64, value: f64) -> f64 {
    (value - target).abs()
}
