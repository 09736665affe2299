use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StreamComparison {
    /// Every output up to the limit matched.
    Match(usize),
    Diverged { index: usize, left: u32, right: u32 },
}

impl StreamComparison {
    pub fn is_match(&self) -> bool {
        matches!(self, StreamComparison::Match(_))
    }
}

impl fmt::Display for StreamComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StreamComparison::Match(limit) => write!(f, "{} outputs match", limit),
            StreamComparison::Diverged { index, left, right } => write!(
                f,
                "outputs differ at index {} ({} != {})",
                index, left, right
            ),
        }
    }
}

/// Draw `limit` outputs from each source in lockstep, stopping at the
/// first index where they differ.
pub fn compare_streams<F, G>(mut left: F, mut right: G, limit: usize) -> StreamComparison
where
    F: FnMut() -> u32,
    G: FnMut() -> u32,
{
    for index in 0..limit {
        let (l, r) = (left(), right());
        if l != r {
            return StreamComparison::Diverged {
                index,
                left: l,
                right: r,
            };
        }
    }
    StreamComparison::Match(limit)
}
