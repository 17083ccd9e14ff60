//! Selection span over the text buffer.

/// Selection in char offsets.
///
/// `anchor` is where the selection started, `active` is the moving end
/// (the cursor). The two may be in either order; `start`/`end` normalize.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub active: usize,
}

impl Selection {
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Collapsed selection (a bare cursor) at `offset`.
    pub fn cursor(offset: usize) -> Self {
        Self {
            anchor: offset,
            active: offset,
        }
    }

    /// Lower end of the span.
    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// Upper end of the span.
    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    /// Whether the selection is a bare cursor.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Chars covered by the span.
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_end_normalize_direction() {
        let forward = Selection::new(2, 5);
        let backward = Selection::new(5, 2);
        assert_eq!(forward.start(), backward.start());
        assert_eq!(forward.end(), backward.end());
        assert_eq!(forward.len(), 3);
    }

    #[test]
    fn test_cursor_is_empty() {
        let cursor = Selection::cursor(4);
        assert!(cursor.is_empty());
        assert_eq!(cursor.len(), 0);
        assert_eq!(cursor.start(), 4);
        assert_eq!(cursor.end(), 4);
    }
}
