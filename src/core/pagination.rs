/// Default page size when the caller does not supply one
pub const DEFAULT_LIMIT: usize = 10;

/// One page of a filtered sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the sequence before slicing
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
            has_more: self.has_more,
        }
    }
}

/// Slice `[offset, offset + limit)` out of `items`, clamped to its bounds.
///
/// An offset past the end yields an empty page rather than an error.
pub fn paginate<T: Clone>(items: &[T], offset: usize, limit: usize) -> Page<T> {
    let total = items.len();
    let end = offset.saturating_add(limit);
    let page = if offset >= total {
        Vec::new()
    } else {
        items[offset..end.min(total)].to_vec()
    };

    Page {
        items: page,
        total,
        offset,
        limit,
        has_more: end < total,
    }
}
