/// Slice an ordered collection into a fixed-size page.
///
/// `page` is 1-based. Pages past the end of the collection yield an empty
/// slice rather than an error; a partial last page is returned as-is. The
/// input is borrowed, never reordered, so callers must supply items sorted
/// by a stable key (id ascending) for deterministic page boundaries.
pub fn paginate<T>(page: usize, page_size: usize, items: &[T]) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
