use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Slice `items` down to the 1-indexed `page` of `QUESTIONS_PER_PAGE` entries.
///
/// Out-of-range pages (including pages below 1) yield an empty slice.
pub fn paginate<T>(page: i64, items: &[T]) -> &[T] {
    paginate_with_size(page, items, QUESTIONS_PER_PAGE)
}

pub fn paginate_with_size<T>(page: i64, items: &[T], page_size: usize) -> &[T] {
    if page < 1 || page_size == 0 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(page_size));

    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}
