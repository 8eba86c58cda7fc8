//! Paginated Resource List Controller
//!
//! The search-filter-paginate-mutate lifecycle shared by every list
//! screen. The pure paging math lives in free functions; `ListState`
//! wraps it in signals for the pages.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

/// `max(1, ceil(filtered / page_size))` — an empty list still has one page
pub fn total_pages(filtered: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    ((filtered + page_size - 1) / page_size).max(1)
}

/// Clamp a 1-indexed page into `[1, total]`
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// The rows of one page (1-indexed)
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    items
        .iter()
        .skip(page.saturating_sub(1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// One entry of the windowed page-number strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEntry {
    Num(usize),
    Gap,
}

/// Up to 5 contiguous page numbers centered on `current`, with forced
/// first/last entries and gap markers when the window misses the edges.
pub fn page_window(current: usize, total: usize) -> Vec<PageEntry> {
    let total = total.max(1);
    let current = clamp_page(current, total);
    let start = current
        .saturating_sub(2)
        .max(1)
        .min(total.saturating_sub(4).max(1));
    let end = (start + 4).min(total);

    let mut entries = Vec::new();
    if start > 1 {
        entries.push(PageEntry::Num(1));
        if start > 2 {
            entries.push(PageEntry::Gap);
        }
    }
    for page in start..=end {
        entries.push(PageEntry::Num(page));
    }
    if end < total {
        if end + 1 < total {
            entries.push(PageEntry::Gap);
        }
        entries.push(PageEntry::Num(total));
    }
    entries
}

/// The slice a list screen renders for the current tick
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    pub filtered: usize,
    pub page: usize,
    pub pages: usize,
}

/// Signal-backed list state: wholesale `items`, a search term, one
/// categorical filter, and the current page. Items are only ever replaced
/// by an authoritative reload, never patched in place.
pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub search: RwSignal<String>,
    pub filter: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub page_size: usize,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T: Clone + Send + Sync + 'static> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            search: RwSignal::new(String::new()),
            filter: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            page_size,
        }
    }

    /// Replace the whole collection after a (re)load
    pub fn load(&self, items: Vec<T>) {
        self.items.set(items);
    }

    /// Changing the search term resets to page 1 in the same update,
    /// never a render later.
    pub fn set_search(&self, term: String) {
        self.page.set(1);
        self.search.set(term);
    }

    pub fn set_filter(&self, value: String) {
        self.page.set(1);
        self.filter.set(value);
    }

    /// Navigate to `page` within a strip of `pages`; out-of-range requests
    /// are a no-op (the buttons are disabled, this is the backstop).
    pub fn go_to(&self, page: usize, pages: usize) {
        if page >= 1 && page <= pages {
            self.page.set(page);
        }
    }

    /// Compute the visible slice. The page used for slicing is clamped
    /// against the filtered count so a shrunken result set can never show
    /// a stale page.
    pub fn view(&self, matches: impl Fn(&T, &str, &str) -> bool) -> PageView<T> {
        let term = self.search.get().trim().to_lowercase();
        let filter = self.filter.get();
        let filtered: Vec<T> = self
            .items
            .get()
            .into_iter()
            .filter(|item| matches(item, &term, &filter))
            .collect();
        let pages = total_pages(filtered.len(), self.page_size);
        let page = clamp_page(self.page.get(), pages);
        PageView {
            rows: page_slice(&filtered, page, self.page_size),
            filtered: filtered.len(),
            page,
            pages,
        }
    }
}

/// Monotonic reload sequence. Every reload takes a ticket; a result is
/// applied only while its ticket is still the latest issued, so two
/// overlapping reloads cannot leave the UI on the older snapshot.
#[derive(Clone, Default)]
pub struct ReloadSeq(Arc<AtomicU64>);

impl ReloadSeq {
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}

/// Row-keyed busy markers: one row's in-flight mutation disables that row
/// only, unrelated rows stay interactive.
#[derive(Clone, Copy)]
pub struct BusySet(RwSignal<Vec<u32>>);

impl BusySet {
    pub fn new() -> Self {
        Self(RwSignal::new(Vec::new()))
    }

    pub fn start(&self, id: u32) {
        self.0.update(|ids| {
            if !ids.contains(&id) {
                ids.push(id);
            }
        });
    }

    pub fn finish(&self, id: u32) {
        self.0.update(|ids| ids.retain(|x| *x != id));
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.get().contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(1, 0), 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 3, 10), (21..=25).collect::<Vec<_>>());
        assert!(page_slice(&items, 4, 10).is_empty());
    }

    #[test]
    fn test_page_window_small() {
        assert_eq!(
            page_window(1, 3),
            vec![PageEntry::Num(1), PageEntry::Num(2), PageEntry::Num(3)]
        );
        // exactly 5: no gaps, no forced edges
        assert_eq!(page_window(3, 5).len(), 5);
    }

    #[test]
    fn test_page_window_middle() {
        // centered on 10 of 20: 1 … 8 9 10 11 12 … 20
        let w = page_window(10, 20);
        assert_eq!(
            w,
            vec![
                PageEntry::Num(1),
                PageEntry::Gap,
                PageEntry::Num(8),
                PageEntry::Num(9),
                PageEntry::Num(10),
                PageEntry::Num(11),
                PageEntry::Num(12),
                PageEntry::Gap,
                PageEntry::Num(20),
            ]
        );
    }

    #[test]
    fn test_page_window_edges() {
        // window pinned at the left edge: 1 2 3 4 5 … 20
        let w = page_window(1, 20);
        assert_eq!(
            w,
            vec![
                PageEntry::Num(1),
                PageEntry::Num(2),
                PageEntry::Num(3),
                PageEntry::Num(4),
                PageEntry::Num(5),
                PageEntry::Gap,
                PageEntry::Num(20),
            ]
        );
        // pinned at the right edge: 1 … 16 17 18 19 20
        let w = page_window(20, 20);
        assert_eq!(
            w,
            vec![
                PageEntry::Num(1),
                PageEntry::Gap,
                PageEntry::Num(16),
                PageEntry::Num(17),
                PageEntry::Num(18),
                PageEntry::Num(19),
                PageEntry::Num(20),
            ]
        );
        // no double-gap when the window stops one short of the edge
        let w = page_window(4, 7);
        assert_eq!(
            w,
            vec![
                PageEntry::Num(1),
                PageEntry::Num(2),
                PageEntry::Num(3),
                PageEntry::Num(4),
                PageEntry::Num(5),
                PageEntry::Num(6),
                PageEntry::Num(7),
            ]
        );
    }

    #[test]
    fn test_search_resets_page_and_clamps_slice() {
        let list = ListState::<u32>::new(10);
        list.load((1..=95).collect());
        list.page.set(10);

        // page 10 of the unfiltered set is fine
        let view = list.view(|n, term, _| term.is_empty() || n.to_string().contains(term));
        assert_eq!(view.page, 10);
        assert_eq!(view.rows, vec![91, 92, 93, 94, 95]);

        // a search that shrinks the set resets to page 1 synchronously
        list.set_search("9".to_string());
        assert_eq!(list.page.get_untracked(), 1);
        let view = list.view(|n, term, _| term.is_empty() || n.to_string().contains(term));
        assert_eq!(view.page, 1);
        assert_eq!(view.filtered, 15); // 9, 19, …, 89 and 90..=95 contain '9'
    }

    #[test]
    fn test_filtered_to_empty_shows_no_stale_rows() {
        let list = ListState::<u32>::new(10);
        list.load((1..=50).collect());
        list.page.set(5);
        list.set_search("no-such-row".to_string());
        let view = list.view(|n, term, _| term.is_empty() || n.to_string().contains(term));
        assert!(view.rows.is_empty());
        assert_eq!(view.filtered, 0);
        assert_eq!(view.page, 1);
        assert_eq!(view.pages, 1);
    }

    #[test]
    fn test_shrunken_reload_clamps_page() {
        let list = ListState::<u32>::new(10);
        list.load((1..=40).collect());
        list.page.set(4);
        // delete-heavy reload: only 5 rows remain
        list.load((1..=5).collect());
        let view = list.view(|_, _, _| true);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn test_reload_seq_discards_stale_results() {
        let seq = ReloadSeq::default();
        let first = seq.begin();
        let second = seq.begin();
        // the older request resolves last; it must not be applied
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_busy_set_is_row_keyed() {
        let busy = BusySet::new();
        busy.start(3);
        busy.start(7);
        assert!(busy.contains(3));
        assert!(busy.contains(7));
        assert!(!busy.contains(5));
        busy.finish(3);
        assert!(!busy.contains(3));
        assert!(busy.contains(7));
    }
}
