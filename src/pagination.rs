//! Client-side Pagination
//!
//! Fixed-size page windows over an ordered list, and the page-control model
//! (prev/next plus numbered buttons with ellipsis truncation).

/// Number of pages needed for `count` items; never less than one
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Items on 1-based `page`; out-of-range pages yield an empty slice
pub fn page_items<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Whether `page` is a valid target for a collection with `total` pages
pub fn is_valid_page(page: usize, total: usize) -> bool {
    page >= 1 && page <= total
}

/// Prev or next button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepButton {
    /// Page this button requests (may be out of range when disabled)
    pub target: usize,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndicator {
    Page { number: usize, active: bool },
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub previous: StepButton,
    pub next: StepButton,
    pub indicators: Vec<PageIndicator>,
}

/// Page control for `current` of `total`; `None` when there is a single page.
///
/// Page 1, the last page and the neighbours of `current` are always shown.
/// The page two away from `current` on either side stands in for the whole
/// hidden gap on that side as one ellipsis.
pub fn build_page_control(current: usize, total: usize) -> Option<PageControl> {
    if total <= 1 {
        return None;
    }

    let mut indicators = Vec::new();
    for number in 1..=total {
        if number == 1 || number == total || number.abs_diff(current) <= 1 {
            indicators.push(PageIndicator::Page { number, active: number == current });
        } else if number.abs_diff(current) == 2 {
            indicators.push(PageIndicator::Ellipsis);
        }
    }

    Some(PageControl {
        previous: StepButton { target: current.saturating_sub(1), disabled: current == 1 },
        next: StepButton { target: current + 1, disabled: current == total },
        indicators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageIndicator::*;

    fn page(number: usize) -> PageIndicator {
        Page { number, active: false }
    }

    fn active(number: usize) -> PageIndicator {
        Page { number, active: true }
    }

    #[test]
    fn total_pages_rounds_up_with_floor_of_one() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
        for count in 0..100 {
            for size in 1..15 {
                let expected = ((count + size - 1) / size).max(1);
                assert_eq!(total_pages(count, size), expected);
            }
        }
    }

    #[test]
    fn pages_reconstruct_the_list() {
        let items: Vec<u32> = (0..37).collect();
        let total = total_pages(items.len(), 12);
        let rebuilt: Vec<u32> = (1..=total)
            .flat_map(|p| page_items(&items, p, 12).iter().copied())
            .collect();
        assert_eq!(rebuilt, items);
        assert_eq!(page_items(&items, 4, 12), &[36]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(page_items(&items, 0, 12).is_empty());
        assert!(page_items(&items, 2, 12).is_empty());
        assert!(page_items(&items, usize::MAX, 12).is_empty());
        assert!(page_items::<u8>(&[], 1, 12).is_empty());
    }

    #[test]
    fn single_page_has_no_control() {
        assert_eq!(build_page_control(1, 1), None);
        assert_eq!(build_page_control(1, 0), None);
    }

    #[test]
    fn middle_page_collapses_both_gaps() {
        let control = build_page_control(5, 10).unwrap();
        assert_eq!(
            control.indicators,
            vec![page(1), Ellipsis, page(4), active(5), page(6), Ellipsis, page(10)]
        );
        assert_eq!(control.previous, StepButton { target: 4, disabled: false });
        assert_eq!(control.next, StepButton { target: 6, disabled: false });
    }

    #[test]
    fn edges_disable_step_buttons() {
        let first = build_page_control(1, 10).unwrap();
        assert!(first.previous.disabled);
        assert!(!first.next.disabled);
        assert_eq!(first.indicators, vec![active(1), page(2), Ellipsis, page(10)]);

        let last = build_page_control(10, 10).unwrap();
        assert!(!last.previous.disabled);
        assert!(last.next.disabled);
        assert_eq!(last.indicators, vec![page(1), Ellipsis, page(9), active(10)]);
    }

    #[test]
    fn first_and_last_always_present() {
        for total in 2..30 {
            for current in 1..=total {
                let control = build_page_control(current, total).unwrap();
                assert_eq!(control.indicators.first(), Some(&Page { number: 1, active: current == 1 }));
                assert_eq!(control.indicators.last(), Some(&Page { number: total, active: current == total }));
                let ellipses = control.indicators.iter().filter(|i| **i == Ellipsis).count();
                assert!(ellipses <= 2);
            }
        }
    }

    #[test]
    fn three_pages_show_every_number() {
        let control = build_page_control(2, 3).unwrap();
        assert_eq!(control.indicators, vec![page(1), active(2), page(3)]);
    }

    #[test]
    fn page_validation() {
        assert!(!is_valid_page(0, 3));
        assert!(is_valid_page(1, 3));
        assert!(is_valid_page(3, 3));
        assert!(!is_valid_page(4, 3));
    }
}
