/// Number of pages needed for `total` rows at `per_page` rows each.
///
/// Zero when nothing matched, so an empty result reads as "no pages" rather
/// than one empty page. `per_page` is already clamped to at least 1 by
/// normalization.
#[must_use]
pub fn pages_count(total: u64, per_page: u64) -> u64 {
    if total == 0 { 0 } else { total.div_ceil(per_page) }
}
