//! Dashboard state transition tests.

mod common;

use chrono::Month;
use product_dashboard::{
    DashboardState, Event, LoadStatus, SortColumn, SortDirection, Statistics,
};

fn loaded() -> DashboardState {
    DashboardState::new(10).apply(Event::Loaded(common::sample_products()))
}

// ---------------------------------------------------------------------------
// Load events
// ---------------------------------------------------------------------------

#[test]
fn new_state_is_loading_and_empty() {
    let state = DashboardState::new(10);
    assert_eq!(*state.status(), LoadStatus::Loading);
    assert!(state.dataset().is_empty());
    assert!(state.visible().is_empty());
    assert_eq!(state.statistics(), Statistics::default());
}

#[test]
fn loaded_event_shows_whole_dataset() {
    let state = loaded();
    assert_eq!(*state.status(), LoadStatus::Loaded);
    assert_eq!(state.visible().len(), 8);
    assert_eq!(common::ids(state.visible()), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn load_failure_keeps_message() {
    let state = DashboardState::new(10).apply(Event::LoadFailed("Network Error".into()));
    assert_eq!(*state.status(), LoadStatus::Failed("Network Error".into()));
    assert!(state.dataset().is_empty());
}

#[test]
fn dataset_is_read_only_once_loaded() {
    let state = loaded()
        .apply(Event::Loaded(vec![]))
        .apply(Event::LoadFailed("late".into()));
    assert_eq!(*state.status(), LoadStatus::Loaded);
    assert_eq!(state.dataset().len(), 8);
}

#[test]
fn criteria_set_before_load_apply_to_dataset() {
    let state = DashboardState::new(10)
        .apply(Event::SetQuery("laptop".into()))
        .apply(Event::Loaded(common::sample_products()));
    assert_eq!(common::ids(state.visible()), vec![3, 6]);
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

#[test]
fn query_change_recomputes_visible_subset() {
    let state = loaded().apply(Event::SetQuery("LAPTOP".into()));
    assert_eq!(common::ids(state.visible()), vec![3, 6]);

    let state = state.apply(Event::SetQuery(String::new()));
    assert_eq!(state.visible().len(), 8);
}

#[test]
fn statistics_only_populated_with_month() {
    let state = loaded().apply(Event::SetQuery("laptop".into()));
    assert_eq!(state.statistics(), Statistics::default());

    let state = state.apply(Event::SelectMonth(Some(Month::March)));
    let stats = state.statistics();
    assert_eq!(common::ids(state.visible()), vec![3]);
    assert_eq!(stats.total_sell, 999.0);
    assert_eq!(stats.total_sold_items, 1);
    assert_eq!(stats.total_not_sold_items, 0);
}

#[test]
fn clearing_month_resets_statistics() {
    let state = loaded().apply(Event::SelectMonth(Some(Month::March)));
    assert_eq!(state.statistics().total_sold_items, 2);

    let state = state.apply(Event::SelectMonth(None));
    assert_eq!(state.statistics(), Statistics::default());
    assert_eq!(state.visible().len(), 8);
}

#[test]
fn statistics_always_match_visible_subset() {
    let mut state = loaded();
    for (query, month) in [
        ("", Month::November),
        ("wo", Month::November),
        ("", Month::March),
        ("zeppelin", Month::March),
    ] {
        state = state
            .apply(Event::SetQuery(query.into()))
            .apply(Event::SelectMonth(Some(month)));
        let stats = state.statistics();
        assert_eq!(stats, Statistics::compute(state.visible()));
        assert_eq!(
            stats.total_sold_items + stats.total_not_sold_items,
            state.visible().len()
        );
    }
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

#[test]
fn page_rows_follow_page_size() {
    let state = loaded().apply(Event::SetPageSize(3));
    assert_eq!(common::ids(state.page_rows()), vec![1, 2, 3]);

    let state = state.apply(Event::SetPage(3));
    assert_eq!(common::ids(state.page_rows()), vec![7, 8]);
}

#[test]
fn page_is_clamped_to_available_pages() {
    let state = loaded().apply(Event::SetPageSize(3)).apply(Event::SetPage(99));
    assert_eq!(state.pagination().page(), 3);

    let state = state.apply(Event::SetPage(0));
    assert_eq!(state.pagination().page(), 1);
}

#[test]
fn changing_page_size_returns_to_first_page() {
    let state = loaded()
        .apply(Event::SetPageSize(2))
        .apply(Event::SetPage(3))
        .apply(Event::SetPageSize(5));
    assert_eq!(state.pagination().page(), 1);
    assert_eq!(state.pagination().per_page(), 5);
}

#[test]
fn changing_criteria_returns_to_first_page() {
    let state = loaded()
        .apply(Event::SetPageSize(2))
        .apply(Event::SetPage(4))
        .apply(Event::SetQuery("o".into()));
    assert_eq!(state.pagination().page(), 1);
}

#[test]
fn paging_does_not_touch_filtering_or_statistics() {
    let before = loaded().apply(Event::SelectMonth(Some(Month::November)));
    let stats = before.statistics();
    let visible = common::ids(before.visible());

    let after = before.apply(Event::SetPageSize(1)).apply(Event::SetPage(2));
    assert_eq!(after.statistics(), stats);
    assert_eq!(common::ids(after.visible()), visible);
    assert_eq!(common::ids(after.page_rows()), vec![6]);
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[test]
fn sort_by_price_descending() {
    let state = loaded().apply(Event::SortBy(SortColumn::Price, SortDirection::Descending));
    assert_eq!(common::ids(state.rows()), vec![4, 3, 1, 5, 8, 6, 2, 7]);
    // visible() stays in dataset order
    assert_eq!(common::ids(state.visible()), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn sort_by_title_ascending_then_clear() {
    let state = loaded()
        .apply(Event::SetQuery("laptop".into()))
        .apply(Event::SortBy(SortColumn::Title, SortDirection::Ascending));
    assert_eq!(common::ids(state.rows()), vec![3, 6]);

    let state = state.apply(Event::SortBy(SortColumn::Id, SortDirection::Descending));
    assert_eq!(common::ids(state.rows()), vec![6, 3]);

    let state = state.apply(Event::ClearSort);
    assert!(state.sort().is_none());
    assert_eq!(common::ids(state.rows()), vec![3, 6]);
}

#[test]
fn sorting_applies_before_paging() {
    let state = loaded()
        .apply(Event::SetPageSize(2))
        .apply(Event::SortBy(SortColumn::Price, SortDirection::Ascending));
    assert_eq!(common::ids(state.page_rows()), vec![7, 2]);
}
