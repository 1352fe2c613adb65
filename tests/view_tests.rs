// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use expensely::categories::ExpenseCategory;
use expensely::models::Expense;
use expensely::view::{derive_view, parse_amount_bound, FilterState, SortKey, SortState};
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn amt(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(id: &str, name: &str, amount: &str, date: &str, category: ExpenseCategory) -> Expense {
    Expense {
        id: id.into(),
        name: name.into(),
        amount: amt(amount),
        date: d(date),
        category,
    }
}

// Hydration order: newest date first.
fn sample() -> Vec<Expense> {
    vec![
        expense("4", "Cinema", "22.00", "2024-01-04", ExpenseCategory::Entertainment),
        expense("3", "Train", "15.00", "2024-01-03", ExpenseCategory::Transport),
        expense("2", "Food court", "5.00", "2024-01-02", ExpenseCategory::Food),
        expense("1", "Groceries", "10.00", "2024-01-01", ExpenseCategory::Food),
    ]
}

fn ids(v: &[Expense]) -> Vec<&str> {
    v.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn empty_filter_and_no_sort_is_identity() {
    let all = sample();
    let out = derive_view(&all, &FilterState::default(), &SortState::Unsorted);
    assert_eq!(out, all);
}

#[test]
fn empty_input_gives_empty_view() {
    let filter = FilterState::new().with_search("x");
    assert!(derive_view(&[], &filter, &SortState::ascending(SortKey::Name)).is_empty());
}

#[test]
fn amount_bounds_are_inclusive() {
    let all = sample();
    let f = FilterState::new().with_amount_range(Some(amt("5")), Some(amt("15")));
    let out = derive_view(&all, &f, &SortState::Unsorted);
    assert_eq!(ids(&out), ["3", "2", "1"]);
}

#[test]
fn date_bounds_are_inclusive() {
    let all = sample();
    let f = FilterState::new().with_date_range(Some(d("2024-01-02")), Some(d("2024-01-03")));
    let out = derive_view(&all, &f, &SortState::Unsorted);
    assert_eq!(ids(&out), ["3", "2"]);
}

#[test]
fn unparseable_min_is_no_constraint() {
    let all = sample();
    let f = FilterState::new().with_amount_range(parse_amount_bound("ten"), None);
    assert_eq!(derive_view(&all, &f, &SortState::Unsorted).len(), 4);
}

#[test]
fn search_matches_name_or_category_case_insensitively() {
    let all = sample();
    let by_name = FilterState::new().with_search("CINE");
    assert_eq!(ids(&derive_view(&all, &by_name, &SortState::Unsorted)), ["4"]);

    // "food" hits both the "Food court" name and the Food category
    let by_cat = FilterState::new().with_search("food");
    assert_eq!(ids(&derive_view(&all, &by_cat, &SortState::Unsorted)), ["2", "1"]);

    let blank = FilterState::new().with_search("   ");
    assert!(blank.is_empty());
}

#[test]
fn filters_combine_with_and() {
    let all = sample();
    let f = FilterState::new()
        .with_category(ExpenseCategory::Food)
        .with_amount_range(Some(amt("6")), None);
    assert_eq!(ids(&derive_view(&all, &f, &SortState::Unsorted)), ["1"]);
}

#[test]
fn amount_ascending_then_descending_is_reversed() {
    let all = sample();
    let asc = derive_view(&all, &FilterState::default(), &SortState::ascending(SortKey::Amount));
    let mut desc =
        derive_view(&all, &FilterState::default(), &SortState::descending(SortKey::Amount));
    assert_eq!(ids(&asc), ["2", "1", "3", "4"]);
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn equal_keys_keep_input_order_both_ways() {
    let all = vec![
        expense("a", "Lunch", "5", "2024-02-02", ExpenseCategory::Food),
        expense("b", "Taxi", "9", "2024-02-02", ExpenseCategory::Transport),
        expense("c", "Dinner", "7", "2024-02-01", ExpenseCategory::Food),
    ];
    let asc = derive_view(&all, &FilterState::default(), &SortState::ascending(SortKey::Category));
    assert_eq!(ids(&asc), ["a", "c", "b"]);
    let desc =
        derive_view(&all, &FilterState::default(), &SortState::descending(SortKey::Category));
    assert_eq!(ids(&desc), ["b", "a", "c"]);
    let by_date = derive_view(&all, &FilterState::default(), &SortState::descending(SortKey::Date));
    assert_eq!(ids(&by_date), ["a", "b", "c"]);
}

#[test]
fn name_sort_is_lexicographic() {
    let all = sample();
    let out = derive_view(&all, &FilterState::default(), &SortState::ascending(SortKey::Name));
    assert_eq!(ids(&out), ["4", "2", "1", "3"]);
}

#[test]
fn scenario_food_filter_and_amount_desc() {
    let all = vec![
        expense("f1", "A", "10", "2024-01-01", ExpenseCategory::Food),
        expense("f2", "B", "5", "2024-01-02", ExpenseCategory::Food),
        expense("t1", "C", "15", "2024-01-03", ExpenseCategory::Transport),
    ];
    let food = FilterState::new().with_category(ExpenseCategory::Food);
    assert_eq!(derive_view(&all, &food, &SortState::Unsorted).len(), 2);

    let sorted = derive_view(&all, &FilterState::default(), &SortState::descending(SortKey::Amount));
    assert_eq!(ids(&sorted), ["t1", "f1", "f2"]);
}
