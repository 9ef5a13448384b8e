//! Aggregation Engine
//!
//! Pure grouping functions that feed the chart views. Groups come out in
//! first-seen order; categories without entities are simply absent.

use contracts::domain::common::Categorized;
use serde::Serialize;
use std::ops::Add;

/// Label for entities whose category is empty or missing.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal<N> {
    pub category: String,
    pub total: N,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Combined per-category record: summed stock plus record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub total_stock: i64,
    pub count: usize,
}

fn group_key<T: Categorized>(entity: &T) -> &str {
    entity.category().unwrap_or(UNCATEGORIZED)
}

/// Folds entities into per-category accumulators, preserving first-seen order.
fn fold_by_category<T, A, F>(entities: &[T], mut fold: F) -> Vec<(String, A)>
where
    T: Categorized,
    A: Default,
    F: FnMut(&mut A, &T),
{
    let mut groups: Vec<(String, A)> = Vec::new();
    for entity in entities {
        let key = group_key(entity);
        let index = match groups.iter().position(|(category, _)| category == key) {
            Some(index) => index,
            None => {
                groups.push((key.to_string(), A::default()));
                groups.len() - 1
            }
        };
        fold(&mut groups[index].1, entity);
    }
    groups
}

/// Sums `field` per category, e.g. `sum_by_category(&products, |p| p.stock)`.
pub fn sum_by_category<T, N, F>(entities: &[T], field: F) -> Vec<CategoryTotal<N>>
where
    T: Categorized,
    N: Copy + Default + Add<Output = N>,
    F: Fn(&T) -> N,
{
    fold_by_category(entities, |total: &mut N, entity| *total = *total + field(entity))
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect()
}

pub fn count_by_category<T: Categorized>(entities: &[T]) -> Vec<CategoryCount> {
    fold_by_category(entities, |count: &mut usize, _| *count += 1)
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}

/// One-pass stock total and count per category.
pub fn category_summary<T, F>(entities: &[T], stock: F) -> Vec<CategoryAggregate>
where
    T: Categorized,
    F: Fn(&T) -> i64,
{
    fold_by_category(entities, |acc: &mut (i64, usize), entity| {
        acc.0 += stock(entity);
        acc.1 += 1;
    })
    .into_iter()
    .map(|(category, (total_stock, count))| CategoryAggregate {
        category,
        total_stock,
        count,
    })
    .collect()
}
