//! Summary aggregation: percentages and donut-chart arcs from raw counts

use serde::Serialize;

use crate::models::{CategoryCount, Condition, DashboardSummary, OpdCount};

/// Length of the donut circumference, in percentage units
pub const CHART_CIRCUMFERENCE: f64 = 100.0;

/// Where the first arc starts (a quarter turn, i.e. 12 o'clock on an SVG circle)
pub const CHART_ROTATION_OFFSET: f64 = 25.0;

/// Share of `part` in `total`, in percent; 0 when `total` is 0
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}

/// Rounded to the nearest whole percent and kept within [0, 100]
pub fn rounded_percent(percentage: f64) -> u8 {
    percentage.round().clamp(0.0, 100.0) as u8
}

/// One condition's slice of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionShare {
    pub condition: Condition,
    pub count: u64,
    pub percentage: f64,
    /// Displayed value; rounded per category, so the displayed sum may differ from 100
    pub display_percent: u8,
    /// Dash offset of the arc on a 100-unit circumference
    pub arc_offset: f64,
    /// Arc length, equal to `percentage`
    pub arc_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionBreakdown {
    pub total: u64,
    /// Always the three conditions, in [`Condition::ALL`] order
    pub shares: Vec<ConditionShare>,
}

impl ConditionBreakdown {
    /// Build the breakdown from `label → count` pairs.
    ///
    /// The total is the sum of every count received, labels unknown to the client
    /// included. Shares are emitted in the fixed [`Condition::ALL`] order whatever
    /// the order of the input.
    pub fn from_counts<'a, I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut per_condition = [0u64; 3];
        let mut total = 0u64;

        for (label, count) in counts {
            total = total.saturating_add(count);
            match label.parse::<Condition>() {
                Ok(condition) => {
                    let slot = Condition::ALL
                        .iter()
                        .position(|c| *c == condition)
                        .unwrap_or_default();
                    per_condition[slot] = per_condition[slot].saturating_add(count);
                }
                Err(_) => tracing::debug!("Ignoring unknown condition label {:?}", label),
            }
        }

        let mut cumulative = 0.0;
        let shares = Condition::ALL
            .iter()
            .zip(per_condition)
            .map(|(condition, count)| {
                let percentage = percent_of(count, total);
                let share = ConditionShare {
                    condition: *condition,
                    count,
                    percentage,
                    display_percent: rounded_percent(percentage),
                    arc_offset: arc_offset(cumulative),
                    arc_length: percentage,
                };
                cumulative += percentage;
                share
            })
            .collect();

        Self { total, shares }
    }

    pub fn from_summary(summary: &DashboardSummary) -> Self {
        Self::from_counts(
            summary
                .condition_counts
                .iter()
                .map(|(label, count)| (label.as_str(), *count)),
        )
    }

    pub fn share(&self, condition: Condition) -> Option<&ConditionShare> {
        self.shares.iter().find(|s| s.condition == condition)
    }

    /// Sum of the displayed (rounded) percentages
    pub fn displayed_sum(&self) -> u32 {
        self.shares.iter().map(|s| s.display_percent as u32).sum()
    }
}

/// Dash offset for an arc that starts after `cumulative` percent of the circle
fn arc_offset(cumulative: f64) -> f64 {
    (CHART_CIRCUMFERENCE - cumulative + CHART_ROTATION_OFFSET).rem_euclid(CHART_CIRCUMFERENCE)
}

/// Warehouse vs OPD split of the stock
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSplit {
    pub warehouse_percent: u8,
    pub opd_percent: u8,
}

impl LocationSplit {
    pub fn from_summary(summary: &DashboardSummary) -> Self {
        Self {
            warehouse_percent: rounded_percent(percent_of(summary.items_in_warehouse, summary.total_items)),
            opd_percent: rounded_percent(percent_of(summary.items_in_opd, summary.total_items)),
        }
    }
}

/// Labelled count with its share of the total stock, for the top lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedShare {
    pub label: String,
    pub count: u64,
    pub display_percent: u8,
}

pub fn rank_categories(categories: &[CategoryCount], total: u64) -> Vec<RankedShare> {
    ranked(categories.iter().map(|c| (c.category_name.as_str(), c.count)), total)
}

pub fn rank_opds(opds: &[OpdCount], total: u64) -> Vec<RankedShare> {
    ranked(opds.iter().map(|o| (o.opd_name.as_str(), o.count)), total)
}

fn ranked<'a>(entries: impl Iterator<Item = (&'a str, u64)>, total: u64) -> Vec<RankedShare> {
    let mut shares: Vec<RankedShare> = entries
        .map(|(label, count)| RankedShare {
            label: label.to_string(),
            count,
            display_percent: rounded_percent(percent_of(count, total)),
        })
        .collect();
    // Stable: equal counts keep server order
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_yields_zero_percentages() {
        let breakdown = ConditionBreakdown::from_counts([
            ("Layak Pakai", 0),
            ("Rusak Ringan", 0),
            ("Rusak/Hilang", 0),
        ]);
        assert_eq!(breakdown.total, 0);
        for share in &breakdown.shares {
            assert_eq!(share.percentage, 0.0);
            assert_eq!(share.display_percent, 0);
            assert_eq!(share.arc_length, 0.0);
        }

        let empty = ConditionBreakdown::from_counts(std::iter::empty());
        assert_eq!(empty.shares.len(), 3);
        assert_eq!(empty.displayed_sum(), 0);
    }

    #[test]
    fn test_fixed_order_regardless_of_input() {
        let a = ConditionBreakdown::from_counts([("Rusak/Hilang", 1), ("Layak Pakai", 8), ("Rusak Ringan", 1)]);
        let b = ConditionBreakdown::from_counts([("Layak Pakai", 8), ("Rusak Ringan", 1), ("Rusak/Hilang", 1)]);
        assert_eq!(a, b);
        let order: Vec<Condition> = a.shares.iter().map(|s| s.condition).collect();
        assert_eq!(order, Condition::ALL.to_vec());
    }

    #[test]
    fn test_arcs_are_cumulative() {
        let breakdown = ConditionBreakdown::from_counts([
            ("Layak Pakai", 50),
            ("Rusak Ringan", 30),
            ("Rusak/Hilang", 20),
        ]);
        let offsets: Vec<f64> = breakdown.shares.iter().map(|s| s.arc_offset).collect();
        assert_eq!(offsets, vec![25.0, 75.0, 45.0]);
        let lengths: Vec<f64> = breakdown.shares.iter().map(|s| s.arc_length).collect();
        assert_eq!(lengths, vec![50.0, 30.0, 20.0]);
    }

    #[test]
    fn test_independent_rounding_not_corrected() {
        // 1/3 each: 33.33% rounds to 33, displayed sum 99
        let breakdown = ConditionBreakdown::from_counts([
            ("Layak Pakai", 1),
            ("Rusak Ringan", 1),
            ("Rusak/Hilang", 1),
        ]);
        assert!(breakdown.shares.iter().all(|s| s.display_percent == 33));
        assert_eq!(breakdown.displayed_sum(), 99);

        // 1/6, 1/6, 4/6: 17 + 17 + 67 = 101
        let breakdown = ConditionBreakdown::from_counts([
            ("Layak Pakai", 1),
            ("Rusak Ringan", 1),
            ("Rusak/Hilang", 4),
        ]);
        assert_eq!(breakdown.displayed_sum(), 101);
    }

    #[test]
    fn test_rounded_percent_in_range() {
        for (a, b, c) in [(1u64, 0u64, 0u64), (999, 1, 0), (3, 7, 11), (0, 0, 5)] {
            let breakdown = ConditionBreakdown::from_counts([
                ("Layak Pakai", a),
                ("Rusak Ringan", b),
                ("Rusak/Hilang", c),
            ]);
            assert!(breakdown.shares.iter().all(|s| s.display_percent <= 100));
        }
    }

    #[test]
    fn test_unknown_labels_count_toward_total() {
        let breakdown = ConditionBreakdown::from_counts([("Layak Pakai", 3), ("Dipinjam", 1)]);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.share(Condition::LayakPakai).unwrap().display_percent, 75);
    }

    #[test]
    fn test_location_split() {
        let summary = DashboardSummary {
            total_items: 8,
            items_in_warehouse: 3,
            items_in_opd: 5,
            ..Default::default()
        };
        let split = LocationSplit::from_summary(&summary);
        assert_eq!(split.warehouse_percent, 38);
        assert_eq!(split.opd_percent, 63);

        let split = LocationSplit::from_summary(&DashboardSummary::default());
        assert_eq!(split.warehouse_percent, 0);
    }

    #[test]
    fn test_rank_categories_sorted_by_count() {
        let categories = vec![
            CategoryCount { category_name: "Printer".to_string(), count: 180 },
            CategoryCount { category_name: "Laptop".to_string(), count: 320 },
        ];
        let ranked = rank_categories(&categories, 500);
        assert_eq!(ranked[0].label, "Laptop");
        assert_eq!(ranked[0].display_percent, 64);
        assert_eq!(ranked[1].display_percent, 36);
    }
}
