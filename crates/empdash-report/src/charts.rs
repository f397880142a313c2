//! Chart datasets computed from a (filtered) cleaned table.
//!
//! Each chart needs certain roles; when they are unresolved the chart is
//! `None` rather than an error.

use std::collections::HashMap;

use polars::prelude::DataFrame;

use empdash_common::{cell_to_string, column_cells};
use empdash_model::{
    AgeBin, AgeHistogram, ChartData, DepartmentSalary, LevelShare, Result, Role, RoleMapping,
    SalaryPerformancePoint,
};
use empdash_transform::{EXPERIENCE_LEVEL_COLUMN, numeric_values};

use crate::filters::has_column;

/// Number of equal-width bins in the age histogram.
pub const AGE_HISTOGRAM_BINS: usize = 6;

/// Mean salary per department, highest first.
///
/// Departments keep first-appearance order among equal means. Rows with a
/// missing salary or department are skipped.
pub fn salary_by_department(
    df: &DataFrame,
    mapping: &RoleMapping,
) -> Result<Option<Vec<DepartmentSalary>>> {
    let (Some(salary_column), Some(department_column)) =
        (mapping.get(Role::Salary), mapping.get(Role::Department))
    else {
        return Ok(None);
    };
    let salaries = numeric_values(df, Role::Salary, salary_column)?;
    let departments = column_cells(df, department_column)?;

    // Groups stay in first-appearance order; the map indexes into them.
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for (salary, department) in salaries.iter().zip(&departments) {
        let Some(salary) = salary else { continue };
        if department.is_missing() {
            continue;
        }
        let name = cell_to_string(department);
        match index.get(&name) {
            Some(&slot) => {
                let (_, total, count) = &mut groups[slot];
                *total += salary;
                *count += 1;
            }
            None => {
                index.insert(name.clone(), groups.len());
                groups.push((name, *salary, 1));
            }
        }
    }

    let mut bars: Vec<DepartmentSalary> = groups
        .into_iter()
        .map(|(department, total, employees)| DepartmentSalary {
            department,
            mean_salary: total / employees as f64,
            employees,
        })
        .collect();
    bars.sort_by(|a, b| b.mean_salary.total_cmp(&a.mean_salary));
    Ok(Some(bars))
}

/// Count and share of each experience level, most common first.
pub fn experience_distribution(df: &DataFrame) -> Result<Option<Vec<LevelShare>>> {
    if !has_column(df, EXPERIENCE_LEVEL_COLUMN) {
        return Ok(None);
    }
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for cell in column_cells(df, EXPERIENCE_LEVEL_COLUMN)? {
        if cell.is_missing() {
            continue;
        }
        let level = cell_to_string(&cell);
        match index.get(&level) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(level.clone(), counts.len());
                counts.push((level, 1));
            }
        }
    }
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(Some(
        counts
            .into_iter()
            .map(|(level, count)| LevelShare {
                level,
                count,
                percent: count as f64 * 100.0 / total as f64,
            })
            .collect(),
    ))
}

/// Splits `[min, max]` into [`AGE_HISTOGRAM_BINS`] equal-width bins.
///
/// The last bin is closed on the right. A single distinct value is centred
/// in a range one unit wide.
pub fn histogram_bins(values: &[f64]) -> Vec<AgeBin> {
    let Some(mut min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let Some(mut max) = values.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };
    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / AGE_HISTOGRAM_BINS as f64;
    let mut bins: Vec<AgeBin> = (0..AGE_HISTOGRAM_BINS)
        .map(|idx| AgeBin {
            lower: min + width * idx as f64,
            upper: if idx + 1 == AGE_HISTOGRAM_BINS {
                max
            } else {
                min + width * (idx + 1) as f64
            },
            count: 0,
        })
        .collect();
    for value in values {
        let idx = (((value - min) / width).floor() as usize).min(AGE_HISTOGRAM_BINS - 1);
        bins[idx].count += 1;
    }
    bins
}

/// Age histogram over non-missing ages.
pub fn age_histogram(df: &DataFrame, mapping: &RoleMapping) -> Result<Option<AgeHistogram>> {
    let Some(column) = mapping.get(Role::Age) else {
        return Ok(None);
    };
    let ages: Vec<f64> = numeric_values(df, Role::Age, column)?
        .into_iter()
        .flatten()
        .collect();
    Ok(Some(AgeHistogram {
        column: column.to_string(),
        bins: histogram_bins(&ages),
    }))
}

/// Salary and performance pairs for rows where both are numeric.
pub fn salary_vs_performance(
    df: &DataFrame,
    mapping: &RoleMapping,
) -> Result<Option<Vec<SalaryPerformancePoint>>> {
    let (Some(salary_column), Some(performance_column)) =
        (mapping.get(Role::Salary), mapping.get(Role::Performance))
    else {
        return Ok(None);
    };
    let salaries = column_cells(df, salary_column)?;
    let performances = column_cells(df, performance_column)?;
    Ok(Some(
        salaries
            .iter()
            .zip(&performances)
            .filter_map(|(salary, performance)| {
                Some(SalaryPerformancePoint {
                    salary: salary.as_f64()?,
                    performance: performance.as_f64()?,
                })
            })
            .collect(),
    ))
}

/// All chart datasets for one table.
pub fn chart_data(df: &DataFrame, mapping: &RoleMapping) -> Result<ChartData> {
    Ok(ChartData {
        salary_by_department: salary_by_department(df, mapping)?,
        experience_distribution: experience_distribution(df)?,
        age_histogram: age_histogram(df, mapping)?,
        salary_vs_performance: salary_vs_performance(df, mapping)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use empdash_model::ProcessingError;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn department_bars_sorted_by_mean() {
        let df = DataFrame::new(vec![
            Series::new("Salary".into(), vec![Some(10.0), Some(50.0), Some(30.0), None, Some(50.0)])
                .into_column(),
            Series::new("Department".into(), vec!["HR", "IT", "HR", "IT", "Ops"]).into_column(),
        ])
        .unwrap();
        let mapping = RoleMapping {
            salary: Some("Salary".to_string()),
            department: Some("Department".to_string()),
            ..RoleMapping::default()
        };

        let bars = salary_by_department(&df, &mapping).unwrap().unwrap();

        let summary: Vec<(&str, f64, usize)> = bars
            .iter()
            .map(|bar| (bar.department.as_str(), bar.mean_salary, bar.employees))
            .collect();
        assert_eq!(
            summary,
            vec![("IT", 50.0, 1), ("Ops", 50.0, 1), ("HR", 20.0, 2)]
        );
    }

    #[test]
    fn department_groups_collect_interleaved_rows() {
        let departments: Vec<String> = (0..40).map(|idx| format!("D{}", idx % 8)).collect();
        let salaries: Vec<f64> = (0..40).map(|idx| (idx % 8) as f64 * 10.0 + 5.0).collect();
        let df = DataFrame::new(vec![
            Series::new("Salary".into(), salaries).into_column(),
            Series::new("Department".into(), departments).into_column(),
        ])
        .unwrap();
        let mapping = RoleMapping {
            salary: Some("Salary".to_string()),
            department: Some("Department".to_string()),
            ..RoleMapping::default()
        };

        let bars = salary_by_department(&df, &mapping).unwrap().unwrap();

        assert_eq!(bars.len(), 8);
        assert_eq!(bars[0].department, "D7");
        assert_eq!(bars[0].mean_salary, 75.0);
        assert!(bars.iter().all(|bar| bar.employees == 5));
    }

    #[test]
    fn department_bars_need_both_roles() {
        let df = DataFrame::new(vec![
            Series::new("Salary".into(), vec![1.0]).into_column(),
        ])
        .unwrap();
        let mapping = RoleMapping {
            salary: Some("Salary".to_string()),
            ..RoleMapping::default()
        };
        assert_eq!(salary_by_department(&df, &mapping).unwrap(), None);
    }

    #[test]
    fn experience_shares() {
        let df = DataFrame::new(vec![
            Series::new(
                EXPERIENCE_LEVEL_COLUMN.into(),
                vec![Some("Mid"), Some("Junior"), Some("Junior"), None, Some("Senior")],
            )
            .into_column(),
        ])
        .unwrap();

        let shares = experience_distribution(&df).unwrap().unwrap();

        let levels: Vec<(&str, usize, f64)> = shares
            .iter()
            .map(|share| (share.level.as_str(), share.count, share.percent))
            .collect();
        assert_eq!(
            levels,
            vec![("Junior", 2, 50.0), ("Mid", 1, 25.0), ("Senior", 1, 25.0)]
        );
    }

    #[test]
    fn histogram_edges_and_counts() {
        let bins = histogram_bins(&[20.0, 26.0, 30.0, 44.0, 50.0, 80.0]);

        assert_eq!(bins.len(), AGE_HISTOGRAM_BINS);
        let edges: Vec<(f64, f64)> = bins.iter().map(|bin| (bin.lower, bin.upper)).collect();
        assert_eq!(
            edges,
            vec![
                (20.0, 30.0),
                (30.0, 40.0),
                (40.0, 50.0),
                (50.0, 60.0),
                (60.0, 70.0),
                (70.0, 80.0)
            ]
        );
        let counts: Vec<usize> = bins.iter().map(|bin| bin.count).collect();
        assert_eq!(counts, vec![2, 1, 1, 1, 0, 1]);
    }

    #[test]
    fn histogram_of_one_value_is_widened() {
        let bins = histogram_bins(&[30.0, 30.0]);
        assert_eq!(bins[0].lower, 29.5);
        assert_eq!(bins[AGE_HISTOGRAM_BINS - 1].upper, 30.5);
        assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), 2);
        assert!(histogram_bins(&[]).is_empty());
    }

    #[test]
    fn text_age_is_an_error() {
        let df = DataFrame::new(vec![
            Series::new("Age".into(), vec!["31", "old"]).into_column(),
        ])
        .unwrap();
        let mapping = RoleMapping {
            age: Some("Age".to_string()),
            ..RoleMapping::default()
        };

        let err = age_histogram(&df, &mapping).unwrap_err();
        assert!(matches!(err, ProcessingError::NonNumeric { role: Role::Age, .. }));
    }

    #[test]
    fn scatter_skips_incomplete_rows() {
        let df = DataFrame::new(vec![
            Series::new("Salary".into(), vec![Some(100.0), Some(200.0), None]).into_column(),
            Series::new("Performance".into(), vec![Some("4"), Some("great"), Some("3")])
                .into_column(),
        ])
        .unwrap();
        let mapping = RoleMapping {
            salary: Some("Salary".to_string()),
            performance: Some("Performance".to_string()),
            ..RoleMapping::default()
        };

        let points = salary_vs_performance(&df, &mapping).unwrap().unwrap();

        assert_eq!(
            points,
            vec![SalaryPerformancePoint {
                salary: 100.0,
                performance: 4.0
            }]
        );
    }
}
