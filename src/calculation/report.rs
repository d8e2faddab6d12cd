//! Payroll report assembly.

use tracing::{debug, info};

use super::aggregation::aggregate_period;
use super::pay_period::pay_periods_for_month;
use super::wages::apply_wages;
use crate::error::PayrollResult;
use crate::models::PayrollReport;
use crate::store::RecordStore;

/// Builds the payroll report from everything currently in `store`.
///
/// Earnings are ordered by month ascending, then first half before second
/// half, then employee id ascending. Building the report only reads the
/// store, so repeated calls over unchanged data return equal reports.
///
/// # Errors
///
/// - `StoreFailure` if any store query fails
/// - `CalculationError` if hours or amounts overflow
pub async fn build_payroll_report(store: &dyn RecordStore) -> PayrollResult<PayrollReport> {
    let months = store.distinct_work_months().await?;
    debug!(months = months.len(), "building payroll report");

    let mut report = PayrollReport::default();
    for month in months {
        for period in pay_periods_for_month(month) {
            let earnings = aggregate_period(store, period).await?;
            debug!(
                period_start = %period.start_date,
                half = ?period.half(),
                employees = earnings.len(),
                "aggregated pay period"
            );
            report.earnings.extend(earnings);
        }
    }

    apply_wages(&mut report)?;
    info!(earnings = report.len(), "payroll report built");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::error::PayrollError;
    use crate::models::{BatchId, JobGroup, PunchRecord};
    use crate::store::MemoryRecordStore;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn insert(store: &MemoryRecordStore, employee_id: u32, day: NaiveDate, hours: &str, group: JobGroup) {
        store
            .insert(
                &BatchId::new("1"),
                &PunchRecord {
                    employee_id,
                    work_date: day,
                    hours: dec(hours),
                    job_group: group,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_store_gives_empty_report() {
        let store = MemoryRecordStore::new();
        let report = build_payroll_report(&store).await.unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_report_ordering_and_amounts() {
        let store = MemoryRecordStore::new();
        // Inserted out of order on purpose.
        insert(&store, 2, date(2020, 2, 20), "3", JobGroup::B).await;
        insert(&store, 1, date(2020, 1, 20), "2", JobGroup::A).await;
        insert(&store, 2, date(2020, 1, 4), "10", JobGroup::B).await;
        insert(&store, 1, date(2020, 1, 14), "10", JobGroup::A).await;
        insert(&store, 1, date(2020, 1, 4), "4", JobGroup::A).await;
        insert(&store, 1, date(2019, 12, 31), "1", JobGroup::A).await;

        let report = build_payroll_report(&store).await.unwrap();
        let rows: Vec<(u32, NaiveDate, NaiveDate, Option<Decimal>)> = report
            .earnings
            .iter()
            .map(|e| {
                (
                    e.employee_id,
                    e.pay_period.start_date,
                    e.pay_period.end_date,
                    e.amount,
                )
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                (1, date(2019, 12, 16), date(2019, 12, 31), Some(dec("20"))),
                (1, date(2020, 1, 1), date(2020, 1, 15), Some(dec("280"))),
                (2, date(2020, 1, 1), date(2020, 1, 15), Some(dec("300"))),
                (1, date(2020, 1, 16), date(2020, 1, 31), Some(dec("40"))),
                (2, date(2020, 2, 16), date(2020, 2, 29), Some(dec("90"))),
            ]
        );
    }

    #[tokio::test]
    async fn test_report_is_stable_across_calls() {
        let store = MemoryRecordStore::new();
        insert(&store, 5, date(2021, 3, 1), "1.5", JobGroup::B).await;
        insert(&store, 4, date(2021, 3, 30), "8", JobGroup::A).await;

        let first = build_payroll_report(&store).await.unwrap();
        let second = build_payroll_report(&store).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_every_amount_is_filled() {
        let store = MemoryRecordStore::new();
        insert(&store, 1, date(2020, 5, 1), "0", JobGroup::A).await;
        insert(&store, 2, date(2020, 5, 31), "7", JobGroup::B).await;

        let report = build_payroll_report(&store).await.unwrap();
        assert!(report.earnings.iter().all(|e| e.amount.is_some()));
        assert_eq!(report.earnings[0].amount, Some(Decimal::ZERO));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = MemoryRecordStore::new();
        store.set_unavailable(true);
        assert!(matches!(
            build_payroll_report(&store).await,
            Err(PayrollError::StoreFailure(_))
        ));
    }
}
