use tabsplit_domain::{Bill, BillStatus};

/// The settle-all checkpoint: closes every open bill, tagging it with the
/// shared batch identifier so the history view can group the checkpoint.
///
/// Pure transition. The engine never mutates bill status, so the caller
/// swaps its store to the returned list after accepting the computed plan.
pub fn settle_all_bills(bills: &[Bill], batch_id: i64) -> Vec<Bill> {
    let open = bills.iter().filter(|bill| bill.is_open()).count();
    tracing::debug!(batch_id, closed_count = open, "closing open bills");

    bills
        .iter()
        .map(|bill| {
            if bill.is_open() {
                Bill {
                    status: BillStatus::Closed {
                        batch: Some(batch_id),
                    },
                    ..bill.clone()
                }
            } else {
                bill.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_domain::{BillId, MemberId, SplitRule};

    fn bill(id: i64, status: BillStatus) -> Bill {
        Bill {
            id: BillId(id),
            amount: 100.0,
            description: format!("bill {id}"),
            payer: MemberId(1),
            date: "2025-01-01".to_owned(),
            split: SplitRule::Equal {
                selected: vec![MemberId(1), MemberId(2)],
            },
            status,
        }
    }

    #[test]
    fn open_bills_are_closed_with_the_batch_tag() {
        let bills = vec![bill(1, BillStatus::Open), bill(2, BillStatus::Open)];

        let settled = settle_all_bills(&bills, 42);

        assert!(settled
            .iter()
            .all(|bill| bill.status == BillStatus::Closed { batch: Some(42) }));
    }

    #[test]
    fn already_closed_bills_keep_their_original_batch() {
        let bills = vec![
            bill(1, BillStatus::Closed { batch: Some(7) }),
            bill(2, BillStatus::Open),
        ];

        let settled = settle_all_bills(&bills, 42);

        assert_eq!(settled[0].status, BillStatus::Closed { batch: Some(7) });
        assert_eq!(settled[1].status, BillStatus::Closed { batch: Some(42) });
    }

    #[test]
    fn input_is_left_untouched() {
        let bills = vec![bill(1, BillStatus::Open)];
        let _ = settle_all_bills(&bills, 42);
        assert_eq!(bills[0].status, BillStatus::Open);
    }
}
