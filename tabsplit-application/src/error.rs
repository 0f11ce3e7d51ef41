use fxhash::FxHashSet;
use tabsplit_domain::{Bill, Member, MemberId, SplitRule};
use thiserror::Error;

/// Validation the caller must pass before a bill enters the ledger.
///
/// The engine itself degrades gracefully on malformed records; these checks
/// are the boundary contract that keeps malformed records out in the first
/// place.
#[derive(Debug, Error, PartialEq)]
pub enum BillValidationError {
    #[error("bill amount must be positive (found {0})")]
    NonPositiveAmount(f64),
    #[error("bill description must not be empty")]
    EmptyDescription,
    #[error("payer {0} is not a group member")]
    UnknownPayer(MemberId),
    #[error("equal split requires at least one selected member")]
    NoSelectedMembers,
    #[error("member {0} named in the split is not a group member")]
    UnknownSplitMember(MemberId),
    #[error("split item {name:?} has no members")]
    EmptySplitItemMembers { name: String },
    #[error("split item {name:?} exceeds the unallocated remainder ({remaining})")]
    OverAllocated { name: String, remaining: f64 },
}

pub fn validate_bill(bill: &Bill, members: &[Member]) -> Result<(), BillValidationError> {
    if bill.amount <= 0.0 {
        return Err(BillValidationError::NonPositiveAmount(bill.amount));
    }
    if bill.description.trim().is_empty() {
        return Err(BillValidationError::EmptyDescription);
    }

    let known: FxHashSet<MemberId> = members.iter().map(|member| member.id).collect();
    if !known.contains(&bill.payer) {
        return Err(BillValidationError::UnknownPayer(bill.payer));
    }

    match &bill.split {
        SplitRule::Equal { selected } => {
            if selected.is_empty() {
                return Err(BillValidationError::NoSelectedMembers);
            }
            for member in selected {
                if !known.contains(member) {
                    return Err(BillValidationError::UnknownSplitMember(*member));
                }
            }
        }
        SplitRule::Itemized { items } => {
            let mut remaining = bill.amount;
            for item in items {
                if item.members.is_empty() {
                    return Err(BillValidationError::EmptySplitItemMembers {
                        name: item.name.clone(),
                    });
                }
                for member in &item.members {
                    if !known.contains(member) {
                        return Err(BillValidationError::UnknownSplitMember(*member));
                    }
                }
                if item.amount > remaining {
                    return Err(BillValidationError::OverAllocated {
                        name: item.name.clone(),
                        remaining,
                    });
                }
                remaining -= item.amount;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tabsplit_domain::{BillId, BillStatus, SplitItem};

    fn members() -> Vec<Member> {
        vec![
            Member {
                id: MemberId(1),
                name: "A".to_owned(),
            },
            Member {
                id: MemberId(2),
                name: "B".to_owned(),
            },
        ]
    }

    fn bill(amount: f64, description: &str, payer: i64, split: SplitRule) -> Bill {
        Bill {
            id: BillId(1),
            amount,
            description: description.to_owned(),
            payer: MemberId(payer),
            date: "2025-01-01".to_owned(),
            split,
            status: BillStatus::Open,
        }
    }

    fn equal(selected: &[i64]) -> SplitRule {
        SplitRule::Equal {
            selected: selected.iter().map(|&id| MemberId(id)).collect(),
        }
    }

    fn item(name: &str, amount: f64, item_members: &[i64]) -> SplitItem {
        SplitItem {
            id: 1,
            name: name.to_owned(),
            amount,
            members: item_members.iter().map(|&id| MemberId(id)).collect(),
        }
    }

    #[test]
    fn well_formed_bills_pass() {
        let bill = bill(100.0, "dinner", 1, equal(&[1, 2]));
        assert_eq!(validate_bill(&bill, &members()), Ok(()));
    }

    #[rstest]
    #[case::zero_amount(0.0, BillValidationError::NonPositiveAmount(0.0))]
    #[case::negative_amount(-5.0, BillValidationError::NonPositiveAmount(-5.0))]
    fn non_positive_amounts_are_rejected(#[case] amount: f64, #[case] expected: BillValidationError) {
        let bill = bill(amount, "dinner", 1, equal(&[1]));
        assert_eq!(validate_bill(&bill, &members()), Err(expected));
    }

    #[test]
    fn blank_description_is_rejected() {
        let bill = bill(100.0, "  ", 1, equal(&[1]));
        assert_eq!(
            validate_bill(&bill, &members()),
            Err(BillValidationError::EmptyDescription)
        );
    }

    #[test]
    fn unknown_payer_is_rejected() {
        let bill = bill(100.0, "dinner", 9, equal(&[1]));
        assert_eq!(
            validate_bill(&bill, &members()),
            Err(BillValidationError::UnknownPayer(MemberId(9)))
        );
    }

    #[test]
    fn empty_selection_is_rejected() {
        let bill = bill(100.0, "dinner", 1, equal(&[]));
        assert_eq!(
            validate_bill(&bill, &members()),
            Err(BillValidationError::NoSelectedMembers)
        );
    }

    #[test]
    fn items_may_not_exceed_the_remainder() {
        let split = SplitRule::Itemized {
            items: vec![item("mains", 70.0, &[1]), item("drinks", 40.0, &[2])],
        };
        let bill = bill(100.0, "dinner", 1, split);

        assert_eq!(
            validate_bill(&bill, &members()),
            Err(BillValidationError::OverAllocated {
                name: "drinks".to_owned(),
                remaining: 30.0,
            })
        );
    }

    #[test]
    fn items_without_members_are_rejected() {
        let split = SplitRule::Itemized {
            items: vec![item("mains", 70.0, &[])],
        };
        let bill = bill(100.0, "dinner", 1, split);

        assert_eq!(
            validate_bill(&bill, &members()),
            Err(BillValidationError::EmptySplitItemMembers {
                name: "mains".to_owned(),
            })
        );
    }
}
