use tabsplit_domain::MemberId;

/// Direction of a one-off debt note, from the owner's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebtKind {
    /// The owner borrowed from the member (owner pays back).
    Borrow,
    /// The owner lent to the member (member pays back).
    Lend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebtStatus {
    Active,
    Settled,
}

/// A standalone IOU outside the shared-bill ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct DebtRecord {
    pub id: i64,
    pub member: MemberId,
    pub amount: f64,
    pub kind: DebtKind,
    pub note: String,
    pub date: String,
    pub status: DebtStatus,
}

/// One person's book of standalone debts, newest first.
#[derive(Clone, Debug, Default)]
pub struct DebtBook {
    records: Vec<DebtRecord>,
}

impl DebtBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: DebtRecord) {
        self.records.insert(0, record);
    }

    /// Settling a debt removes it from the book.
    pub fn settle(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Cascade for member removal: the member's debt notes go with them.
    pub fn remove_member(&mut self, member: MemberId) {
        self.records.retain(|record| record.member != member);
    }

    pub fn records(&self) -> &[DebtRecord] {
        &self.records
    }

    pub fn count_of(&self, kind: DebtKind) -> usize {
        self.records
            .iter()
            .filter(|record| record.kind == kind)
            .count()
    }

    pub fn total_of(&self, kind: DebtKind) -> f64 {
        self.records
            .iter()
            .filter(|record| record.kind == kind)
            .map(|record| record.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, member: i64, amount: f64, kind: DebtKind) -> DebtRecord {
        DebtRecord {
            id,
            member: MemberId(member),
            amount,
            kind,
            note: String::new(),
            date: "2025-01-01".to_owned(),
            status: DebtStatus::Active,
        }
    }

    #[test]
    fn records_are_kept_newest_first() {
        let mut book = DebtBook::new();
        book.add(record(1, 1, 10.0, DebtKind::Lend));
        book.add(record(2, 1, 20.0, DebtKind::Borrow));

        assert_eq!(book.records()[0].id, 2);
        assert_eq!(book.records()[1].id, 1);
    }

    #[test]
    fn settling_removes_the_record() {
        let mut book = DebtBook::new();
        book.add(record(1, 1, 10.0, DebtKind::Lend));

        assert!(book.settle(1));
        assert!(!book.settle(1));
        assert!(book.records().is_empty());
    }

    #[test]
    fn counts_and_totals_split_by_kind() {
        let mut book = DebtBook::new();
        book.add(record(1, 1, 10.0, DebtKind::Lend));
        book.add(record(2, 2, 20.0, DebtKind::Lend));
        book.add(record(3, 1, 5.0, DebtKind::Borrow));

        assert_eq!(book.count_of(DebtKind::Lend), 2);
        assert_eq!(book.count_of(DebtKind::Borrow), 1);
        assert_eq!(book.total_of(DebtKind::Lend), 30.0);
        assert_eq!(book.total_of(DebtKind::Borrow), 5.0);
    }

    #[test]
    fn member_removal_drops_their_records() {
        let mut book = DebtBook::new();
        book.add(record(1, 1, 10.0, DebtKind::Lend));
        book.add(record(2, 2, 20.0, DebtKind::Borrow));

        book.remove_member(MemberId(1));

        assert_eq!(book.records().len(), 1);
        assert_eq!(book.records()[0].member, MemberId(2));
    }
}
