use indexmap::IndexMap;
use std::fmt::Write as _;
use tabsplit_domain::{Member, MemberId, Transfer};

/// One sender's contribution inside a receiver group.
#[derive(Clone, Debug, PartialEq)]
pub struct SenderShare {
    pub name: String,
    pub amount: f64,
}

/// All transfers flowing to a single receiver, plus the running total.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiverGroup {
    pub receiver: MemberId,
    pub receiver_name: String,
    pub senders: Vec<SenderShare>,
    pub total_receive: f64,
}

pub struct SettlementPresenter;

impl SettlementPresenter {
    /// Reshapes the flat transfer list by receiver, in the order receivers
    /// first appear. Ids with no matching member render as "Unknown".
    pub fn group_by_receiver(transfers: &[Transfer], members: &[Member]) -> Vec<ReceiverGroup> {
        let name_of = |id: MemberId| {
            members
                .iter()
                .find(|member| member.id == id)
                .map_or_else(|| "Unknown".to_owned(), |member| member.name.clone())
        };

        let mut groups: IndexMap<MemberId, ReceiverGroup> = IndexMap::new();
        for transfer in transfers {
            let group = groups
                .entry(transfer.to)
                .or_insert_with(|| ReceiverGroup {
                    receiver: transfer.to,
                    receiver_name: name_of(transfer.to),
                    senders: Vec::new(),
                    total_receive: 0.0,
                });
            group.senders.push(SenderShare {
                name: name_of(transfer.from),
                amount: transfer.amount,
            });
            group.total_receive += transfer.amount;
        }

        groups.into_values().collect()
    }

    /// Plain-text rendering of the grouped plan, suitable for the clipboard.
    pub fn render_plain_text(groups: &[ReceiverGroup]) -> String {
        let mut out = String::new();
        for group in groups {
            let _ = writeln!(
                out,
                "{} receives {}",
                group.receiver_name,
                format_amount(group.total_receive)
            );
            for sender in &group.senders {
                let _ = writeln!(out, "  - {}: {}", sender.name, format_amount(sender.amount));
            }
        }
        out
    }
}

/// Thousands-grouped amount formatting. Whole amounts drop the fraction;
/// anything else keeps two decimal places.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let integral = cents / 100;
    let fraction = cents % 100;

    let digits = integral.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction != 0 {
        let _ = write!(out, ".{fraction:02}");
    }
    out
}
