use tabsplit_domain::{Bill, Member, MemberId};

/// Adds a member with a trimmed display name. Blank names are rejected.
pub fn add_member(members: &mut Vec<Member>, id: MemberId, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    members.push(Member {
        id,
        name: name.to_owned(),
    });
    true
}

/// Removes a member and cascades to the bills that member paid. Bills where
/// the member only participated in a split are kept; their share simply
/// stops being attributable to anyone.
pub fn remove_member(members: &mut Vec<Member>, bills: &mut Vec<Bill>, id: MemberId) {
    members.retain(|member| member.id != id);
    bills.retain(|bill| bill.payer != id);
}
