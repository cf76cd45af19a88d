//! Matching idle agents to senders.

use fleet_core::{SenderId, SimRng};

use crate::Sender;

/// Claim a sender for an idle agent.
///
/// Picks uniformly at random among all senders with `claimed == false` and
/// marks the pick as claimed.  Returns `None` when every sender is taken.
/// There is no fairness or ageing: an unlucky agent may wait indefinitely.
pub fn find_work(senders: &mut [Sender], rng: &mut SimRng) -> Option<SenderId> {
    let available: Vec<usize> = senders
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.claimed)
        .map(|(i, _)| i)
        .collect();

    let &pick = rng.choose(&available)?;
    let sender = &mut senders[pick];
    sender.claimed = true;
    Some(sender.id)
}
