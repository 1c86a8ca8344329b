//! Drone workloads that drive the containers the way the game does.
//!
//! Two discrete-event simulations, each touching its containers only
//! through `add`/`remove`/`peek`/`push`/`pop`/`is_empty`:
//!
//! - [`clean_sword_times`]: a queue of swords waiting to be cleaned and a
//!   queue of requests for clean swords.
//! - [`item_retrieval_times`]: a queue of item requests and a stack of
//!   items the drone is partway through carrying back.
//!
//! Input is in memory; parsing and file handling belong to the game.

use hangar_core::CollectionError;
use hangar_queue::CircularQueue;
use hangar_stack::BoundedStack;

/// When a clean-sword request was filled and how long it waited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CleanSwordTimes {
    pub time_filled: u64,
    pub time_to_fulfill: u64,
}

/// When the item requested at position `index` made it back to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemRetrievalTimes {
    pub index: u32,
    pub time_retrieved: u64,
}

#[derive(Clone, Copy, Debug)]
struct Sword {
    /// Time the sword became available for cleaning.
    received: u64,
    processing: u64,
}

/// Fill clean-sword requests with a single cleaning drone.
///
/// `dirty_swords` are the processing times of the swords on hand at time
/// 0. `requests` are request times in non-decreasing order. Each request
/// takes the next sword in line; cleaning starts once both the drone and
/// the sword are available. The requester hands back a dirty sword at its
/// request time, which takes `cleaning_time` to clean.
///
/// Requests beyond the supply of swords are left unfilled.
pub fn clean_sword_times(
    dirty_swords: &[u64],
    requests: &[u64],
    cleaning_time: u64,
) -> Result<Vec<CleanSwordTimes>, CollectionError> {
    let mut swords: CircularQueue<Sword> = CircularQueue::new();
    for &processing in dirty_swords {
        swords.add(Sword {
            received: 0,
            processing,
        })?;
    }
    let mut pending: CircularQueue<u64> = CircularQueue::new();
    for &request in requests {
        pending.add(request)?;
    }

    let mut now = 0u64;
    let mut filled = Vec::with_capacity(requests.len());
    while let Some(request) = pending.remove() {
        let Some(sword) = swords.remove() else {
            break;
        };
        now = now.max(sword.received) + sword.processing;

        let time_filled = request.max(now);
        filled.push(CleanSwordTimes {
            time_filled,
            time_to_fulfill: time_filled - request,
        });
        swords.add(Sword {
            received: request,
            processing: cleaning_time,
        })?;
    }
    Ok(filled)
}

#[derive(Clone, Copy, Debug)]
struct Request {
    index: u32,
    time: u64,
}

#[derive(Clone, Copy, Debug)]
struct Carry {
    index: u32,
    /// Distance of the item from the player.
    distance: u64,
}

struct Retrieval {
    now: u64,
    /// Drone distance from the player.
    position: u64,
    in_flight: BoundedStack<Carry>,
    retrieved: Vec<ItemRetrievalTimes>,
}

impl Retrieval {
    /// Work the most recent item first until `interrupt` or until every
    /// in-flight item is home.
    fn work_until(&mut self, interrupt: u64) -> Result<(), CollectionError> {
        while !self.in_flight.is_empty() {
            let item = self.in_flight.pop()?;
            let mut available = interrupt.saturating_sub(self.now);

            let reach = item.distance.abs_diff(self.position);
            if available <= reach {
                // Interrupted on the way out; the item stays where it is.
                self.in_flight.push(item)?;
                if item.distance > self.position {
                    self.position += available;
                } else {
                    self.position -= available;
                }
                self.now += available;
                return Ok(());
            }
            self.now += reach;
            self.position = item.distance;
            available -= reach;

            let back = item.distance;
            if back > available {
                // Interrupted on the way home; drop the item where we stand.
                let dropped = item.distance - available;
                self.in_flight.push(Carry {
                    index: item.index,
                    distance: dropped,
                })?;
                self.now += available;
                self.position = dropped;
                return Ok(());
            }
            self.now += back;
            self.position = 0;
            self.retrieved.push(ItemRetrievalTimes {
                index: item.index,
                time_retrieved: self.now,
            });
        }
        Ok(())
    }
}

/// Retrieve requested items with a single drone on a line field.
///
/// Item `i` is requested at `request_times[i]` (non-decreasing) and
/// appears `field_length` away from the player. The drone always works
/// the newest outstanding item; a new request interrupts it, leaving the
/// item it was handling on the stack at its current distance.
pub fn item_retrieval_times(
    field_length: u64,
    request_times: &[u64],
) -> Result<Vec<ItemRetrievalTimes>, CollectionError> {
    let mut requests: CircularQueue<Request> = CircularQueue::new();
    for (index, &time) in (0u32..).zip(request_times) {
        requests.add(Request { index, time })?;
    }

    let mut run = Retrieval {
        now: 0,
        position: 0,
        in_flight: BoundedStack::new(),
        retrieved: Vec::with_capacity(request_times.len()),
    };
    while let Some(request) = requests.remove() {
        run.now = request.time;
        let next = requests.peek().map_or(u64::MAX, |r| r.time);
        run.in_flight.push(Carry {
            index: request.index,
            distance: field_length,
        })?;
        run.work_until(next)?;
    }
    Ok(run.retrieved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword(time_filled: u64, time_to_fulfill: u64) -> CleanSwordTimes {
        CleanSwordTimes {
            time_filled,
            time_to_fulfill,
        }
    }

    fn item(index: u32, time_retrieved: u64) -> ItemRetrievalTimes {
        ItemRetrievalTimes {
            index,
            time_retrieved,
        }
    }

    #[test]
    fn swords_fill_in_request_order() {
        let out = clean_sword_times(&[3, 1], &[2, 4, 10], 5).unwrap();
        assert_eq!(out, vec![sword(3, 1), sword(4, 0), sword(10, 0)]);
    }

    #[test]
    fn one_sword_recycled() {
        let out = clean_sword_times(&[1], &[0, 0, 0], 2).unwrap();
        assert_eq!(out, vec![sword(1, 1), sword(3, 3), sword(5, 5)]);
    }

    #[test]
    fn no_swords_fills_nothing() {
        assert!(clean_sword_times(&[], &[1, 2], 3).unwrap().is_empty());
    }

    #[test]
    fn single_item_round_trip() {
        let out = item_retrieval_times(5, &[0]).unwrap();
        assert_eq!(out, vec![item(0, 10)]);
    }

    #[test]
    fn new_request_interrupts_outbound_trip() {
        let out = item_retrieval_times(5, &[0, 3]).unwrap();
        assert_eq!(out, vec![item(1, 10), item(0, 20)]);
    }

    #[test]
    fn new_request_interrupts_return_trip() {
        let out = item_retrieval_times(5, &[0, 7]).unwrap();
        assert_eq!(out, vec![item(1, 14), item(0, 20)]);
    }

    #[test]
    fn spaced_requests_complete_in_order() {
        let out = item_retrieval_times(2, &[0, 10, 20]).unwrap();
        assert_eq!(out, vec![item(0, 4), item(1, 14), item(2, 24)]);
    }
}
