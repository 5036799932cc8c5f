use std::fmt;

use tracing::instrument;

use crate::errors::{TriageError, TriageResult};

/// Lowest accepted urgency score (most urgent).
pub const URGENCY_MIN: u8 = 1;
/// Highest accepted urgency score (least urgent).
pub const URGENCY_MAX: u8 = 10;

/// A patient record queued for intake. Lower urgency means served sooner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub urgency: u8,
}

impl Patient {
    pub fn new(name: &str, urgency: u8) -> Self {
        Self {
            name: name.to_string(),
            urgency,
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.urgency)
    }
}

/// Array-backed binary min-heap ordering patients by urgency.
///
/// The vec stores a complete binary tree via index arithmetic:
/// parent(i) = (i-1)/2, left(i) = 2i+1, right(i) = 2i+2. Invariant: every
/// parent's urgency is <= both children's.
#[derive(Debug, Default)]
pub struct IntakeQueue {
    data: Vec<Patient>,
}

impl IntakeQueue {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current entries in internal array order, for diagnostic display only.
    pub fn entries(&self) -> &[Patient] {
        &self.data
    }

    /// Admits a patient, keeping the heap ordered. O(log n).
    ///
    /// Rejects urgencies outside [`URGENCY_MIN`], [`URGENCY_MAX`] with the
    /// queue left unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, patient: Patient) -> TriageResult<()> {
        if !(URGENCY_MIN..=URGENCY_MAX).contains(&patient.urgency) {
            return Err(TriageError::UrgencyOutOfRange(patient.urgency));
        }
        self.data.push(patient);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// The most urgent patient without removing them. O(1).
    pub fn peek(&self) -> Option<&Patient> {
        self.data.first()
    }

    /// Removes and returns the most urgent patient, or None when the queue
    /// is empty. O(log n).
    #[instrument(level = "debug", skip(self))]
    pub fn remove_min(&mut self) -> Option<Patient> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop();
        self.sift_down(0);
        min
    }

    fn parent_index(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left_index(i: usize) -> usize {
        2 * i + 1
    }

    fn right_index(i: usize) -> usize {
        2 * i + 2
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent_index(index);
            if self.data[index].urgency < self.data[parent].urgency {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    // Ties between equal smaller children resolve to the left child: the
    // right child only displaces the candidate on a strict comparison.
    fn sift_down(&mut self, mut index: usize) {
        let n = self.data.len();
        loop {
            let left = Self::left_index(index);
            let right = Self::right_index(index);
            let mut smallest = index;

            if left < n && self.data[left].urgency < self.data[smallest].urgency {
                smallest = left;
            }
            if right < n && self.data[right].urgency < self.data[smallest].urgency {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_ordered(queue: &IntakeQueue) -> bool {
        let data = queue.entries();
        (1..data.len()).all(|i| data[IntakeQueue::parent_index(i)].urgency <= data[i].urgency)
    }

    #[test]
    fn sift_up_restores_order_after_each_insert() {
        let mut queue = IntakeQueue::new();
        for (name, urgency) in [("a", 7), ("b", 3), ("c", 9), ("d", 1), ("e", 3)] {
            queue.insert(Patient::new(name, urgency)).unwrap();
            assert!(heap_ordered(&queue), "heap broken after {}", name);
        }
        assert_eq!(queue.peek().unwrap().urgency, 1);
    }

    #[test]
    fn sift_down_prefers_left_child_on_equal_urgency() {
        let mut queue = IntakeQueue::new();
        for (name, urgency) in [("min", 1), ("left", 2), ("right", 2), ("tail", 3)] {
            queue.insert(Patient::new(name, urgency)).unwrap();
        }

        // Removing the min relocates "tail" to the root, where both
        // children tie at urgency 2; the swap must pick the left slot.
        assert_eq!(queue.remove_min().unwrap().name, "min");
        assert_eq!(queue.peek().unwrap().name, "left");
    }

    #[test]
    fn rejected_insert_leaves_data_untouched() {
        let mut queue = IntakeQueue::new();
        queue.insert(Patient::new("ok", 5)).unwrap();
        let before: Vec<Patient> = queue.entries().to_vec();

        assert!(queue.insert(Patient::new("bad", 0)).is_err());
        assert!(queue.insert(Patient::new("bad", 11)).is_err());
        assert_eq!(queue.entries(), before.as_slice());
    }
}
