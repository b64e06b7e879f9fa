//! Bounded counting histogram with an amortized median cursor.
//!
//! The cursor (`median`, plus the count of elements strictly below it) moves
//! at most one bucket per single add/remove, so a sliding-window median costs
//! O(1) amortized per pixel. Batch merge/unmerge re-walk the cursor on the
//! next median query.

use crate::error::{AlignError, Result};

pub const BUCKETS: usize = 256;

#[derive(Clone)]
pub struct Histogram {
    buckets: [usize; BUCKETS],
    count: usize,
    median: usize,
    skipped: usize,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            buckets: [0; BUCKETS],
            count: 0,
            median: 0,
            skipped: 0,
        }
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn add(&mut self, value: usize) -> Result<()> {
        if value >= BUCKETS {
            return Err(AlignError::Histogram(format!(
                "value {value} outside histogram domain 0..{BUCKETS}"
            )));
        }
        self.buckets[value] += 1;
        self.count += 1;
        if self.median > value {
            self.skipped += 1;
        }
        Ok(())
    }

    pub fn remove(&mut self, value: usize) -> Result<()> {
        if value >= BUCKETS {
            return Err(AlignError::Histogram(format!(
                "value {value} outside histogram domain 0..{BUCKETS}"
            )));
        }
        if self.buckets[value] == 0 {
            return Err(AlignError::Histogram(format!(
                "removing value {value} that is not present"
            )));
        }
        self.buckets[value] -= 1;
        self.count -= 1;
        if self.median > value {
            self.skipped -= 1;
        }
        Ok(())
    }

    /// Current median; walks the cursor toward the balance point first.
    pub fn median(&mut self) -> Result<usize> {
        if self.count == 0 {
            return Err(AlignError::Histogram("histogram is empty".to_string()));
        }
        let target = self.count / 2;
        while self.skipped + self.buckets[self.median] <= target {
            self.skipped += self.buckets[self.median];
            self.median += 1;
        }
        while self.skipped > target {
            self.median -= 1;
            self.skipped -= self.buckets[self.median];
        }
        Ok(self.median)
    }

    pub fn clear(&mut self) {
        self.buckets = [0; BUCKETS];
        self.count = 0;
        self.median = 0;
        self.skipped = 0;
    }

    /// Add every count of `other` into this histogram.
    pub fn merge(&mut self, other: &Histogram) {
        for (value, &n) in other.buckets.iter().enumerate() {
            if n != 0 {
                self.buckets[value] += n;
                self.count += n;
                if value < self.median {
                    self.skipped += n;
                }
            }
        }
    }

    /// Remove every count of `other` from this histogram.
    pub fn unmerge(&mut self, other: &Histogram) -> Result<()> {
        for (value, &n) in other.buckets.iter().enumerate() {
            if n != 0 {
                if n > self.buckets[value] {
                    return Err(AlignError::Histogram(format!(
                        "cannot remove {n} occurrences of value {value}, only {} present",
                        self.buckets[value]
                    )));
                }
                self.buckets[value] -= n;
                self.count -= n;
                if value < self.median {
                    self.skipped -= n;
                }
            }
        }
        Ok(())
    }
}
