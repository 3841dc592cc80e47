// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Efficient storage for rolling frame metrics.

/// A fixed-size circular buffer for storing numerical samples.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    data: [T; N],
    index: usize,
    count: usize,
}

impl<T: Default + Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Copy, const N: usize> RingBuffer<T, N> {
    /// Creates a new, empty ring buffer.
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            index: 0,
            count: 0,
        }
    }

    /// Pushes a new value into the buffer, overwriting the oldest if full.
    pub fn push(&mut self, value: T) {
        if N == 0 {
            return;
        }
        self.data[self.index] = value;
        self.index = (self.index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Returns the number of elements currently in the buffer.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the maximum number of elements the buffer retains.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if no value has been pushed since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Forgets every stored value.
    pub fn clear(&mut self) {
        self.index = 0;
        self.count = 0;
    }

    /// Returns an iterator over the values in chronological order (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (oldest, newest) = if self.count < N {
            // Not full yet: the values are exactly the ones before `index`.
            self.data[..self.count].split_at(0)
        } else {
            // Full: the oldest value sits at `index`.
            let (left, right) = self.data.split_at(self.index);
            (right, left)
        };
        oldest.iter().chain(newest.iter())
    }
}

impl<const N: usize> RingBuffer<f32, N> {
    /// Calculates the arithmetic mean of the values in the buffer, or `None` if empty.
    pub fn average(&self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }
        Some(self.iter().sum::<f32>() / self.count as f32)
    }

    /// Returns the minimum value in the buffer, or `None` if empty.
    pub fn min(&self) -> Option<f32> {
        self.iter().copied().reduce(f32::min)
    }

    /// Returns the maximum value in the buffer, or `None` if empty.
    pub fn max(&self) -> Option<f32> {
        self.iter().copied().reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_push_and_iter() {
        let mut rb = RingBuffer::<f32, 3>::new();
        rb.push(1.0);
        rb.push(2.0);
        rb.push(3.0);
        rb.push(4.0); // Overwrites 1.0

        let values: Vec<f32> = rb.iter().copied().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(rb.count(), 3);
    }

    #[test]
    fn test_ring_buffer_partial_iter() {
        let mut rb = RingBuffer::<f32, 4>::new();
        rb.push(1.0);
        rb.push(2.0);
        let values: Vec<f32> = rb.iter().copied().collect();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_ring_buffer_average() {
        let mut rb = RingBuffer::<f32, 4>::new();
        rb.push(10.0);
        rb.push(20.0);
        assert_eq!(rb.average(), Some(15.0));
    }

    #[test]
    fn test_ring_buffer_min_max() {
        let mut rb = RingBuffer::<f32, 4>::new();
        rb.push(3.0);
        rb.push(1.0);
        rb.push(4.0);
        rb.push(1.5);
        assert_eq!(rb.min(), Some(1.0));
        assert_eq!(rb.max(), Some(4.0));
    }

    #[test]
    fn test_ring_buffer_empty_and_clear() {
        let mut rb = RingBuffer::<f32, 4>::new();
        assert_eq!(rb.average(), None);
        assert!(rb.is_empty());

        rb.push(5.0);
        rb.clear();
        assert_eq!(rb.count(), 0);
        assert_eq!(rb.iter().count(), 0);
        assert_eq!(rb.capacity(), 4);
    }
}
