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

use cabina_core::renderer::{CpuTexture, ResourceError, TextureAllocator, TextureId};
use std::collections::HashMap;

#[derive(Debug)]
struct Entry {
    label: String,
    bytes: usize,
}

/// An in-memory texture allocator with a fixed byte budget.
///
/// Stands in for GPU memory: allocations beyond the budget fail with
/// [`ResourceError::OutOfMemory`] exactly as a real device would.
#[derive(Debug)]
pub struct TextureStore {
    budget: usize,
    used: usize,
    next_id: usize,
    entries: HashMap<TextureId, Entry>,
}

impl TextureStore {
    /// Creates a store able to hold `budget` bytes of texel data.
    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget,
            used: 0,
            next_id: 0,
            entries: HashMap::new(),
        }
    }

    /// Creates a store without a practical limit.
    pub fn unbounded() -> Self {
        Self::with_budget(usize::MAX)
    }

    /// Bytes currently allocated.
    pub fn used_bytes(&self) -> usize {
        self.used
    }

    /// Number of live textures.
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether `id` refers to a live texture.
    pub fn contains(&self, id: TextureId) -> bool {
        self.entries.contains_key(&id)
    }

    /// The label a live texture was allocated with.
    pub fn label(&self, id: TextureId) -> Option<&str> {
        self.entries.get(&id).map(|e| e.label.as_str())
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl TextureAllocator for TextureStore {
    fn allocate(&mut self, label: &str, texture: &CpuTexture) -> Result<TextureId, ResourceError> {
        let expected = texture.expected_len();
        if texture.pixels.len() != expected {
            return Err(ResourceError::InvalidPixelData {
                expected,
                actual: texture.pixels.len(),
            });
        }

        let available = self.budget.saturating_sub(self.used);
        if expected > available {
            return Err(ResourceError::OutOfMemory {
                label: label.to_owned(),
                requested: expected,
                available,
            });
        }

        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.used += expected;
        self.entries.insert(
            id,
            Entry {
                label: label.to_owned(),
                bytes: expected,
            },
        );
        log::trace!("Allocated texture '{}' as {:?} ({} bytes)", label, id, expected);
        Ok(id)
    }

    fn release(&mut self, id: TextureId) -> Result<(), ResourceError> {
        let entry = self
            .entries
            .remove(&id)
            .ok_or(ResourceError::InvalidHandle(id))?;
        self.used -= entry.bytes;
        log::trace!("Released texture '{}' ({:?})", entry.label, id);
        Ok(())
    }
}
