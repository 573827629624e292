/// Allocates and recycles arena slot indices.
///
/// The BVH keeps its nodes in a flat `Vec` and addresses them by `u32`
/// index. This allocator hands out those indices: freed slots are
/// recycled (LIFO) before the arena is grown.
///
/// # Example
///
/// ```ignore
/// let mut slots = SlotAllocator::new();
/// let a = slots.alloc();  // 0
/// let b = slots.alloc();  // 1
/// slots.free(a);          // 0 is now available
/// let c = slots.alloc();  // 0 (recycled)
/// ```
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    free_list: Vec<u32>,
    next_id: u32,
    len: u32,
}

impl SlotAllocator {
    /// Create a new empty allocator
    pub fn new() -> Self {
        Self {
            free_list: Vec::new(),
            next_id: 0,
            len: 0,
        }
    }

    /// Allocate the next available slot index
    pub fn alloc(&mut self) -> u32 {
        self.len += 1;
        self.free_list.pop().unwrap_or_else(|| {
            let id = self.next_id;
            self.next_id += 1;
            id
        })
    }

    /// Return a slot index to the pool for reuse
    pub fn free(&mut self, id: u32) {
        debug_assert!(id < self.next_id, "freeing an unallocated slot: {}", id);
        debug_assert!(self.len > 0, "freeing from an empty allocator");
        self.len -= 1;
        self.free_list.push(id);
    }

    /// How many of the next `count` allocations would need a brand-new
    /// index (i.e. grow the backing storage).
    pub fn fresh_slots_needed(&self, count: usize) -> usize {
        count.saturating_sub(self.free_list.len())
    }

    /// Forget every allocation and start again from index 0
    pub fn reset(&mut self) {
        self.free_list.clear();
        self.next_id = 0;
        self.len = 0;
    }

    /// Highest index ever allocated + 1.
    ///
    /// This is the minimum length the backing storage must have
    /// to accommodate all allocated indices.
    pub fn high_water_mark(&self) -> u32 {
        self.next_id
    }

    /// Number of currently allocated slots
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether no slots are currently allocated
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "slot_allocator_tests.rs"]
mod tests;
