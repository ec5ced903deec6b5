//! Binary min-heap keyed on `K`, carrying an arbitrary payload.
//!
//! Equal keys come out in no particular order. Searches that care about ties
//! encode them in the key type itself.

pub struct MinHeap<K, V> {
    heap: Vec<(K, V)>,
}

impl<K: Ord, V> MinHeap<K, V> {
    pub fn new() -> Self {
        MinHeap { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<(&K, &V)> {
        self.heap.first().map(|(key, value)| (key, value))
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.heap.push((key, value));
        self.sift_up(self.heap.len() - 1);
    }

    pub fn extract_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        // The last element takes the root slot
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].0 >= self.heap[parent].0 {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for MinHeap<K, V> {
    fn from(elements: Vec<(K, V)>) -> Self {
        let mut heap = MinHeap { heap: elements };
        for index in (0..heap.heap.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }
}

/// Queue front for the cost-based searches.
pub struct PriorityQueue<K, V> {
    queue: MinHeap<K, V>,
}

impl<K: Ord, V> PriorityQueue<K, V> {
    pub fn new() -> Self {
        PriorityQueue {
            queue: MinHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            queue: MinHeap::with_capacity(capacity),
        }
    }

    pub fn enqueue(&mut self, key: K, value: V) {
        self.queue.insert(key, value);
    }

    pub fn dequeue(&mut self) -> Option<(K, V)> {
        self.queue.extract_min()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<K: Ord, V> Default for PriorityQueue<K, V> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}
