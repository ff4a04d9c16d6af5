/// Iterator over the size-`k` subsets of `0..n` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Subsets {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
}

impl Subsets {
    pub fn new(n: usize, k: usize) -> Self {
        Subsets {
            n,
            k,
            indices: Vec::with_capacity(k),
            started: false,
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if !self.started {
            self.started = true;
            if self.k == 0 || self.k > self.n {
                return None;
            }
            self.indices = (0..self.k).collect();
            return Some(self.indices.clone());
        }

        // Advance the rightmost index that still has room.
        let k = self.k;
        for i in (0..self.indices.len()).rev() {
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(self.indices.clone());
            }
        }
        self.indices.clear();
        None
    }
}

/// All non-empty subsets of `0..n`, smallest size first.
pub fn all_subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..=n).flat_map(move |k| Subsets::new(n, k))
}
