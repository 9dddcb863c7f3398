use crate::base::MutationId;

/// A mutation carried by a haplotype, keyed by its position.
///
/// Ordering is by position first and id second, which is the order
/// haplotypes keep their mutations in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MutationRef {
    pub position: usize,
    pub id: MutationId,
}

impl MutationRef {
    pub fn new(position: usize, id: MutationId) -> Self {
        Self { position, id }
    }
}

/// A haplotype: one genome copy of a diploid individual.
///
/// The ancestral state is implicit, so a haplotype only stores the derived
/// mutations it carries, sorted by `(position, id)`. Lookups by id are a
/// linear scan; haplotypes in a sweep simulation carry few mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Haplotype {
    mutations: Vec<MutationRef>,
}

impl Haplotype {
    /// Create a new, empty (fully ancestral) `Haplotype`.
    pub fn new() -> Self {
        Self {
            mutations: Vec::new(),
        }
    }

    /// Create a `Haplotype` with reserved capacity for `capacity` mutations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mutations: Vec::with_capacity(capacity),
        }
    }

    /// Create a `Haplotype` from an arbitrary vector of mutations.
    ///
    /// The input is sorted and duplicates are dropped.
    pub fn from_mutations(mut mutations: Vec<MutationRef>) -> Self {
        mutations.sort_unstable();
        mutations.dedup();
        Self { mutations }
    }

    /// Return the number of mutations carried.
    #[inline]
    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    /// Return `true` if this haplotype carries no derived mutations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Return `true` if this haplotype carries the mutation instance `id`.
    #[inline]
    pub fn carries(&self, id: MutationId) -> bool {
        self.mutations.iter().any(|m| m.id == id)
    }

    /// Insert a mutation, keeping the haplotype sorted.
    ///
    /// Inserting a mutation that is already present is a no-op.
    pub fn insert(&mut self, mutation: MutationRef) {
        if let Err(idx) = self.mutations.binary_search(&mutation) {
            self.mutations.insert(idx, mutation);
        }
    }

    /// Remove the mutation instance `id`. Returns `true` if it was present.
    pub fn remove(&mut self, id: MutationId) -> bool {
        let before = self.mutations.len();
        self.mutations.retain(|m| m.id != id);
        self.mutations.len() != before
    }

    /// Keep only the mutations for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&MutationRef) -> bool) {
        self.mutations.retain(keep);
    }

    /// Borrow the sorted slice of mutations.
    #[inline]
    pub fn mutations(&self) -> &[MutationRef] {
        &self.mutations
    }

    /// Iterate over mutations in position order.
    pub fn iter(&self) -> impl Iterator<Item = &MutationRef> {
        self.mutations.iter()
    }

    /// Iterate over the ids of carried mutations in position order.
    pub fn ids(&self) -> impl Iterator<Item = MutationId> + '_ {
        self.mutations.iter().map(|m| m.id)
    }
}
