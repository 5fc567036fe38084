use crate::resources::SphereVolume;

/// Append-only set of committed sphere volumes.
///
/// Queries are a linear scan. The cluster grows by one sphere per click, so
/// it stays in the tens to hundreds of entries and a spatial structure would
/// not pay for itself.
#[derive(Debug, Clone, Default)]
pub struct CollisionIndex {
    volumes: Vec<SphereVolume>,
}

impl CollisionIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a volume. No deduplication is performed.
    pub fn register(&mut self, volume: SphereVolume) {
        self.volumes.push(volume);
    }

    /// Whether `candidate` overlaps any registered volume.
    ///
    /// Touching counts as free: the test is
    /// `distance(a, b) < a.radius + b.radius`. The index itself does not
    /// enforce non-overlap; see [`PlacementSession`](crate::placement::PlacementSession)
    /// for the `probe_epsilon` tolerance that commits actually guarantee.
    #[must_use]
    pub fn intersects_any(&self, candidate: &SphereVolume) -> bool {
        self.volumes.iter().any(|v| candidate.intersects(v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SphereVolume> {
        self.volumes.iter()
    }

    #[must_use]
    pub fn volumes(&self) -> &[SphereVolume] {
        &self.volumes
    }
}

impl<'a> IntoIterator for &'a CollisionIndex {
    type Item = &'a SphereVolume;
    type IntoIter = std::slice::Iter<'a, SphereVolume>;

    fn into_iter(self) -> Self::IntoIter {
        self.volumes.iter()
    }
}
