/// A closed set of sections, listed in display order.
pub trait SectionKey: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Exactly one active section out of `K::ALL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSelector<K: SectionKey> {
    active: K,
}

impl<K: SectionKey> SectionSelector<K> {
    pub fn new(active: K) -> Self {
        Self { active }
    }

    pub fn active(&self) -> K {
        self.active
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active == key
    }

    /// Returns whether the active section changed, so it can be fed to
    /// `maybe_update` and skip notifying on a no-op.
    pub fn select(&mut self, key: K) -> bool {
        if self.active == key {
            return false;
        }
        self.active = key;
        true
    }

    pub fn next(&mut self) -> bool {
        self.rotate(1)
    }

    pub fn previous(&mut self) -> bool {
        self.rotate(K::ALL.len().saturating_sub(1))
    }

    fn rotate(&mut self, offset: usize) -> bool {
        let Some(position) = K::ALL.iter().position(|key| *key == self.active) else {
            return false;
        };
        self.select(K::ALL[(position + offset) % K::ALL.len()])
    }
}

impl<K: SectionKey> Default for SectionSelector<K> {
    fn default() -> Self {
        Self::new(K::ALL[0])
    }
}

/// A [`SectionSelector`] tied to one subject, such as the ship a profile
/// shows. Asked about any other subject it reports the first section, and
/// selecting for a new subject starts over from there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedSelector<K: SectionKey> {
    scope: String,
    selector: SectionSelector<K>,
}

impl<K: SectionKey> ScopedSelector<K> {
    pub fn active(&self, scope: &str) -> K {
        if self.scope == scope {
            self.selector.active()
        } else {
            K::ALL[0]
        }
    }

    pub fn is_active(&self, scope: &str, key: K) -> bool {
        self.active(scope) == key
    }

    /// Returns whether the section shown for `scope` changed.
    pub fn select(&mut self, scope: &str, key: K) -> bool {
        let before = self.active(scope);
        if self.scope != scope {
            self.scope = String::from(scope);
            self.selector = SectionSelector::default();
        }
        self.selector.select(key);
        before != key
    }
}

impl<K: SectionKey> Default for ScopedSelector<K> {
    fn default() -> Self {
        Self {
            scope: String::new(),
            selector: SectionSelector::default(),
        }
    }
}
