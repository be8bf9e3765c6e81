/// Soft work budget shared across the whole search tree of one enumeration.
///
/// One unit is spent per admitted transition. The counter is never reset per
/// branch; once spent, the search unwinds and returns partial results.
#[derive(Debug, Clone)]
pub struct ExpansionBudget {
    cap: u64,
    used: u64,
    hit: bool,
}

impl ExpansionBudget {
    #[inline]
    pub fn new(cap: u64) -> Self {
        Self {
            cap,
            used: 0,
            hit: false,
        }
    }

    /// True once the cap is reached. Remembers that the budget actually
    /// blocked work, so an untouched budget reports `hit() == false` even at
    /// `cap == 0`.
    #[inline]
    pub fn is_spent(&mut self) -> bool {
        if self.used >= self.cap {
            self.hit = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn spend(&mut self) {
        self.used = self.used.saturating_add(1);
    }

    #[inline]
    pub fn spent(&self) -> u64 {
        self.used
    }

    #[inline]
    pub fn hit(&self) -> bool {
        self.hit
    }

    #[inline]
    pub fn cap(&self) -> u64 {
        self.cap
    }
}
