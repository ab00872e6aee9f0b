//! Behavior kinds and the per-agent set of enabled behaviors.

/// Every steering strategy the engine knows about.
///
/// Only the nine kinds for which [`BehaviorKind::is_implemented`] returns
/// `true` currently produce a force; the remaining variants are reserved so
/// that behavior sets stay representable as a single closed enum while the
/// engine grows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BehaviorKind {
    Seek = 0,
    Flee,
    Arrive,
    Wander,
    Cohesion,
    Separation,
    Alignment,
    ObstacleAvoidance,
    WallAvoidance,
    FollowPath,
    Pursuit,
    Evade,
    Interpose,
    Hide,
    Flock,
    OffsetPursuit,
}

impl BehaviorKind {
    /// Number of variants; sizes the weight table and the bitset.
    pub const COUNT: usize = 16;

    /// The kinds the engine can currently evaluate.
    pub const IMPLEMENTED: [BehaviorKind; 9] = [
        BehaviorKind::Seek,
        BehaviorKind::Flee,
        BehaviorKind::Arrive,
        BehaviorKind::Wander,
        BehaviorKind::Cohesion,
        BehaviorKind::Separation,
        BehaviorKind::Alignment,
        BehaviorKind::Pursuit,
        BehaviorKind::Evade,
    ];

    /// `true` for kinds with a force law in the engine.
    pub fn is_implemented(self) -> bool {
        Self::IMPLEMENTED.contains(&self)
    }

    /// Stable index into per-kind tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::Seek              => "seek",
            BehaviorKind::Flee              => "flee",
            BehaviorKind::Arrive            => "arrive",
            BehaviorKind::Wander            => "wander",
            BehaviorKind::Cohesion          => "cohesion",
            BehaviorKind::Separation        => "separation",
            BehaviorKind::Alignment         => "alignment",
            BehaviorKind::ObstacleAvoidance => "obstacle-avoidance",
            BehaviorKind::WallAvoidance     => "wall-avoidance",
            BehaviorKind::FollowPath        => "follow-path",
            BehaviorKind::Pursuit           => "pursuit",
            BehaviorKind::Evade             => "evade",
            BehaviorKind::Interpose         => "interpose",
            BehaviorKind::Hide              => "hide",
            BehaviorKind::Flock             => "flock",
            BehaviorKind::OffsetPursuit     => "offset-pursuit",
        }
    }
}

impl std::fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BehaviorSet ───────────────────────────────────────────────────────────────

/// The set of behaviors enabled on one agent.
///
/// Backed by a fixed-size bitset indexed by [`BehaviorKind`], so membership
/// tests and toggles are O(1) and any combination of kinds fits in one `u16`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorSet(u16);

impl BehaviorSet {
    pub const EMPTY: BehaviorSet = BehaviorSet(0);

    #[inline(always)]
    fn bit(kind: BehaviorKind) -> u16 {
        1 << kind.index()
    }

    /// Enable `kind`.  Idempotent.
    #[inline]
    pub fn insert(&mut self, kind: BehaviorKind) {
        self.0 |= Self::bit(kind);
    }

    /// Disable `kind`.  Idempotent.
    #[inline]
    pub fn remove(&mut self, kind: BehaviorKind) {
        self.0 &= !Self::bit(kind);
    }

    #[inline]
    pub fn contains(self, kind: BehaviorKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    /// `true` when no behavior at all is enabled.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Disable everything.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }
}
