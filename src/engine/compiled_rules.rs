//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: structures derived once
//! from the full rule list so each parse only walks the rules that matter.
//!
//! Parsing is split into two phases:
//!
//! 1. **Compile/index rules** (this module): group rules per `Stage`, ordered by
//!    priority, and keep their bucket requirements next to them.
//! 2. **Run** (see `parser.rs`): scan the text for coarse triggers
//!    (`trigger.rs`), drop rules whose buckets are absent, then evaluate stages.
//!
//! ## Extension points
//!
//! - Adding a new bucket:
//!   1. Add a `BucketMask` bit.
//!   2. Teach `TriggerInfo::scan` (in `trigger.rs`) to detect it.
//!   3. Declare it on the rules that need it.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules` and `CompiledRules::metas`.
//!   Those vectors must stay aligned.
//! - A bucket may only be declared on a rule when every possible match of the
//!   rule's pattern implies the bucket. Gating must never change results.

use crate::{Rule, Stage};

/// Rule identifier (index into the rules vector).
pub(crate) type RuleId = usize;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS      = 1 << 0;
        const H24ISH          = 1 << 1;
        const REQUESTISH      = 1 << 2;
        const AD_HOURSISH     = 1 << 3;
        const WEEKDAYISH      = 1 << 4;
        const BUSINESS_DAYISH = 1 << 5;
        const SCHENGENISH     = 1 << 6;
    }
}

/// Metadata attached to a rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub stage: Stage,
    pub buckets: BucketMask,
    pub priority: u16,
}

pub const STAGE_COUNT: usize = Stage::ALL.len();

#[derive(Default, Debug)]
pub struct RuleIndex {
    /// Rule ids per stage (indexed by `Stage::index`), highest priority first.
    pub by_stage: [Vec<RuleId>; STAGE_COUNT],
}

/// Pre-compiled rule set with metadata and indexes.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub metas: Vec<RuleMeta>,
    pub index: RuleIndex,
}

impl<'a> CompiledRules<'a> {
    /// Create a compiled rule set from a slice of rules.
    ///
    /// Rules of equal priority keep their declaration order.
    pub fn new(rules: &'a [Rule]) -> Self {
        let rule_refs: Vec<&Rule> = rules.iter().collect();

        let metas: Vec<RuleMeta> = rule_refs
            .iter()
            .map(|r| RuleMeta {
                stage: r.stage,
                buckets: BucketMask::from_bits_truncate(r.buckets),
                priority: r.priority,
            })
            .collect();

        let mut index = RuleIndex::default();
        for (id, meta) in metas.iter().enumerate() {
            index.by_stage[meta.stage.index()].push(id);
        }
        for ids in index.by_stage.iter_mut() {
            // Stable sort keeps declaration order for ties.
            ids.sort_by(|a, b| metas[*b].priority.cmp(&metas[*a].priority));
        }

        CompiledRules { rules: rule_refs, metas, index }
    }

    /// Ids of the rules in `stage` that are allowed to run for `buckets`.
    pub(crate) fn active_in(&self, stage: Stage, buckets: BucketMask) -> Vec<RuleId> {
        self.index.by_stage[stage.index()]
            .iter()
            .copied()
            .filter(|&id| buckets.contains(self.metas[id].buckets))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_indexed_by_priority() {
        let rules = crate::rules::get();
        let compiled = CompiledRules::new(&rules);

        let names: Vec<&str> =
            compiled.index.by_stage[Stage::ShortCircuit.index()].iter().map(|&id| compiled.rules[id].name).collect();
        assert_eq!(names, vec!["h24", "on request", "as AD hours"]);

        for stage in Stage::ALL {
            assert!(!compiled.index.by_stage[stage.index()].is_empty(), "no rules for {stage:?}");
        }
    }

    #[test]
    fn bucket_gating_requires_every_bucket() {
        let rules = crate::rules::get();
        let compiled = CompiledRules::new(&rules);

        assert!(compiled.active_in(Stage::Weekday, BucketMask::HAS_DIGITS).is_empty());
        assert!(compiled.active_in(Stage::Weekday, BucketMask::WEEKDAYISH).is_empty());
        assert_eq!(compiled.active_in(Stage::Weekday, BucketMask::HAS_DIGITS | BucketMask::WEEKDAYISH).len(), 1);
        assert_eq!(compiled.active_in(Stage::Hours, BucketMask::all()).len(), 1);
    }
}
