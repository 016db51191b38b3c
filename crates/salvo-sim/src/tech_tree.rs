//! Technology tree: a fixed 14-node DAG with a single research slot.
//!
//! Each node carries its effect (one capability flag and a score bonus), so
//! completing research never needs to look anything up by name.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use salvo_core::constants::TECH_SCORE_BY_TIER;
use salvo_core::enums::{Capability, TechId, TechStatus};
use salvo_core::error::{GameError, Result};
use salvo_core::state::TechView;

/// Gameplay effect applied once when a node finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechEffect {
    pub capability: Capability,
    pub score: i64,
}

/// Static definition of one technology.
#[derive(Debug, Clone)]
pub struct TechNode {
    pub id: TechId,
    pub description: &'static str,
    pub cost: i64,
    /// Research time in turns.
    pub time: u32,
    pub prerequisites: &'static [TechId],
    /// 1..=4, drives the score bonus.
    pub tier: u8,
    pub effect: TechEffect,
}

impl TechNode {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

fn node(
    id: TechId,
    description: &'static str,
    cost: i64,
    time: u32,
    prerequisites: &'static [TechId],
    tier: u8,
    capability: Capability,
) -> TechNode {
    TechNode {
        id,
        description,
        cost,
        time,
        prerequisites,
        tier,
        effect: TechEffect {
            capability,
            score: TECH_SCORE_BY_TIER[(tier.clamp(1, 4) - 1) as usize],
        },
    }
}

/// The full node table, in menu order.
pub fn tech_nodes() -> Vec<TechNode> {
    use Capability as C;
    use TechId::*;

    vec![
        node(
            Radar,
            "Long range radar stations.\nReveals where incoming missiles are headed.",
            300,
            8,
            &[],
            1,
            C::MissileTargets,
        ),
        node(
            PhasedArray,
            "Electronically steered arrays.\nReveals speed and yield of incoming missiles.",
            900,
            15,
            &[Radar],
            2,
            C::MissileStats,
        ),
        node(
            CruiseAssembly,
            "Second assembly line in every city.\nEach interceptor build yields two interceptors.",
            400,
            10,
            &[],
            1,
            C::DoubleCruise,
        ),
        node(
            CruiseDiscount,
            "Interchangeable interceptor parts.\nInterceptor builds cost half.",
            1000,
            15,
            &[CruiseAssembly],
            2,
            C::CheapCruise,
        ),
        node(
            SelfDefense,
            "Automated fire control.\nCities launch interceptors on their own every turn.",
            2500,
            25,
            &[CruiseDiscount, PhasedArray],
            3,
            C::AutoIntercept,
        ),
        node(
            UrgentProduction,
            "War economy measures.\nBase productivity of every city is tripled.",
            500,
            10,
            &[],
            1,
            C::UrgentProduction,
        ),
        node(
            EvacuatedIndustry,
            "Move factories underground.\nDestroyed cities keep their base productivity.",
            1200,
            15,
            &[UrgentProduction],
            2,
            C::EvacuatedIndustry,
        ),
        node(
            SelfDefenseSystem,
            "Hardened shelters and point defense.\nIncoming damage is halved.",
            1500,
            20,
            &[UrgentProduction],
            2,
            C::DamageReduction,
        ),
        node(
            FortressCity,
            "Turn every city into a fortress.\nDamage reports are halved.",
            2500,
            25,
            &[SelfDefenseSystem],
            3,
            C::FortressCity,
        ),
        node(
            IronCurtain,
            "Planetary energy shield.\nBlocks all damage for thirty turns once activated.",
            5000,
            35,
            &[FortressCity, EvacuatedIndustry],
            4,
            C::IronCurtain,
        ),
        node(
            DirtyBomb,
            "Radiological warheads.\nUnlocks the dirty bomb.",
            600,
            10,
            &[],
            1,
            C::DirtyBomb,
        ),
        node(
            HydrogenBomb,
            "Thermonuclear warheads.\nUnlocks the hydrogen bomb.",
            2000,
            20,
            &[DirtyBomb],
            2,
            C::HydrogenBomb,
        ),
        node(
            RapidAssembly,
            "Warhead assembly around the clock.\nBomb construction takes half as long.",
            3500,
            30,
            &[HydrogenBomb],
            4,
            C::RapidAssembly,
        ),
        node(
            Deterrence,
            "Second strike capability on every front.\nThe enemy weakens every turn.",
            8000,
            40,
            &[IronCurtain, RapidAssembly],
            4,
            C::Deterrence,
        ),
    ]
}

/// Unlocked capability flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    flags: HashSet<Capability>,
}

impl Capabilities {
    pub fn has(&self, capability: Capability) -> bool {
        self.flags.contains(&capability)
    }

    pub fn set(&mut self, capability: Capability) {
        self.flags.insert(capability);
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TechTree {
    nodes: Vec<TechNode>,
    researched: Vec<TechId>,
    available: Vec<TechId>,
    researching: Option<TechId>,
    prev_researching: Option<TechId>,
    remaining_time: u32,
}

impl Default for TechTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TechTree {
    pub fn new() -> Self {
        Self {
            nodes: tech_nodes(),
            researched: Vec::new(),
            available: Vec::new(),
            researching: None,
            prev_researching: None,
            remaining_time: 0,
        }
    }

    pub fn nodes(&self) -> &[TechNode] {
        &self.nodes
    }

    /// Node by id. The table lists nodes in `TechId` declaration order.
    pub fn node(&self, id: TechId) -> &TechNode {
        &self.nodes[id as usize]
    }

    pub fn node_by_name(&self, name: &str) -> Result<&TechNode> {
        TechId::from_name(name)
            .map(|id| self.node(id))
            .ok_or_else(|| GameError::UnknownTechnology(name.to_string()))
    }

    pub fn researched(&self) -> &[TechId] {
        &self.researched
    }

    pub fn available(&self) -> &[TechId] {
        &self.available
    }

    pub fn researching(&self) -> Option<TechId> {
        self.researching
    }

    pub fn prev_researching(&self) -> Option<TechId> {
        self.prev_researching
    }

    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    pub fn is_researched(&self, id: TechId) -> bool {
        self.researched.contains(&id)
    }

    pub fn is_available(&self, id: TechId) -> bool {
        self.available.contains(&id)
    }

    pub fn status(&self, id: TechId) -> TechStatus {
        if self.is_researched(id) {
            TechStatus::Researched
        } else if self.researching == Some(id) {
            TechStatus::Researching
        } else if self.is_available(id) {
            TechStatus::Available
        } else {
            TechStatus::Locked
        }
    }

    /// Commit the research slot to an available node.
    ///
    /// Returns false without changing anything when the slot is busy or the
    /// node is not available.
    pub fn start_research(&mut self, id: TechId) -> bool {
        if self.researching.is_some() || !self.is_available(id) {
            return false;
        }
        self.researching = Some(id);
        self.remaining_time = self.node(id).time;
        self.available.retain(|&t| t != id);
        true
    }

    /// One turn of research progress.
    pub fn proceed_research(&mut self) {
        if self.researching.is_some() && self.remaining_time > 0 {
            self.remaining_time -= 1;
        }
    }

    /// Collect finished research. Returns the node exactly once, on the call
    /// after its time reached zero.
    pub fn check_research(&mut self) -> Option<TechId> {
        let id = self.researching?;
        if self.remaining_time > 0 {
            return None;
        }
        self.researched.push(id);
        self.prev_researching = Some(id);
        self.researching = None;
        Some(id)
    }

    /// Recompute the available set for the current deposit.
    ///
    /// A node qualifies when it is neither researched nor in progress, its
    /// cost fits the deposit and all prerequisites are researched.
    pub fn update_available(&mut self, deposit: i64) {
        let qualifies = |tree: &TechTree, node: &TechNode| {
            !tree.is_researched(node.id)
                && tree.researching != Some(node.id)
                && node.cost <= deposit
                && node.prerequisites.iter().all(|p| tree.is_researched(*p))
        };

        let keep: Vec<TechId> = self
            .available
            .iter()
            .copied()
            .filter(|&id| qualifies(self, self.node(id)))
            .collect();
        let added: Vec<TechId> = self
            .nodes
            .iter()
            .filter(|n| !keep.contains(&n.id) && qualifies(self, n))
            .map(|n| n.id)
            .collect();

        self.available = keep;
        self.available.extend(added);
    }

    pub fn views(&self) -> Vec<TechView> {
        self.nodes
            .iter()
            .map(|n| TechView {
                id: n.id,
                name: n.name().to_string(),
                description: n.description.to_string(),
                cost: n.cost,
                time: n.time,
                status: self.status(n.id),
            })
            .collect()
    }

    /// Overwrite research state from persisted lists.
    pub(crate) fn restore(
        &mut self,
        researched: Vec<TechId>,
        available: Vec<TechId>,
        researching: Option<TechId>,
        prev_researching: Option<TechId>,
        remaining_time: u32,
    ) {
        self.researched = researched;
        self.available = available;
        self.researching = researching;
        self.prev_researching = prev_researching;
        self.remaining_time = remaining_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_tech_once() {
        let nodes = tech_nodes();
        assert_eq!(nodes.len(), TechId::ALL.len());
        for id in TechId::ALL {
            assert_eq!(nodes.iter().filter(|n| n.id == id).count(), 1);
        }
        for (i, n) in nodes.iter().enumerate() {
            assert_eq!(n.id as usize, i, "{} out of order", n.name());
        }
        let caps: HashSet<_> = nodes.iter().map(|n| n.effect.capability).collect();
        assert_eq!(caps.len(), Capability::ALL.len());
    }

    #[test]
    fn prerequisites_form_a_dag() {
        // every prerequisite appears earlier in the table, so there is no cycle
        let nodes = tech_nodes();
        for (i, n) in nodes.iter().enumerate() {
            for p in n.prerequisites {
                let j = nodes.iter().position(|m| m.id == *p).unwrap();
                assert!(j < i, "{} requires later node {}", n.name(), p);
            }
        }
    }

    #[test]
    fn top_node_requires_both_capstones() {
        let tree = TechTree::new();
        let top = tree.node(TechId::Deterrence);
        assert!(top.prerequisites.contains(&TechId::IronCurtain));
        assert!(top.prerequisites.contains(&TechId::RapidAssembly));
    }

    #[test]
    fn roots_become_available_with_deposit() {
        let mut tree = TechTree::new();
        tree.update_available(0);
        assert!(tree.available().is_empty());

        tree.update_available(450);
        assert!(tree.is_available(TechId::Radar));
        assert!(tree.is_available(TechId::CruiseAssembly));
        assert!(!tree.is_available(TechId::UrgentProduction));
        assert!(!tree.is_available(TechId::PhasedArray));
    }

    #[test]
    fn availability_drops_when_deposit_falls() {
        let mut tree = TechTree::new();
        tree.update_available(10_000);
        assert!(tree.is_available(TechId::DirtyBomb));
        tree.update_available(100);
        assert!(!tree.is_available(TechId::DirtyBomb));
    }

    #[test]
    fn availability_is_monotonic_in_deposit() {
        let mut tree = TechTree::new();
        tree.update_available(1000);
        assert!(tree.start_research(TechId::Radar));
        for _ in 0..8 {
            tree.proceed_research();
        }
        tree.check_research();

        let mut previous: Vec<TechId> = Vec::new();
        for deposit in (0..=10_000).step_by(250) {
            tree.update_available(deposit);
            for id in &previous {
                assert!(tree.is_available(*id), "{id} dropped at deposit {deposit}");
            }
            previous = tree.available().to_vec();
        }
    }

    #[test]
    fn start_research_requires_availability() {
        let mut tree = TechTree::new();
        assert!(!tree.start_research(TechId::Radar));
        tree.update_available(1000);
        assert!(tree.start_research(TechId::Radar));
        assert_eq!(tree.status(TechId::Radar), TechStatus::Researching);
        assert!(!tree.is_available(TechId::Radar));
        assert_eq!(tree.remaining_time(), 8);

        // slot is busy
        assert!(!tree.start_research(TechId::DirtyBomb));
        assert_eq!(tree.researching(), Some(TechId::Radar));
    }

    #[test]
    fn check_research_fires_exactly_once() {
        let mut tree = TechTree::new();
        tree.update_available(1000);
        tree.start_research(TechId::Radar);

        for _ in 0..7 {
            tree.proceed_research();
            assert_eq!(tree.check_research(), None);
        }
        tree.proceed_research();
        assert_eq!(tree.remaining_time(), 0);
        assert_eq!(tree.check_research(), Some(TechId::Radar));
        assert_eq!(tree.check_research(), None);

        assert_eq!(tree.researched(), &[TechId::Radar]);
        assert_eq!(tree.prev_researching(), Some(TechId::Radar));
        assert_eq!(tree.status(TechId::Radar), TechStatus::Researched);

        tree.update_available(1000);
        assert!(!tree.is_available(TechId::Radar));
        assert!(tree.is_available(TechId::PhasedArray));
    }

    #[test]
    fn proceed_is_noop_when_idle() {
        let mut tree = TechTree::new();
        tree.proceed_research();
        assert_eq!(tree.remaining_time(), 0);
        assert_eq!(tree.check_research(), None);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let tree = TechTree::new();
        assert!(tree.node_by_name("Iron Curtain").is_ok());
        assert!(matches!(
            tree.node_by_name("Death Ray"),
            Err(GameError::UnknownTechnology(_))
        ));
    }

    #[test]
    fn effect_scores_follow_tier() {
        let tree = TechTree::new();
        assert_eq!(tree.node(TechId::Radar).effect.score, 10);
        assert_eq!(tree.node(TechId::PhasedArray).effect.score, 20);
        assert_eq!(tree.node(TechId::SelfDefense).effect.score, 30);
        assert_eq!(tree.node(TechId::Deterrence).effect.score, 50);
    }
}
