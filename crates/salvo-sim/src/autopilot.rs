//! Simple defensive policy used by the headless runner and soak tests.
//!
//! `plan` is a pure function of the game state: it budgets the deposit
//! across interceptor launches, research, builds and strikes, and emits the
//! same commands a player would. No randomness.

use salvo_core::commands::PlayerCommand;
use salvo_core::constants::{CRUISE_RADIUS, IRON_CURTAIN_COST};
use salvo_core::enums::{BombKind, Capability, TechId};
use salvo_core::types::Position;

use crate::engine::Game;
use crate::missile::MissileId;

/// Research order. Only available nodes are ever picked.
const RESEARCH_PREFERENCE: [TechId; 14] = [
    TechId::CruiseAssembly,
    TechId::Radar,
    TechId::UrgentProduction,
    TechId::CruiseDiscount,
    TechId::PhasedArray,
    TechId::SelfDefense,
    TechId::SelfDefenseSystem,
    TechId::EvacuatedIndustry,
    TechId::DirtyBomb,
    TechId::FortressCity,
    TechId::HydrogenBomb,
    TechId::IronCurtain,
    TechId::RapidAssembly,
    TechId::Deterrence,
];

/// Live threats before the shield is worth raising.
const SHIELD_THRESHOLD: usize = 8;

/// Interceptors a city keeps in stock before it stops building.
const STOCK_TARGET: u32 = 2;

/// Commands for this turn, in the order they should be applied.
pub fn plan(game: &Game) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if game.is_over() {
        return commands;
    }
    let mut budget = game.deposit();

    // --- Interceptors at incoming missiles ---
    let mut free: Vec<(MissileId, Position)> = game
        .missiles()
        .attack_missiles()
        .filter(|m| !m.is_exploded() && !m.is_aimed())
        .map(|m| (m.id(), m.position()))
        .collect();
    for city in game.cities().iter().filter(|c| c.is_alive()) {
        let site = city.position();
        let mut launches = Vec::new();
        for _ in 0..city.cruise_storage() {
            // same pick as the manager: nearest, then oldest
            let Some((index, distance)) = free
                .iter()
                .enumerate()
                .map(|(i, (_, p))| (i, p.manhattan(&site)))
                .min_by_key(|&(i, d)| (d, free[i].0))
            else {
                break;
            };
            if distance > CRUISE_RADIUS {
                break;
            }
            free.remove(index);
            launches.push(PlayerCommand::LaunchCruise);
        }
        if !launches.is_empty() {
            commands.push(PlayerCommand::SetCursor { position: site });
            commands.extend(launches);
        }
    }

    // --- Research ---
    if game.tech().researching().is_none() {
        let pick = RESEARCH_PREFERENCE
            .iter()
            .copied()
            .find(|&id| game.tech().is_available(id) && game.tech().node(id).cost <= budget);
        if let Some(tech) = pick {
            budget -= game.tech().node(tech).cost;
            commands.push(PlayerCommand::StartResearch { tech });
        }
    }

    // --- Shield ---
    let incoming = game.missiles().live_attack_ids().len();
    if incoming >= SHIELD_THRESHOLD
        && game.capabilities().has(Capability::IronCurtain)
        && !game.weapons().is_shield_active()
        && budget >= IRON_CURTAIN_COST
    {
        budget -= IRON_CURTAIN_COST;
        commands.push(PlayerCommand::ActivateIronCurtain);
    }

    // --- Interceptor production ---
    let cruise_cost = game.cruise_build_cost();
    for city in game.cities() {
        if !city.is_alive() || city.is_building() || city.cruise_storage() >= STOCK_TARGET {
            continue;
        }
        if budget < cruise_cost {
            break;
        }
        budget -= cruise_cost;
        commands.push(PlayerCommand::SetCursor {
            position: city.position(),
        });
        commands.push(PlayerCommand::BuildCruise);
    }

    // --- Strikes ---
    let reserve = cruise_cost * game.alive_cities() as i64;
    for kind in [BombKind::Hydrogen, BombKind::Dirty, BombKind::Standard] {
        if game.weapons().is_ready(kind) {
            commands.push(PlayerCommand::LaunchBomb { kind });
            continue;
        }
        if let Ok((cost, _)) = game
            .weapons()
            .check_build(kind, game.capabilities(), budget - reserve)
        {
            budget -= cost;
            commands.push(PlayerCommand::BuildBomb { kind });
        }
    }

    commands
}

/// Plan and apply one turn of actions. Returns how many commands were
/// accepted. Does not pass the turn.
pub fn act(game: &mut Game) -> usize {
    plan(game)
        .into_iter()
        .filter(|command| game.apply(command.clone()).is_ok())
        .count()
}
