//! Snapshot system: collects the visible state of every system.
//!
//! Read-only; never modifies simulation state.

use xmachina_core::enums::GamePhase;
use xmachina_core::events::GameEvent;
use xmachina_core::state::*;
use xmachina_core::types::SimTime;

use crate::systems::drones::DroneSystem;
use crate::systems::explosion::ExplosionSystem;
use crate::systems::fragments::FragmentField;
use crate::systems::projectile::ProjectileSystem;

/// Borrowed view of everything a snapshot is built from.
pub struct SnapshotSources<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub drones: &'a DroneSystem,
    pub projectiles: &'a ProjectileSystem,
    pub explosions: &'a ExplosionSystem,
    pub fragments: &'a FragmentField,
    pub drones_destroyed: u32,
    pub shots_fired: u32,
}

/// Build a complete GameStateSnapshot.
pub fn build_snapshot(sources: SnapshotSources<'_>, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: sources.time,
        phase: sources.phase,
        player: sources.player,
        drones: build_drones(sources.drones),
        projectiles: build_projectiles(sources.projectiles),
        explosions: build_explosions(sources.explosions),
        fragments: build_fragments(sources.fragments, sources.drones),
        score: ScoreView {
            score: sources.fragments.score,
            multiplier: sources.fragments.multiplier,
            fragments_collected: sources.fragments.collected() as u32,
            fragments_total: sources.fragments.total() as u32,
            drones_destroyed: sources.drones_destroyed,
            shots_fired: sources.shots_fired,
        },
        weapon: sources.weapon,
        pools: PoolDiagnostics {
            projectiles: sources.projectiles.stats(),
            drones: sources.drones.stats(),
            explosions: sources.explosions.stats(),
        },
        events,
    }
}

fn build_drones(drones: &DroneSystem) -> Vec<DroneView> {
    drones
        .iter_active()
        .map(|(handle, drone)| DroneView {
            handle,
            position: drone.position,
            orientation: drone.orientation,
            role: drone.role,
            mode: drone.mode,
            guarded_fragment: drone.guarded_fragment,
        })
        .collect()
}

fn build_projectiles(projectiles: &ProjectileSystem) -> Vec<ProjectileView> {
    projectiles
        .iter_active()
        .map(|(handle, projectile)| ProjectileView {
            handle,
            position: projectile.position,
            direction: projectile.direction,
        })
        .collect()
}

fn build_explosions(explosions: &ExplosionSystem) -> Vec<ExplosionView> {
    explosions
        .iter_active()
        .map(|(_, effect)| ExplosionView {
            origin: effect.origin,
            opacity: effect.opacity,
            scale: effect.scale,
            particles: effect
                .particles
                .iter()
                .map(|p| effect.origin + p.offset)
                .collect(),
        })
        .collect()
}

fn build_fragments(fragments: &FragmentField, drones: &DroneSystem) -> Vec<FragmentView> {
    fragments
        .uncollected()
        .map(|fragment| FragmentView {
            id: fragment.id,
            position: fragment.position,
            guarded: drones.is_guarded(fragment.id),
        })
        .collect()
}
