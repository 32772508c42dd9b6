//! SpaceX mission tracker - demo wiring.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring            │
//! │    │                                                            │
//! │    ├── Creates: InMemoryRocketRepository (adapter)              │
//! │    ├── Creates: InMemoryMissionRepository (adapter)             │
//! │    └── Runs: a scripted launch campaign through the facade      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use spacex_adapter::{InMemoryMissionRepository, InMemoryRocketRepository};
use spacex_usecase::SpaceXFacade;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set tracing subscriber");

    info!("SpaceX mission tracker");

    let mut facade = SpaceXFacade::new(
        InMemoryMissionRepository::new(),
        InMemoryRocketRepository::new(),
    );

    // A mission with two rockets: repair one, bring it back, launch both.
    let mars = facade.add_mission("Mars", vec![])?;
    let dragon1 = facade.add_rocket("Dragon 1")?;
    let dragon2 = facade.add_rocket("Dragon 2")?;
    facade.assign_rockets_to_mission(mars.id(), &[dragon1.id(), dragon2.id()])?;

    facade.repair_rocket(dragon2.id())?;
    facade.mark_rocket_repaired(dragon2.id())?;

    facade.start_rocket(dragon1.id())?;

    // The mission is already running, so the second launch commits the
    // rocket while the mission-side transition is rejected.
    let second = facade.start_rocket(dragon2.id())?;
    if let Some(Err(error)) = &second.mission {
        warn!(%error, "mission did not follow the second launch");
    }

    // A short-lived mission flown start to end.
    let luna = facade.add_mission("Luna", vec![])?;
    let falcon = facade.add_rocket("Falcon Heavy")?;
    facade.assign_rockets_to_mission(luna.id(), &[falcon.id()])?;
    facade.start_rocket(falcon.id())?;
    facade.end_mission(luna.id())?;

    // An empty mission, still on the books.
    facade.add_mission("Transit", vec![])?;

    let summary = facade.missions_sorted_by(|a, b| {
        b.rocket_count()
            .cmp(&a.rocket_count())
            .then_with(|| b.name().cmp(a.name()))
    })?;

    info!("mission summary:");
    for mission in summary {
        info!(
            name = mission.name(),
            status = %mission.status(),
            rockets = mission.rocket_count(),
            "  mission"
        );
    }

    Ok(())
}
