//! Gem Runner
//!
//! Headless driver: plays a scripted run against the session core and prints
//! the final snapshot. Useful for checking seeds and shop rolls without the
//! presentation layer.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gem_runner::{
    game::input::{Command, RunFeed},
    GameController, GameStatus, NullAudio, Screen, Session, SessionConfig, SessionEvent, VERSION,
};

/// Distance between shop milestones.
const SHOP_EVERY: u32 = 400;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SessionConfig::from_env().context("loading GEM_RUNNER_* configuration")?;

    info!("Gem Runner v{}", VERSION);
    info!("Seed: {}", config.seed);
    info!("Target word: {}", config.target_word);

    demo_run(config)
}

/// Scripted run: steady distance, periodic pickups and hits, a shop at
/// every milestone where the cheapest affordable offer is bought.
fn demo_run(config: SessionConfig) -> anyhow::Result<()> {
    let word_length = config.word_length();
    let session = Session::new(config).context("building session")?;
    let mut controller = GameController::new(session, NullAudio);

    controller.handle(Command::StartGame);

    for t in 1..=4000u32 {
        if controller.session().status() != GameStatus::Playing {
            break;
        }

        controller.feed(RunFeed::Distance { delta: 1.0 });
        controller.feed(RunFeed::Score { points: 10 });

        if t % 100 == 0 {
            controller.feed(RunFeed::Level { value: 1 + t / 500 });
            controller.feed(RunFeed::Speed { value: 22.5 + f64::from(t) / 100.0 });
        }
        if t % 37 == 0 {
            controller.feed(RunFeed::Gem);
        }
        if t % 450 == 0 {
            controller.feed(RunFeed::Letter { index: (t / 450) as usize % word_length });
        }
        if t % 333 == 0 {
            controller.feed(RunFeed::Hit);
        }
        if t % SHOP_EVERY == 0 && controller.feed(RunFeed::Milestone) {
            visit_shop(&mut controller);
        }
        if controller.session().word_complete() {
            controller.feed(RunFeed::Victory);
        }

        for event in controller.drain_events() {
            log_event(&event);
        }
    }

    info!("=== Run Results ===");
    match Screen::for_session(controller.session()) {
        Screen::GameOver { distance, score } => info!("GAME OVER at {} LY, score {}", distance, score),
        Screen::Victory { score } => info!("MISSION COMPLETE, score {}", score),
        Screen::Hud(hud) => info!("Still running at {}% speed", hud.speed_percent),
        Screen::Menu | Screen::Shop(_) => {}
    }

    let snapshot = serde_json::to_string_pretty(&controller.session().snapshot())
        .context("serializing session snapshot")?;
    println!("{}", snapshot);
    Ok(())
}

fn visit_shop(controller: &mut GameController<NullAudio>) {
    let session = controller.session();
    let score = session.score();
    let pick = session
        .current_offers()
        .iter()
        .filter(|offer| offer.cost <= score)
        .min_by_key(|offer| offer.cost)
        .copied();

    if let Some(offer) = pick {
        controller.handle(Command::BuyItem {
            item: offer.id,
            cost: offer.cost,
        });
    }
    controller.handle(Command::CloseShop);
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::OffersRolled { visit, offers } => info!("Shop visit {}: {:?}", visit, offers),
        SessionEvent::ItemPurchased { item, cost, remaining_score } => {
            info!("Bought {} for {} ({} left)", item, cost, remaining_score)
        }
        SessionEvent::LetterCollected { letter, word_complete, .. } => {
            info!("Letter {} collected (complete: {})", letter, word_complete)
        }
        SessionEvent::LifeLost { remaining } => info!("Hit! {} lives left", remaining),
        _ => {}
    }
}
