//! Galactic Explorer Headless Balance Simulator
//!
//! Drives the real `ProgressionEngine` with a scripted player, collecting
//! metrics for balance analysis.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --seconds N          Game time to simulate (default: 3600)
//!   --clicks-per-sec N   Manual clicks per second (default: 5)
//!   --no-prestige        Never prestige
//!   --verbose            Log every purchase and unlock
//!   --quiet              Only final summary line

use galactic_explorer::catalog::{GeneratorId, SiteId};
use galactic_explorer::core::constants::TICK_INTERVAL_MS;
use galactic_explorer::core::{GameEvent, ProgressionEngine};
use galactic_explorer::modifiers::{ModifierId, ModifierKind};
use galactic_explorer::utils::{format_amount, format_duration};

// 2024-01-01T00:00:00Z, fixed so runs are reproducible.
const START_MS: i64 = 1_704_067_200_000;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    seconds: u64,
    clicks_per_sec: u32,
    prestige: bool,
    verbose: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seconds: 3_600,
            clicks_per_sec: 5,
            prestige: true,
            verbose: false,
            quiet: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seconds" => {
                i += 1;
                config.seconds = parse_number(&args, i, "--seconds");
            }
            "--clicks-per-sec" => {
                i += 1;
                config.clicks_per_sec = parse_number(&args, i, "--clicks-per-sec");
            }
            "--no-prestige" => config.prestige = false,
            "--verbose" => config.verbose = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|s| s.parse()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("{flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Galactic Explorer Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --seconds N          Game time to simulate (default: 3600)\n\
         \x20 --clicks-per-sec N   Manual clicks per second (default: 5)\n\
         \x20 --no-prestige        Never prestige\n\
         \x20 --verbose            Log every purchase and unlock\n\
         \x20 --quiet              Only final summary line\n\
         \x20 --help, -h           Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Default)]
struct SimStats {
    seconds: u64,
    manual_clicks: u64,
    generators_bought: u64,
    upgrades_bought: u32,
    planets_explored: u32,
    achievements_unlocked: u32,
    challenges_completed: u32,
    prestiges: u32,
    first_prestige_at: Option<u64>,
    prestige_points_earned: u64,
    peak_rate: f64,
}

impl SimStats {
    fn record(&mut self, second: u64, event: &GameEvent, verbose: bool) {
        match event {
            GameEvent::GeneratorPurchased { quantity, .. } => {
                self.generators_bought += *quantity as u64
            }
            GameEvent::UpgradePurchased { .. } => self.upgrades_bought += 1,
            GameEvent::PlanetExplored { .. } => self.planets_explored += 1,
            GameEvent::AchievementUnlocked { .. } => self.achievements_unlocked += 1,
            GameEvent::ChallengeCompleted { .. } => self.challenges_completed += 1,
            GameEvent::PrestigeCompleted { .. } => {
                self.prestiges += 1;
                self.first_prestige_at.get_or_insert(second);
            }
            GameEvent::ChallengeIssued { .. } | GameEvent::OfflineProgressClaimed { .. } => {}
        }
        if verbose {
            println!("[t={:>6}s] {:?}", second, event);
        }
    }
}

// ── Strategy ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Purchase {
    Generator(GeneratorId),
    Upgrade(ModifierId),
    Planet(SiteId),
}

/// Cheapest purchase that would actually change production or clicking.
fn cheapest_useful(engine: &ProgressionEngine, clicking: bool) -> Option<(Purchase, f64)> {
    let state = engine.state();
    let producing = engine.rate() > 0.0;
    let mut options: Vec<(Purchase, f64)> = GeneratorId::ALL
        .iter()
        .map(|&id| (Purchase::Generator(id), engine.generator_cost(id, 1)))
        .collect();

    for def in engine.modifier_registry().all() {
        if state.owned_modifiers.contains(&def.id) {
            continue;
        }
        let useful = match def.kind {
            ModifierKind::ClickMultiplier { .. } => clicking,
            ModifierKind::GeneratorMultiplier { target, .. } => state.owned_count(target) > 0,
            ModifierKind::GlobalMultiplier { .. } => producing,
            ModifierKind::AutoClicker => true,
        };
        if useful {
            options.push((Purchase::Upgrade(def.id), def.cost));
        }
    }

    if producing {
        for id in SiteId::ALL {
            if !state.explored_sites.contains(&id) {
                options.push((Purchase::Planet(id), id.def().cost));
            }
        }
    }

    options
        .into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

fn spend(engine: &mut ProgressionEngine, clicking: bool) {
    while let Some((purchase, cost)) = cheapest_useful(engine, clicking) {
        if cost > engine.state().currency {
            break;
        }
        let bought = match purchase {
            Purchase::Generator(id) => engine.purchase_generator(id, 1),
            Purchase::Upgrade(id) => engine.purchase_modifier(id),
            Purchase::Planet(id) => engine.explore_site(id),
        };
        if bought.is_err() {
            break;
        }
    }
}

fn run_simulation(config: &SimConfig) -> (SimStats, ProgressionEngine) {
    let mut engine = ProgressionEngine::new(START_MS);
    let mut stats = SimStats::default();
    let ticks_per_second = 1_000 / TICK_INTERVAL_MS;
    let clicking = config.clicks_per_sec > 0;

    for second in 0..config.seconds {
        for _ in 0..config.clicks_per_sec {
            engine.click();
        }
        stats.manual_clicks += config.clicks_per_sec as u64;

        for _ in 0..ticks_per_second {
            engine.tick(TICK_INTERVAL_MS);
        }
        stats.peak_rate = stats.peak_rate.max(engine.rate());

        spend(&mut engine, clicking);
        if config.prestige && engine.can_prestige() {
            if let Ok(points) = engine.prestige() {
                stats.prestige_points_earned += points;
            }
        }

        for event in engine.drain_events() {
            stats.record(second, &event, config.verbose);
        }
        stats.seconds = second + 1;
    }

    (stats, engine)
}

fn print_summary(stats: &SimStats, engine: &ProgressionEngine, config: &SimConfig) {
    let state = engine.state();
    if config.quiet {
        println!(
            "time={} energy={} rate={}/s prestige={} points={} generators={} achievements={}",
            format_duration(stats.seconds as i64 * 1000),
            format_amount(state.currency),
            format_amount(engine.rate()),
            state.prestige.level,
            state.prestige.points,
            stats.generators_bought,
            state.achievements.len(),
        );
        return;
    }

    println!("============================================================");
    println!("  Galactic Explorer Simulation Report");
    println!("============================================================");
    println!();
    println!("--- Run ---");
    println!("  Simulated time:     {}", format_duration(stats.seconds as i64 * 1000));
    println!("  Manual clicks:      {}", stats.manual_clicks);
    println!("  Total clicks:       {}", state.stats.total_clicks);
    println!();
    println!("--- Economy ---");
    println!("  Energy:             {}", format_amount(state.currency));
    println!("  Rate:               {}/s", format_amount(engine.rate()));
    println!("  Peak rate:          {}/s", format_amount(stats.peak_rate));
    println!("  Click power:        {}", format_amount(engine.click_power()));
    println!("  Earned this run:    {}", format_amount(state.stats.total_earned));
    println!();
    println!("--- Purchases ---");
    println!("  Generators bought:  {}", stats.generators_bought);
    println!("  Upgrades bought:    {}", stats.upgrades_bought);
    println!("  Planets explored:   {}", stats.planets_explored);
    for g in &state.generators {
        if g.owned > 0 {
            println!("    {:<20} x{}", g.name(), g.owned);
        }
    }
    println!();
    println!("--- Progression ---");
    println!("  Prestiges:          {}", stats.prestiges);
    match stats.first_prestige_at {
        Some(s) => println!("  First prestige at:  {}", format_duration(s as i64 * 1000)),
        None => println!("  First prestige at:  (never)"),
    }
    println!("  Prestige points:    {}", state.prestige.points);
    println!("  Points this run:    {}", stats.prestige_points_earned);
    println!("  Achievements:       {}", stats.achievements_unlocked);
    println!("  Challenges done:    {}", stats.challenges_completed);
    println!();
}

fn main() {
    let config = parse_args();

    if !config.quiet {
        eprintln!(
            "Galactic Explorer Simulator: {} ({} clicks/s), prestige={}",
            format_duration(config.seconds as i64 * 1000),
            config.clicks_per_sec,
            config.prestige,
        );
    }

    let (stats, engine) = run_simulation(&config);
    print_summary(&stats, &engine, &config);
}
