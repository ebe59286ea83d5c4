use std::io::Write;
use std::path::Path;

use wavecannon_core::{
    AppConfig, AppConfigExt, ArenaDraw, CircleDraw, IdOrName, MechanicSignal, Roster, Scenario,
    Slot, config::overlay_colors,
};

use crate::context::CliContext;

pub fn load(path: &str, steps: Option<usize>, ctx: &mut CliContext) -> Result<(), String> {
    let scenario = Scenario::load(Path::new(path)).map_err(|e| error_chain(&e))?;
    let encounter = scenario
        .encounter(&ctx.config)
        .map_err(|e| error_chain(&e))?;
    let signals = scenario.signals().map_err(|e| error_chain(&e))?;

    println!(
        "loaded '{}': {} party members, {} signals",
        scenario.name,
        encounter.party().len(),
        signals.len()
    );

    ctx.encounter = Some(encounter);
    ctx.pending = signals;
    ctx.local_slot = scenario.local_slot.unwrap_or(0);

    let count = steps.unwrap_or(ctx.pending.len());
    step(count, ctx)
}

pub fn step(count: usize, ctx: &mut CliContext) -> Result<(), String> {
    let count = count.min(ctx.pending.len());
    let batch: Vec<MechanicSignal> = ctx.pending.drain(..count).collect();
    let encounter = ctx.encounter_mut()?;
    for signal in &batch {
        encounter.handle_signal(signal);
        println!("  applied {signal:?}");
    }
    println!(
        "{} applied, {} pending, {} monitors",
        batch.len(),
        ctx.pending.len(),
        ctx.encounter()?.markers().count()
    );
    Ok(())
}

pub fn status(actor_id: u64, id: &str, ctx: &mut CliContext) -> Result<(), String> {
    let status_id = IdOrName::from_input(id)
        .status_id()
        .ok_or_else(|| format!("unknown status '{id}'"))?;
    let encounter = ctx.encounter_mut()?;
    encounter.handle_signal(&MechanicSignal::StatusGained {
        actor_id,
        status_id,
    });
    println!("{} monitors", encounter.markers().count());
    Ok(())
}

pub fn cast(caster_id: u64, id: &str, ctx: &mut CliContext) -> Result<(), String> {
    let action_id = IdOrName::from_input(id)
        .action_id()
        .ok_or_else(|| format!("unknown action '{id}'"))?;
    let encounter = ctx.encounter_mut()?;
    encounter.handle_signal(&MechanicSignal::CastStarted {
        caster_id,
        action_id,
    });
    match encounter.boss_angle() {
        Some(angle) => println!("boss reference angle {angle}"),
        None => println!("boss reference angle unknown"),
    }
    Ok(())
}

pub fn spots(slot: Option<Slot>, ctx: &CliContext) -> Result<(), String> {
    let slot = slot.unwrap_or(ctx.local_slot);
    let encounter = ctx.encounter()?;

    let spots = encounter.safe_spots(slot);
    if spots.is_empty() {
        let angle = if encounter.boss_angle().is_some() {
            "known"
        } else {
            "unknown"
        };
        println!(
            "not ready ({} monitors, boss angle {angle})",
            encounter.markers().count()
        );
        return Ok(());
    }

    for spot in &spots {
        let name = encounter
            .party()
            .member(spot.slot)
            .map(|m| m.name.as_str())
            .unwrap_or("?");
        println!(
            "{} slot {} {:<12} {:<10} {}",
            if spot.is_mine { "*" } else { " " },
            spot.slot,
            name,
            spot.position,
            spot.position.pos()
        );
    }

    let mut text = TextArena::default();
    encounter.draw_foreground(slot, &mut text);
    println!("{} circles drawn", text.calls.len());
    Ok(())
}

pub fn show_party(ctx: &CliContext) -> Result<(), String> {
    let encounter = ctx.encounter()?;
    for (slot, member) in encounter.party().members() {
        let marker = match encounter.markers().marker(slot).side() {
            Some(side) => format!("{side:?}"),
            None => "-".to_string(),
        };
        println!(
            "slot {} {:<12} {:?} {} monitor: {}",
            slot,
            member.name,
            member.role,
            member.position.map(|p| p.label()).unwrap_or("--"),
            marker
        );
    }
    println!("pull {}", encounter.pull());
    Ok(())
}

pub fn show_order(ctx: &CliContext) -> Result<(), String> {
    let order = ctx.encounter()?.player_order();
    if order.is_empty() {
        println!("order not assigned");
        return Ok(());
    }
    for (slot, rank) in order.iter() {
        println!("slot {slot}: {rank:?}");
    }
    Ok(())
}

pub fn reset(ctx: &mut CliContext) -> Result<(), String> {
    ctx.pending.clear();
    let encounter = ctx.encounter_mut()?;
    encounter.reset();
    println!("pull {} started", encounter.pull());
    Ok(())
}

pub fn show_config(ctx: &CliContext) {
    match AppConfig::path() {
        Ok(path) => println!("config file: {}", path.display()),
        Err(e) => println!("config file: {}", error_chain(&e)),
    }
    println!("monitor groups: {:?}", ctx.config.monitor_assignments.groups);
    println!(
        "overlay: enabled={} radius={} safe_color={:?}",
        ctx.config.overlay.enabled, ctx.config.overlay.circle_radius, ctx.config.overlay.safe_color
    );
}

pub fn exit() {
    let _ = write!(std::io::stdout(), "quitting...");
    let _ = std::io::stdout().flush();
}

/// Prints each circle as it is drawn
#[derive(Default)]
struct TextArena {
    calls: Vec<CircleDraw>,
}

impl ArenaDraw for TextArena {
    fn add_circle(&mut self, center: wavecannon_core::WPos, radius: f32, color: [u8; 4]) {
        let style = if color == overlay_colors::UNSET {
            "default"
        } else {
            "safe"
        };
        println!("  circle {center} r={radius} {style}");
        self.calls.add_circle(center, radius, color);
    }
}

/// Flatten an error and its sources into one line
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
