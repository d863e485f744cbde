//! Command handlers and the registry wiring them to the shell.

use std::fs;

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::catalog::vision::ImageAnalyzer;
use crate::catalog::FoodSource;
use crate::cli::context::ShellContext;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::{CommandError, CommandResult};
use crate::core::{GoalService, MetricsService, WorkoutService};
use crate::domain::{DailyMetrics, FoodItem, Goal, GoalCategory, MealType, Mood};

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(CommandEntry::new(
        "help",
        "List available commands.",
        "help",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "date",
        "Select the active day; the daily log resets.",
        "date <YYYY-MM-DD>",
        cmd_date,
    ));
    registry.register(CommandEntry::new(
        "search",
        "Search the food catalog by name.",
        "search <query>",
        cmd_search,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Log a food into a meal slot.",
        "add <food-id> [quantity] [meal]",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "remove",
        "Remove a logged entry by id.",
        "remove <entry-id>",
        cmd_remove,
    ));
    registry.register(CommandEntry::new(
        "meals",
        "Show the day's logged meals.",
        "meals [breakfast|lunch|dinner|snack]",
        cmd_meals,
    ));
    registry.register(CommandEntry::new(
        "totals",
        "Show the day's nutrition totals.",
        "totals",
        cmd_totals,
    ));
    registry.register(CommandEntry::new(
        "progress",
        "Show progress against the daily targets.",
        "progress",
        cmd_progress,
    ));
    registry.register(CommandEntry::new(
        "analyze",
        "Detect foods on a photo (mock model).",
        "analyze [image-path]",
        cmd_analyze,
    ));
    registry.register(CommandEntry::new(
        "record",
        "Record a daily health metric for the active day.",
        "record <weight|sleep|water|mood|notes> <value>",
        cmd_record,
    ));
    registry.register(CommandEntry::new(
        "metrics",
        "Show recorded daily metrics, most recent first.",
        "metrics",
        cmd_metrics,
    ));
    registry.register(CommandEntry::new(
        "goal",
        "List or manage goals.",
        "goal [list|add|update|remove] ...",
        cmd_goal,
    ));
    registry.register(CommandEntry::new(
        "workout",
        "List routines or manage scheduled sessions.",
        "workout [list|schedule|done|week] ...",
        cmd_workout,
    ));
    registry.register(CommandEntry::new(
        "profile",
        "Show the profile or change a daily target.",
        "profile [set-goal <metric> <value>]",
        cmd_profile,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Leave the shell.",
        "exit",
        cmd_exit,
    ));
    registry
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    for entry in context.registry().list() {
        output::line(format!(
            "{:<44} {}",
            entry.usage, entry.description
        ));
    }
    Ok(())
}

fn cmd_date(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [input] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: date <YYYY-MM-DD>".into(),
        ));
    };
    let date = parse_date(input)?;
    context.ledger.select_date(date);
    output::info(format!("Selected {date}. Daily log reset."));
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: search <query>".into()));
    }
    let query = args.join(" ");
    let matches = context
        .block_on(context.catalog.search(&query))
        .map_err(CommandError::Fitness)?;
    if matches.is_empty() {
        output::info(format!("No foods match `{query}`."));
        return Ok(());
    }
    for food in &matches {
        print_food(food);
    }
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(food_id) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: add <food-id> [quantity] [meal]".into(),
        ));
    };

    let food = context
        .block_on(context.catalog.lookup(food_id))
        .map_err(CommandError::Fitness)?
        .ok_or_else(|| {
            CommandError::Message(format!("Unknown food id `{food_id}`. Try `search` first."))
        })?;

    // Form-level fallback: an unparseable quantity defaults to one
    // serving, matching the numeric input's behavior.
    let quantity = match args.get(1) {
        None => 1.0,
        Some(raw) => raw.parse::<f64>().unwrap_or_else(|_| {
            output::info(format!("Could not parse quantity `{raw}`; defaulting to 1."));
            1.0
        }),
    };

    let meal_type = match args.get(2) {
        None => MealType::Breakfast,
        Some(raw) => MealType::from_label(raw).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "unknown meal `{raw}` (use breakfast, lunch, dinner, or snack)"
            ))
        })?,
    };

    let entry = context.ledger.add_entry(food, quantity, meal_type)?;
    output::info(format!("Entry id: {}", short_id(entry.id)));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [prefix] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: remove <entry-id>".into(),
        ));
    };

    let Some(id) = find_meal_id(context, prefix)? else {
        // Unknown ids are a normal no-op, not a failure.
        output::info(format!("No entry matches `{prefix}`; nothing removed."));
        return Ok(());
    };
    context.ledger.remove_entry(id);
    Ok(())
}

fn cmd_meals(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let filter = match args.first() {
        None => None,
        Some(raw) => Some(MealType::from_label(raw).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "unknown meal `{raw}` (use breakfast, lunch, dinner, or snack)"
            ))
        })?),
    };

    output::section(format!("Meals for {}", context.ledger.date()));
    let mut shown = 0usize;
    for meal in context.ledger.meals() {
        if filter.is_some_and(|slot| slot != meal.meal_type) {
            continue;
        }
        output::line(format!(
            "{}  {:<24} x{:<5} {:<10} {}",
            short_id(meal.id),
            meal.food.name,
            meal.quantity,
            meal.meal_type.to_string(),
            meal.contribution()
        ));
        shown += 1;
    }
    if shown == 0 {
        output::info("No meals logged.");
    }
    Ok(())
}

fn cmd_totals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line(format!(
        "Totals for {}: {}",
        context.ledger.date(),
        context.ledger.totals()
    ));
    Ok(())
}

fn cmd_progress(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let goals = context.profile.goals;
    let report = context.ledger.progress_against(&goals);
    output::section(format!("Progress for {}", context.ledger.date()));
    output::line(format!(
        "calories {:>6.1}% of {:.0} kcal",
        report.calories_pct, goals.calories
    ));
    output::line(format!(
        "protein  {:>6.1}% of {:.0} g",
        report.protein_pct, goals.protein
    ));
    output::line(format!(
        "carbs    {:>6.1}% of {:.0} g",
        report.carbs_pct, goals.carbs
    ));
    output::line(format!(
        "fat      {:>6.1}% of {:.0} g",
        report.fat_pct, goals.fat
    ));
    Ok(())
}

fn cmd_analyze(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let image = match args.first() {
        Some(path) => fs::read(path)?,
        None => Vec::new(),
    };
    output::info("Analyzing your food image...");
    let candidates = context
        .block_on(context.analyzer.analyze(&image))
        .map_err(CommandError::Fitness)?;
    if candidates.is_empty() {
        output::info("No foods detected.");
        return Ok(());
    }
    for food in &candidates {
        print_food(food);
    }
    output::info("Use `add <food-id>` to log a detected item.");
    Ok(())
}

fn cmd_record(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (Some(field), Some(_)) = (args.first(), args.get(1)) else {
        return Err(CommandError::InvalidArguments(
            "usage: record <weight|sleep|water|mood|notes> <value>".into(),
        ));
    };

    let date = context.ledger.date();
    let mut metrics = context
        .metrics
        .entry_for(date)
        .cloned()
        .unwrap_or_else(|| DailyMetrics::new(date));

    match *field {
        "weight" => metrics.weight_kg = Some(parse_number(args[1], "weight")?),
        "sleep" => metrics.sleep_hours = Some(parse_number(args[1], "sleep")?),
        "water" => metrics.water_ml = Some(parse_number(args[1], "water")?),
        "mood" => {
            metrics.mood = Some(Mood::from_label(args[1]).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "unknown mood `{}` (use excellent, good, neutral, poor, or terrible)",
                    args[1]
                ))
            })?)
        }
        "notes" => metrics.notes = Some(args[1..].join(" ")),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown metric `{other}` (use weight, sleep, water, mood, or notes)"
            )))
        }
    }

    MetricsService::record(&mut context.metrics, metrics)?;
    output::success(format!("Recorded {field} for {date}."));
    Ok(())
}

fn cmd_metrics(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.metrics.is_empty() {
        output::info("No metrics recorded yet.");
        return Ok(());
    }
    output::section("Daily metrics");
    for record in MetricsService::history(&context.metrics) {
        output::line(format!(
            "{}  weight {}  sleep {}  water {}  mood {}",
            record.date,
            fmt_opt(record.weight_kg, "kg"),
            fmt_opt(record.sleep_hours, "h"),
            fmt_opt(record.water_ml, "ml"),
            record
                .mood
                .map(|mood| mood.to_string())
                .unwrap_or_else(|| "-".into()),
        ));
    }
    Ok(())
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("list") => {
            output::section("Goals");
            for goal in &context.goals.goals {
                let marker = if goal.completed { " [done]" } else { "" };
                output::line(format!(
                    "{}  {:<16} {:<10} {:>6.1}/{:<6.1} {:<8} {:>5.1}%{}",
                    short_id(goal.id),
                    goal.name,
                    goal.category.to_string(),
                    goal.current,
                    goal.target,
                    goal.unit,
                    GoalService::percent_complete(goal),
                    marker
                ));
            }
            Ok(())
        }
        Some("update") => {
            let (Some(prefix), Some(raw)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(
                    "usage: goal update <goal-id> <current-value>".into(),
                ));
            };
            let id = find_goal_id(context, prefix)?;
            let value = parse_number(raw, "goal progress")?;
            GoalService::update_current(&mut context.goals, id, value)?;
            let goal = context.goals.goal(id).expect("goal updated above");
            if goal.completed {
                output::success(format!("Goal `{}` completed!", goal.name));
            } else {
                output::success(format!(
                    "Goal `{}` now at {:.1}%.",
                    goal.name,
                    GoalService::percent_complete(goal)
                ));
            }
            Ok(())
        }
        Some("add") => {
            let (Some(category), Some(target), Some(unit)) =
                (args.get(1), args.get(2), args.get(3))
            else {
                return Err(CommandError::InvalidArguments(
                    "usage: goal add <weight|nutrition|workout|custom> <target> <unit> <name...>"
                        .into(),
                ));
            };
            let name = args[4..].join(" ");
            if name.is_empty() {
                return Err(CommandError::InvalidArguments(
                    "goal needs a name after the unit".into(),
                ));
            }
            let category = match category.to_ascii_lowercase().as_str() {
                "weight" => GoalCategory::Weight,
                "nutrition" => GoalCategory::Nutrition,
                "workout" => GoalCategory::Workout,
                "custom" => GoalCategory::Custom,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown category `{other}`"
                    )))
                }
            };
            let target = parse_number(target, "target")?;
            // Downward goals start from the best known weight reading.
            let current = if category.counts_downward() {
                MetricsService::latest_weight(&context.metrics)
                    .unwrap_or(context.profile.weight_kg)
            } else {
                0.0
            };
            let start = context.ledger.date();
            let goal = Goal::new(
                name,
                "",
                category,
                target,
                current,
                *unit,
                start,
                start + Duration::days(90),
            );
            let id = GoalService::add(&mut context.goals, goal)?;
            output::success(format!("Added goal {}.", short_id(id)));
            Ok(())
        }
        Some("remove") => {
            let Some(prefix) = args.get(1) else {
                return Err(CommandError::InvalidArguments(
                    "usage: goal remove <goal-id>".into(),
                ));
            };
            let id = find_goal_id(context, prefix)?;
            let removed = GoalService::remove(&mut context.goals, id)?;
            output::success(format!("Removed goal `{}`.", removed.name));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown goal action `{other}` (use list, add, update, or remove)"
        ))),
    }
}

fn cmd_workout(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("list") => {
            output::section("Routines");
            for routine in &context.planner.routines {
                output::line(format!(
                    "{:>3}  {:<20} {:>2} exercises  {:>3} min  {}",
                    routine.id,
                    routine.name,
                    routine.exercises,
                    routine.duration_minutes,
                    routine.level
                ));
            }
            if !context.planner.sessions.is_empty() {
                output::section("Sessions");
                for session in &context.planner.sessions {
                    let name = context
                        .planner
                        .routine(&session.routine_id)
                        .map(|routine| routine.name.as_str())
                        .unwrap_or("?");
                    let marker = if session.completed { " [done]" } else { "" };
                    output::line(format!(
                        "{}  {}  {}{}",
                        short_id(session.id),
                        session.date,
                        name,
                        marker
                    ));
                }
            }
            Ok(())
        }
        Some("schedule") => {
            let Some(routine_id) = args.get(1) else {
                return Err(CommandError::InvalidArguments(
                    "usage: workout schedule <routine-id> [YYYY-MM-DD]".into(),
                ));
            };
            let date = match args.get(2) {
                Some(raw) => parse_date(raw)?,
                None => context.ledger.date(),
            };
            let id = WorkoutService::schedule(&mut context.planner, routine_id, date)?;
            output::success(format!("Scheduled session {} on {date}.", short_id(id)));
            Ok(())
        }
        Some("done") => {
            let Some(prefix) = args.get(1) else {
                return Err(CommandError::InvalidArguments(
                    "usage: workout done <session-id>".into(),
                ));
            };
            let id = find_session_id(context, prefix)?;
            WorkoutService::complete(&mut context.planner, id)?;
            output::success("Session completed.");
            Ok(())
        }
        Some("week") => {
            let reference = context.ledger.date();
            let total = context.planner.sessions_in_week(reference).count();
            let done = WorkoutService::completed_in_week(&context.planner, reference);
            output::line(format!(
                "{done} of {total} sessions completed this week."
            ));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown workout action `{other}` (use list, schedule, done, or week)"
        ))),
    }
}

fn cmd_profile(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None => {
            let profile = &context.profile;
            output::section(&profile.name);
            output::line(format!(
                "{} kg | {} cm | {} years | {} activity",
                profile.weight_kg, profile.height_cm, profile.age, profile.activity_level
            ));
            output::line(format!(
                "Daily targets: {:.0} kcal | protein {:.0}g | carbs {:.0}g | fat {:.0}g",
                profile.goals.calories,
                profile.goals.protein,
                profile.goals.carbs,
                profile.goals.fat
            ));
            Ok(())
        }
        Some("set-goal") => {
            let (Some(metric), Some(raw)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(
                    "usage: profile set-goal <calories|protein|carbs|fat> <value>".into(),
                ));
            };
            let value = parse_number(raw, "target")?;
            match *metric {
                "calories" => context.profile.goals.calories = value,
                "protein" => context.profile.goals.protein = value,
                "carbs" => context.profile.goals.carbs = value,
                "fat" => context.profile.goals.fat = value,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown target `{other}` (use calories, protein, carbs, or fat)"
                    )))
                }
            }
            context.save_profile()?;
            output::success(format!("Daily {metric} target set to {value}."));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown profile action `{other}` (use set-goal)"
        ))),
    }
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn print_food(food: &FoodItem) {
    output::line(format!(
        "{:>3}  {:<24} {:<20} {}",
        food.id, food.name, food.serving_size, food.nutrition
    ));
}

fn fmt_opt(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value}{unit}"),
        None => "-".into(),
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

fn parse_number(input: &str, what: &str) -> Result<f64, CommandError> {
    input
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid {what} `{input}`")))
}

fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

fn match_prefix(ids: impl Iterator<Item = Uuid>, prefix: &str) -> Result<Option<Uuid>, CommandError> {
    let needle = prefix.replace('-', "").to_ascii_lowercase();
    if needle.is_empty() {
        return Err(CommandError::InvalidArguments("empty id".into()));
    }
    let matches: Vec<Uuid> = ids
        .filter(|id| id.simple().to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        _ => Err(CommandError::InvalidArguments(format!(
            "id `{prefix}` is ambiguous; give more characters"
        ))),
    }
}

fn find_meal_id(context: &ShellContext, prefix: &str) -> Result<Option<Uuid>, CommandError> {
    match_prefix(context.ledger.meals().iter().map(|meal| meal.id), prefix)
}

fn find_goal_id(context: &ShellContext, prefix: &str) -> Result<Uuid, CommandError> {
    match_prefix(context.goals.goals.iter().map(|goal| goal.id), prefix)?
        .ok_or_else(|| CommandError::Message(format!("No goal matches `{prefix}`.")))
}

fn find_session_id(context: &ShellContext, prefix: &str) -> Result<Uuid, CommandError> {
    match_prefix(
        context.planner.sessions.iter().map(|session| session.id),
        prefix,
    )?
    .ok_or_else(|| CommandError::Message(format!("No session matches `{prefix}`.")))
}
