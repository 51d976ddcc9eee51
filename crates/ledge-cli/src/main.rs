//! Ledge CLI - platformer navigation planner.
//!
//! - `ledge plan` - route a character to the first reachable collectible
//! - `ledge graph` - inspect the visibility graph of a level
//! - `ledge init` - write a sample level and agent config

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use ledge_agent::{AgentConfig, PlatformerAgent};
use ledge_core::{Agent, CharacterKind, LevelSetup, Position};
use ledge_nav::{Graph, Navigator};

#[derive(Parser)]
#[command(name = "ledge")]
#[command(about = "Platformer navigation planner", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a path to the first reachable collectible
    Plan {
        /// Level description (YAML, or JSON by extension)
        #[arg(long)]
        level: PathBuf,

        /// Agent configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Character to plan for, overriding the config
        #[arg(long)]
        character: Option<CharacterKind>,

        /// Start position as X,Y instead of the level's start
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        from: Option<Position>,
    },

    /// Show the visibility graph of a level
    Graph {
        #[arg(long)]
        level: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        character: Option<CharacterKind>,

        /// Print the debug draw primitives as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a sample level and agent config
    Init {
        /// Target directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Plan {
            level,
            config,
            character,
            from,
        } => plan(&level, config.as_deref(), character, from),
        Commands::Graph {
            level,
            config,
            character,
            json,
        } => show_graph(&level, config.as_deref(), character, json),
        Commands::Init { dir, force } => init_project(&dir, force),
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid X `{x}`: {e}"))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid Y `{y}`: {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("position `{s}` is not finite"));
    }
    Ok(Position::new(x, y))
}

/// Load a level description, picking the format from the file extension.
fn load_level(path: &Path) -> Result<LevelSetup> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read level from {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let level = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse level from {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse level from {}", path.display()))?
    };
    Ok(level)
}

fn load_config(path: Option<&Path>, character: Option<CharacterKind>) -> Result<AgentConfig> {
    let mut config = match path {
        Some(path) => AgentConfig::load(path)?,
        None => AgentConfig::default(),
    };
    if let Some(character) = character {
        config.character = character;
    }
    Ok(config)
}

/// Run the agent's level setup so the CLI sees exactly the graph the agent would plan on.
fn prepare_agent(
    level_path: &Path,
    config_path: Option<&Path>,
    character: Option<CharacterKind>,
) -> Result<(LevelSetup, AgentConfig, PlatformerAgent)> {
    let level = load_level(level_path)?;
    let config = load_config(config_path, character)?;
    let mut agent = PlatformerAgent::new(&config);
    agent
        .setup(&level)
        .with_context(|| format!("Invalid level {}", level_path.display()))?;
    Ok((level, config, agent))
}

fn graph_of(agent: &PlatformerAgent) -> Result<&Graph> {
    agent
        .graph()
        .context("agent has no graph after level setup")
}

fn fmt_position(p: Position) -> String {
    format!("({}, {})", p.x, p.y)
}

fn plan(
    level_path: &Path,
    config_path: Option<&Path>,
    character: Option<CharacterKind>,
    from: Option<Position>,
) -> Result<()> {
    let (level, config, agent) = prepare_agent(level_path, config_path, character)?;
    let graph = graph_of(&agent)?;
    let start = from.unwrap_or_else(|| level.start_for(config.character));

    tracing::info!(
        character = %config.character,
        start = %fmt_position(start),
        "Planning"
    );

    println!(
        "Character: {} (reach {})",
        config.character,
        graph.max_vertical_distance()
    );
    println!(
        "Graph: {} vertices, {} edges, {} goals",
        graph.vertex_count(),
        graph.edge_count(),
        graph.goal_count()
    );

    let Some(path) = graph.find_path(start) else {
        println!("No reachable collectible from {}", fmt_position(start));
        return Ok(());
    };

    let goal = path.goal().unwrap_or(start);
    println!(
        "Path from {} to {}:",
        fmt_position(start),
        fmt_position(goal)
    );
    for (i, waypoint) in path.waypoints().iter().rev().enumerate() {
        println!("  {}. {}", i + 1, fmt_position(*waypoint));
    }

    Ok(())
}

fn show_graph(
    level_path: &Path,
    config_path: Option<&Path>,
    character: Option<CharacterKind>,
    json: bool,
) -> Result<()> {
    let (_, config, agent) = prepare_agent(level_path, config_path, character)?;
    let graph = graph_of(&agent)?;

    if json {
        let shapes = graph.debug_shapes();
        println!("{}", serde_json::to_string_pretty(&shapes)?);
        return Ok(());
    }

    println!("Character: {}", config.character);
    println!(
        "Vertices: {} ({} goals)",
        graph.vertex_count(),
        graph.goal_count()
    );
    for (id, vertex) in graph.vertices() {
        let marker = if vertex.goal { " goal" } else { "" };
        println!(
            "  {:>3} {}{} -> {} edges",
            id.0,
            fmt_position(vertex.position),
            marker,
            vertex.edges().len()
        );
    }
    println!("Edges: {}", graph.edge_count());

    Ok(())
}

const SAMPLE_LEVEL: &str = r#"# Ledge sample level
#
# Screen coordinates: X grows right, Y grows down. Obstacles are given by
# their center and size.

area: { x: 0.0, y: 0.0, width: 1280.0, height: 800.0 }

obstacles:
  - { x: 625.0, y: 600.0, width: 150.0, height: 20.0 }

rectangle_platforms: []
circle_platforms: []

collectibles:
  - { x: 625.0, y: 400.0 }

circle: { x: 100.0, y: 740.0 }
rectangle: { x: 1100.0, y: 740.0 }
"#;

fn init_project(dir: &Path, force: bool) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let level_path = dir.join("level.yaml");
    let config_path = dir.join("agent.yaml");
    if !force {
        for path in [&level_path, &config_path] {
            if path.exists() {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }

    std::fs::write(&level_path, SAMPLE_LEVEL)
        .with_context(|| format!("Failed to write {}", level_path.display()))?;
    let config = format!("# Ledge agent configuration\n\n{}", AgentConfig::default().to_yaml()?);
    std::fs::write(&config_path, config)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Initialized Ledge project at {}", dir.display());
    println!();
    println!("Created:");
    println!("  level.yaml - sample level");
    println!("  agent.yaml - agent configuration");
    println!();
    println!("Next steps:");
    println!("  ledge plan --level level.yaml --config agent.yaml");

    Ok(())
}
