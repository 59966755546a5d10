mod api;
mod seed;
mod server;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use feedrank::config::RankingConfig;
use feedrank::engine::RecommendationEngine;
use feedrank::store::JsonStore;
use feedrank::{format_float, InteractionKind};

#[derive(Parser)]
#[command(name = "feedrank", about = "Feed recommendation and caption suggestion engine")]
struct Cli {
    #[arg(long, global = true, default_value = "data")]
    data: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Recommend(RecommendArgs),
    Caption(CaptionArgs),
    Track(TrackArgs),
    Seed(SeedArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct RecommendArgs {
    #[arg(long)]
    user: String,
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
struct CaptionArgs {
    #[arg(long)]
    draft: String,
    #[arg(long)]
    rng_seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
struct TrackArgs {
    #[arg(long)]
    user: String,
    #[arg(long)]
    post: String,
    #[arg(long)]
    kind: String,
}

#[derive(Args, Debug, Clone)]
struct SeedArgs {
    #[arg(long, default_value_t = 8)]
    users: usize,
    #[arg(long, default_value_t = 40)]
    posts: usize,
    #[arg(long, default_value_t = 42)]
    rng_seed: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
    #[arg(long, default_value = "../webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = RankingConfig::load(None)
        .map(|(config, _)| config)
        .unwrap_or_default();

    match cli.command {
        Command::Recommend(args) => run_recommend(cli.data, config, args).await,
        Command::Caption(args) => run_caption(cli.data, config, args).await,
        Command::Track(args) => run_track(cli.data, config, args).await,
        Command::Seed(args) => run_seed(cli.data, args).await,
        Command::Serve(args) => {
            let engine = open_engine(cli.data, config).await?;
            server::serve(engine, args).await
        }
    }
}

async fn open_engine(
    data: PathBuf,
    config: RankingConfig,
) -> Result<RecommendationEngine<JsonStore>, String> {
    let store = JsonStore::open(data).await?;
    Ok(RecommendationEngine::new(store, config))
}

async fn run_recommend(
    data: PathBuf,
    config: RankingConfig,
    args: RecommendArgs,
) -> Result<(), String> {
    if let Some(limit) = args.limit {
        if limit == 0 {
            return Err("limit must be positive".to_string());
        }
    }

    let engine = open_engine(data, config).await?;
    let recommendations = engine.personalized(&args.user, args.limit).await;

    if recommendations.is_empty() {
        println!("No recommendations available for {}", args.user);
        return Ok(());
    }

    println!("Recommendations for {}:", args.user);
    for (index, recommendation) in recommendations.iter().enumerate() {
        println!(
            "{:>3}. {}  score {}  ({})",
            index + 1,
            recommendation.post_id,
            format_float(recommendation.score, 3),
            recommendation.reason
        );
    }

    Ok(())
}

async fn run_caption(
    data: PathBuf,
    config: RankingConfig,
    args: CaptionArgs,
) -> Result<(), String> {
    let engine = open_engine(data, config).await?;
    let suggestion = match args.rng_seed {
        Some(value) => {
            let mut rng = StdRng::seed_from_u64(value);
            engine.suggest_caption_with(&args.draft, &mut rng).await
        }
        None => engine.suggest_caption(&args.draft).await,
    };

    match suggestion {
        Some(caption) => println!("{}", caption),
        None => println!("No suggestion available for this draft"),
    }

    Ok(())
}

async fn run_track(data: PathBuf, config: RankingConfig, args: TrackArgs) -> Result<(), String> {
    let kind = InteractionKind::from_str(&args.kind)
        .ok_or_else(|| format!("invalid interaction kind: {}", args.kind))?;

    let engine = open_engine(data, config).await?;
    engine.track_interaction(&args.user, &args.post, kind).await;
    println!("Recorded {} by {} for {}", kind.label(), args.user, args.post);

    Ok(())
}

async fn run_seed(data: PathBuf, args: SeedArgs) -> Result<(), String> {
    if args.users == 0 || args.posts == 0 {
        return Err("seed counts must be positive".to_string());
    }

    let store = JsonStore::open(data).await?;
    let summary = seed::populate(&store, args.users, args.posts, args.rng_seed).await?;
    println!(
        "Seeded {} users, {} posts, {} follow edges into {}",
        summary.users,
        summary.posts,
        summary.follows,
        store.dir().display()
    );

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
