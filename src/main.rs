use anidex_lib::modules::catalog::{MediaDetail, MediaPage};
use anidex_lib::shared::utils::init_logger;
use anidex_lib::{
    CatalogClient, CatalogConfig, CatalogError, MediaFilter, MediaFormat, MediaStatus, Season,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output the result in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse or search the catalog
    List {
        /// Free-text title search
        #[arg(short, long)]
        search: Option<String>,

        /// WINTER, SPRING, SUMMER or FALL
        #[arg(long)]
        season: Option<Season>,

        #[arg(long)]
        year: Option<i32>,

        /// TV, TV_SHORT, MOVIE, SPECIAL, OVA, ONA or MUSIC
        #[arg(long)]
        format: Option<MediaFormat>,

        /// RELEASING, FINISHED, NOT_YET_RELEASED, CANCELLED or HIATUS
        #[arg(long)]
        status: Option<MediaStatus>,

        /// Repeat to require several genres
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Upstream sort key, e.g. POPULARITY_DESC or SCORE_DESC
        #[arg(long)]
        sort: Option<String>,

        #[arg(short, long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show everything known about one anime
    Show {
        /// AniList media id
        id: i32,
    },
    /// List every genre in the catalog
    Genres,
    /// Most anticipated anime of the next season
    Upcoming,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger();

    let config = CatalogConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let cancel = CancellationToken::new();
    let client = CatalogClient::new(&config)
        .context("Failed to create catalog client")?
        .with_cancellation(cancel.clone());

    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Interrupted, abandoning request");
                cancel.cancel();
            }
        }
    });

    match run(&client, args.command, args.json).await {
        Err(CatalogError::Cancelled) => {
            eprintln!("Cancelled.");
            std::process::exit(130);
        }
        result => result.context("Catalog request failed. Please try again later."),
    }
}

async fn run(client: &CatalogClient, command: Command, json: bool) -> Result<(), CatalogError> {
    match command {
        Command::List {
            search,
            season,
            year,
            format,
            status,
            genres,
            sort,
            page,
            per_page,
        } => {
            let filter = MediaFilter {
                page,
                per_page,
                search,
                season,
                season_year: year,
                format,
                status,
                genres: genres.into_iter().collect(),
                sort,
            };
            let page = client.list_media(&filter).await?;
            output(json, &page, print_page);
        }
        Command::Show { id } => match client.get_media_by_id(id).await? {
            Some(detail) => output(json, &detail, print_detail),
            None => {
                eprintln!("No anime found with id {}", id);
                std::process::exit(2);
            }
        },
        Command::Genres => {
            let genres = client.list_genres().await?;
            output(json, &genres, |genres| {
                for genre in genres {
                    println!("{}", genre);
                }
            });
        }
        Command::Upcoming => {
            let page = client.list_upcoming().await?;
            output(json, &page, print_page);
        }
    }
    Ok(())
}

fn output<T: Serialize>(json: bool, value: &T, print: impl FnOnce(&T)) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to serialize output: {}", e),
        }
    } else {
        print(value);
    }
}

fn print_page(page: &MediaPage) {
    for media in &page.items {
        let mut facts = Vec::new();
        if let Some(format) = media.format_label() {
            facts.push(format.to_string());
        }
        if let Some(season) = media.season_label() {
            facts.push(season);
        }
        if let Some(status) = media.status_label() {
            facts.push(status.to_string());
        }
        if let Some(score) = media.average_score {
            facts.push(format!("{}%", score));
        }
        println!("{:>7}  {}  [{}]", media.id, media.title.display(), facts.join(" · "));
    }

    let info = &page.page_info;
    println!(
        "\nPage {} of {} ({} results){}",
        info.current_page,
        info.last_page,
        info.total,
        if info.has_next_page { ", more available" } else { "" }
    );
}

fn print_detail(detail: &MediaDetail) {
    let media = &detail.summary;
    println!("{}", media.title.display());
    if let Some(native) = &media.title.native {
        println!("{}", native);
    }
    println!();

    let field = |name: &str, value: Option<String>| {
        if let Some(value) = value {
            println!("{:<10} {}", name, value);
        }
    };
    field("Format", media.format_label().map(String::from));
    field("Status", media.status_label().map(String::from));
    field("Season", media.season_label());
    field("Episodes", media.episodes.map(|e| e.to_string()));
    field("Duration", detail.duration.map(|d| format!("{} min", d)));
    field("Score", media.average_score.map(|s| format!("{}%", s)));
    field("Aired", Some(format!(
        "{} to {}",
        media.start_date.display(),
        if detail.end_date.is_unknown() {
            "?".to_string()
        } else {
            detail.end_date.display()
        }
    )));
    let studios: Vec<&str> = detail.animation_studios().map(|s| s.name.as_str()).collect();
    field("Studios", (!studios.is_empty()).then(|| studios.join(", ")));
    field("Genres", (!media.genres.is_empty()).then(|| media.genres.join(", ")));
    field("Trailer", detail.trailer.as_ref().and_then(|t| t.embed_url()));

    if !detail.characters.is_empty() {
        println!("\nCharacters");
        for character in &detail.characters {
            println!(
                "  {} ({})",
                character.name.as_deref().unwrap_or("Unknown"),
                character.role_label().unwrap_or_default()
            );
        }
    }

    if !detail.tags.is_empty() {
        let tags: Vec<String> = detail
            .tags
            .iter()
            .take(10)
            .map(|t| match t.rank {
                Some(rank) => format!("{} {}%", t.name, rank),
                None => t.name.clone(),
            })
            .collect();
        println!("\nTags: {}", tags.join(", "));
    }

    if let Some(description) = &media.description {
        println!("\n{}", description);
    }
}
