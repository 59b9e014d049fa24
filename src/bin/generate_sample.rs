//! Writes a deterministic synthetic Steam top-games table as CSV and Parquet.
//!
//! `cargo run --bin generate_sample -- [OUTPUT_DIR]`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

#[derive(Parser)]
#[command(about = "Generate a sample Steam top games dataset")]
struct Args {
    /// Directory the sample files are written to.
    #[arg(default_value = ".")]
    output_dir: PathBuf,

    /// PRNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// One output row, serialised with the dashboard's column names.
#[derive(Serialize)]
struct Row {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Current Players")]
    current_players: u64,
    #[serde(rename = "Peak Today")]
    peak_today: u64,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Price Category")]
    price_category: &'static str,
    #[serde(rename = "Genre Tags")]
    genre_tags: &'static str,
    #[serde(rename = "Store Link")]
    store_link: String,
    #[serde(rename = "Thumbnail URL")]
    thumbnail_url: Option<String>,
}

/// (name, app id, typical player count, price or 0 for free, genres)
const CATALOGUE: &[(&str, u32, f64, f64, &str)] = &[
    ("Counter-Strike 2", 730, 1_200_000.0, 0.0, "FPS, Shooter, Multiplayer, Competitive, Action"),
    ("Dota 2", 570, 650_000.0, 0.0, "MOBA, Strategy, Multiplayer, Free to Play"),
    ("PUBG: BATTLEGROUNDS", 578080, 450_000.0, 0.0, "Battle Royale, Shooter, Multiplayer"),
    ("Apex Legends", 1172470, 180_000.0, 0.0, "Battle Royale, Shooter, Free to Play, Hero Shooter"),
    ("Baldur's Gate 3", 1086940, 95_000.0, 49.99, "RPG, Choices Matter, Story Rich, Turn-Based Combat"),
    ("Rust", 252490, 140_000.0, 34.99, "Survival, Crafting, Multiplayer, Open World"),
    ("Grand Theft Auto V", 271590, 110_000.0, 24.99, "Open World, Action, Multiplayer, Crime"),
    ("Tom Clancy's Rainbow Six Siege", 359550, 70_000.0, 15.99, "FPS, Tactical, Multiplayer, Shooter"),
    ("Warframe", 230410, 55_000.0, 0.0, "Looter Shooter, Free to Play, Action, Co-op"),
    ("Stardew Valley", 413150, 60_000.0, 11.39, "Farming Sim, RPG, Pixel Graphics, Cozy"),
    ("ELDEN RING", 1245620, 50_000.0, 49.99, "Souls-like, RPG, Open World, Action"),
    ("Team Fortress 2", 440, 45_000.0, 0.0, "Hero Shooter, FPS, Multiplayer, Free to Play"),
    ("Terraria", 105600, 40_000.0, 7.99, "Sandbox, Survival, Crafting, 2D"),
    ("Dead by Daylight", 381210, 38_000.0, 15.99, "Horror, Survival, Multiplayer"),
    ("Path of Exile", 238960, 35_000.0, 0.0, "Action RPG, Looter, Free to Play, Hack and Slash"),
    ("Sid Meier's Civilization VI", 289070, 30_000.0, 49.99, "Strategy, Turn-Based Strategy, 4X"),
    ("War Thunder", 236390, 33_000.0, 0.0, "Simulation, Vehicular Combat, Free to Play"),
    ("Cyberpunk 2077", 1091500, 28_000.0, 49.99, "RPG, Open World, Cyberpunk, Action"),
    ("Football Manager 2024", 2252570, 26_000.0, 44.99, "Sports, Simulation, Management"),
    ("Hearts of Iron IV", 394360, 25_000.0, 34.99, "Grand Strategy, Strategy, War"),
    ("Euro Truck Simulator 2", 227300, 24_000.0, 17.99, "Simulation, Driving, Relaxing"),
    ("Lethal Company", 1966720, 22_000.0, 8.50, "Horror, Co-op, Multiplayer"),
    ("Palworld", 1623730, 21_000.0, 24.99, "Survival, Open World, Creature Collector, Crafting"),
    ("The Sims 4", 1222670, 20_000.0, 0.0, "Life Sim, Simulation, Building"),
    ("Naraka: Bladepoint", 1203220, 19_000.0, 0.0, "Battle Royale, Martial Arts, Action"),
    ("Destiny 2", 1085660, 18_000.0, 0.0, "Looter Shooter, FPS, Free to Play"),
    ("RimWorld", 294100, 17_000.0, 29.99, "Colony Sim, Survival, Strategy"),
    ("Helldivers 2", 553850, 16_000.0, 34.99, "Co-op, Shooter, Action"),
    ("Satisfactory", 526870, 15_000.0, 29.99, "Automation, Base Building, Open World"),
    ("Wallpaper Engine", 431960, 60_000.0, 3.99, ""),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<Row> {
    CATALOGUE
        .iter()
        .map(|&(name, app_id, typical, price, genres)| {
            // Log-normal jitter around the typical player count.
            let current = (typical * rng.gauss(0.0, 0.15).exp()).round() as u64;
            let peak = (current as f64 * (1.05 + 0.5 * rng.next_f64())).round() as u64;
            let thumbnail_url = (rng.next_f64() > 0.1).then(|| {
                format!("https://cdn.cloudflare.steamstatic.com/steam/apps/{app_id}/header.jpg")
            });

            Row {
                name: name.to_string(),
                current_players: current,
                peak_today: peak,
                price,
                price_category: if price > 0.0 { "Paid" } else { "Free" },
                genre_tags: genres,
                store_link: format!("https://store.steampowered.com/app/{app_id}"),
                thumbnail_url,
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &std::path::Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &std::path::Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Name", DataType::Utf8, false),
        Field::new("Current Players", DataType::UInt64, false),
        Field::new("Peak Today", DataType::UInt64, false),
        Field::new("Price", DataType::Float64, false),
        Field::new("Price Category", DataType::Utf8, false),
        Field::new("Genre Tags", DataType::Utf8, false),
        Field::new("Store Link", DataType::Utf8, false),
        Field::new("Thumbnail URL", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
            Arc::new(UInt64Array::from_iter_values(rows.iter().map(|r| r.current_players))),
            Arc::new(UInt64Array::from_iter_values(rows.iter().map(|r| r.peak_today))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.price))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.price_category))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.genre_tags))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.store_link.as_str()))),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.thumbnail_url.as_deref()).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let rows = generate_rows(&mut rng);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;

    let csv_path = args.output_dir.join("steam_top_games_sample.csv");
    let parquet_path = args.output_dir.join("steam_top_games_sample.parquet");
    write_csv(&rows, &csv_path)?;
    write_parquet(&rows, &parquet_path)?;

    println!(
        "Wrote {} games to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
