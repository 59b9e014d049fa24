use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{
    DataType, Float32Type, Float64Type, Int32Type, Int64Type, UInt32Type, UInt64Type,
};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::LoadError;
use super::model::{GameDataset, GameRecord};

// ---------------------------------------------------------------------------
// Column contract
// ---------------------------------------------------------------------------

pub const NAME: &str = "Name";
pub const CURRENT_PLAYERS: &str = "Current Players";
pub const PEAK_TODAY: &str = "Peak Today";
pub const PRICE: &str = "Price";
pub const PRICE_CATEGORY: &str = "Price Category";
pub const GENRE_TAGS: &str = "Genre Tags";
pub const STORE_LINK: &str = "Store Link";
pub const THUMBNAIL_URL: &str = "Thumbnail URL";

/// Columns every input file must carry, in the order rows are assembled.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    NAME,
    CURRENT_PLAYERS,
    PEAK_TODAY,
    PRICE,
    PRICE_CATEGORY,
    GENRE_TAGS,
    STORE_LINK,
    THUMBNAIL_URL,
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a game table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.tsv` – header row with the required column names
/// * `.json`         – `[{ "Name": ..., "Current Players": ..., ... }, ...]`
/// * `.parquet`      – flat columns with the required names
///
/// The load is all-or-nothing: the first bad column or cell aborts it.
pub fn load_file(path: &Path) -> Result<GameDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let games = match ext.as_str() {
        "csv" => load_delimited(path, b',')?,
        "tsv" => load_delimited(path, b'\t')?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!(LoadError::UnsupportedExtension(other.to_string())),
    };

    let dataset = GameDataset::from_games(games);
    log::info!(
        "Loaded {} games from {} with price categories {:?}",
        dataset.len(),
        path.display(),
        dataset.categories
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Format-neutral cells
// ---------------------------------------------------------------------------

/// One raw cell as read from any of the supported formats.
#[derive(Debug, Clone, Default, PartialEq)]
enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    #[default]
    Null,
}

impl Cell {
    fn describe(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Null => "<null>".to_string(),
        }
    }

    /// Text form, trimmed, with blank text folded into `None`.
    ///
    /// Names are trimmed too, so `" Foo"` is stored, listed and looked up
    /// as `"Foo"`.
    fn as_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) if s.trim().is_empty() => None,
            Cell::Text(s) => Some(s.trim().to_string()),
            Cell::Integer(i) => Some(i.to_string()),
            Cell::Float(f) if f.is_nan() => None,
            Cell::Float(f) => Some(f.to_string()),
            Cell::Null => None,
        }
    }
}

fn invalid(row: usize, column: &'static str, cell: &Cell) -> LoadError {
    LoadError::InvalidValue {
        row,
        column,
        value: cell.describe(),
    }
}

fn count_cell(row: usize, column: &'static str, cell: &Cell) -> Result<u64, LoadError> {
    // `as u64` saturates, so out-of-range floats must be rejected first.
    let from_float = |f: f64| {
        (f.is_finite() && f >= 0.0 && f < 2f64.powi(64) && f.fract() == 0.0).then_some(f as u64)
    };
    let value = match cell {
        Cell::Integer(i) => u64::try_from(*i).ok(),
        Cell::Float(f) => from_float(*f),
        Cell::Text(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(from_float))
        }
        Cell::Null => None,
    };
    value.ok_or_else(|| invalid(row, column, cell))
}

fn price_cell(row: usize, cell: &Cell) -> Result<f64, LoadError> {
    let value = match cell {
        Cell::Integer(i) => Some(*i as f64),
        Cell::Float(f) => Some(*f),
        Cell::Text(s) => s.trim().parse::<f64>().ok(),
        Cell::Null => None,
    };
    value
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| invalid(row, PRICE, cell))
}

fn required_text(row: usize, column: &'static str, cell: &Cell) -> Result<String, LoadError> {
    cell.as_text().ok_or_else(|| invalid(row, column, cell))
}

/// Optional URL column. Pandas writes missing values as empty or `nan`.
fn optional_url(cell: &Cell) -> Option<String> {
    cell.as_text()
        .filter(|s| !s.eq_ignore_ascii_case("nan") && !s.eq_ignore_ascii_case("none"))
}

/// Assemble a record from cells laid out in [`REQUIRED_COLUMNS`] order.
/// `row` is the 1-based data row, used only in error messages.
fn build_record(row: usize, cells: &[Cell; 8]) -> Result<GameRecord, LoadError> {
    let [name, current, peak, price, category, genres, link, thumb] = cells;
    Ok(GameRecord {
        name: required_text(row, NAME, name)?,
        current_players: count_cell(row, CURRENT_PLAYERS, current)?,
        peak_today: count_cell(row, PEAK_TODAY, peak)?,
        price: price_cell(row, price)?,
        price_category: required_text(row, PRICE_CATEGORY, category)?,
        genre_tags: genres.as_text().unwrap_or_default(),
        store_link: optional_url(link),
        thumbnail_url: optional_url(thumb),
    })
}

/// Position of every required column in `headers`.
fn locate_columns(headers: &[&str]) -> Result<[usize; 8], LoadError> {
    let mut positions = [0usize; 8];
    for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| LoadError::MissingColumn(column.to_string()))?;
    }
    Ok(positions)
}

// ---------------------------------------------------------------------------
// CSV / TSV loader
// ---------------------------------------------------------------------------

/// Header row with column names; extra columns are ignored.
fn load_delimited(path: &Path, delimiter: u8) -> Result<Vec<GameRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = reader.headers().context("reading CSV headers")?.clone();
    let positions = locate_columns(&headers.iter().collect::<Vec<_>>())?;

    let mut games = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.with_context(|| format!("CSV row {row}"))?;
        let cells = positions.map(|idx| match record.get(idx) {
            Some(s) if !s.is_empty() => Cell::Text(s.to_string()),
            _ => Cell::Null,
        });
        games.push(build_record(row, &cells)?);
    }
    Ok(games)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Name": "Counter-Strike 2",
///     "Current Players": 1200000,
///     "Peak Today": 1500000,
///     "Price": 0.0,
///     "Price Category": "Free",
///     "Genre Tags": "FPS, Shooter",
///     "Store Link": "https://store.steampowered.com/app/730",
///     "Thumbnail URL": null
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<GameRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;
    // With no rows there are no keys to check the column contract against.
    if records.is_empty() {
        bail!(LoadError::MissingColumn(NAME.to_string()));
    }

    let mut games = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let row = i + 1;
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {row} is not a JSON object"))?;

        let mut cells: [Cell; 8] = Default::default();
        for (cell, column) in cells.iter_mut().zip(REQUIRED_COLUMNS) {
            let value = obj
                .get(column)
                .ok_or_else(|| LoadError::MissingColumn(column.to_string()))?;
            *cell = json_to_cell(value);
        }
        games.push(build_record(row, &cells)?);
    }
    Ok(games)
}

fn json_to_cell(val: &JsonValue) -> Cell {
    match val {
        JsonValue::String(s) => Cell::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Cell::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Cell::Float(f)
            } else {
                Cell::Text(n.to_string())
            }
        }
        JsonValue::Null => Cell::Null,
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file whose columns carry the required names.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<GameRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;

    let schema = builder.schema().clone();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    let positions = locate_columns(&names)?;

    let reader = builder.build().context("building parquet reader")?;

    let mut games = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        for r in 0..batch.num_rows() {
            let row = games.len() + 1;
            let cells = positions.map(|idx| arrow_cell(batch.column(idx), r));
            games.push(build_record(row, &cells)?);
        }
    }
    Ok(games)
}

/// Extract a single cell from an Arrow column at a given row.
fn arrow_cell(col: &ArrayRef, row: usize) -> Cell {
    if col.is_null(row) {
        return Cell::Null;
    }
    let typed = match col.data_type() {
        DataType::Utf8 => col
            .as_string_opt::<i32>()
            .map(|a| Cell::Text(a.value(row).to_string())),
        DataType::LargeUtf8 => col
            .as_string_opt::<i64>()
            .map(|a| Cell::Text(a.value(row).to_string())),
        DataType::Int32 => col
            .as_primitive_opt::<Int32Type>()
            .map(|a| Cell::Integer(a.value(row) as i64)),
        DataType::Int64 => col
            .as_primitive_opt::<Int64Type>()
            .map(|a| Cell::Integer(a.value(row))),
        DataType::UInt32 => col
            .as_primitive_opt::<UInt32Type>()
            .map(|a| Cell::Integer(a.value(row) as i64)),
        DataType::UInt64 => col
            .as_primitive_opt::<UInt64Type>()
            .map(|a| match i64::try_from(a.value(row)) {
                Ok(i) => Cell::Integer(i),
                Err(_) => Cell::Float(a.value(row) as f64),
            }),
        DataType::Float32 => col
            .as_primitive_opt::<Float32Type>()
            .map(|a| Cell::Float(a.value(row) as f64)),
        DataType::Float64 => col
            .as_primitive_opt::<Float64Type>()
            .map(|a| Cell::Float(a.value(row))),
        _ => None,
    };
    // Dictionary-encoded strings (pandas categoricals) and anything else
    // fall back to Arrow's display formatting.
    typed.unwrap_or_else(|| {
        array_value_to_string(col.as_ref(), row)
            .map(Cell::Text)
            .unwrap_or(Cell::Null)
    })
}
