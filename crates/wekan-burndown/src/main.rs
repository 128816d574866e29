mod bootstrap;

use anyhow::{bail, Context, Result};
use burndown_core::models::{SortField, Units};
use burndown_core::settings::Settings;
use burndown_core::time_utils;
use burndown_core::timeline::build_timeline;
use burndown_data::reader::load_board_exports;
use burndown_data::resolver::BoardResolver;
use burndown_ui::app::App;
use burndown_ui::chart_view::ChartViewData;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("wekan-burndown v{} starting", env!("CARGO_PKG_VERSION"));

    let Some(board_query) = settings.board.clone() else {
        if settings.clear {
            // `--clear` with no board just wipes the saved configuration.
            println!("Saved configuration cleared.");
            return Ok(());
        }
        bail!("no board title given; try: wekan-burndown \"My Board\"");
    };

    let data_path = settings
        .data_path
        .clone()
        .or_else(bootstrap::discover_data_path)
        .context("no export directory found; pass --data-path or create ./exports")?;

    tracing::info!(
        "Board: \"{}\", sort: {}, data path: {}",
        board_query,
        settings.sort_by,
        data_path.display()
    );

    let sort_field = SortField::from_name(&settings.sort_by)?;
    let units = Units::from_name(&settings.units)?;
    let tz = time_utils::resolve_timezone(&settings.timezone);

    // Load exports and resolve the board (and list, when given).
    let exports = load_board_exports(&data_path)?;
    let resolver = BoardResolver::new(exports);
    tracing::debug!("{} board exports loaded", resolver.board_count());

    let export = resolver.find_board(&board_query, settings.exact)?;

    let resolved_list = match &settings.list {
        Some(list_query) => Some(resolver.find_list(export, list_query, settings.exact)?),
        None => None,
    };

    let cards = resolver.cards_sorted(export, resolved_list.map(|l| l.id.as_str()), sort_field);
    tracing::info!(
        "Board \"{}\": {} cards selected",
        export.board.title,
        cards.len()
    );

    // Aggregate and hand off to the chart.
    let timeline = build_timeline(&cards, sort_field, tz);
    tracing::info!(
        "Timeline: {} day buckets, final total {}",
        timeline.len(),
        timeline.final_total()
    );

    let data = ChartViewData {
        board_title: export.board.title.clone(),
        list_title: resolved_list.map(|l| l.title.clone()),
        units,
        timeline,
    };

    let app = App::new(&settings.theme);
    app.run_chart(data).await?;

    Ok(())
}
